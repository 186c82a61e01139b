// Statistics entities

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::{BannerDefinition, PityRecord};
use crate::value_objects::{Category, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerStats {
    pub total_pulls: u32,
    pub five_star_pulls: u32,
    pub four_star_pulls: u32,
    pub win_count: u32,
    pub lose_count: u32,
    /// Percentage, 0 when no top-rarity pull exists.
    pub win_rate: f64,
    pub average_pity: f64,
    pub current_pity: u32,
    #[serde(default)]
    pub shortest_pity: Option<u32>,
    #[serde(default)]
    pub longest_pity: Option<u32>,
    #[serde(default)]
    pub pity_cap: Option<u32>,
    #[serde(default)]
    pub pulls_until_cap: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerSummary {
    pub banner: Arc<BannerDefinition>,
    pub active: bool,
    pub stats: BannerStats,
    /// Pity left unspent when the banner closed.
    pub carry_over_pity: u32,
    /// Newest first.
    pub five_stars: Vec<PityRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub name: &'static str,
    pub stats: BannerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerOverview {
    pub player_id: PlayerId,
    pub total_pulls: u32,
    pub categories: Vec<CategoryStats>,
}
