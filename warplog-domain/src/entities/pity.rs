// Pity entities

use serde::Serialize;

use crate::entities::ClassifiedPull;
use crate::value_objects::Category;

/// One per top-rarity pull.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PityRecord {
    pub pull: ClassifiedPull,
    /// Pulls since the previous top-rarity pull of the category, this one included.
    pub pity_count: u32,
    /// Part of `pity_count` that fell inside the resolved banner's window.
    pub banner_local_count: u32,
}

impl PityRecord {
    /// Pulls of the streak made before the resolved banner opened.
    pub fn carried_in(&self) -> u32 {
        self.pity_count.saturating_sub(self.banner_local_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PityReport {
    pub category: Category,
    /// Oldest first.
    pub records: Vec<PityRecord>,
    pub current_pity: u32,
    pub total_pulls: u32,
}
