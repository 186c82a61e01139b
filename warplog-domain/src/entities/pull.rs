// Pull entity
// One warp as emitted by the source, before and after normalization

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::deserialize_loose_string;
use crate::value_objects::{BannerId, Category, ItemId, ItemKind, PlayerId, PullId, Rarity};

/// Record shape as received from an export or vendor page. Field names follow
/// the vendor (`gacha_type`, `rank_type`, ...) with aliases for the
/// descriptive names used by other exporters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPullRecord {
    #[serde(default, alias = "player_id", deserialize_with = "deserialize_loose_string")]
    pub uid: Option<String>,
    #[serde(default, alias = "banner_id", deserialize_with = "deserialize_loose_string")]
    pub gacha_id: Option<String>,
    #[serde(default, alias = "category", deserialize_with = "deserialize_loose_string")]
    pub gacha_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub item_id: Option<String>,
    #[serde(default, alias = "item_name", deserialize_with = "deserialize_loose_string")]
    pub name: Option<String>,
    #[serde(default, alias = "item_kind", deserialize_with = "deserialize_loose_string")]
    pub item_type: Option<String>,
    #[serde(default, alias = "rarity", deserialize_with = "deserialize_loose_string")]
    pub rank_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub count: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRecord {
    pub id: PullId,
    pub player_id: PlayerId,
    pub banner_id: BannerId,
    pub category: Category,
    pub item_id: ItemId,
    pub item_name: String,
    pub item_kind: ItemKind,
    pub rarity: Rarity,
    pub time: NaiveDateTime,
}

impl PullRecord {
    pub fn is_top_rarity(&self) -> bool {
        self.rarity == self.category.top_rarity()
    }
}
