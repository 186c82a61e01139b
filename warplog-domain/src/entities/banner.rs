// Banner entity
// A time-boxed pool with its featured (rate-up) items

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::utils::{deserialize_loose_string, parse_window_bound};
use crate::value_objects::{BannerId, Category, ItemId, Rarity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedItem {
    pub item_id: ItemId,
    pub rarity: Rarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerDefinition {
    pub banner_id: BannerId,
    pub category: Category,
    pub name: String,
    /// Inclusive.
    pub start_time: NaiveDateTime,
    /// Inclusive.
    pub end_time: NaiveDateTime,
    pub featured_items: Vec<FeaturedItem>,
}

impl BannerDefinition {
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    pub fn is_featured(&self, item_id: &ItemId) -> bool {
        self.featured_items.iter().any(|item| &item.item_id == item_id)
    }

    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.contains(now)
    }

    pub fn overlaps(&self, other: &BannerDefinition) -> bool {
        self.category == other.category
            && self.start_time <= other.end_time
            && other.start_time <= self.end_time
    }
}

/// Catalog file entry. Field names follow the published banner tables.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "banner_id", deserialize_with = "deserialize_required_text")]
    pub gacha_id: String,
    #[serde(rename = "type", alias = "category", deserialize_with = "deserialize_required_text")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "startDate", alias = "start_time")]
    pub start_date: String,
    #[serde(rename = "endDate", alias = "end_time")]
    pub end_date: String,
    #[serde(default, rename = "pickupItems", alias = "featured_items")]
    pub pickup_items: Vec<CatalogPickupItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPickupItem {
    #[serde(alias = "item_id", deserialize_with = "deserialize_required_text")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub rarity: u8,
}

fn deserialize_required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_loose_string(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("value must not be null"))
}

impl TryFrom<CatalogEntry> for BannerDefinition {
    type Error = DomainError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        let banner_id = entry.gacha_id.trim().to_string();
        let invalid = |reason: String| DomainError::InvalidBanner {
            banner_id: banner_id.clone(),
            reason,
        };
        if banner_id.is_empty() {
            return Err(invalid("gacha_id is empty".to_string()));
        }
        let category = Category::parse(&entry.kind).map_err(|err| invalid(err.to_string()))?;
        let start_time =
            parse_window_bound(&entry.start_date, false).map_err(|err| invalid(err.to_string()))?;
        let end_time =
            parse_window_bound(&entry.end_date, true).map_err(|err| invalid(err.to_string()))?;
        if start_time > end_time {
            return Err(invalid(format!(
                "start {} is after end {}",
                start_time, end_time
            )));
        }

        let mut featured_items: Vec<FeaturedItem> = Vec::with_capacity(entry.pickup_items.len());
        for item in entry.pickup_items {
            let rarity = Rarity::try_from(item.rarity).map_err(|err| invalid(err.to_string()))?;
            let item_id = ItemId(item.id.trim().to_string());
            if featured_items
                .iter()
                .any(|seen| seen.item_id == item_id && seen.rarity == rarity)
            {
                continue;
            }
            featured_items.push(FeaturedItem {
                item_id,
                rarity,
                name: item.name.filter(|name| !name.trim().is_empty()),
            });
        }

        Ok(BannerDefinition {
            banner_id: BannerId(banner_id),
            category,
            name: entry.name.trim().to_string(),
            start_time,
            end_time,
            featured_items,
        })
    }
}
