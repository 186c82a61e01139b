// Shared builders for unit tests.

use chrono::NaiveDateTime;

use crate::entities::{BannerDefinition, FeaturedItem, PullRecord};
use crate::utils::{parse_source_time, parse_window_bound};
use crate::value_objects::{BannerId, Category, ItemId, ItemKind, PlayerId, PullId, Rarity};

pub fn at(value: &str) -> NaiveDateTime {
    parse_source_time(value).expect("fixture time")
}

pub fn banner(
    id: &str,
    category: Category,
    start: &str,
    end: &str,
    featured: &[&str],
) -> BannerDefinition {
    BannerDefinition {
        banner_id: BannerId(id.to_string()),
        category,
        name: format!("banner {}", id),
        start_time: parse_window_bound(start, false).expect("fixture start"),
        end_time: parse_window_bound(end, true).expect("fixture end"),
        featured_items: featured
            .iter()
            .map(|item| FeaturedItem {
                item_id: ItemId(item.to_string()),
                rarity: Rarity::Five,
                name: None,
            })
            .collect(),
    }
}

pub fn pull(
    id: u64,
    category: Category,
    banner_id: &str,
    rarity: Rarity,
    item_id: &str,
    time: &str,
) -> PullRecord {
    PullRecord {
        id: PullId(id),
        player_id: PlayerId::parse("800000001").expect("fixture player"),
        banner_id: BannerId(banner_id.to_string()),
        category,
        item_id: ItemId(item_id.to_string()),
        item_name: format!("item {}", item_id),
        item_kind: ItemKind::from_item_id(item_id).unwrap_or(ItemKind::LightCone),
        rarity,
        time: at(time),
    }
}

/// Filler 3★ pull.
pub fn trash(id: u64, category: Category, banner_id: &str, time: &str) -> PullRecord {
    pull(id, category, banner_id, Rarity::Three, "20000", time)
}
