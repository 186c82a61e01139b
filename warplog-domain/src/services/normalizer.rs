use serde_json::Value;

use crate::entities::{PullRecord, RawPullRecord};
use crate::error::DomainError;
use crate::utils::parse_source_time;
use crate::value_objects::{BannerId, Category, ItemId, ItemKind, PlayerId, PullId, Rarity};

/// Outcome of normalizing a batch. Malformed rows are dropped and reported,
/// never fatal.
#[derive(Debug, Default)]
pub struct NormalizedBatch {
    pub pulls: Vec<PullRecord>,
    pub rejected: Vec<(usize, DomainError)>,
}

impl NormalizedBatch {
    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }
}

/// Converts one raw record. `fallback_player` fills in a missing `uid`.
pub fn normalize(
    raw: &RawPullRecord,
    fallback_player: Option<&PlayerId>,
) -> Result<PullRecord, DomainError> {
    let id: PullId = required(&raw.id, "id")?.parse()?;
    let time = parse_source_time(required(&raw.time, "time")?)?;
    let category_code = required(&raw.gacha_type, "category")?;
    let category = Category::parse(category_code)
        .map_err(|err| DomainError::malformed("category", err.to_string()))?;
    let rarity = parse_rarity(required(&raw.rank_type, "rarity")?)?;

    let player_id = match present(&raw.uid) {
        Some(uid) => PlayerId::parse(uid)
            .map_err(|err| DomainError::malformed("uid", err.to_string()))?,
        None => fallback_player
            .cloned()
            .ok_or_else(|| DomainError::malformed("uid", "missing"))?,
    };

    let item_id = present(&raw.item_id).unwrap_or_default().to_string();
    let item_kind = present(&raw.item_type)
        .and_then(ItemKind::from_label)
        .or_else(|| ItemKind::from_item_id(&item_id))
        .unwrap_or(match category {
            Category::LightConeEvent | Category::FateLightCone => ItemKind::LightCone,
            _ => ItemKind::Character,
        });

    Ok(PullRecord {
        id,
        player_id,
        banner_id: BannerId(present(&raw.gacha_id).unwrap_or_default().to_string()),
        category,
        item_id: ItemId(item_id),
        item_name: present(&raw.name).unwrap_or_default().to_string(),
        item_kind,
        rarity,
        time,
    })
}

/// Decodes and normalizes each row on its own, so a row of the wrong shape
/// (null, nested values, a field given under two names) only costs itself.
pub fn normalize_batch(rows: Vec<Value>, fallback_player: Option<&PlayerId>) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();
    for (index, row) in rows.into_iter().enumerate() {
        let result = serde_json::from_value::<RawPullRecord>(row)
            .map_err(|err| DomainError::malformed("record", err.to_string()))
            .and_then(|raw| normalize(&raw, fallback_player));
        match result {
            Ok(pull) => batch.pulls.push(pull),
            Err(err) => batch.rejected.push((index, err)),
        }
    }
    batch
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, DomainError> {
    present(value).ok_or_else(|| DomainError::malformed(field, "missing"))
}

fn parse_rarity(value: &str) -> Result<Rarity, DomainError> {
    let stars: u8 = value
        .parse()
        .map_err(|_| DomainError::malformed("rarity", format!("'{}' is not a number", value)))?;
    Rarity::try_from(stars)
}
