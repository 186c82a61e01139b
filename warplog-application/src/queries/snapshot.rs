use std::collections::BTreeMap;

use tracing::{debug, error, warn};

use crate::AppError;
use crate::AppState;
use warplog_domain::{
    classify_all_with_report, AmbiguousBannerWindow, BannerCatalog, BannerId, Category,
    ClassifiedPull, PlayerId,
};

/// Everything one derivation needs: the player's classified history and the
/// catalog it was classified against.
pub struct PlayerSnapshot {
    pub player_id: PlayerId,
    pub classified: Vec<ClassifiedPull>,
    pub catalog: BannerCatalog,
}

pub async fn load_snapshot(state: &AppState, player: &str) -> Result<PlayerSnapshot, AppError> {
    let player_id = PlayerId::parse(player)?;
    let pulls = state
        .pull_repo
        .get_all_pulls(&player_id)
        .await
        .map_err(|err| {
            error!("failed to load pulls of {}: {}", player_id, err);
            AppError::Internal(err)
        })?;
    let catalog = state.catalog.read().await.clone();

    let classification = classify_all_with_report(&pulls, &catalog);
    for ((chosen, also_matched), count) in ambiguity_counts(&classification.ambiguities) {
        warn!(
            "{} pulls of {} match banners {} and {:?}; using {}",
            count, player_id, chosen, also_matched, chosen
        );
    }
    debug!(
        "classified {} pulls of {} against {} banners",
        classification.pulls.len(),
        player_id,
        catalog.len()
    );
    state.metrics.record_derivation();

    Ok(PlayerSnapshot {
        player_id,
        classified: classification.pulls,
        catalog,
    })
}

/// Ambiguous pulls grouped by the banners involved, so one overlap is
/// reported once per snapshot however many pulls fall into it.
fn ambiguity_counts(
    ambiguities: &[AmbiguousBannerWindow],
) -> BTreeMap<(&BannerId, &[BannerId]), usize> {
    let mut counts = BTreeMap::new();
    for ambiguity in ambiguities {
        *counts
            .entry((&ambiguity.chosen, ambiguity.also_matched.as_slice()))
            .or_insert(0) += 1;
    }
    counts
}

pub fn parse_category(value: Option<&str>) -> Result<Option<Category>, AppError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(Some(Category::parse(value)?)),
        None => Ok(None),
    }
}

pub fn require_category(value: Option<&str>) -> Result<Category, AppError> {
    parse_category(value)?.ok_or_else(|| AppError::BadRequest("category is required".to_string()))
}

/// Comma separated list of codes or names.
pub fn parse_categories(value: Option<&str>) -> Result<Option<Vec<Category>>, AppError> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    let mut categories = Vec::new();
    for part in value.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let category = Category::parse(part)?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(Some(categories))
}
