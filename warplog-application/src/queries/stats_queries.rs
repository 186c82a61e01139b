use crate::queries::snapshot::{load_snapshot, require_category};
use crate::AppError;
use crate::AppState;
use warplog_domain::{aggregate, overview, AggregateScope, BannerStats, CategoryQuery, PlayerOverview};

pub async fn get_stats(
    state: &AppState,
    player: &str,
    query: CategoryQuery,
) -> Result<BannerStats, AppError> {
    let category = require_category(query.category.as_deref())?;
    let snapshot = load_snapshot(state, player).await?;
    Ok(aggregate(&snapshot.classified, AggregateScope::Category(category)))
}

pub async fn get_overview(state: &AppState, player: &str) -> Result<PlayerOverview, AppError> {
    let snapshot = load_snapshot(state, player).await?;
    Ok(overview(&snapshot.player_id, &snapshot.classified))
}
