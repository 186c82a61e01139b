use crate::queries::snapshot::{load_snapshot, require_category};
use crate::AppError;
use crate::AppState;
use warplog_domain::{compute_pity, CategoryQuery, PityReport};

/// Pity report of one category with its records newest first.
pub async fn get_pity(
    state: &AppState,
    player: &str,
    query: CategoryQuery,
) -> Result<PityReport, AppError> {
    let category = require_category(query.category.as_deref())?;
    let snapshot = load_snapshot(state, player).await?;
    let mut report = compute_pity(&snapshot.classified, category);
    report.records.reverse();
    Ok(report)
}
