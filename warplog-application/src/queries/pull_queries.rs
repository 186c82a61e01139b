use crate::queries::snapshot::{load_snapshot, parse_category};
use crate::AppError;
use crate::AppState;
use warplog_domain::{ClassifiedPull, PullQuery};

/// Classified pulls, newest first.
pub async fn list_pulls(
    state: &AppState,
    player: &str,
    query: PullQuery,
) -> Result<Vec<ClassifiedPull>, AppError> {
    let category = parse_category(query.category.as_deref())?;
    let limit = query.limit.unwrap_or(1000).clamp(1, 10_000);
    let snapshot = load_snapshot(state, player).await?;
    Ok(snapshot
        .classified
        .into_iter()
        .rev()
        .filter(|pull| category.map_or(true, |category| pull.category() == category))
        .take(limit)
        .collect())
}
