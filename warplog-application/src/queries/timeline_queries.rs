use crate::queries::snapshot::{load_snapshot, parse_categories};
use crate::AppError;
use crate::AppState;
use warplog_domain::{build_timeline, parse_date, TimelineBucket, TimelineQuery};

pub async fn get_timeline(
    state: &AppState,
    player: &str,
    query: TimelineQuery,
) -> Result<Vec<TimelineBucket>, AppError> {
    let categories = parse_categories(query.categories.as_deref())?;
    let since = query
        .since
        .as_deref()
        .map(str::trim)
        .filter(|since| !since.is_empty())
        .map(parse_date)
        .transpose()?;
    let snapshot = load_snapshot(state, player).await?;
    Ok(build_timeline(
        &snapshot.classified,
        categories.as_deref(),
        since,
    ))
}
