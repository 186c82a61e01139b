use tracing::error;

use crate::AppError;
use crate::AppState;
use warplog_domain::PlayerId;

/// Every player with a stored history, sorted.
pub async fn list_players(state: &AppState) -> Result<Vec<PlayerId>, AppError> {
    state.pull_repo.list_players().await.map_err(|err| {
        error!("failed to list players: {}", err);
        AppError::Internal(err)
    })
}
