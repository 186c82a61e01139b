use tracing::{error, info};

use crate::AppError;
use crate::AppState;
use warplog_domain::{PlayerDeletion, PlayerId};

/// Removes a player's stored history. Holds the import lock so a concurrent
/// import cannot recreate it half-way.
pub async fn delete_player(state: &AppState, player: &str) -> Result<PlayerDeletion, AppError> {
    let player_id = PlayerId::parse(player)?;
    let _guard = state.import_lock.lock().await;
    let removed_pulls = state
        .pull_repo
        .get_all_pulls(&player_id)
        .await
        .map_err(AppError::Internal)?
        .len();
    let existed = state
        .pull_repo
        .delete_player(&player_id)
        .await
        .map_err(|err| {
            error!("failed to delete history of {}: {}", player_id, err);
            AppError::Internal(err)
        })?;
    if !existed {
        return Err(AppError::NotFound(format!("player {}", player_id)));
    }
    info!("deleted history of {} ({} pulls)", player_id, removed_pulls);
    Ok(PlayerDeletion {
        player_id,
        removed_pulls,
    })
}
