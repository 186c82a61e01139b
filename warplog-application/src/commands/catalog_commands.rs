use tracing::{error, info, warn};

use crate::AppError;
use crate::AppState;
use warplog_domain::CatalogDiagnostics;

/// Loads the catalog from its repository and swaps it in atomically. The
/// previous catalog stays in place when loading fails.
pub async fn reload_catalog(state: &AppState) -> Result<CatalogDiagnostics, AppError> {
    let catalog = state.catalog_repo.load_catalog().await.map_err(|err| {
        error!("failed to load banner catalog: {}", err);
        AppError::Internal(err)
    })?;

    let diagnostics = catalog.diagnostics();
    for overlap in &diagnostics.overlaps {
        warn!(
            "banner windows overlap in {}: {} and {}; the first listed wins",
            overlap.category, overlap.first, overlap.second
        );
    }

    *state.catalog.write().await = catalog;
    state.metrics.record_catalog_reload();
    info!(
        "banner catalog loaded: {} banners (revision {})",
        diagnostics.banners,
        diagnostics.revision.as_deref().unwrap_or("none")
    );
    Ok(diagnostics)
}
