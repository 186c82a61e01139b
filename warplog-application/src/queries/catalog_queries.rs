use std::sync::Arc;

use crate::clock::source_now;
use crate::AppError;
use crate::AppState;
use warplog_domain::{BannerDefinition, CatalogDiagnostics, CatalogQuery};

pub async fn list_catalog(
    state: &AppState,
    query: CatalogQuery,
) -> Result<Vec<Arc<BannerDefinition>>, AppError> {
    let catalog = state.catalog.read().await;
    if query.active {
        return Ok(catalog.active_at(source_now(&state.config)));
    }
    Ok(catalog.definitions().to_vec())
}

pub async fn get_diagnostics(state: &AppState) -> CatalogDiagnostics {
    state.catalog.read().await.diagnostics()
}
