use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use warplog_application::commands::catalog_commands;
use warplog_application::queries::catalog_queries;
use warplog_application::AppState;
use warplog_domain::{BannerDefinition, CatalogDiagnostics, CatalogQuery};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_catalog_banners(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Arc<BannerDefinition>>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let banners = catalog_queries::list_catalog(&state, query).await?;
    Ok(Json(banners))
}

pub async fn get_catalog_diagnostics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CatalogDiagnostics>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(catalog_queries::get_diagnostics(&state).await))
}

pub async fn reload_catalog(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CatalogDiagnostics>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let diagnostics = catalog_commands::reload_catalog(&state).await?;
    Ok(Json(diagnostics))
}
