use axum::Router;

use warplog_application::AppState;

use crate::handlers::{catalog_handlers, import_handlers, ops_handlers, player_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/players",
            axum::routing::get(player_handlers::list_players),
        )
        .route(
            "/v1/players/:player",
            axum::routing::delete(player_handlers::delete_player),
        )
        .route(
            "/v1/players/:player/import",
            axum::routing::post(import_handlers::import_pulls),
        )
        .route(
            "/v1/players/:player/pulls",
            axum::routing::get(player_handlers::list_pulls),
        )
        .route(
            "/v1/players/:player/pity",
            axum::routing::get(player_handlers::get_pity),
        )
        .route(
            "/v1/players/:player/stats",
            axum::routing::get(player_handlers::get_stats),
        )
        .route(
            "/v1/players/:player/banners",
            axum::routing::get(player_handlers::list_banners),
        )
        .route(
            "/v1/players/:player/banners/:banner_id",
            axum::routing::get(player_handlers::get_banner),
        )
        .route(
            "/v1/players/:player/overview",
            axum::routing::get(player_handlers::get_overview),
        )
        .route(
            "/v1/players/:player/timeline",
            axum::routing::get(player_handlers::get_timeline),
        )
        .route(
            "/v1/catalog/banners",
            axum::routing::get(catalog_handlers::list_catalog_banners),
        )
        .route(
            "/v1/catalog/diagnostics",
            axum::routing::get(catalog_handlers::get_catalog_diagnostics),
        )
        .route(
            "/v1/catalog/reload",
            axum::routing::post(catalog_handlers::reload_catalog),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
