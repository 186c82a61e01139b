use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use warplog_application::commands::player_commands;
use warplog_application::queries::{
    banner_queries, pity_queries, player_queries, pull_queries, stats_queries, timeline_queries,
};
use warplog_application::AppState;
use warplog_domain::{
    BannerListQuery, BannerStats, BannerSummary, CategoryQuery, ClassifiedPull, PityReport,
    PlayerDeletion, PlayerId, PlayerOverview, PullQuery, TimelineBucket, TimelineQuery,
};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_players(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PlayerId>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let players = player_queries::list_players(&state).await?;
    Ok(Json(players))
}

pub async fn delete_player(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PlayerDeletion>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let deletion = player_commands::delete_player(&state, &player).await?;
    Ok(Json(deletion))
}

pub async fn list_pulls(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
    Query(query): Query<PullQuery>,
) -> Result<Json<Vec<ClassifiedPull>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let pulls = pull_queries::list_pulls(&state, &player, query).await?;
    Ok(Json(pulls))
}

/// Records are listed newest first.
pub async fn get_pity(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<PityReport>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let report = pity_queries::get_pity(&state, &player, query).await?;
    Ok(Json(report))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<BannerStats>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let stats = stats_queries::get_stats(&state, &player, query).await?;
    Ok(Json(stats))
}

pub async fn get_overview(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PlayerOverview>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let overview = stats_queries::get_overview(&state, &player).await?;
    Ok(Json(overview))
}

pub async fn list_banners(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
    Query(query): Query<BannerListQuery>,
) -> Result<Json<Vec<BannerSummary>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let banners = banner_queries::list_banners(&state, &player, query).await?;
    Ok(Json(banners))
}

pub async fn get_banner(
    State(state): State<AppState>,
    Path((player, banner_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<BannerSummary>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let summary = banner_queries::get_banner(&state, &player, &banner_id).await?;
    Ok(Json(summary))
}

pub async fn get_timeline(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<Vec<TimelineBucket>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let timeline = timeline_queries::get_timeline(&state, &player, query).await?;
    Ok(Json(timeline))
}
