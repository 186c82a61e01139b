use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::error;

use warplog_application::commands::import_commands;
use warplog_application::AppState;
use warplog_domain::ImportReport;

use crate::error::HttpError;
use crate::middleware::{authorize, parse_import_body};

pub async fn import_pulls(
    State(state): State<AppState>,
    Path(player): Path<String>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<ImportReport>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }

    let records = parse_import_body(&headers, &body).map_err(|err| {
        state.metrics.record_import_error();
        error!("failed to parse import body for {}: {}", player, err);
        HttpError::BadRequest(err.to_string())
    })?;
    let report = import_commands::import_pulls(&state, &player, records).await?;
    Ok(Json(report))
}
