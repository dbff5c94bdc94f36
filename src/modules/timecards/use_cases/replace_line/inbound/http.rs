use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::timecards::core::line::LineDocument;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((id, line_id)): Path<(Uuid, Uuid)>,
    body: Result<Json<LineDocument>, JsonRejection>,
) -> impl IntoResponse {
    let Json(document) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.replace_line.handle(id, line_id, document).await {
        Ok(line) => (StatusCode::CREATED, Json(line)).into_response(),
        Err(error) => error.into_response(),
    }
}
