use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::shared::core::primitives::PersonDocument;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<PersonDocument>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.reject_timecard.handle(id, body.person).await {
        Ok(transition) => Json(transition).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn latest(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.reject_timecard.latest(id).await {
        Ok(transition) => Json(transition).into_response(),
        Err(error) => error.into_response(),
    }
}
