use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.list_lines.handle(id).await {
        Ok(lines) => Json(lines).into_response(),
        Err(error) => error.into_response(),
    }
}
