use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::timecards::core::representation::TimecardRepr;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.get_timecard.handle(id).await {
        Ok(timecard) => Json(TimecardRepr::from(&timecard)).into_response(),
        Err(error) => error.into_response(),
    }
}
