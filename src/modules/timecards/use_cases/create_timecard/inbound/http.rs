use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::timecards::core::representation::TimecardRepr;
use crate::shared::core::primitives::PersonDocument;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PersonDocument>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.create_timecard.handle(body.person).await {
        Ok(timecard) => {
            (StatusCode::CREATED, Json(TimecardRepr::from(&timecard))).into_response()
        }
        Err(error) => error.into_response(),
    }
}
