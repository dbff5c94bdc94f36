use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::timecards::core::representation::TimecardRepr;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_timecards.handle().await {
        Ok(timecards) => {
            let reprs: Vec<TimecardRepr> = timecards.iter().map(TimecardRepr::from).collect();
            Json(reprs).into_response()
        }
        Err(error) => error.into_response(),
    }
}
