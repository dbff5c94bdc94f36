use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.list_transitions.handle(id).await {
        Ok(transitions) => Json(transitions).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod list_transitions_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::timecards::adapters::outbound::repository_in_memory::InMemoryTimecardRepository;
    use crate::modules::timecards::core::ports::TimecardRepository;
    use crate::modules::timecards::core::timecard::Timecard;
    use crate::shell::state::AppState;

    use super::handle;

    #[tokio::test]
    async fn it_should_return_the_entered_transition_for_a_fresh_timecard() {
        let repository = Arc::new(InMemoryTimecardRepository::new());
        let timecard = Timecard::open(42);
        let id = timecard.id();
        repository.add(timecard).await.unwrap();
        let app = Router::new()
            .route("/timesheets/{id}/transitions", get(handle))
            .with_state(AppState::new(repository));

        let response = app
            .oneshot(
                Request::get(format!("/timesheets/{id}/transitions"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["transitionedTo"], "Draft");
        assert_eq!(json[0]["document"]["type"], "Entered");
    }
}
