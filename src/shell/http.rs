use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::modules::timecards::use_cases::approve_timecard::inbound::http as approve_http;
use crate::modules::timecards::use_cases::cancel_timecard::inbound::http as cancel_http;
use crate::modules::timecards::use_cases::create_timecard::inbound::http as create_http;
use crate::modules::timecards::use_cases::delete_timecard::inbound::http as delete_http;
use crate::modules::timecards::use_cases::get_timecard::inbound::http as get_http;
use crate::modules::timecards::use_cases::list_lines::inbound::http as list_lines_http;
use crate::modules::timecards::use_cases::list_timecards::inbound::http as list_http;
use crate::modules::timecards::use_cases::list_transitions::inbound::http as transitions_http;
use crate::modules::timecards::use_cases::record_line::inbound::http as record_line_http;
use crate::modules::timecards::use_cases::reject_timecard::inbound::http as reject_http;
use crate::modules::timecards::use_cases::replace_line::inbound::http as replace_line_http;
use crate::modules::timecards::use_cases::return_timecard::inbound::http as return_http;
use crate::modules::timecards::use_cases::submit_timecard::inbound::http as submit_http;
use crate::modules::timecards::use_cases::update_line::inbound::http as update_line_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/timesheets",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/timesheets/{id}", get(get_http::handle))
        .route(
            "/timesheets/{id}/lines",
            get(list_lines_http::handle).post(record_line_http::handle),
        )
        .route(
            "/timesheets/{id}/lines/{line_id}/replace",
            post(replace_line_http::handle),
        )
        .route(
            "/timesheets/{id}/lines/{line_id}/update",
            patch(update_line_http::handle),
        )
        .route(
            "/timesheets/{id}/transitions",
            get(transitions_http::handle),
        )
        .route(
            "/timesheets/{id}/submittal",
            get(submit_http::latest).post(submit_http::handle),
        )
        .route("/timesheets/{id}/returned", post(return_http::handle))
        .route(
            "/timesheets/{id}/approval",
            get(approve_http::latest).post(approve_http::handle),
        )
        .route(
            "/timesheets/{id}/rejection",
            get(reject_http::latest).post(reject_http::handle),
        )
        .route(
            "/timesheets/{id}/cancellation",
            get(cancel_http::latest).post(cancel_http::handle),
        )
        .route("/timesheets/{id}/deletion", delete(delete_http::handle))
        .with_state(state)
}
