use std::sync::Arc;

use crate::modules::timecards::core::ports::TimecardRepository;
use crate::modules::timecards::use_cases::approve_timecard::handler::ApproveTimecardHandler;
use crate::modules::timecards::use_cases::cancel_timecard::handler::CancelTimecardHandler;
use crate::modules::timecards::use_cases::create_timecard::handler::CreateTimecardHandler;
use crate::modules::timecards::use_cases::delete_timecard::handler::DeleteTimecardHandler;
use crate::modules::timecards::use_cases::get_timecard::handler::GetTimecardHandler;
use crate::modules::timecards::use_cases::list_lines::handler::ListLinesHandler;
use crate::modules::timecards::use_cases::list_timecards::handler::ListTimecardsHandler;
use crate::modules::timecards::use_cases::list_transitions::handler::ListTransitionsHandler;
use crate::modules::timecards::use_cases::record_line::handler::RecordLineHandler;
use crate::modules::timecards::use_cases::reject_timecard::handler::RejectTimecardHandler;
use crate::modules::timecards::use_cases::replace_line::handler::ReplaceLineHandler;
use crate::modules::timecards::use_cases::return_timecard::handler::ReturnTimecardHandler;
use crate::modules::timecards::use_cases::submit_timecard::handler::SubmitTimecardHandler;
use crate::modules::timecards::use_cases::update_line::handler::UpdateLineHandler;

#[derive(Clone)]
pub struct AppState {
    pub create_timecard: Arc<CreateTimecardHandler>,
    pub list_timecards: Arc<ListTimecardsHandler>,
    pub get_timecard: Arc<GetTimecardHandler>,
    pub record_line: Arc<RecordLineHandler>,
    pub replace_line: Arc<ReplaceLineHandler>,
    pub update_line: Arc<UpdateLineHandler>,
    pub list_lines: Arc<ListLinesHandler>,
    pub list_transitions: Arc<ListTransitionsHandler>,
    pub submit_timecard: Arc<SubmitTimecardHandler>,
    pub return_timecard: Arc<ReturnTimecardHandler>,
    pub approve_timecard: Arc<ApproveTimecardHandler>,
    pub reject_timecard: Arc<RejectTimecardHandler>,
    pub cancel_timecard: Arc<CancelTimecardHandler>,
    pub delete_timecard: Arc<DeleteTimecardHandler>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TimecardRepository>) -> Self {
        Self {
            create_timecard: Arc::new(CreateTimecardHandler::new(repository.clone())),
            list_timecards: Arc::new(ListTimecardsHandler::new(repository.clone())),
            get_timecard: Arc::new(GetTimecardHandler::new(repository.clone())),
            record_line: Arc::new(RecordLineHandler::new(repository.clone())),
            replace_line: Arc::new(ReplaceLineHandler::new(repository.clone())),
            update_line: Arc::new(UpdateLineHandler::new(repository.clone())),
            list_lines: Arc::new(ListLinesHandler::new(repository.clone())),
            list_transitions: Arc::new(ListTransitionsHandler::new(repository.clone())),
            submit_timecard: Arc::new(SubmitTimecardHandler::new(repository.clone())),
            return_timecard: Arc::new(ReturnTimecardHandler::new(repository.clone())),
            approve_timecard: Arc::new(ApproveTimecardHandler::new(repository.clone())),
            reject_timecard: Arc::new(RejectTimecardHandler::new(repository.clone())),
            cancel_timecard: Arc::new(CancelTimecardHandler::new(repository.clone())),
            delete_timecard: Arc::new(DeleteTimecardHandler::new(repository)),
        }
    }
}
