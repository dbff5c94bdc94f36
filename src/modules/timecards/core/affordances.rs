use serde::Serialize;
use uuid::Uuid;

use crate::modules::timecards::core::status::TimecardStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionRelationship {
    Cancel,
    Submit,
    RecordLine,
    Delete,
    Reject,
    Approve,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentRelationship {
    Transitions,
    Lines,
    Submittal,
}

/// Currently valid follow-on action, for hypermedia discoverability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub method: Method,
    pub rel: ActionRelationship,
    pub href: String,
}

/// Related sub-document reachable from the timecard representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub method: Method,
    pub rel: DocumentRelationship,
    pub href: String,
}

/// Valid next actions for a timecard in `status`. Pure policy: no I/O, no
/// hidden state, recomputed on every read.
pub fn actions_for(id: Uuid, status: TimecardStatus) -> Vec<ActionLink> {
    match status {
        TimecardStatus::Draft => vec![
            action(Method::Post, ActionRelationship::Cancel, id, "cancellation"),
            action(Method::Post, ActionRelationship::Submit, id, "submittal"),
            action(Method::Post, ActionRelationship::RecordLine, id, "lines"),
            action(Method::Delete, ActionRelationship::Delete, id, "deletion"),
        ],
        TimecardStatus::Submitted => vec![
            action(Method::Post, ActionRelationship::Cancel, id, "cancellation"),
            action(Method::Post, ActionRelationship::Reject, id, "rejection"),
            action(Method::Post, ActionRelationship::Approve, id, "approval"),
            action(Method::Post, ActionRelationship::Return, id, "returned"),
        ],
        TimecardStatus::Cancelled => vec![action(
            Method::Delete,
            ActionRelationship::Delete,
            id,
            "deletion",
        )],
        // terminal or dead-end states offer nothing
        TimecardStatus::Approved | TimecardStatus::Rejected | TimecardStatus::Deleted => {
            Vec::new()
        }
    }
}

/// Related documents: the transition history is always reachable, lines only
/// once at least one exists, the submittal only while submitted.
pub fn documents_for(id: Uuid, status: TimecardStatus, line_count: usize) -> Vec<DocumentLink> {
    let mut links = vec![document(DocumentRelationship::Transitions, id, "transitions")];
    if line_count > 0 {
        links.push(document(DocumentRelationship::Lines, id, "lines"));
    }
    if status == TimecardStatus::Submitted {
        links.push(document(DocumentRelationship::Submittal, id, "submittal"));
    }
    links
}

fn action(method: Method, rel: ActionRelationship, id: Uuid, path: &str) -> ActionLink {
    ActionLink {
        method,
        rel,
        href: format!("/timesheets/{id}/{path}"),
    }
}

fn document(rel: DocumentRelationship, id: Uuid, path: &str) -> DocumentLink {
    DocumentLink {
        method: Method::Get,
        rel,
        href: format!("/timesheets/{id}/{path}"),
    }
}
