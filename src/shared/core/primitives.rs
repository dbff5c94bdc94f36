use serde::Deserialize;

/// Identifier for people on both sides of the workflow: employees logging
/// time and the approvers acting on their timecards.
pub type PersonId = i64;

/// Request document naming the person performing an operation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PersonDocument {
    pub person: PersonId,
}
