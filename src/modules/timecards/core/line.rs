use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied work record: the date the work happened plus the payload
/// fields. The state machine treats the payload as opaque; the core validates
/// identity and ownership, never content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDocument {
    pub work_date: NaiveDate,
    pub project: String,
    #[serde(default)]
    pub task: Option<String>,
    pub hours: f32,
    #[serde(default)]
    pub description: Option<String>,
}

/// One logged-work entry. `id` and `recorded` are system-assigned at
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimecardLine {
    pub id: Uuid,
    pub recorded: DateTime<Utc>,
    #[serde(flatten)]
    pub document: LineDocument,
}

/// Insertion-ordered set of lines, unique by line id. Mutation gating by
/// status happens in the aggregate; this type assumes it is only invoked when
/// mutation is legal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineSet {
    lines: Vec<TimecardLine>,
}

impl LineSet {
    pub fn add(&mut self, document: LineDocument) -> TimecardLine {
        let line = TimecardLine {
            id: Uuid::now_v7(),
            recorded: Utc::now(),
            document,
        };
        self.lines.push(line.clone());
        line
    }

    /// Removes the matching line (no-op when absent; the aggregate pre-checks
    /// existence) and records a fresh one. The line's identity changes.
    pub fn replace(&mut self, line_id: Uuid, document: LineDocument) -> TimecardLine {
        self.lines.retain(|l| l.id != line_id);
        self.add(document)
    }

    /// Swaps the payload in place, keeping the id. `recorded` is preserved,
    /// not refreshed.
    pub fn update(&mut self, line_id: Uuid, document: LineDocument) -> Option<TimecardLine> {
        let line = self.lines.iter_mut().find(|l| l.id == line_id)?;
        line.document = document;
        Some(line.clone())
    }

    pub fn contains(&self, line_id: Uuid) -> bool {
        self.lines.iter().any(|l| l.id == line_id)
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Lines ordered by `work_date` ascending, ties broken by `recorded`
    /// ascending.
    pub fn ordered(&self) -> Vec<TimecardLine> {
        let mut lines = self.lines.clone();
        lines.sort_by(|a, b| {
            a.document
                .work_date
                .cmp(&b.document.work_date)
                .then(a.recorded.cmp(&b.recorded))
        });
        lines
    }
}
