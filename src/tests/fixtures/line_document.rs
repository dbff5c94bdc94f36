// Shared test fixture for the LineDocument payload.

use chrono::NaiveDate;

use crate::modules::timecards::core::line::LineDocument;

pub struct LineDocumentBuilder {
    inner: LineDocument,
}

impl Default for LineDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LineDocumentBuilder {
    pub fn new() -> Self {
        Self {
            inner: LineDocument {
                work_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                project: "atlas".to_string(),
                task: Some("implementation".to_string()),
                hours: 8.0,
                description: Some("fixture line".to_string()),
            },
        }
    }

    pub fn work_date(mut self, v: NaiveDate) -> Self {
        self.inner.work_date = v;
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn task(mut self, v: impl Into<String>) -> Self {
        self.inner.task = Some(v.into());
        self
    }

    pub fn hours(mut self, v: f32) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn build(self) -> LineDocument {
        self.inner
    }
}
