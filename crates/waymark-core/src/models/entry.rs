//! Plan entry model definition and the completion aggregation policy.

use serde::{Deserialize, Serialize};

use super::{PlanStep, Status};

/// A top-level numbered section of a plan, with its checklist steps.
///
/// Entries preserve the numeric order of the sections in the source text;
/// `steps` preserves document order within the section, flattened across
/// nesting levels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanEntry {
    /// Title of the section
    pub title: String,

    /// Checklist steps belonging to the section, in document order
    #[serde(default)]
    pub steps: Vec<PlanStep>,

    /// Whether the section is completed (always consistent with `status`)
    pub completed: bool,

    /// Current status of the section
    pub status: Status,
}

impl PlanEntry {
    /// Creates an entry with no steps and `completed` derived from `status`.
    pub fn new(title: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
            completed: status.is_completed(),
            status,
        }
    }

    /// Recomputes the section's own completion state from its steps.
    ///
    /// No-op for a section without steps, which keeps whatever status its
    /// header marker declared. Otherwise the aggregation rule is:
    ///
    /// - [`Completed`](Status::Completed) iff every step is completed
    /// - else [`Failed`](Status::Failed) iff any step failed and none is in
    ///   progress
    /// - else [`InProgress`](Status::InProgress) if any step is in progress
    ///   or completed
    /// - else [`Todo`](Status::Todo)
    ///
    /// The parser applies this at section finalization unless
    /// [`ParseOptions::aggregate_sections`](crate::params::ParseOptions::aggregate_sections)
    /// is disabled.
    pub fn update_completion_status(&mut self) {
        if self.steps.is_empty() {
            return;
        }

        let status = if self.steps.iter().all(|s| s.status.is_completed()) {
            Status::Completed
        } else if self.steps.iter().any(|s| s.status == Status::Failed)
            && !self.steps.iter().any(|s| s.status == Status::InProgress)
        {
            Status::Failed
        } else if self
            .steps
            .iter()
            .any(|s| s.status == Status::InProgress || s.status.is_completed())
        {
            Status::InProgress
        } else {
            Status::Todo
        };

        self.status = status;
        self.completed = status.is_completed();
    }
}
