//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Status;

/// A single checklist item under a plan section.
///
/// Steps are value objects: they carry no identity beyond their position in
/// the owning entry's step list, and they are never mutated after the parse
/// that produced them returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanStep {
    /// Free-text description of the unit of work
    pub description: String,

    /// Whether the step is completed (always consistent with `status`)
    pub completed: bool,

    /// Current status of the step
    pub status: Status,
}

impl PlanStep {
    /// Creates a step with `completed` derived from `status`.
    ///
    /// Both fields come from the same marker lookup, so they cannot
    /// disagree at construction.
    pub fn new(description: impl Into<String>, status: Status) -> Self {
        Self {
            description: description.into(),
            completed: status.is_completed(),
            status,
        }
    }
}
