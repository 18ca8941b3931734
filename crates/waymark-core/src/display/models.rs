//! Display implementations for domain models.
//!
//! Kept separate from the model definitions so data structures and
//! presentation stay decoupled. A [`PlanStep`] renders as its canonical
//! checklist line; whole plans are rendered through
//! [`crate::display::PlanDocument`], which owns the section numbering.

use std::fmt;

use crate::models::{PlanStep, Status};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   - [{}] {}", self.status.checkbox(), self.description)
    }
}
