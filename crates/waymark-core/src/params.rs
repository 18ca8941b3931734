//! Parameter structures for parse operations.
//!
//! These are plain data carriers with no framework-specific derives, so any
//! host layer (an editor integration, an agent loop, a test harness) can
//! construct them without pulling in its own dependencies.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`parse_plan_with`](crate::parse_plan_with) and
/// [`try_parse_plan`](crate::try_parse_plan).
///
/// The defaults reproduce the behavior of the plain
/// [`parse_plan`](crate::parse_plan) entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum list nesting depth the extractor will follow.
    ///
    /// Markdown nesting is practically shallow; the cap exists so that
    /// pathological input cannot exhaust the stack. Exceeding it abandons
    /// the parse (empty plan from the infallible entry points,
    /// [`ParseError::NestingTooDeep`](crate::error::ParseError::NestingTooDeep)
    /// from [`try_parse_plan`](crate::try_parse_plan)).
    pub max_depth: usize,

    /// Whether a section's own completion state is recomputed from its
    /// steps once all of them are known.
    ///
    /// When disabled, a section keeps whatever status its header marker
    /// declared, even if the steps below it disagree. See
    /// [`PlanEntry::update_completion_status`](crate::models::PlanEntry::update_completion_status)
    /// for the aggregation rule.
    pub aggregate_sections: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            aggregate_sections: true,
        }
    }
}
