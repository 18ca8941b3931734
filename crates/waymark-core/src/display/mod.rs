//! Rendering plans back to their canonical markdown shape.
//!
//! The inverse of [`crate::parse_plan`], and deliberately lossy: the
//! rendered checklist only distinguishes completed from not-completed, so
//! `InProgress` and `Failed` degrade to an empty checkbox and re-parse as
//! `Todo`. Titles, step descriptions, and completed flags survive the
//! round trip.
//!
//! Follows the newtype-wrapper approach used for the models' own Display
//! implementations: [`PlanDocument`] wraps a slice of entries and carries
//! the 1-based section numbering that individual entries do not know about.

pub mod models;

use std::fmt;

use crate::models::PlanEntry;

/// Display wrapper rendering a whole plan as markdown.
///
/// Each entry becomes `"{index}. {title}"` followed by one three-space
/// indented checklist line per step.
pub struct PlanDocument<'a>(pub &'a [PlanEntry]);

impl fmt::Display for PlanDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, entry.title)?;
            for step in &entry.steps {
                writeln!(f, "{step}")?;
            }
        }
        Ok(())
    }
}

/// Renders entries to the canonical detailed markdown shape.
///
/// Pure and total; an empty slice renders as the empty string.
///
/// # Examples
///
/// ```rust
/// use waymark_core::{format_plan, parse_plan};
///
/// let text = "1. Models:\n   - [x] Entity A\n   - [ ] Entity B\n";
/// let entries = parse_plan(text);
/// assert_eq!(format_plan(&entries), text);
/// ```
pub fn format_plan(entries: &[PlanEntry]) -> String {
    PlanDocument(entries).to_string()
}
