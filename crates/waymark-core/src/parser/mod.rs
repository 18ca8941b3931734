//! Plan extraction from agent-generated markdown.
//!
//! The entry points layer an infallible public contract over an internal
//! fallible core:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   parse_plan    │    │  try_parse_plan │    │   Extractors    │
//! │ (log + empty on │───▶│ (tagged errors, │───▶│ (simple /       │
//! │  any failure)   │    │  diagnostics)   │    │  detailed)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Individual malformed lines are never errors: unrecognized section
//! headers are skipped and unrecognized checklist items fall back to a
//! bare-bullet reading. The error layer only carries internal failures
//! (broken span invariants, the nesting guard), and the public entry
//! points convert those to an empty plan after logging.
//!
//! # Shape classification
//!
//! A document is "simple" when it contains no checklist at all: the plan
//! is just a numbered list of titles. It is "detailed" as soon as any
//! unordered list appears. The scan covers the whole tree rather than only
//! the first list's items: checklists indented with fewer spaces than the
//! numbered marker's width (the common `1. Title` / two-space `- [ ]`
//! shape) are hoisted out of the item by CommonMark and appear as sibling
//! lists, invisible to a direct-child check. The detailed extractor
//! attributes those siblings to the open section, so both the hoisted and
//! the properly nested shape parse identically.

mod detailed;
mod simple;


use log::warn;

use crate::error::Result;
use crate::models::PlanEntry;
use crate::params::ParseOptions;
use crate::tree::DocumentTree;

/// Extracts a structured plan from markdown with default options.
///
/// Never fails: malformed or unrecognizable input yields an empty plan,
/// with the underlying reason logged at `warn` level. Callers that need
/// the reason should use [`try_parse_plan`].
///
/// # Examples
///
/// ```rust
/// use waymark_core::{parse_plan, Status};
///
/// let entries = parse_plan("1. Models:\n   - [x] Entity A\n   - [ ] Entity B\n");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].title, "Models:");
/// assert_eq!(entries[0].steps[0].status, Status::Completed);
/// ```
pub fn parse_plan(text: &str) -> Vec<PlanEntry> {
    parse_plan_with(text, &ParseOptions::default())
}

/// Extracts a structured plan from markdown with explicit options.
///
/// Same contract as [`parse_plan`]: never fails, empty plan on internal
/// failure.
pub fn parse_plan_with(text: &str, options: &ParseOptions) -> Vec<PlanEntry> {
    match try_parse_plan(text, options) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("plan parse failed ({err}), returning empty plan");
            Vec::new()
        }
    }
}

/// Extracts a structured plan, reporting internal failures to the caller.
///
/// The diagnostic variant of [`parse_plan_with`]: the parse itself is
/// identical, but internal failure reasons ([`crate::error::ParseError`])
/// are returned instead of swallowed. A document with no recognizable plan
/// is still `Ok` with an empty sequence; only invariant breaches and the
/// nesting guard are errors.
pub fn try_parse_plan(text: &str, options: &ParseOptions) -> Result<Vec<PlanEntry>> {
    let tree = DocumentTree::parse(text);

    let Some(list) = tree.first_ordered_list() else {
        return Ok(Vec::new());
    };

    if is_simple(&tree) {
        simple::extract(list, text)
    } else {
        detailed::extract(&tree, text, options)
    }
}

/// Shape check: a plan is simple when no checklist exists anywhere in the
/// document (see the module docs for why the scan is document-wide).
fn is_simple(tree: &DocumentTree) -> bool {
    !tree.contains_unordered_list()
}
