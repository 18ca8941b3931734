//! Extractor for the simple plan shape: a flat numbered list, no checklists.

use crate::error::Result;
use crate::models::{PlanEntry, Status};
use crate::patterns;
use crate::tree::{DocNode, NodeKind};

/// Derives one entry per numbered item of the given ordered list.
///
/// Items that do not look like `N. Title` are silently skipped. An item is
/// completed iff the literal `✓` glyph appears anywhere in its raw source
/// text; steps are always empty in this shape.
pub(crate) fn extract(list: &DocNode, source: &str) -> Result<Vec<PlanEntry>> {
    let mut entries = Vec::new();

    for item in list.children() {
        if item.kind() != NodeKind::ListItem {
            continue;
        }

        let raw = item.source_text(source)?;
        let Some(title) = patterns::parse_simple_header(raw.trim()) else {
            continue;
        };

        let status = if raw.contains(patterns::COMPLETED_GLYPH) {
            Status::Completed
        } else {
            Status::Todo
        };
        entries.push(PlanEntry::new(title, status));
    }

    Ok(entries)
}
