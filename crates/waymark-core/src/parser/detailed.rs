//! Extractor for the detailed plan shape: numbered sections with nested
//! checklists.
//!
//! One depth-first traversal of the whole document tree, with a single
//! "current section" accumulator. Ordered-list items that parse as section
//! headers open a new section (finalizing the previous one); unordered
//! lists feed steps into whichever section is open. A checklist that
//! appears before any section has been opened belongs to nothing and is
//! dropped.

use log::debug;

use crate::error::{ParseError, Result};
use crate::models::{PlanEntry, PlanStep, Status};
use crate::params::ParseOptions;
use crate::patterns::{self, SectionHeader};
use crate::tree::{DocNode, DocumentTree, NodeKind};

/// Runs the traversal and returns the finalized entries in section order.
pub(crate) fn extract(
    tree: &DocumentTree,
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<PlanEntry>> {
    let mut extractor = DetailedExtractor {
        source,
        options,
        entries: Vec::new(),
        current: None,
    };

    for node in tree.top_level() {
        extractor.walk(node, 0)?;
    }
    extractor.finalize_current();

    Ok(extractor.entries)
}

/// Mutable state for one traversal: the finished entries plus the section
/// currently accumulating steps.
struct DetailedExtractor<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    entries: Vec<PlanEntry>,
    current: Option<SectionBuilder>,
}

/// Builder for the section being assembled; frozen into an immutable
/// [`PlanEntry`] on finalize.
struct SectionBuilder {
    title: String,
    status: Status,
    steps: Vec<PlanStep>,
}

impl SectionBuilder {
    fn open(header: SectionHeader) -> Self {
        Self {
            title: header.title,
            status: Status::from_marker(&header.marker),
            steps: Vec::new(),
        }
    }

    fn finish(self, aggregate: bool) -> PlanEntry {
        let mut entry = PlanEntry::new(self.title, self.status);
        entry.steps = self.steps;
        if aggregate {
            entry.update_completion_status();
        }
        entry
    }
}

impl DetailedExtractor<'_> {
    fn walk(&mut self, node: &DocNode, depth: usize) -> Result<()> {
        self.check_depth(depth)?;

        match node.kind() {
            NodeKind::OrderedList => {
                for child in node.children() {
                    if child.kind() == NodeKind::ListItem {
                        self.section_item(child, depth + 1)?;
                    } else {
                        self.walk(child, depth + 1)?;
                    }
                }
            }
            NodeKind::UnorderedList => {
                if self.current.is_some() {
                    let mut steps = Vec::new();
                    collect_steps(self.source, self.options, node, depth + 1, &mut steps)?;
                    if let Some(section) = self.current.as_mut() {
                        section.steps.append(&mut steps);
                    }
                } else {
                    debug!("checklist before any section header, dropping its items");
                }
            }
            _ => {
                for child in node.children() {
                    self.walk(child, depth + 1)?;
                }
            }
        }

        Ok(())
    }

    /// Handles one direct item of an ordered list.
    ///
    /// A header match finalizes the open section and opens a new one; a
    /// mismatch leaves the open section undisturbed. Either way the item's
    /// children are traversed, so nested checklists and sub-sections are
    /// picked up in document order.
    fn section_item(&mut self, item: &DocNode, depth: usize) -> Result<()> {
        let raw = item.source_text(self.source)?;
        if let Some(header) = patterns::parse_section_header(patterns::header_line(raw)) {
            self.finalize_current();
            self.current = Some(SectionBuilder::open(header));
        }

        for child in item.children() {
            self.walk(child, depth + 1)?;
        }
        Ok(())
    }

    fn finalize_current(&mut self) {
        if let Some(section) = self.current.take() {
            self.entries
                .push(section.finish(self.options.aggregate_sections));
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                max_depth: self.options.max_depth,
            });
        }
        Ok(())
    }
}

/// Extracts steps from an unordered list, recursing into nested unordered
/// lists so arbitrarily deep checklists flatten into one step list in
/// document order.
fn collect_steps(
    source: &str,
    options: &ParseOptions,
    list: &DocNode,
    depth: usize,
    out: &mut Vec<PlanStep>,
) -> Result<()> {
    if depth > options.max_depth {
        return Err(ParseError::NestingTooDeep {
            max_depth: options.max_depth,
        });
    }

    for item in list.children() {
        if item.kind() != NodeKind::ListItem {
            continue;
        }

        let raw = item.source_text(source)?;
        let line = patterns::header_line(raw);
        if let Some(check) = patterns::parse_checklist_item(line) {
            out.push(PlanStep::new(
                check.description,
                Status::from_marker(&check.marker),
            ));
        } else {
            // Bare bullet without a bracket marker: keep the text as a todo
            let description = patterns::strip_bullet_prefix(line).trim();
            if !description.is_empty() {
                out.push(PlanStep::new(description, Status::Todo));
            }
        }

        for child in item.children() {
            if child.kind() == NodeKind::UnorderedList {
                collect_steps(source, options, child, depth + 1, out)?;
            }
        }
    }

    Ok(())
}
