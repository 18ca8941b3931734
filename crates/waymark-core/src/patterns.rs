//! Line pattern matchers for plan markdown.
//!
//! Three patterns cover everything the extractors need: checklist items
//! (`- [x] description`), numbered section headers (`1. [x] Title` or
//! `1. Title [x]`), and a bare-bullet cleaner used as the fallback when a
//! list item carries no bracket marker. All matching is line-oriented: a
//! node whose source spans multiple lines is matched against its first
//! line only.

use once_cell::sync::Lazy;
use regex::Regex;

/// The glyph that marks a simple-shape section as completed.
pub(crate) const COMPLETED_GLYPH: char = '✓';

// Marker glyphs are a single non-bracket character; the empty capture is
// how "[ ]" and "[]" come through.
static CHECKLIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*-\s+\[\s*([^\s\[\]]?)\s*\]\s*(.*)$")
        .expect("checklist regex should be valid")
});

static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\.\s+(?:\[\s*([^\[\]]?)\s*\]\s*)?(.*?)\s*(?:\[\s*([^\[\]]?)\s*\])?\s*$")
        .expect("section header regex should be valid")
});

static SIMPLE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\.\s+(.*?)\s*(?:\[\s*✓\s*\]|✓)?\s*$")
        .expect("simple header regex should be valid")
});

static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-*]\s+").expect("bullet prefix regex should be valid")
});

/// A parsed numbered section header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionHeader {
    /// Resolved marker glyph; empty when the header carries none
    pub marker: String,
    /// Section title, trimmed
    pub title: String,
}

/// A parsed checklist item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChecklistItem {
    /// Marker glyph between the brackets; empty for `[ ]`
    pub marker: String,
    /// Item description, trimmed
    pub description: String,
}

/// Matches a numbered section header with an optional status marker before
/// or after the title.
///
/// Marker tie-break: a non-empty leading marker wins over the trailing
/// one; if neither is present (or both are empty brackets) the resolved
/// glyph is empty.
pub(crate) fn parse_section_header(line: &str) -> Option<SectionHeader> {
    let caps = SECTION_HEADER.captures(line)?;

    let leading = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let trailing = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    let marker = if leading.is_empty() { trailing } else { leading };

    Some(SectionHeader {
        marker: marker.to_string(),
        title: caps.get(2).map(|m| m.as_str()).unwrap_or("").trim().to_string(),
    })
}

/// Matches a `- [g] description` checklist line.
pub(crate) fn parse_checklist_item(line: &str) -> Option<ChecklistItem> {
    let caps = CHECKLIST.captures(line)?;

    Some(ChecklistItem {
        marker: caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string(),
        description: caps.get(2).map(|m| m.as_str()).unwrap_or("").trim().to_string(),
    })
}

/// Matches the relaxed header form used for simple-shape items and returns
/// the title with any trailing completion glyph stripped.
pub(crate) fn parse_simple_header(text: &str) -> Option<String> {
    let caps = SIMPLE_HEADER.captures(text)?;
    Some(caps.get(1).map(|m| m.as_str()).unwrap_or("").trim().to_string())
}

/// Strips a leading `-` or `*` bullet plus following whitespace, if present.
pub(crate) fn strip_bullet_prefix(line: &str) -> &str {
    match BULLET_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Isolates the first line of a node's source text.
///
/// List-item spans include any nested content; only the header line takes
/// part in pattern matching.
pub(crate) fn header_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}
