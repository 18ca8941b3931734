//! Status enumeration and the checklist marker vocabulary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of entry and step statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Work has not been started (also the fallback for unknown markers)
    #[default]
    Todo,

    /// Work is underway
    InProgress,

    /// Work finished successfully
    Completed,

    /// Work was attempted and failed
    Failed,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "inprogress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "failed" => Ok(Status::Failed),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl Status {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "inprogress",
            Status::Completed => "completed",
            Status::Failed => "failed",
        }
    }

    /// Classify a checklist marker glyph.
    ///
    /// Total over all inputs: any glyph outside the fixed vocabulary,
    /// including the empty string, maps to [`Status::Todo`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waymark_core::models::Status;
    ///
    /// assert_eq!(Status::from_marker("x"), Status::Completed);
    /// assert_eq!(Status::from_marker("✓"), Status::Completed);
    /// assert_eq!(Status::from_marker("!"), Status::Failed);
    /// assert_eq!(Status::from_marker("*"), Status::InProgress);
    /// assert_eq!(Status::from_marker(""), Status::Todo);
    /// assert_eq!(Status::from_marker("?"), Status::Todo);
    /// ```
    pub fn from_marker(glyph: &str) -> Self {
        match glyph.trim() {
            "x" | "X" | "✓" => Status::Completed,
            "!" => Status::Failed,
            "*" => Status::InProgress,
            _ => Status::Todo,
        }
    }

    /// Whether a marker glyph signals completion.
    ///
    /// Equivalent to `Status::from_marker(glyph) == Status::Completed`.
    pub fn marker_is_completed(glyph: &str) -> bool {
        Status::from_marker(glyph) == Status::Completed
    }

    /// Whether this status counts as completed.
    pub fn is_completed(&self) -> bool {
        *self == Status::Completed
    }

    /// The checkbox glyph used when rendering a plan back to markdown.
    ///
    /// The rendered form only distinguishes completed from not-completed;
    /// `InProgress` and `Failed` degrade to an empty box.
    pub fn checkbox(&self) -> char {
        if self.is_completed() {
            'x'
        } else {
            ' '
        }
    }
}
