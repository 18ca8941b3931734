//! Error types for the plan parsing library.
//!
//! The public [`parse_plan`](crate::parse_plan) entry point never surfaces
//! these errors; they exist so that internal layers can report *why* a parse
//! was abandoned and so that [`try_parse_plan`](crate::try_parse_plan) can
//! expose that reason to callers who want diagnostics. Pattern mismatches on
//! individual lines are not errors at all; those are handled locally by
//! skipping or falling back (see [`crate::parser`]).

use thiserror::Error;

/// Internal failure reasons for a plan parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A document node's source span does not lie within the original text.
    ///
    /// The tree adapter derives spans from the tokenizer's offsets, so this
    /// indicates a broken invariant in the adapter rather than bad input.
    #[error("source span {start}..{end} out of bounds for document of {len} bytes")]
    SourceSpan {
        start: usize,
        end: usize,
        len: usize,
    },
    /// List nesting exceeded the configured recursion guard.
    ///
    /// Raised for adversarial or degenerate input; the limit is set via
    /// [`ParseOptions::max_depth`](crate::params::ParseOptions::max_depth).
    #[error("list nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
