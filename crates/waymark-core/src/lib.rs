//! Core library for extracting structured plans from agent markdown.
//!
//! AI agents describe their work as markdown: numbered sections, each
//! optionally carrying a nested checklist of steps tagged with status
//! glyphs (`[x]`, `[!]`, `[*]`, `[ ]`). This crate turns that free-form
//! text into an ordered sequence of [`PlanEntry`] values and renders plans
//! back to the canonical markdown shape.
//!
//! The input is model-generated, not hand-authored, so the parser is
//! tolerant by design: two structurally different shapes are accepted (a
//! flat numbered list, or numbered sections with nested checklists),
//! status markers may sit before or after a section title, unrecognizable
//! lines are skipped or downgraded rather than rejected, and
//! [`parse_plan`] never fails; the worst outcome is an empty plan with
//! the reason in the log.
//!
//! # Quick Start
//!
//! ```rust
//! use waymark_core::{format_plan, parse_plan, Status};
//!
//! let text = "\
//! 1. Models:
//!    - [x] Entity A
//!    - [ ] Entity B
//! 2. Endpoints
//! ";
//!
//! let entries = parse_plan(text);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].title, "Models:");
//! assert_eq!(entries[0].steps.len(), 2);
//! assert!(entries[0].steps[0].completed);
//! assert_eq!(entries[0].steps[1].status, Status::Todo);
//!
//! // The inverse direction: entries back to canonical markdown
//! assert_eq!(format_plan(&entries), text);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐
//! │ tree adapter │──▶│  classifier  │──▶│ simple / detailed    │
//! │ (tokenizer   │   │ (checklists  │   │ extractors           │
//! │  → DocNode)  │   │  anywhere?)  │   │ (sections + steps)   │
//! └──────────────┘   └──────────────┘   └──────────────────────┘
//! ```
//!
//! Formatting ([`format_plan`]) is independent of parsing and lossy for
//! statuses beyond completed/not-completed; see [`display`].

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod parser;

mod patterns;
mod tree;

// Re-export commonly used types
pub use display::{format_plan, PlanDocument};
pub use error::{ParseError, Result};
pub use models::{PlanEntry, PlanStep, Status};
pub use params::ParseOptions;
pub use parser::{parse_plan, parse_plan_with, try_parse_plan};
