//! Core library for textstat.
//!
//! Turns a body of text into a [`TextStats`] record in a single pass and
//! renders it in one of several formats. The pipeline is pure: no I/O, no
//! shared state, and it never fails, so independent analyses are safe to
//! run side by side.
//!
//! # Modules
//!
//! - [`analysis`] - The text-to-statistics pipeline
//! - [`syllables`] - Heuristic syllable estimation
//! - [`readability`] - Flesch Reading Ease scoring and grade-level lookup
//! - [`render`] - Standard, JSON, and CSV presenters
//! - [`text`] - Segmentation helpers
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstat_core::{Format, analyze, render};
//!
//! let stats = analyze("Hello world. Hello again!");
//! assert_eq!(stats.word_count, 4);
//!
//! let report = render(&stats, Format::Standard).expect("renderable");
//! assert!(report.contains("Words: 4"));
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod error;
pub mod readability;
pub mod render;
pub mod stats;
pub mod syllables;
pub mod text;

pub use analysis::analyze;
pub use error::{RenderError, RenderResult};
pub use render::{Format, render};
pub use stats::TextStats;
