//! Core detection engine.
//!
//! ## Module Structure
//!
//! - `context`: Per-project analysis context (config, framework, files)
//! - `data`: Shared data types (literal spans, detections, source locations)
//! - `file_scanner`: Source file discovery
//! - `frameworks`: Localization framework models and their registry
//! - `parsers`: Per-language hard-coded string scanners
//! - `rules`: Extraction rules deciding which literals are user-facing text

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod frameworks;
pub mod parsers;
pub mod rules;

pub use context::{CheckContext, SourceFile, SourceFiles};
pub use data::{DetectionResult, SourceContext, SourceLocation, StringSpan};
