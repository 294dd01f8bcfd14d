//! Core data types shared by the scanners, the framework model and the CLI.
//!
//! ## Module Structure
//!
//! - `detection`: Scanner output (StringSpan, DetectionResult)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod detection;
pub mod source;

pub use detection::{DetectionResult, StringSpan};
pub use source::{SourceContext, SourceLocation};
