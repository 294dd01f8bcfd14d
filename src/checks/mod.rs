//! Checks run over a [`CheckContext`](crate::core::CheckContext).
//!
//! Each check pairs a per-file function, which takes only the inputs it
//! needs, with a context-level function that runs it over every file.
//!
//! ## Module Structure
//!
//! - `hardcoded`: Hard-coded text detection with refactor hints
//! - `key_usages`: Existing localized key usages

pub mod hardcoded;
pub mod key_usages;
