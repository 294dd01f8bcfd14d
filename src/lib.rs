//! dart-glot - hard-coded string finder for Flutter projects
//!
//! dart-glot scans Dart sources for string literals that look like
//! user-facing text and are not yet localized, and knows how localization
//! frameworks (GetX `.tr` and friends) mark text as translated.
//!
//! ## Module Structure
//!
//! - `checks`: Checks run over a project (hard-coded text, key usages)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Detection engine (scanners, rules, framework models)
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
