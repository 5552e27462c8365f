//! Stackscan - Map your deployment stack
//!
//! A CLI tool that inventories a project tree: scripts, container build
//! files, compose manifests, dependency lists, and environment files, with
//! their contents embedded in a single line-numbered text report.
//!
//! # Features
//!
//! - Single-pass recursive scan with a pruned exclusion set (node_modules,
//!   .git, virtualenvs, build output)
//! - First-match-wins classification into fixed categories
//! - Plain-text report: per-directory listings with numbered file contents,
//!   then summary counts per category
//! - Per-file read errors are annotated inline; the scan keeps going
//!
//! # Example
//!
//! ```rust,no_run
//! use stackscan::*;
//! use std::path::Path;
//!
//! // Load configuration
//! let config = config::load_config(None).unwrap();
//!
//! // Scan directory
//! let report = scanner::scan_directory(Path::new("."), &config).unwrap();
//!
//! // Write the report
//! reporter::generate_report(&report, Path::new("stack_report.txt")).unwrap();
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod models;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use models::{Category, Config, ScanReport};
