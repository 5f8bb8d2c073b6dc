//! tagfold CLI - Command-line interface library
//!
//! This library provides the CLI functionality for tagfold:
//! - Ranges: print the folding ranges of a markup file
//! - Regions: print the embedded CSS and JavaScript regions of a markup file
//!
//! # Library Usage
//!
//! ```ignore
//! use tagfold_cli::{ranges_output, OutputFormat};
//!
//! let json = ranges_output(Path::new("index.html"), Some(100), OutputFormat::Json, None)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Folding ranges as text
//! tagfold ranges index.html
//!
//! # At most 100 ranges, as JSON
//! tagfold ranges index.html --limit 100 --format json
//!
//! # Embedded-language regions
//! tagfold regions index.html
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    load_settings, ranges_command, ranges_output, regions_command, regions_output, run_cli,
    OutputFormat,
};
