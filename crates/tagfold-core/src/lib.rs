//! tagfold-core - Folding range engine for markup documents
//!
//! This crate computes the line ranges an editor can collapse in an HTML-like
//! document, including the `<script>` and `<style>` blocks embedded in it.
//!
//! # Architecture
//!
//! Three independent collectors produce candidate ranges:
//! - Tag nesting (`folding::tags`)
//! - Comments and `#region` markers (`folding::comments`)
//! - Embedded languages, delegated to registered providers (`folding::embedded`)
//!
//! The merger folds the candidates into a non-crossing hierarchy and the
//! limiter truncates it to a maximum count by whole nesting levels.
//!
//! # Example
//!
//! ```
//! use tagfold_core::{FoldingEngine, FoldingRange, FoldingRangeKind};
//!
//! let engine = FoldingEngine::default();
//! let ranges = engine.compute("<html>\nHello\n</html>", None);
//!
//! assert_eq!(ranges, vec![FoldingRange::new(0, 1, FoldingRangeKind::Tag)]);
//! ```

pub mod config;
pub mod error;
pub mod folding;
pub mod partition;
pub mod providers;
pub mod range;
pub mod scanner;

pub use config::Settings;
pub use error::{FoldingError, Result};
pub use folding::FoldingEngine;
pub use providers::{FoldingProvider, ProviderRegistry};
pub use range::{FoldingRange, FoldingRangeKind, LanguageRegion};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
