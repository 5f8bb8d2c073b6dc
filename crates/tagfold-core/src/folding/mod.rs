//! Folding range computation
//!
//! The pipeline runs in one direction:
//! - `tags`, `comments` and `embedded` each produce unordered candidates
//! - `merge` keeps the candidates that do not cross an earlier one
//! - `limit` drops whole nesting levels until the count fits
//!
//! `engine` wires the stages together.

pub mod comments;
pub mod embedded;
pub mod engine;
pub mod limit;
pub mod markers;
pub mod merge;
pub mod tags;

pub use comments::CommentRegionCollector;
pub use embedded::EmbeddedRangeAggregator;
pub use engine::FoldingEngine;
pub use limit::LimitEnforcer;
pub use markers::{Marker, RegionMarkers};
pub use merge::{RangeForest, RangeMerger};
pub use tags::TagRangeCollector;
