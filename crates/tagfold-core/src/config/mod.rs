//! Configuration for the folding engine
//!
//! Settings are read from `tagfold.toml`:
//!
//! ```toml
//! [folding]
//! range_limit = 5000
//! region_start = '^\s*#region\b'
//! region_end = '^\s*#endregion\b'
//!
//! [embedded]
//! enabled = true
//! languages = ["css", "javascript"]
//! ```

mod settings;

#[cfg(test)]
mod tests;

pub use settings::{
    EmbeddedSettings, FoldingSettings, Settings, DEFAULT_REGION_END, DEFAULT_REGION_START,
};
