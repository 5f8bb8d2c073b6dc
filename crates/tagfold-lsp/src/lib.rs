//! tagfold Language Server Protocol implementation
//!
//! Serves folding ranges for HTML-like documents, including the CSS and
//! JavaScript embedded in `<style>` and `<script>` elements.
//!
//! # Library Usage
//!
//! ```ignore
//! use tagfold_lsp::run_server;
//!
//! run_server().await;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Start the language server (typically called by an editor)
//! tagfold-lsp
//!
//! # With debug logging
//! RUST_LOG=debug tagfold-lsp
//! ```
//!
//! # Initialization Options
//!
//! Clients may pass settings in the same shape as `tagfold.toml`:
//!
//! ```json
//! { "folding": { "range_limit": 5000 }, "embedded": { "enabled": true } }
//! ```

pub mod convert;
pub mod server;

// Re-export main entry point
pub use server::{run_server, Backend};
