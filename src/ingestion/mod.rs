//! Loading entrypoints and the inference pipeline.
//!
//! Most callers should use [`load_table`] (or [`crate::Table::from_path`]), which:
//!
//! - splits each line on a single delimiter byte ([`tokenize`])
//! - classifies every cell ([`classify`]) and resolves one type per column ([`resolve`])
//! - parses every cell into its column's type ([`store`])
//! - optionally reports success/failure/alerts to a [`LoadObserver`]

pub mod classify;
pub mod loader;
pub mod observability;
pub mod resolve;
pub mod store;
pub mod tokenize;

pub use classify::classify;
pub use loader::{
    DEFAULT_DELIMITER, TableOptions, load_table, load_table_from_reader, load_table_from_str,
};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    TracingObserver,
};
pub use resolve::resolve_column_types;
pub use tokenize::{LineEnding, split_line, split_lines};
