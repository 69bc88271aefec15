//! `delimtab` loads a delimited text file into an in-memory [`Table`], inferring the most
//! restrictive type for each column that loses no information.
//!
//! The primary entrypoint is [`Table::from_path`] (or [`ingestion::load_table`], which is the
//! same thing). Columns are then read by name or 1-based ordinal into any requested type.
//!
//! ## Input format
//!
//! - one record per line, fields separated by a single delimiter byte (default: tab)
//! - optional header line with field names (default: present)
//! - no quoting or escaping; a delimiter always separates fields
//! - empty lines are skipped
//!
//! ## Type inference
//!
//! Each cell is classified as one of [`ColumnType::Bool`] (`0`, `1` or blank),
//! [`ColumnType::Int`] (integer strictly inside ±32768), [`ColumnType::Long`],
//! [`ColumnType::Double`] or [`ColumnType::String`]. A column's type is the least restrictive
//! classification seen in any of its rows, so a single non-numeric token anywhere turns the
//! whole column into `String`.
//!
//! ## Quick example
//!
//! ```no_run
//! use delimtab::{ColumnType, Table, TableOptions};
//!
//! # fn main() -> Result<(), delimtab::TableError> {
//! let table = Table::from_path("measurements.tab", &TableOptions::default())?;
//! println!("fields={:?} types={:?}", table.field_names(), table.field_type_labels());
//!
//! let years: Vec<i32> = table.column("year")?;
//! let notes = table.get_column(3, ColumnType::String)?;
//! println!("{} years, {} notes", years.len(), notes.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: loading entrypoints, tokenizer, classifier, resolver, store, observers
//! - [`access`]: column selectors and the stored → requested conversion rules
//! - [`types`]: column types, fields and stored values
//! - [`error`]: error type used across loading and access

pub mod access;
pub mod error;
pub mod ingestion;
pub mod table;
pub mod types;

pub use access::{Column, ColumnSelector, FromValue};
pub use error::{TableError, TableResult};
pub use ingestion::{LoadObserver, LoadSeverity, TableOptions};
pub use table::Table;
pub use types::{ColumnType, Field, Row, Value};
