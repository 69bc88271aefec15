//! Typed column access.
//!
//! Any column can be read as any [`crate::types::ColumnType`]. Reads never fail on a type
//! mismatch; the only lookup failures are an unknown name or an out-of-range ordinal.
//!
//! | stored → requested | Bool | Int | Long | Double | String |
//! |---|---|---|---|---|---|
//! | Bool | identity | 0/1 | 0/1 | 0.0/1.0 | `"0"`/`"1"` |
//! | Int | non-zero | identity | widen | widen | decimal |
//! | Long | non-zero | wrap to 32 bits | identity | widen | decimal |
//! | Double | non-zero | truncate, wrap to 32 bits | truncate | identity | `{:.6}` |
//! | String | `false` | 0 | 0 | 0.0 | identity |
//!
//! Narrowing follows C cast semantics where Rust allows it: integer narrowing wraps instead of
//! saturating. Float-to-`i64` casts saturate at the `i64` bounds (NaN reads as 0).
//!
//! ```
//! use delimtab::{Column, ColumnSelector, ColumnType, Table, TableOptions};
//!
//! let table = Table::from_text(
//!     "id\tvalue\tnote\n1\t3.14\thello\n0\t2\tworld\n",
//!     &TableOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(table.get_column("id", ColumnType::Bool).unwrap(), Column::Bool(vec![true, false]));
//! assert_eq!(table.get_column("note", ColumnType::Int).unwrap(), Column::Int(vec![0, 0]));
//! assert_eq!(
//!     table.get_column(ColumnSelector::name("Value", false), ColumnType::String).unwrap(),
//!     Column::String(vec!["3.140000".into(), "2.000000".into()]),
//! );
//! ```

mod column;
mod convert;
mod selector;

pub use column::{Column, FromValue};
pub use selector::ColumnSelector;
