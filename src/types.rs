//! Core data model: column types, fields, stored values.
//!
//! A [`crate::Table`] owns an ordered list of [`Field`]s and row-major [`Row`]s of [`Value`]s.
//! Every value in a column carries the column's resolved [`ColumnType`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Logical type of a column, ordered from most to least restrictive.
///
/// The derived `Ord` follows declaration order, so `Bool < Int < Long < Double < String` and
/// [`ColumnType::join`] is simply the maximum of its operands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ColumnType {
    /// `0`, `1` or blank.
    #[strum(to_string = "BOOLEAN")]
    #[serde(rename = "BOOLEAN")]
    Bool,
    /// Integer strictly between -32768 and 32768, stored as `i32`.
    #[strum(to_string = "INT")]
    #[serde(rename = "INT")]
    Int,
    /// Any other integer, stored as `i64`.
    #[strum(to_string = "LONG")]
    #[serde(rename = "LONG")]
    Long,
    /// Decimal or scientific notation, stored as `f64`.
    #[strum(to_string = "DOUBLE")]
    #[serde(rename = "DOUBLE")]
    Double,
    /// Anything else. Absorbing under [`ColumnType::join`].
    #[strum(to_string = "STRING")]
    #[serde(rename = "STRING")]
    String,
}

impl ColumnType {
    /// Least upper bound of two types in the restrictiveness order.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        self.max(other)
    }

    /// Human-readable label (`BOOLEAN`, `INT`, `LONG`, `DOUBLE`, `STRING`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bool => "BOOLEAN",
            Self::Int => "INT",
            Self::Long => "LONG",
            Self::Double => "DOUBLE",
            Self::String => "STRING",
        }
    }
}

/// A single column description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Header name; `None` when the table was loaded without a header row.
    pub name: Option<String>,
    /// Resolved column type.
    pub column_type: ColumnType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: Option<String>, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }

    /// Returns true if this field's name equals `name`.
    ///
    /// Case-insensitive matching folds ASCII letters only. Unnamed fields never match.
    pub fn matches(&self, name: &str, case_sensitive: bool) -> bool {
        match &self.name {
            Some(own) if case_sensitive => own == name,
            Some(own) => own.eq_ignore_ascii_case(name),
            None => false,
        }
    }
}

/// A single stored cell.
///
/// The variant is the tag; there is no way to build a value whose payload disagrees with its
/// [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
}

impl Value {
    /// The type tag of this value.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Bool(_) => ColumnType::Bool,
            Self::Int(_) => ColumnType::Int,
            Self::Long(_) => ColumnType::Long,
            Self::Double(_) => ColumnType::Double,
            Self::String(_) => ColumnType::String,
        }
    }
}

/// One table row. Always exactly `field_count` values long.
pub type Row = Vec<Value>;

#[cfg(test)]
mod tests {
    use super::{ColumnType, Field, Value};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn column_types_are_totally_ordered_by_restrictiveness() {
        let all: Vec<ColumnType> = ColumnType::iter().collect();
        assert_eq!(
            all,
            vec![
                ColumnType::Bool,
                ColumnType::Int,
                ColumnType::Long,
                ColumnType::Double,
                ColumnType::String,
            ]
        );
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn join_is_max_and_string_absorbs() {
        assert_eq!(ColumnType::Bool.join(ColumnType::Int), ColumnType::Int);
        assert_eq!(ColumnType::Double.join(ColumnType::Long), ColumnType::Double);
        for t in ColumnType::iter() {
            assert_eq!(t.join(ColumnType::String), ColumnType::String);
            assert_eq!(ColumnType::String.join(t), ColumnType::String);
            assert_eq!(t.join(ColumnType::Bool), t);
        }
    }

    #[test]
    fn labels_display_and_parse() {
        for t in ColumnType::iter() {
            assert_eq!(t.to_string(), t.label());
            assert_eq!(ColumnType::from_str(t.label()).unwrap(), t);
        }
        assert_eq!(ColumnType::from_str("double").unwrap(), ColumnType::Double);
        assert!(ColumnType::from_str("float").is_err());
    }

    #[test]
    fn serde_uses_labels() {
        let field = Field::new(Some("year".into()), ColumnType::Int);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"name":"year","column_type":"INT"}"#);
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
        assert_eq!(
            serde_json::to_string(&ColumnType::Bool).unwrap(),
            r#""BOOLEAN""#
        );
    }

    #[test]
    fn field_name_matching() {
        let named = Field::new(Some("Price".to_string()), ColumnType::Double);
        assert!(named.matches("price", false));
        assert!(named.matches("PRICE", false));
        assert!(!named.matches("price", true));
        assert!(named.matches("Price", true));

        let unnamed = Field::new(None, ColumnType::Int);
        assert!(!unnamed.matches("", false));
    }

    #[test]
    fn value_tags() {
        assert_eq!(Value::Bool(true).column_type(), ColumnType::Bool);
        assert_eq!(Value::Int(7).column_type(), ColumnType::Int);
        assert_eq!(Value::Long(1 << 40).column_type(), ColumnType::Long);
        assert_eq!(Value::Double(2.5).column_type(), ColumnType::Double);
        assert_eq!(Value::String("x".into()).column_type(), ColumnType::String);
    }
}
