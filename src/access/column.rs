use crate::types::{ColumnType, Value};

/// A whole column read as one requested type.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Bool(Vec<bool>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Double(Vec<f64>),
    String(Vec<String>),
}

impl Column {
    /// Converts every value to `as_type`, preserving order.
    pub(crate) fn collect<'a, I>(values: I, as_type: ColumnType) -> Self
    where
        I: Iterator<Item = &'a Value>,
    {
        match as_type {
            ColumnType::Bool => Self::Bool(values.map(Value::as_bool).collect()),
            ColumnType::Int => Self::Int(values.map(Value::as_i32).collect()),
            ColumnType::Long => Self::Long(values.map(Value::as_i64).collect()),
            ColumnType::Double => Self::Double(values.map(Value::as_f64).collect()),
            ColumnType::String => Self::String(values.map(Value::to_text).collect()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Bool(_) => ColumnType::Bool,
            Self::Int(_) => ColumnType::Int,
            Self::Long(_) => ColumnType::Long,
            Self::Double(_) => ColumnType::Double,
            Self::String(_) => ColumnType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Long(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` as a tagged [`Value`].
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Self::Bool(v) => v.get(index).copied().map(Value::Bool),
            Self::Int(v) => v.get(index).copied().map(Value::Int),
            Self::Long(v) => v.get(index).copied().map(Value::Long),
            Self::Double(v) => v.get(index).copied().map(Value::Double),
            Self::String(v) => v.get(index).cloned().map(Value::String),
        }
    }
}

/// Rust types a column can be read into via [`crate::Table::column`].
pub trait FromValue: Sized {
    /// The column type this Rust type corresponds to.
    const COLUMN_TYPE: ColumnType;

    fn from_value(value: &Value) -> Self;
}

impl FromValue for bool {
    const COLUMN_TYPE: ColumnType = ColumnType::Bool;

    fn from_value(value: &Value) -> Self {
        value.as_bool()
    }
}

impl FromValue for i32 {
    const COLUMN_TYPE: ColumnType = ColumnType::Int;

    fn from_value(value: &Value) -> Self {
        value.as_i32()
    }
}

impl FromValue for i64 {
    const COLUMN_TYPE: ColumnType = ColumnType::Long;

    fn from_value(value: &Value) -> Self {
        value.as_i64()
    }
}

impl FromValue for f64 {
    const COLUMN_TYPE: ColumnType = ColumnType::Double;

    fn from_value(value: &Value) -> Self {
        value.as_f64()
    }
}

impl FromValue for String {
    const COLUMN_TYPE: ColumnType = ColumnType::String;

    fn from_value(value: &Value) -> Self {
        value.to_text()
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, FromValue};
    use crate::types::{ColumnType, Value};

    #[test]
    fn collect_preserves_order_and_length() {
        let values = [Value::Int(3), Value::Int(-1), Value::Int(0)];
        let col = Column::collect(values.iter(), ColumnType::Bool);
        assert_eq!(col, Column::Bool(vec![true, true, false]));
        assert_eq!(col.len(), 3);
        assert_eq!(col.column_type(), ColumnType::Bool);
        assert_eq!(col.get(1), Some(Value::Bool(true)));
        assert_eq!(col.get(3), None);
    }

    #[test]
    fn typed_reads_match_the_enum_path() {
        let values = [Value::Double(2.5), Value::Double(-1.5)];
        let via_enum = Column::collect(values.iter(), i64::COLUMN_TYPE);
        let typed: Vec<i64> = values.iter().map(i64::from_value).collect();
        assert_eq!(via_enum, Column::Long(typed));
    }

    #[test]
    fn empty_columns() {
        let col = Column::collect(std::iter::empty(), ColumnType::String);
        assert!(col.is_empty());
    }
}
