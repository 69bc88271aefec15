//! Stored tag → requested type conversion matrix.

use crate::types::{ColumnType, Value};

impl Value {
    /// Reads this value as a boolean: non-zero numbers are `true`, strings are `false`.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(v) => *v,
            Self::Int(v) => *v != 0,
            Self::Long(v) => *v != 0,
            Self::Double(v) => *v != 0.0,
            Self::String(_) => false,
        }
    }

    /// Reads this value as a 32-bit integer. Wider values wrap; strings read as 0.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Int(v) => *v,
            other => other.as_i64() as i32,
        }
    }

    /// Reads this value as a 64-bit integer. Doubles truncate toward zero; strings read as 0.
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Bool(v) => i64::from(*v),
            Self::Int(v) => i64::from(*v),
            Self::Long(v) => *v,
            Self::Double(v) => *v as i64,
            Self::String(_) => 0,
        }
    }

    /// Reads this value as a double; strings read as 0.0.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Bool(v) => f64::from(u8::from(*v)),
            Self::Int(v) => f64::from(*v),
            Self::Long(v) => *v as f64,
            Self::Double(v) => *v,
            Self::String(_) => 0.0,
        }
    }

    /// Renders this value as text. Booleans render as `0`/`1`, doubles in fixed notation with
    /// six decimals, strings as-is.
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(v) => u8::from(*v).to_string(),
            Self::Int(v) => v.to_string(),
            Self::Long(v) => v.to_string(),
            Self::Double(v) => format!("{v:.6}"),
            Self::String(s) => s.clone(),
        }
    }

    /// Converts this value to `to`, returning a value tagged with `to`.
    pub fn convert(&self, to: ColumnType) -> Value {
        match to {
            ColumnType::Bool => Value::Bool(self.as_bool()),
            ColumnType::Int => Value::Int(self.as_i32()),
            ColumnType::Long => Value::Long(self.as_i64()),
            ColumnType::Double => Value::Double(self.as_f64()),
            ColumnType::String => Value::String(self.to_text()),
        }
    }
}
