//! Column type resolution over all rows.

use crate::types::ColumnType;

use super::classify::classify;

/// Folds per-cell classifications into one type per column.
///
/// Every column starts at [`ColumnType::Bool`] (the bottom of the lattice). Missing cells in a
/// short row count as blank and therefore never widen a column.
pub fn resolve_column_types<R>(rows: &[R], field_count: usize) -> Vec<ColumnType>
where
    R: AsRef<[String]>,
{
    let mut types = vec![ColumnType::Bool; field_count];
    for row in rows {
        for (resolved, raw) in types.iter_mut().zip(row.as_ref()) {
            if *resolved != ColumnType::String {
                *resolved = resolved.join(classify(raw));
            }
        }
    }
    types
}
