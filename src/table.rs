//! The loaded, immutable table.

use std::io::Read;
use std::path::Path;

use crate::access::{Column, ColumnSelector, FromValue};
use crate::error::{TableError, TableResult};
use crate::ingestion::{self, TableOptions};
use crate::types::{ColumnType, Field, Row};

/// In-memory table with one resolved [`ColumnType`] per field.
///
/// Rows are stored row-major; every row has exactly [`Table::field_count`] values. The table
/// cannot be mutated after loading, so shared references can be read from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    fields: Vec<Field>,
    rows: Vec<Row>,
}

impl Table {
    pub(crate) fn from_parts(fields: Vec<Field>, rows: Vec<Row>) -> Self {
        Self { fields, rows }
    }

    /// Loads a delimited text file. See [`ingestion::load_table`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SourceUnavailable`] or [`TableError::EmptyHeader`].
    pub fn from_path(path: impl AsRef<Path>, options: &TableOptions) -> TableResult<Self> {
        ingestion::load_table(path, options)
    }

    /// Loads a table from a reader. See [`ingestion::load_table_from_reader`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SourceUnavailable`] or [`TableError::EmptyHeader`].
    pub fn from_reader<R: Read>(reader: R, options: &TableOptions) -> TableResult<Self> {
        ingestion::load_table_from_reader(reader, options)
    }

    /// Loads a table from in-memory text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyHeader`].
    pub fn from_text(text: &str, options: &TableOptions) -> TableResult<Self> {
        ingestion::load_table_from_str(text, options)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Field names in column order. Empty if the table was loaded without a header row.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().filter_map(|f| f.name.as_deref()).collect()
    }

    /// Resolved column types in column order.
    pub fn field_types(&self) -> Vec<ColumnType> {
        self.fields.iter().map(|f| f.column_type).collect()
    }

    /// Column type labels (`BOOLEAN`, `INT`, `LONG`, `DOUBLE`, `STRING`) in column order.
    pub fn field_type_labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.column_type.label()).collect()
    }

    pub fn has_field(&self, name: &str, case_sensitive: bool) -> bool {
        self.field_index(name, case_sensitive).is_some()
    }

    /// 0-based position of the first field named `name`.
    pub fn field_index(&self, name: &str, case_sensitive: bool) -> Option<usize> {
        self.fields.iter().position(|f| f.matches(name, case_sensitive))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Reads a whole column converted to `as_type`.
    ///
    /// The result always has [`Table::row_count`] entries in row order. Conversion never fails;
    /// see [`crate::access`] for the conversion rules.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnNotFound`] or [`TableError::ColumnOutOfRange`] if the selector
    /// does not identify a column.
    pub fn get_column(
        &self,
        selector: impl Into<ColumnSelector>,
        as_type: ColumnType,
    ) -> TableResult<Column> {
        let idx = self.resolve(&selector.into())?;
        Ok(Column::collect(
            self.rows.iter().map(|row| &row[idx]),
            as_type,
        ))
    }

    /// Typed variant of [`Table::get_column`].
    ///
    /// ```
    /// use delimtab::{Table, TableOptions};
    ///
    /// let table = Table::from_text("id\tvalue\n1\t3.14\n0\t2\n", &TableOptions::default()).unwrap();
    /// let values: Vec<f64> = table.column("VALUE").unwrap();
    /// assert_eq!(values, vec![3.14, 2.0]);
    /// let ids: Vec<String> = table.column(1).unwrap();
    /// assert_eq!(ids, vec!["1", "0"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Table::get_column`].
    pub fn column<T: FromValue>(&self, selector: impl Into<ColumnSelector>) -> TableResult<Vec<T>> {
        let idx = self.resolve(&selector.into())?;
        Ok(self.rows.iter().map(|row| T::from_value(&row[idx])).collect())
    }

    /// Resolves a selector to a 0-based column index.
    fn resolve(&self, selector: &ColumnSelector) -> TableResult<usize> {
        match selector {
            ColumnSelector::Ordinal(ordinal) => {
                if (1..=self.field_count()).contains(ordinal) {
                    Ok(ordinal - 1)
                } else {
                    Err(TableError::ColumnOutOfRange {
                        ordinal: *ordinal,
                        field_count: self.field_count(),
                    })
                }
            }
            ColumnSelector::Name {
                name,
                case_sensitive,
            } => self
                .field_index(name, *case_sensitive)
                .ok_or_else(|| TableError::ColumnNotFound { name: name.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::access::{Column, ColumnSelector};
    use crate::error::TableError;
    use crate::ingestion::TableOptions;
    use crate::types::ColumnType;

    fn sample() -> Table {
        Table::from_text(
            "Id\tValue\tNote\n1\t3.14\thello\n0\t2\tworld\n",
            &TableOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn metadata_accessors() {
        let t = sample();
        assert_eq!(t.field_names(), vec!["Id", "Value", "Note"]);
        assert_eq!(
            t.field_types(),
            vec![ColumnType::Bool, ColumnType::Double, ColumnType::String]
        );
        assert_eq!(t.field_type_labels(), vec!["BOOLEAN", "DOUBLE", "STRING"]);
        assert_eq!(t.field_count(), 3);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.row(2), None);
    }

    #[test]
    fn has_field_respects_case_sensitivity() {
        let t = sample();
        assert!(t.has_field("id", false));
        assert!(t.has_field("NOTE", false));
        assert!(!t.has_field("id", true));
        assert!(t.has_field("Id", true));
        assert!(!t.has_field("missing", false));
    }

    #[test]
    fn name_lookup_defaults_to_case_insensitive() {
        let t = sample();
        assert_eq!(
            t.get_column("VALUE", ColumnType::Double).unwrap(),
            Column::Double(vec![3.14, 2.0])
        );
        let err = t
            .get_column(ColumnSelector::name("value", true), ColumnType::Double)
            .unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound { ref name } if name == "value"));
    }

    #[test]
    fn ordinals_are_one_based() {
        let t = sample();
        assert_eq!(
            t.get_column(3, ColumnType::String).unwrap(),
            Column::String(vec!["hello".into(), "world".into()])
        );
        for bad in [0, 4] {
            let err = t.get_column(bad, ColumnType::Int).unwrap_err();
            assert!(matches!(
                err,
                TableError::ColumnOutOfRange { ordinal, field_count: 3 } if ordinal == bad
            ));
        }
    }

    #[test]
    fn failed_lookups_leave_the_table_usable() {
        let t = sample();
        assert!(t.column::<i32>("nope").is_err());
        assert_eq!(t.column::<bool>("id").unwrap(), vec![true, false]);
    }

    #[test]
    fn unnamed_fields_are_only_reachable_by_ordinal() {
        let t = Table::from_text("a\tb\n", &TableOptions::default().with_header(false)).unwrap();
        assert!(!t.has_field("a", false));
        assert_eq!(t.column::<String>(2).unwrap(), vec!["b".to_string()]);
    }
}
