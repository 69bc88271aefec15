//! Table loading entrypoints.
//!
//! Loading runs in three passes over the source lines:
//!
//! 1. the first line fixes the field count (and names, with a header row)
//! 2. every cell is classified and each column's type is resolved over all rows
//! 3. every cell is parsed into its column's resolved type
//!
//! The source is read fully into memory as bytes. Lines and fields are split on raw bytes, so
//! any single-byte delimiter works regardless of the source's encoding; each field is decoded
//! as UTF-8 afterwards. The source is released before pass 2 starts.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{TableError, TableResult};
use crate::table::Table;
use crate::types::{ColumnType, Field};

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::resolve::resolve_column_types;
use super::store::build_row;
use super::tokenize::{LineEnding, is_blank_line, split_line, split_lines};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Options controlling how a table is loaded.
///
/// Use [`Default`] for a tab-delimited file with a header row.
#[derive(Clone)]
pub struct TableOptions {
    /// Single-byte field delimiter. Bytes above 0x7F are matched against the raw source, so
    /// they suit single-byte encodings such as Latin-1; in UTF-8 text such a byte falls inside
    /// a multi-byte character.
    pub delimiter: u8,
    /// Treat the first line as field names.
    pub has_header: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl TableOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("delimiter", &char::from(self.delimiter))
            .field("has_header", &self.has_header)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_header: true,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Loads a delimited text file into a [`Table`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/field stats
/// - `on_failure` on failure, with the error's severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Errors
///
/// - [`TableError::SourceUnavailable`] if the file cannot be opened or read.
/// - [`TableError::EmptyHeader`] if a header is requested and the first line is empty.
///
/// # Examples
///
/// ```no_run
/// use delimtab::ingestion::{load_table, TableOptions};
///
/// # fn main() -> Result<(), delimtab::TableError> {
/// let opts = TableOptions::default().with_delimiter(b',');
/// let table = load_table("people.csv", &opts)?;
/// println!("rows={} types={:?}", table.row_count(), table.field_type_labels());
/// # Ok(())
/// # }
/// ```
pub fn load_table(path: impl AsRef<Path>, options: &TableOptions) -> TableResult<Table> {
    let path = path.as_ref();
    let ctx = context(Some(path.to_path_buf()), options);
    let result = File::open(path)
        .and_then(read_all)
        .map_err(|e| TableError::source_unavailable(Some(path.to_path_buf()), e))
        .and_then(|bytes| build_table(&bytes, options));
    finish(&ctx, result, options)
}

/// Loads a table from any reader. The reader is consumed and dropped before parsing begins.
///
/// # Errors
///
/// Same as [`load_table`]; read failures are reported as [`TableError::SourceUnavailable`]
/// without a path.
pub fn load_table_from_reader<R: Read>(reader: R, options: &TableOptions) -> TableResult<Table> {
    let ctx = context(None, options);
    let result = read_all(reader)
        .map_err(|e| TableError::source_unavailable(None, e))
        .and_then(|bytes| build_table(&bytes, options));
    finish(&ctx, result, options)
}

/// Loads a table from in-memory text.
///
/// # Errors
///
/// Returns [`TableError::EmptyHeader`] if a header is requested and the first line is empty.
pub fn load_table_from_str(text: &str, options: &TableOptions) -> TableResult<Table> {
    let ctx = context(None, options);
    finish(&ctx, build_table(text.as_bytes(), options), options)
}

fn context(path: Option<PathBuf>, options: &TableOptions) -> LoadContext {
    LoadContext {
        path,
        delimiter: options.delimiter,
        has_header: options.has_header,
    }
}

fn read_all<R: Read>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn finish(
    ctx: &LoadContext,
    result: TableResult<(Table, LoadStats)>,
    options: &TableOptions,
) -> TableResult<Table> {
    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((_, stats)) => obs.on_success(ctx, *stats),
            Err(e) => {
                let sev = e.severity();
                obs.on_failure(ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }
    result.map(|(table, _)| table)
}

/// Runs the three load passes over `source`.
fn build_table(source: &[u8], options: &TableOptions) -> TableResult<(Table, LoadStats)> {
    let mut lines = split_lines(source).peekable();
    let ending = lines.peek().map_or(LineEnding::Lf, |first| LineEnding::detect(first));

    // Pass 1: field count and names.
    let names: Option<Vec<String>> = if options.has_header {
        let header = lines
            .next()
            .filter(|line| !is_blank_line(line, ending))
            .ok_or(TableError::EmptyHeader)?;
        Some(split_line(header, options.delimiter, ending))
    } else {
        None
    };
    let data_lines: Vec<&[u8]> = lines.collect();
    let field_count = match &names {
        Some(names) => names.len(),
        None => data_lines
            .iter()
            .find(|line| !is_blank_line(line, ending))
            .map_or(0, |line| split_line(line, options.delimiter, ending).len()),
    };
    debug!(
        ?ending,
        field_count,
        data_lines = data_lines.len(),
        "read delimited source"
    );

    let mut stats = LoadStats {
        fields: field_count,
        ..LoadStats::default()
    };
    let mut raw_rows: Vec<Vec<String>> = Vec::with_capacity(data_lines.len());
    for (idx, line) in data_lines.iter().enumerate() {
        if is_blank_line(line, ending) {
            stats.skipped_empty_lines += 1;
            continue;
        }
        let tokens = split_line(line, options.delimiter, ending);
        if tokens.len() != field_count {
            stats.ragged_rows += 1;
            warn!(
                line = idx + 1 + usize::from(options.has_header),
                expected = field_count,
                found = tokens.len(),
                "ragged row; padding or truncating to field count"
            );
        }
        raw_rows.push(tokens);
    }

    // Pass 2: resolve every column over all rows before anything is stored.
    let types = resolve_column_types(&raw_rows, field_count);
    debug!(types = ?types, "resolved column types");

    // Pass 3: store.
    let rows: Vec<_> = raw_rows.iter().map(|raw| build_row(raw, &types)).collect();
    stats.rows = rows.len();

    let fields = build_fields(names, &types);
    Ok((Table::from_parts(fields, rows), stats))
}

fn build_fields(names: Option<Vec<String>>, types: &[ColumnType]) -> Vec<Field> {
    match names {
        Some(names) => names
            .into_iter()
            .zip(types)
            .map(|(name, &t)| Field::new(Some(name), t))
            .collect(),
        None => types.iter().map(|&t| Field::new(None, t)).collect(),
    }
}
