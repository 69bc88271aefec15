use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TableError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (load failed).
    Error,
    /// Critical error (the source could not be read).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// Source path, if the table is loaded from the filesystem.
    pub path: Option<PathBuf>,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first line was treated as a header.
    pub has_header: bool,
}

impl LoadContext {
    fn source(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "<reader>".to_string(), |p| p.display().to_string())
    }
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    /// Number of stored rows.
    pub rows: usize,
    /// Number of fields per row.
    pub fields: usize,
    /// Empty data lines that were skipped.
    pub skipped_empty_lines: usize,
    /// Data lines whose token count differed from the field count (padded or truncated).
    pub ragged_rows: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when a table was built.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &TableError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.on_failure(ctx, severity, error)
    }
}

/// One load outcome, rendered as a single log line by [`FileObserver`].
enum LoadEvent<'a> {
    Loaded(LoadStats),
    Failed(LoadSeverity, &'a TableError),
    Alert(LoadSeverity, &'a TableError),
}

impl fmt::Display for LoadEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(stats) => write!(
                f,
                "ok fields={} rows={} skipped={} ragged={}",
                stats.fields, stats.rows, stats.skipped_empty_lines, stats.ragged_rows
            ),
            Self::Failed(severity, error) => write!(f, "fail severity={severity:?} err={error}"),
            Self::Alert(severity, error) => write!(f, "ALERT severity={severity:?} err={error}"),
        }
    }
}

/// Fans each callback out to every wrapped observer, in insertion order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }

    /// Appends one more observer.
    #[must_use]
    pub fn with(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

impl FromIterator<Arc<dyn LoadObserver>> for CompositeObserver {
    fn from_iter<I: IntoIterator<Item = Arc<dyn LoadObserver>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Forwards load events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::info!(
            source = %ctx.source(),
            fields = stats.fields,
            rows = stats.rows,
            skipped_empty_lines = stats.skipped_empty_lines,
            ragged_rows = stats.ragged_rows,
            "table loaded"
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        tracing::warn!(source = %ctx.source(), ?severity, %error, "table load failed");
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        tracing::error!(source = %ctx.source(), ?severity, %error, "table load alert");
    }
}

/// Appends one line per load outcome to a log file.
///
/// Lines look like `<unix-secs> source=<path> ok fields=.. rows=..`. Write failures are
/// reported through `tracing` and otherwise ignored, so logging never fails a load.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileObserver {
    /// Opens (creating if needed) `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the log file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    fn record(&self, ctx: &LoadContext, event: LoadEvent<'_>) {
        let line = format!("{} source={} {event}\n", unix_ts(), ctx.source());
        let written = match self.file.lock() {
            Ok(mut file) => file.write_all(line.as_bytes()),
            Err(poisoned) => poisoned.into_inner().write_all(line.as_bytes()),
        };
        if let Err(error) = written {
            tracing::warn!(log = %self.path.display(), %error, "could not append load event");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.record(ctx, LoadEvent::Loaded(stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.record(ctx, LoadEvent::Failed(severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.record(ctx, LoadEvent::Alert(severity, error));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
