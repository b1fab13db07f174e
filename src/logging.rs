//! User action log
//!
//! Every session transition, rejected input and finished search produces an
//! [`ActionRecord`]. Where the records go is up to the [`ActionLog`] sink the
//! session store is built with.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// File name used inside the log directory
pub const LOG_FILE_NAME: &str = "user_actions.log";

/// One structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub session: String,
    pub action: &'static str,
    pub detail: String,
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session={} | action={}", self.session, self.action)?;
        if !self.detail.is_empty() {
            write!(f, " | {}", self.detail)?;
        }
        Ok(())
    }
}

/// Destination for action records
pub trait ActionLog {
    /// Store one record; sinks must not fail the session
    fn record(&mut self, record: ActionRecord);
}

impl<L: ActionLog + ?Sized> ActionLog for Box<L> {
    fn record(&mut self, record: ActionRecord) {
        (**self).record(record);
    }
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullActionLog;

impl ActionLog for NullActionLog {
    fn record(&mut self, _record: ActionRecord) {}
}

/// Keeps records in memory, in arrival order
#[derive(Debug, Default, Clone)]
pub struct MemoryActionLog {
    records: Vec<ActionRecord>,
}

impl MemoryActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    /// Action names only, handy for asserting on transitions
    #[must_use]
    pub fn actions(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.action).collect()
    }
}

impl ActionLog for MemoryActionLog {
    fn record(&mut self, record: ActionRecord) {
        self.records.push(record);
    }
}

/// Appends `<unix seconds> | <record>` lines to a file
#[derive(Debug)]
pub struct FileActionLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileActionLog {
    /// Open (or create) `user_actions.log` inside `dir`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created or the file
    /// cannot be opened for appending.
    pub fn open_in<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, record: &ActionRecord) -> io::Result<()> {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        writeln!(self.writer, "{seconds} | {record}")?;
        self.writer.flush()
    }
}

impl ActionLog for FileActionLog {
    fn record(&mut self, record: ActionRecord) {
        if let Err(e) = self.write_line(&record) {
            eprintln!("Warning: could not write {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(action: &'static str, detail: &str) -> ActionRecord {
        ActionRecord {
            session: "42".to_string(),
            action,
            detail: detail.to_string(),
        }
    }

    #[test]
    fn display_with_and_without_detail() {
        assert_eq!(record("start", "").to_string(), "session=42 | action=start");
        assert_eq!(
            record("required", "value=ре").to_string(),
            "session=42 | action=required | value=ре"
        );
    }

    #[test]
    fn memory_log_keeps_order() {
        let mut log = MemoryActionLog::new();
        log.record(record("start", ""));
        log.record(record("cancel", ""));
        assert_eq!(log.actions(), ["start", "cancel"]);
    }

    #[test]
    fn boxed_sink_forwards() {
        let mut log: Box<dyn ActionLog> = Box::new(NullActionLog);
        log.record(record("help", ""));
    }

    #[test]
    fn file_log_appends_lines() {
        let dir = std::env::temp_dir().join(format!("five_letters_log_{}", std::process::id()));
        {
            let mut log = FileActionLog::open_in(&dir).unwrap();
            log.record(record("start", ""));
            log.record(record("search_complete", "found=3"));
        }
        let content = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| session=42 | action=start"));
        assert!(lines[1].ends_with("action=search_complete | found=3"));
    }
}
