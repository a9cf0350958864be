//! File-backed symptom check history
//!
//! Records are appended to a JSON Lines file, one record per line. The file is
//! never rewritten; reading it back filters by user and orders newest first.

use std::fs;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::common::traits::HistoryStore;
use crate::common::traits::source::most_recent_first;
use crate::error::util::{open_for_append, safe_open_file};
use crate::error::{HealthError, Result};
use crate::models::UserId;
use crate::models::history::SymptomCheckRecord;

/// Append-only history stored as JSON Lines
#[derive(Debug, Clone)]
pub struct JsonlHistoryStore {
    path: PathBuf,
}

impl JsonlHistoryStore {
    /// Use the history file at `path`; it is created on first append
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the history file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the file, in append order
    ///
    /// Blank lines are skipped. A record cut off by an interrupted write is
    /// skipped with a warning; any other malformed line is an error.
    pub fn read_all(&self) -> Result<Vec<SymptomCheckRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = safe_open_file(&self.path, "reading symptom history")?;
        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<_>>()
            .map_err(|e| HealthError::from(e).with_path(&self.path))?;

        let mut records = Vec::with_capacity(lines.len());
        for (number, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<SymptomCheckRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) if e.is_eof() => {
                    warn!(
                        "Skipping truncated record on line {} of history file {}",
                        number + 1,
                        self.path.display()
                    );
                }
                Err(e) => {
                    return Err(HealthError::from(e)
                        .context(format!("line {} of {}", number + 1, self.path.display())));
                }
            }
        }

        debug!("Read {} history records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&mut self, record: SymptomCheckRecord) -> Result<()> {
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = open_for_append(&self.path, "recording symptom history")?;
        if ends_mid_line(&self.path)? {
            warn!(
                "History file {} ends in a partial line, starting a new line",
                self.path.display()
            );
            line.insert(0, '\n');
        }
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| HealthError::from(e).with_path(&self.path))
    }

    fn recent(&self, user_id: UserId, limit: usize) -> Result<Vec<SymptomCheckRecord>> {
        let records = self
            .read_all()?
            .into_iter()
            .filter(|record| record.user_id == user_id);
        Ok(most_recent_first(records, limit))
    }
}

/// Whether a non-empty file lacks a trailing newline
fn ends_mid_line(path: &Path) -> Result<bool> {
    let mut file = safe_open_file(path, "checking symptom history")?;
    let check = |file: &mut fs::File| -> std::io::Result<bool> {
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    };
    check(&mut file).map_err(|e| HealthError::from(e).with_path(path))
}
