// audit.rs — Append-only decision log.
//
// One JSON record per line. Each record captures the full inputs alongside
// the decision, so a reader can re-run the resolver on a record and get
// the same answer back: the log is replayable, not just descriptive.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GateError;
use crate::policy::GatePolicy;
use crate::resolver::Decision;
use crate::signals::WalletSignals;

/// One logged gate evaluation: inputs, decision, and when it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Unique id for this record.
    pub record_id: Uuid,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
    /// The snapshot the resolver saw.
    pub signals: WalletSignals,
    /// The policy it evaluated under.
    pub policy: GatePolicy,
    /// What it decided.
    pub decision: Decision,
}

impl DecisionRecord {
    /// A record stamped with a fresh id and the current time.
    pub fn new(signals: WalletSignals, policy: GatePolicy, decision: Decision) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            decided_at: Utc::now(),
            signals,
            policy,
            decision,
        }
    }
}

/// Append-only JSONL log of gate decisions.
pub struct DecisionLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl DecisionLog {
    /// Open the log at `path` for appending, creating the file and any
    /// missing parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| GateError::OpenFailed {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| GateError::OpenFailed {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Append one record and flush it to disk.
    pub fn append(&mut self, record: &DecisionRecord) -> Result<(), GateError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read every record from a log file, in order. Blank lines are
    /// skipped.
    pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<DecisionRecord>, GateError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| GateError::OpenFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut records = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(line)?);
        }
        Ok(records)
    }

    /// The path this log writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
