// error.rs — Error types for the decision log.
//
// The resolver itself is total and never fails; errors only arise at the
// persistence edge, where the log touches the filesystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the decision log.
#[derive(Debug, Error)]
pub enum GateError {
    /// The log file could not be opened or created.
    #[error("failed to open decision log at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a record to the log failed.
    #[error("failed to write decision record: {0}")]
    WriteFailed(#[from] std::io::Error),

    /// A record could not be serialized or deserialized.
    #[error("decision record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
