use std::path::PathBuf;
use std::process::ExitStatus;

/// Failures of the collaborators that store the document and run Tsung.
///
/// None of these leave the scenario modified; it is only ever borrowed for reading.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Couldn't create a temporary file: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("Couldn't write the scenario to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{env}' set to empty string")]
    EmptyBinaryPath { env: &'static str },
    #[error("Path to Tsung binary overwritten with '{env}={}' but that path doesn't exist", .path.display())]
    MissingBinary { env: &'static str, path: PathBuf },
    #[error("Tsung binary not found in PATH. Please install Tsung or set '{env}' to the correct path.")]
    BinaryNotInPath {
        env: &'static str,
        #[source]
        source: which::Error,
    },
    #[error("Failed to start Tsung: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Tsung process failed with status: {status}\n{stdout}")]
    Failed { status: ExitStatus, stdout: String },
}
