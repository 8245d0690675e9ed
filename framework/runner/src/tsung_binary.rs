use std::env;
use std::path::PathBuf;

use crate::error::RunnerError;

/// Environment variable to override the path to the Tsung binary.
pub const TSUNG_PATH_ENV: &str = "TSUNG_PATH";

/// Get the path to the Tsung binary.
///
/// If the [`TSUNG_PATH_ENV`] environment variable is set, its value is used as the path to the
/// binary. Otherwise `tsung` is looked up in the user's `PATH`.
pub fn tsung_path() -> Result<PathBuf, RunnerError> {
    match env::var(TSUNG_PATH_ENV).ok().as_deref() {
        Some("") => Err(RunnerError::EmptyBinaryPath {
            env: TSUNG_PATH_ENV,
        }),
        Some("tsung") | None => {
            log::debug!("'{TSUNG_PATH_ENV}' is not a path so looking in user's 'PATH'");
            which::which("tsung").map_err(|source| RunnerError::BinaryNotInPath {
                env: TSUNG_PATH_ENV,
                source,
            })
        }
        Some(path) => {
            let tsung_path = PathBuf::from(path);
            if !tsung_path.exists() {
                return Err(RunnerError::MissingBinary {
                    env: TSUNG_PATH_ENV,
                    path: tsung_path,
                });
            }
            Ok(tsung_path)
        }
    }
}
