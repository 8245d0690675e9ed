use std::path::PathBuf;
use std::process::Command;

use crate::error::RunnerError;
use crate::tsung_binary::tsung_path;

/// An interface to the Tsung load-testing tool.
pub struct Tsung {
    /// The Tsung executable.
    binary: PathBuf,
    /// The path to the scenario file to run.
    config_path: PathBuf,
}

impl Tsung {
    /// Creates a new [`Tsung`] for the scenario at `config_path`, locating the binary with
    /// [`tsung_path`].
    pub fn new<P>(config_path: P) -> Result<Self, RunnerError>
    where
        P: Into<PathBuf>,
    {
        Ok(Self::with_binary(tsung_path()?, config_path))
    }

    /// Creates a new [`Tsung`] using the given executable.
    pub fn with_binary<B, P>(binary: B, config_path: P) -> Self
    where
        B: Into<PathBuf>,
        P: Into<PathBuf>,
    {
        Tsung {
            binary: binary.into(),
            config_path: config_path.into(),
        }
    }

    /// Runs `tsung -f <config> start` to completion and returns its standard output.
    pub fn run(&self) -> Result<String, RunnerError> {
        log::info!("Starting test");
        let output = Command::new(&self.binary)
            .arg("-f")
            .arg(&self.config_path)
            .arg("start")
            .output()
            .map_err(RunnerError::Spawn)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::debug!("Tsung output: {stdout}");

        if !output.status.success() {
            log::debug!(
                "Tsung stderr: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            return Err(RunnerError::Failed {
                status: output.status,
                stdout,
            });
        }

        log::debug!("Tsung process finished with status: {}", output.status);
        Ok(stdout)
    }
}
