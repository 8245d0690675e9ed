mod cli;
mod error;
mod init;
mod persist;
mod run;
mod tsung;
mod tsung_binary;
mod types;

pub mod prelude {
    pub use crate::cli::TsungScenarioCli;
    pub use crate::error::RunnerError;
    pub use crate::init::init;
    pub use crate::persist::{persist_to_path, persist_to_temp_file};
    pub use crate::run::run;
    pub use crate::tsung::Tsung;
    pub use crate::tsung_binary::{tsung_path, TSUNG_PATH_ENV};
    pub use crate::types::TsungResult;

    pub use tsung_scenario::prelude::*;
}
