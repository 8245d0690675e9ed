use clap::Parser;

use crate::cli::TsungScenarioCli;

/// Initialise logging and parse the command line for a scenario binary.
pub fn init() -> TsungScenarioCli {
    env_logger::init();

    TsungScenarioCli::parse()
}
