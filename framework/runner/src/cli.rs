use std::path::PathBuf;

use clap::Parser;
use tsung_scenario::prelude::{GlobalOptions, LogLevel};

#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None)]
pub struct TsungScenarioCli {
    /// Log level for Tsung itself. One of emergency, critical, error, warning, notice, info or
    /// debug.
    #[clap(long, default_value = "notice")]
    pub log_level: LogLevel,

    /// Version of the Tsung configuration format to declare.
    #[clap(long, default_value = "1.0")]
    pub format_version: String,

    /// Ask Tsung to dump all the traffic it generates.
    #[clap(long, default_value = "false")]
    pub dump_traffic: bool,

    /// Write the scenario to this file instead of a temporary one.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Print the scenario to stdout and exit without running Tsung.
    ///
    /// Useful for checking the generated configuration, or for feeding it to Tsung yourself.
    #[clap(long, default_value = "false")]
    pub print_only: bool,
}

impl TsungScenarioCli {
    /// The document root options selected on the command line.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions::default()
            .log_level(self.log_level)
            .version(&self.format_version)
            .dump_traffic(self.dump_traffic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = TsungScenarioCli::try_parse_from(["scenario"]).expect("Failed to parse");
        assert_eq!(cli.global_options(), GlobalOptions::default());
        assert!(cli.output.is_none());
        assert!(!cli.print_only);
    }

    #[test]
    fn parse_all_options() {
        let cli = TsungScenarioCli::try_parse_from([
            "scenario",
            "--log-level",
            "debug",
            "--format-version",
            "1.1",
            "--dump-traffic",
            "--output",
            "out.xml",
            "--print-only",
        ])
        .expect("Failed to parse");

        let options = cli.global_options();
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.version, "1.1");
        assert!(options.dump_traffic);
        assert_eq!(cli.output, Some(PathBuf::from("out.xml")));
        assert!(cli.print_only);
    }

    #[test]
    fn reject_unknown_log_level() {
        let result = TsungScenarioCli::try_parse_from(["scenario", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
