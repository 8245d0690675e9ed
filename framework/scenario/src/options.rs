use std::str::FromStr;

use crate::error::ParseError;

/// Verbosity of the load-testing tool's own log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum LogLevel {
    #[display("emergency")]
    Emergency,
    #[display("critical")]
    Critical,
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
    #[default]
    #[display("notice")]
    Notice,
    #[display("info")]
    Info,
    #[display("debug")]
    Debug,
}

impl FromStr for LogLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emergency" => Ok(Self::Emergency),
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseError::LogLevel(s.to_string())),
        }
    }
}

/// Attributes carried by the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalOptions {
    /// Log level of the load-testing tool.
    pub log_level: LogLevel,
    /// Version of the configuration format.
    pub version: String,
    /// Whether the tool should dump all traffic it generates.
    pub dump_traffic: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            version: "1.0".to_string(),
            dump_traffic: false,
        }
    }
}

impl GlobalOptions {
    /// Builds [`GlobalOptions`] with the specified log level.
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Builds [`GlobalOptions`] with the specified format version.
    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Builds [`GlobalOptions`] with traffic dumping switched on or off.
    pub fn dump_traffic(mut self, dump_traffic: bool) -> Self {
        self.dump_traffic = dump_traffic;
        self
    }
}
