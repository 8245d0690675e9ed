/// Error returned when a textual option cannot be parsed into its typed form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown log level '{0}'")]
    LogLevel(String),
    #[error("unknown time unit '{0}', expected one of 'hour', 'minute' or 'second'")]
    TimeUnit(String),
    #[error("unsupported HTTP method '{0}'")]
    Method(String),
}
