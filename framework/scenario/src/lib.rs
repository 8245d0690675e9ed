//! An in-memory model of a distributed HTTP load test that renders to Tsung's XML
//! configuration format.

mod document;
mod dyn_variable;
mod error;
mod format;
mod host;
mod options;
mod phase;
mod request;
mod session;
mod think_time;
mod transaction;

pub mod prelude {
    pub use crate::document::{ScenarioDocument, DTD_PATH};
    pub use crate::dyn_variable::{DynamicVariable, ExtractionKind};
    pub use crate::error::ParseError;
    pub use crate::format::FORM_PAIR_SEPARATOR;
    pub use crate::host::{ClientDescriptor, ServerDescriptor, DEFAULT_SERVER_PORT};
    pub use crate::options::{GlobalOptions, LogLevel};
    pub use crate::phase::{Phase, TimeUnit};
    pub use crate::request::{FormData, Method, Request};
    pub use crate::session::{Action, Session, DEFAULT_SESSION_PROBABILITY};
    pub use crate::think_time::ThinkTime;
    pub use crate::transaction::Transaction;
}
