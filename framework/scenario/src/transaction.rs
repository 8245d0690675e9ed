use std::fmt;

use crate::format;
use crate::request::{FormData, Method, Request};

/// A named group of requests, reported on as a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    name: String,
    requests: Vec<Request>,
}

impl Transaction {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            requests: Vec::new(),
        }
    }

    /// Append a request to this transaction and return it so that variables can be attached.
    ///
    /// `form_data` is only rendered for [`Method::Post`].
    pub fn add_request(
        &mut self,
        method: Method,
        url: &str,
        form_data: Option<FormData>,
    ) -> &mut Request {
        self.requests.push(Request::new(method, url, form_data));
        let index = self.requests.len() - 1;
        &mut self.requests[index]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<transaction name="tx_{}">"#, format::attr(&self.name))?;
        for request in &self.requests {
            write!(f, "{request}")?;
        }
        f.write_str("</transaction>")
    }
}
