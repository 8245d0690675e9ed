use std::fmt;

use crate::format;

/// How a dynamic variable extracts its value from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionKind {
    /// A JSONPath expression evaluated against a JSON body.
    Json,
    XPath,
    Regexp,
    Re,
    /// An expression evaluated against a PostgreSQL response.
    Psql,
    /// Any tag the tool does not know about. Kept rather than rejected, and rendered with
    /// an empty attribute name.
    Unknown(String),
}

impl ExtractionKind {
    /// Attribute name that carries the expression in a `dyn_variable` element.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Self::Json => "jsonpath",
            Self::XPath => "xpath",
            Self::Regexp => "regexp",
            Self::Re => "re",
            Self::Psql => "pgsql_expr",
            Self::Unknown(_) => "",
        }
    }
}

impl From<&str> for ExtractionKind {
    fn from(kind: &str) -> Self {
        match kind {
            "json" => Self::Json,
            "xpath" => Self::XPath,
            "regexp" => Self::Regexp,
            "re" => Self::Re,
            "psql" => Self::Psql,
            other => {
                log::warn!("Unknown dynamic variable type '{other}', rendering without an attribute name");
                Self::Unknown(other.to_string())
            }
        }
    }
}

/// A named capture of response data into a session variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicVariable {
    name: String,
    kind: ExtractionKind,
    expression: String,
}

impl DynamicVariable {
    pub(crate) fn new(name: &str, kind: ExtractionKind, expression: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            expression: expression.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ExtractionKind {
        &self.kind
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl fmt::Display for DynamicVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<dyn_variable name="{}" {}="{}"/>"#,
            format::attr(&self.name),
            self.kind.attribute_name(),
            format::attr(&self.expression)
        )
    }
}
