use std::fmt;
use std::str::FromStr;

use crate::dyn_variable::{DynamicVariable, ExtractionKind};
use crate::error::ParseError;
use crate::format;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
    #[display("PATCH")]
    Patch,
    #[display("HEAD")]
    Head,
    #[display("OPTIONS")]
    Options,
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(ParseError::Method(s.to_string())),
        }
    }
}

/// Form fields of a POST body, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds [`FormData`] with one more field appended.
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        }
    }
}

/// A single HTTP call, optionally capturing values from its response.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    url: String,
    form_data: FormData,
    variables: Vec<DynamicVariable>,
}

impl Request {
    pub(crate) fn new(method: Method, url: &str, form_data: Option<FormData>) -> Self {
        Self {
            method,
            url: url.to_string(),
            form_data: form_data.unwrap_or_default(),
            variables: Vec::new(),
        }
    }

    /// Capture part of the response in the variable `name`.
    ///
    /// `kind` is usually one of `json`, `xpath`, `regexp`, `re` or `psql`. Anything else is
    /// accepted and rendered with an empty attribute name.
    pub fn add_dynamic_variable(
        &mut self,
        name: &str,
        kind: impl Into<ExtractionKind>,
        expression: &str,
    ) -> &mut Self {
        self.variables
            .push(DynamicVariable::new(name, kind.into(), expression));
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn dynamic_variables(&self) -> &[DynamicVariable] {
        &self.variables
    }

    /// True when at least one variable is captured, so later requests may substitute it.
    pub fn has_substitution(&self) -> bool {
        !self.variables.is_empty()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<request subst="{}">"#,
            format::boolean(self.has_substitution())
        )?;

        for variable in &self.variables {
            write!(f, "{variable}")?;
        }

        let url = format::attr(&self.url);
        if self.method == Method::Post {
            write!(
                f,
                r#"<http url="{}" method="{}" version="1.1" contents="{}" />"#,
                url,
                self.method,
                format::form_body(self.form_data.iter())
            )?;
        } else {
            write!(
                f,
                r#"<http url="{}" method="{}" version="1.1" />"#,
                url, self.method
            )?;
        }

        f.write_str("</request>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_get_without_variables() {
        let request = Request::new(Method::Get, "/api/me", None);
        assert!(!request.has_substitution());
        assert_eq!(
            request.to_string(),
            r#"<request subst="false"><http url="/api/me" method="GET" version="1.1" /></request>"#
        );
    }

    #[test]
    fn variables_render_before_http_in_order() {
        let mut request = Request::new(Method::Get, "/api/me", None);
        request
            .add_dynamic_variable("first", "json", "$.a")
            .add_dynamic_variable("second", ExtractionKind::Regexp, "id=(\\d+)");

        assert!(request.has_substitution());
        assert_eq!(
            request.to_string(),
            concat!(
                r#"<request subst="true">"#,
                r#"<dyn_variable name="first" jsonpath="$.a"/>"#,
                r#"<dyn_variable name="second" regexp="id=(\d+)"/>"#,
                r#"<http url="/api/me" method="GET" version="1.1" />"#,
                "</request>"
            )
        );
    }

    #[test]
    fn post_renders_form_body() {
        let form = FormData::new()
            .field("username", "%%_users_username%%")
            .field("password", "%%_users_password%%");
        let request = Request::new(Method::Post, "/api/auth/login", Some(form));
        assert_eq!(
            request.to_string(),
            concat!(
                r#"<request subst="false">"#,
                r#"<http url="/api/auth/login" method="POST" version="1.1" "#,
                r#"contents="username=%25%25_users_username%25%25&amp;password=%25%25_users_password%25%25" />"#,
                "</request>"
            )
        );
    }

    #[test]
    fn post_without_form_has_empty_contents() {
        let request = Request::new(Method::Post, "/ping", None);
        assert!(request.to_string().contains(r#"contents="""#));
    }

    #[test]
    fn non_post_ignores_form_data() {
        let form = FormData::new().field("a", "1");
        let request = Request::new(Method::Put, "/item", Some(form));
        assert!(!request.to_string().contains("contents="));
        assert_eq!(request.form_data().len(), 1);
    }

    #[test]
    fn form_body_decodes_to_original_fields() {
        let form = FormData::new()
            .field("name", "Jane Doe")
            .field("redirect", "/home?tab=1&x=y")
            .field("unicode", "größe");
        let request = Request::new(Method::Post, "/submit", Some(form.clone()));

        let rendered = request.to_string();
        let contents = rendered
            .split(r#"contents=""#)
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("contents attribute missing");
        let decoded: FormData =
            url::form_urlencoded::parse(contents.replace("&amp;", "&").as_bytes()).collect();

        assert_eq!(decoded, form);
    }

    #[test]
    fn parse_method() {
        assert_eq!("post".parse::<Method>(), Ok(Method::Post));
        assert!("BREW".parse::<Method>().is_err());
    }
}
