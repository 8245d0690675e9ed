//! Encoding of scalar values for embedding in the rendered document.

use std::borrow::Cow;

use url::form_urlencoded;

/// Separator between form body pairs. The body lives inside an attribute, so the
/// ampersand is written as an entity.
pub const FORM_PAIR_SEPARATOR: &str = "&amp;";

/// Escape a caller-supplied string for use as an attribute value.
#[inline]
pub fn attr(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}

/// The textual form of a boolean attribute.
#[inline]
pub fn boolean(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Form-url-encode `pairs` in order, joining them with [`FORM_PAIR_SEPARATOR`].
///
/// Keys and values are percent-encoded, so the result never needs further escaping.
pub fn form_body<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                percent_encode(key.as_ref()),
                percent_encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join(FORM_PAIR_SEPARATOR)
}

/// Percent-encode a form component. Spaces become `%20` rather than `+`.
fn percent_encode(component: &str) -> String {
    // A literal '+' is serialized as "%2B", so every '+' left in the output stands for a space.
    form_urlencoded::byte_serialize(component.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_attributes() {
        assert_eq!(attr("/search?q=a&b=<c>"), "/search?q=a&amp;b=&lt;c&gt;");
        assert_eq!(attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert!(matches!(attr("$.id"), Cow::Borrowed("$.id")));
    }

    #[test]
    fn booleans_use_lowercase_words() {
        assert_eq!(boolean(true), "true");
        assert_eq!(boolean(false), "false");
    }

    #[test]
    fn form_body_keeps_pair_order() {
        let body = form_body([("b", "2"), ("a", "1")]);
        assert_eq!(body, "b=2&amp;a=1");
    }

    #[test]
    fn form_body_percent_encodes_reserved_characters() {
        let body = form_body([("user name", "%%_users_username%%"), ("k&v", "a=b")]);
        assert_eq!(
            body,
            "user%20name=%25%25_users_username%25%25&amp;k%26v=a%3Db"
        );
    }

    #[test]
    fn empty_form_body_is_empty() {
        assert_eq!(form_body(Vec::<(String, String)>::new()), "");
    }

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(form_body([("full name", "a b")]), "full%20name=a%20b");
        assert_eq!(form_body([("sum", "1+1 = 2")]), "sum=1%2B1%20%3D%202");
    }
}
