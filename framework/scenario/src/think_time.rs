use std::fmt;

use crate::format;

/// A pause between two actions of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ThinkTime {
    seconds: f64,
    random: bool,
}

impl ThinkTime {
    /// When `random` is `None` the pause is randomised, with a mean of `seconds`.
    pub(crate) fn new(seconds: f64, random: Option<bool>) -> Self {
        Self {
            seconds,
            random: random.unwrap_or(true),
        }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn is_random(&self) -> bool {
        self.random
    }
}

impl fmt::Display for ThinkTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<thinktime value="{}" random="{}"/>"#,
            self.seconds,
            format::boolean(self.random)
        )
    }
}
