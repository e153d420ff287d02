//! The unfolded `NAME;PARAM=VALUE:value` form every ICS line goes through.

use std::fmt;

use super::escape::escape_text;
use crate::{PARAM_DELIMITER, PARAM_NAME_DELIMITER, VALUE_DELIMITER};

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLineParams(pub(crate) Vec<(String, String)>);

impl ContentLineParams {
    #[inline]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn replace_param(&mut self, name: String, value: String) {
        if let Some(pos) = self.0.iter().position(|(n, _)| n == &name) {
            self.0[pos] = (name, value);
        } else {
            self.0.push((name, value));
        }
    }
}

/// An ICAL property, ready to be folded.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLine {
    /// Property name.
    pub name: String,
    /// Property list of parameters.
    pub params: ContentLineParams,
    /// Property value, already escaped.
    pub value: String,
}

impl ContentLine {
    /// A property whose value is emitted verbatim.
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: ContentLineParams::default(),
            value: value.into(),
        }
    }

    /// A TEXT property, escaped.
    pub fn text(name: impl Into<String>, value: &str) -> Self {
        Self::raw(name, escape_text(value))
    }

    pub fn begin(component: &str) -> Self {
        Self::raw("BEGIN", component)
    }

    pub fn end(component: &str) -> Self {
        Self::raw("END", component)
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.replace_param(name.to_owned(), value.to_owned());
        self
    }
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)?;
        for (key, value) in &self.params.0 {
            write!(f, "{PARAM_DELIMITER}{key}{PARAM_NAME_DELIMITER}{value}")?;
        }
        write!(f, "{VALUE_DELIMITER}{}", self.value)
    }
}
