use serde_json::Value;
use std::fmt;

/// A module request identifier as handed over by the host.
///
/// Hosts with dynamically typed require calls can pass anything. Only textual
/// requests take part in prefix resolution; anything else is a programmer error.
#[derive(Debug, Clone, PartialEq)]
pub enum Specifier {
    Text(String),
    NonText(Value),
}

impl Specifier {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Specifier::Text(s) => Some(s),
            Specifier::NonText(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Specifier::Text(_))
    }
}

impl From<&str> for Specifier {
    fn from(value: &str) -> Self {
        Specifier::Text(value.to_string())
    }
}

impl From<String> for Specifier {
    fn from(value: String) -> Self {
        Specifier::Text(value)
    }
}

impl From<Value> for Specifier {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Specifier::Text(s),
            other => Specifier::NonText(other),
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Text(s) => f.write_str(s),
            Specifier::NonText(v) => write!(f, "{v}"),
        }
    }
}
