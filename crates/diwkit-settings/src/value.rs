//! Loosely typed setting values.
//!
//! Used for string-keyed access to the configuration, where the caller
//! does not know the section or the type of an option in advance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A setting value with its inferred type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl SettingValue {
    /// Infer the type of a raw string.
    ///
    /// Tries integer, then float, then boolean. Anything else is kept as
    /// text. Booleans are accepted in lower case or capitalized.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::Float(value);
        }
        match trimmed {
            "true" | "True" => Self::Boolean(true),
            "false" | "False" => Self::Boolean(false),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Numeric value, integers widened to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Boolean(*b)),
            serde_json::Value::Number(n) if n.is_f64() => n.as_f64().map(Self::Float),
            serde_json::Value::Number(n) => n.as_i64().map(Self::Integer),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Integer(value) => serde_json::Value::from(*value),
            Self::Float(value) => serde_json::Value::from(*value),
            Self::Boolean(value) => serde_json::Value::from(*value),
            Self::Text(value) => serde_json::Value::from(value.as_str()),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
        }
    }
}
