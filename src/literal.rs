//! Code-literal interpolation
//!
//! Folds a sequence of literal fragments with interleaved values into one
//! flat string, for assembling inline JS (or CSS) without a template engine.
//! Two formatting modes are exported: [`raw`] for embedding executable code
//! fragments, [`quoted`] for embedding literal data arguments inside
//! generated code.

use std::fmt;

/// A value interpolated between literal fragments.
#[derive(Debug, Clone, PartialEq)]
pub enum LitValue {
    /// Text; quoted and escaped by [`quoted`], stringified plainly by [`raw`].
    Text(String),
    /// Integer; stringified plainly in both modes.
    Int(i64),
    /// Float; stringified plainly in both modes.
    Float(f64),
    /// Boolean; stringified plainly in both modes.
    Bool(bool),
}

impl fmt::Display for LitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LitValue::Text(text) => write!(f, "{text}"),
            LitValue::Int(n) => write!(f, "{n}"),
            LitValue::Float(n) => write!(f, "{n}"),
            LitValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for LitValue {
    fn from(value: &str) -> Self {
        LitValue::Text(value.to_string())
    }
}

impl From<String> for LitValue {
    fn from(value: String) -> Self {
        LitValue::Text(value)
    }
}

impl From<&String> for LitValue {
    fn from(value: &String) -> Self {
        LitValue::Text(value.clone())
    }
}

impl From<i32> for LitValue {
    fn from(value: i32) -> Self {
        LitValue::Int(value as i64)
    }
}

impl From<i64> for LitValue {
    fn from(value: i64) -> Self {
        LitValue::Int(value)
    }
}

impl From<usize> for LitValue {
    fn from(value: usize) -> Self {
        LitValue::Int(value as i64)
    }
}

impl From<f64> for LitValue {
    fn from(value: f64) -> Self {
        LitValue::Float(value)
    }
}

impl From<bool> for LitValue {
    fn from(value: bool) -> Self {
        LitValue::Bool(value)
    }
}

/// Interpolate in raw mode: values are stringified with no quoting.
///
/// `values` sits between adjacent fragments, so it is one shorter than
/// `fragments`; an absent slot contributes nothing but the following
/// fragment, and surplus values are ignored.
pub fn raw(fragments: &[&str], values: &[Option<LitValue>]) -> String {
    fold(fragments, values, |value| value.to_string())
}

/// Interpolate in quoted mode: text values are wrapped in double quotes with
/// any embedded `"` escaped as `\"`; other values are stringified plainly.
///
/// No escaping beyond the double quote is performed — newlines and
/// backslashes inside text values pass through untouched.
pub fn quoted(fragments: &[&str], values: &[Option<LitValue>]) -> String {
    fold(fragments, values, |value| match value {
        LitValue::Text(text) => format!("\"{}\"", text.replace('"', "\\\"")),
        other => other.to_string(),
    })
}

fn fold<F>(fragments: &[&str], values: &[Option<LitValue>], format: F) -> String
where
    F: Fn(&LitValue) -> String,
{
    let mut result = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            if let Some(Some(value)) = values.get(i - 1) {
                result.push_str(&format(value));
            }
        }
        result.push_str(fragment);
    }
    result
}
