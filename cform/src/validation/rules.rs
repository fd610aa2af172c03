//! Built-in rules.
//!
//! Except for [`required`] and [`checked`], every rule lets an empty value
//! through so optional fields can still be constrained when filled in.

use regex::Regex;
use serde_json::Value;

use super::rule::Rule;
use crate::error::FormError;

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Length in characters for strings, in elements for arrays.
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Require a non-empty value.
pub fn required(msg: impl Into<String>) -> Rule {
    Rule::predicate(|v| !is_empty(v), msg).named("required")
}

/// Require at least `min` characters (or array elements).
pub fn min_length(min: usize, msg: impl Into<String>) -> Rule {
    Rule::predicate(
        move |v| is_empty(v) || length(v).is_none_or(|len| len >= min),
        msg,
    )
    .named("min_length")
}

/// Require at most `max` characters (or array elements).
pub fn max_length(max: usize, msg: impl Into<String>) -> Rule {
    Rule::predicate(
        move |v| is_empty(v) || length(v).is_none_or(|len| len <= max),
        msg,
    )
    .named("max_length")
}

/// Require a string matching `pattern`.
pub fn pattern(pattern: &str, msg: impl Into<String>) -> Result<Rule, FormError> {
    let re = Regex::new(pattern)?;
    Ok(Rule::predicate(
        move |v| match v {
            Value::String(s) if !s.is_empty() => re.is_match(s),
            _ => true,
        },
        msg,
    )
    .named("pattern"))
}

/// Require a valid email address.
pub fn email(msg: impl Into<String>) -> Rule {
    Rule::predicate(
        |v| match v {
            Value::String(s) if !s.is_empty() => email_address::EmailAddress::is_valid(s),
            _ => true,
        },
        msg,
    )
    .named("email")
}

/// Require a number within `min..=max`.
pub fn range(min: f64, max: f64, msg: impl Into<String>) -> Rule {
    Rule::predicate(
        move |v| match v {
            Value::Number(n) => n.as_f64().is_some_and(|n| (min..=max).contains(&n)),
            other => is_empty(other),
        },
        msg,
    )
    .named("range")
}

/// Require the value to equal `expected`.
pub fn equals(expected: impl Into<Value>, msg: impl Into<String>) -> Rule {
    let expected = expected.into();
    Rule::predicate(move |v| *v == expected, msg).named("equals")
}

/// Require a checkbox value of `true`.
pub fn checked(msg: impl Into<String>) -> Rule {
    Rule::predicate(|v| v.as_bool() == Some(true), msg).named("checked")
}
