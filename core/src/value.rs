//! Typed, read-only accessors over parse results.
//!
//! A [`Value`] is the handle returned for any bound name. It is an explicit
//! tagged union: `Missing` for names that never matched, `Single` for a
//! positional argument's one token, and `Multi` for an option's captured
//! value list or an argument pack's positional run.

use std::collections::HashMap;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conversion errors for [`Value`] accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value is missing or has no elements to convert.
    #[error("value is not available")]
    Missing,
    /// The underlying string is not an integer.
    #[error("not an integer: {0}")]
    InvalidInt(#[from] ParseIntError),
    /// The underlying string is not a floating-point number.
    #[error("not a number: {0}")]
    InvalidFloat(#[from] ParseFloatError),
}

/// A bound command-line value.
///
/// Presence semantics follow the binding rules: a `Single` is present iff
/// its string is non-empty; a `Multi` is always present once constructed,
/// even with zero elements (a matched zero-arity option); `Missing` is the
/// result of looking up a name that never matched.
///
/// # Examples
///
/// ```
/// use argline_core::Value;
///
/// let lines = Value::Multi(vec!["3".to_string()]);
/// assert!(lines.present());
/// assert_eq!(lines.to_int().unwrap(), 3);
/// assert_eq!(lines.get(0).to_int().unwrap(), 3);
/// assert!(!lines.get(1).present());
///
/// assert!(!Value::Missing.present());
/// assert!(!Value::Single(String::new()).present());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// No binding under the looked-up name.
    #[default]
    Missing,
    /// One positional token.
    Single(String),
    /// An option's captured values or a pack's positional run.
    Multi(Vec<String>),
}

impl Value {
    /// Whether the value is present; the idiomatic existence check.
    pub fn present(&self) -> bool {
        match self {
            Value::Missing => false,
            Value::Single(s) => !s.is_empty(),
            Value::Multi(_) => true,
        }
    }

    /// Number of elements: the multi count, 1 for a present single, else 0.
    pub fn len(&self) -> usize {
        match self {
            Value::Missing => 0,
            Value::Single(s) => usize::from(!s.is_empty()),
            Value::Multi(values) => values.len(),
        }
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indexed access into a multi value.
    ///
    /// Returns a `Single` for an in-range index and `Missing` otherwise.
    /// On a single value only index 0 is in range.
    pub fn get(&self, index: usize) -> Value {
        match self {
            Value::Missing => Value::Missing,
            Value::Single(s) if index == 0 => Value::Single(s.clone()),
            Value::Single(_) => Value::Missing,
            Value::Multi(values) => values
                .get(index)
                .map(|s| Value::Single(s.clone()))
                .unwrap_or_default(),
        }
    }

    /// The underlying string: a single's token, or a multi's first element.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Missing => None,
            Value::Single(s) => Some(s.as_str()),
            Value::Multi(values) => values.first().map(String::as_str),
        }
    }

    /// Converts the underlying string to an integer.
    pub fn to_int(&self) -> Result<i64, ValueError> {
        Ok(self.as_str().ok_or(ValueError::Missing)?.parse()?)
    }

    /// Converts the underlying string to a single-precision float.
    pub fn to_float(&self) -> Result<f32, ValueError> {
        Ok(self.as_str().ok_or(ValueError::Missing)?.parse()?)
    }

    /// Converts the underlying string to a double-precision float.
    pub fn to_double(&self) -> Result<f64, ValueError> {
        Ok(self.as_str().ok_or(ValueError::Missing)?.parse()?)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

static MISSING: Value = Value::Missing;

/// Name-indexed store of bound values.
///
/// Rebuilt fully on every parse. Lookup of an unknown or unmatched name
/// returns [`Value::Missing`], never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSet {
    values: HashMap<String, Value>,
}

impl ValueSet {
    /// Looks up a bound value by argument name, option long name, or option
    /// short name.
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&MISSING)
    }

    /// Number of bound names (short aliases count separately).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
}
