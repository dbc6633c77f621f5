//! Declared-surface type definitions.
//!
//! This module defines the data model for a command's declared surface:
//! positional arguments (including the single optional argument pack) and
//! named options. The types are designed for serialization with [`serde`]
//! and round-trip through JSON.

use serde::{Deserialize, Serialize};

/// Maximum length of an argument name or option long name (prefix included).
pub const MAX_NAME_LEN: usize = 32;

/// Maximum length of an option short name (prefix included).
pub const MAX_SHORT_LEN: usize = 16;

/// Checks identifier syntax for argument and option names.
///
/// A name is valid iff it is non-empty, starts with an ASCII letter, and
/// contains only ASCII letters, digits, or underscores. Option names are
/// checked after stripping their `--`/`-` prefix.
///
/// # Examples
///
/// ```
/// use argline_core::is_valid_name;
///
/// assert!(is_valid_name("file"));
/// assert!(is_valid_name("line_count2"));
/// assert!(!is_valid_name(""));
/// assert!(!is_valid_name("2fast"));
/// assert!(!is_valid_name("no-dashes"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Spec for a positional argument.
///
/// A plain argument binds exactly one positional token. The single argument
/// marked [`is_pack`](ArgSpec::is_pack) instead absorbs a variable-length
/// run of positional tokens at its declared slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Name of the argument (e.g., "file")
    pub name: String,
    /// Description shown in help output
    pub note: String,
    /// Every bound token must parse as an integer
    pub numeric_only: bool,
    /// Absorbs the variable-length positional run
    pub is_pack: bool,
}

impl ArgSpec {
    /// Marker rendered in usage/help output: `N` for numeric, `V` for string.
    pub fn type_marker(&self) -> char {
        if self.numeric_only { 'N' } else { 'V' }
    }
}

/// Spec for a named option.
///
/// An option has a mandatory long name (`--lines`), an optional short alias
/// (`-l`), and a fixed arity of trailing value tokens. Options are stored in
/// a map keyed by long name; `order` preserves registration order for
/// display, since map iteration order is not stable.
///
/// # Examples
///
/// ```
/// use argline_core::CommandSpec;
///
/// let mut spec = CommandSpec::new("cat");
/// spec.add_option("--lines", 1, Some("-l"), "line count to show", true).unwrap();
///
/// let opt = spec.option("--lines").unwrap();
/// assert!(opt.matches("-l"));
/// assert_eq!(opt.label(), "-l|--lines");
/// assert_eq!(opt.arity, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long name, `--` prefix included (e.g., "--lines")
    pub long: String,
    /// Short alias, `-` prefix included (e.g., "-l")
    pub short: Option<String>,
    /// Description shown in help output
    pub note: String,
    /// Fixed count of value tokens consumed after the option token
    pub arity: usize,
    /// Every consumed value must parse as an integer
    pub numeric_only: bool,
    /// Registration order, for stable display ordering
    pub order: usize,
}

impl OptionSpec {
    /// Checks if a raw token selects this option (long or short form).
    pub fn matches(&self, token: &str) -> bool {
        self.long == token || self.short.as_deref() == Some(token)
    }

    /// Display label: `short|long` when a short alias exists, `long` alone
    /// otherwise.
    pub fn label(&self) -> String {
        match &self.short {
            Some(short) => format!("{short}|{}", self.long),
            None => self.long.clone(),
        }
    }

    /// Marker rendered in usage/help output: `N` for numeric, `V` for string.
    pub fn type_marker(&self) -> char {
        if self.numeric_only { 'N' } else { 'V' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("a"));
        assert!(is_valid_name("file"));
        assert!(is_valid_name("Line_Count_2"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("2fast"));
        assert!(!is_valid_name("_leading"));
        assert!(!is_valid_name("has-dash"));
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name("ünïcode"));
    }

    #[test]
    fn test_option_matches_both_forms() {
        let opt = OptionSpec {
            long: "--lines".to_string(),
            short: Some("-l".to_string()),
            note: String::new(),
            arity: 1,
            numeric_only: true,
            order: 0,
        };

        assert!(opt.matches("--lines"));
        assert!(opt.matches("-l"));
        assert!(!opt.matches("--back"));
        assert!(!opt.matches("lines"));
    }

    #[test]
    fn test_option_label() {
        let mut opt = OptionSpec {
            long: "--back".to_string(),
            short: None,
            note: String::new(),
            arity: 0,
            numeric_only: false,
            order: 0,
        };
        assert_eq!(opt.label(), "--back");

        opt.short = Some("-b".to_string());
        assert_eq!(opt.label(), "-b|--back");
    }
}
