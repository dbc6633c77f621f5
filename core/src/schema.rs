//! Command surface registry and registration-time validation.
//!
//! [`CommandSpec`] is the mutable registry a caller builds before parsing:
//! an ordered list of positional arguments (at most one marked as the pack)
//! and a set of named options keyed by long name with a short-name alias
//! table. Uniqueness and name-syntax rules are enforced at registration
//! time, so a spec that was built successfully is always parseable.
//!
//! # Examples
//!
//! ```
//! use argline_core::CommandSpec;
//!
//! let mut spec = CommandSpec::new("cat").with_note("show text file content");
//! spec.add_argument("file", "text file path", false).unwrap();
//! spec.add_option("--lines", 1, Some("-l"), "line count to show", true).unwrap();
//! spec.add_option("--back", 0, Some("-b"), "from the back", false).unwrap();
//!
//! assert!(spec.option("--lines").is_some());
//! assert_eq!(spec.resolve("-b").unwrap().long, "--back");
//!
//! // Duplicates are rejected without modifying the spec.
//! assert!(spec.add_argument("file", "", false).is_err());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ArgSpec, MAX_NAME_LEN, MAX_SHORT_LEN, OptionSpec, is_valid_name};

/// Registration errors.
///
/// All registration failures are non-fatal: the spec is left unchanged and
/// the caller decides whether to abort setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Argument name is empty, too long, or syntactically invalid.
    #[error(
        "argument name must be <= {MAX_NAME_LEN} chars, start with a letter, \
         and contain only letters, digits, or '_': {0:?}"
    )]
    InvalidArgumentName(String),
    /// An argument (or pack) with this name already exists.
    #[error("argument already exists: {0}")]
    DuplicateArgument(String),
    /// A second argument pack was registered.
    #[error("an argument pack is already registered; only one is allowed")]
    PackAlreadyRegistered,
    /// Option long name is malformed (prefix, length, or syntax).
    #[error(
        "option name must be 3-{MAX_NAME_LEN} chars, start with '--', and \
         contain only letters, digits, or '_' after the prefix: {0:?}"
    )]
    InvalidLongName(String),
    /// An option with this long name already exists.
    #[error("option already exists: {0}")]
    DuplicateLongName(String),
    /// Option short name is malformed (prefix, length, or syntax).
    #[error(
        "option short name must be 2-{MAX_SHORT_LEN} chars, start with '-', \
         and contain only letters, digits, or '_' after the prefix: {0:?}"
    )]
    InvalidShortName(String),
    /// This short name is already aliased to another option.
    #[error("option short name already exists: {0}")]
    DuplicateShortName(String),
}

/// Declared surface of a command: positional arguments and named options.
///
/// Built once by the caller before parsing and treated as immutable during
/// a parse. Options live in a map keyed by long name; their
/// [`order`](OptionSpec::order) field preserves registration order for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandSpec {
    name: String,
    note: String,
    arguments: Vec<ArgSpec>,
    options: HashMap<String, OptionSpec>,
    short_names: HashMap<String, String>,
    has_pack: bool,
}

impl CommandSpec {
    /// Creates an empty spec for the named command.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the command note shown in help output.
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Declared positional arguments, in registration order.
    pub fn arguments(&self) -> &[ArgSpec] {
        &self.arguments
    }

    /// Whether an argument pack has been registered.
    pub fn has_pack(&self) -> bool {
        self.has_pack
    }

    /// Looks up an option by exact long name.
    pub fn option(&self, long: &str) -> Option<&OptionSpec> {
        self.options.get(long)
    }

    /// Whether an option with this exact long name is registered.
    pub fn has_option(&self, long: &str) -> bool {
        self.options.contains_key(long)
    }

    /// Resolves a raw token to an option, through either its long name or
    /// its short-name alias.
    pub fn resolve(&self, token: &str) -> Option<&OptionSpec> {
        if let Some(opt) = self.options.get(token) {
            return Some(opt);
        }
        let long = self.short_names.get(token)?;
        self.options.get(long)
    }

    /// All options sorted by registration order.
    pub fn options_in_order(&self) -> Vec<&OptionSpec> {
        let mut options: Vec<&OptionSpec> = self.options.values().collect();
        options.sort_by_key(|opt| opt.order);
        options
    }

    /// Registers a positional argument.
    ///
    /// Rejects empty, over-long (> [`MAX_NAME_LEN`]), or syntactically
    /// invalid names, and names that duplicate any existing argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use argline_core::{CommandSpec, RegisterError};
    ///
    /// let mut spec = CommandSpec::new("cp");
    /// assert!(spec.add_argument("source", "", false).is_ok());
    /// assert_eq!(
    ///     spec.add_argument("source", "", false),
    ///     Err(RegisterError::DuplicateArgument("source".to_string())),
    /// );
    /// ```
    pub fn add_argument(
        &mut self,
        name: &str,
        note: &str,
        numeric_only: bool,
    ) -> Result<(), RegisterError> {
        self.check_argument_name(name)?;
        self.arguments.push(ArgSpec {
            name: name.to_string(),
            note: note.to_string(),
            numeric_only,
            is_pack: false,
        });
        Ok(())
    }

    /// Registers the argument pack.
    ///
    /// Same name rules as [`add_argument`](CommandSpec::add_argument), and
    /// additionally fails once a pack exists: at most one pack per spec.
    /// The pack may be registered at any position; parse-time allocation is
    /// positional in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use argline_core::{CommandSpec, RegisterError};
    ///
    /// let mut spec = CommandSpec::new("rm");
    /// assert!(spec.add_argument_pack("files", "files to remove", false).is_ok());
    /// assert_eq!(
    ///     spec.add_argument_pack("more", "", false),
    ///     Err(RegisterError::PackAlreadyRegistered),
    /// );
    /// ```
    pub fn add_argument_pack(
        &mut self,
        name: &str,
        note: &str,
        numeric_only: bool,
    ) -> Result<(), RegisterError> {
        if self.has_pack {
            return Err(RegisterError::PackAlreadyRegistered);
        }
        self.check_argument_name(name)?;
        self.arguments.push(ArgSpec {
            name: name.to_string(),
            note: note.to_string(),
            numeric_only,
            is_pack: true,
        });
        self.has_pack = true;
        Ok(())
    }

    /// Registers a named option.
    ///
    /// The long name must be unique, 3 to [`MAX_NAME_LEN`] chars, start
    /// with `--`, and have a valid identifier after the prefix. A short
    /// alias, when given, must be unique across the spec, 2 to
    /// [`MAX_SHORT_LEN`] chars, start with `-`, and have a valid identifier
    /// after the prefix. An empty short name means no alias.
    pub fn add_option(
        &mut self,
        long: &str,
        arity: usize,
        short: Option<&str>,
        note: &str,
        numeric_only: bool,
    ) -> Result<(), RegisterError> {
        if self.options.contains_key(long) {
            return Err(RegisterError::DuplicateLongName(long.to_string()));
        }
        if long.len() < 3
            || long.len() > MAX_NAME_LEN
            || !long.starts_with("--")
            || !is_valid_name(&long[2..])
        {
            return Err(RegisterError::InvalidLongName(long.to_string()));
        }
        let short = short.filter(|s| !s.is_empty());
        if let Some(short) = short {
            if self.short_names.contains_key(short) {
                return Err(RegisterError::DuplicateShortName(short.to_string()));
            }
            if short.len() < 2
                || short.len() > MAX_SHORT_LEN
                || !short.starts_with('-')
                || short.starts_with("--")
                || !is_valid_name(&short[1..])
            {
                return Err(RegisterError::InvalidShortName(short.to_string()));
            }
        }

        let order = self.options.len();
        self.options.insert(
            long.to_string(),
            OptionSpec {
                long: long.to_string(),
                short: short.map(String::from),
                note: note.to_string(),
                arity,
                numeric_only,
                order,
            },
        );
        if let Some(short) = short {
            self.short_names.insert(short.to_string(), long.to_string());
        }
        Ok(())
    }

    fn check_argument_name(&self, name: &str) -> Result<(), RegisterError> {
        if name.is_empty() || name.len() > MAX_NAME_LEN || !is_valid_name(name) {
            return Err(RegisterError::InvalidArgumentName(name.to_string()));
        }
        if self.arguments.iter().any(|arg| arg.name == name) {
            return Err(RegisterError::DuplicateArgument(name.to_string()));
        }
        Ok(())
    }
}
