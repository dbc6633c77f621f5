//! Parser facade: registration, the fatal-exit parse driver, and value
//! lookup.
//!
//! [`CommandParser`] owns a [`CommandSpec`] and the value store of the most
//! recent parse. Validation itself lives in [`evaluate`] and reports tagged
//! errors; this facade is the thin driver that maps those errors to
//! diagnostics on stderr followed by process termination, preserving the
//! fail-fast contract expected of startup-time argument parsing. Use
//! [`try_parse`](CommandParser::try_parse) where recovery or testing is
//! needed.

use std::ops::Index;
use std::process;

use crate::parse::{ParseError, Parsed, evaluate};
use crate::render::{help_text, usage_line};
use crate::schema::CommandSpec;
use crate::value::{Value, ValueSet};

/// Outcome of a successful [`CommandParser::try_parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Tokens validated; values are bound and queryable.
    Bound,
    /// Lone `--help` token; the driver prints help text and exits 0.
    HelpRequested,
    /// Lone `--usage` token; the driver prints the usage line and exits 0.
    UsageRequested,
}

/// Declares a command's surface, parses its tokens, and serves the bound
/// values.
///
/// Not reentrant-safe for concurrent parses: each parse replaces the shared
/// value store. Use independent parser instances for concurrent work.
///
/// # Examples
///
/// ```
/// use argline_core::{CommandParser, ParseOutcome};
///
/// let mut parser = CommandParser::new("cat").with_note("show text file content");
/// assert!(parser.add_argument("file", "text file path", false));
/// assert!(parser.add_option("--lines", 1, Some("-l"), "line count to show", true));
/// assert!(parser.add_option("--back", 0, Some("-b"), "from the back", false));
///
/// let tokens: Vec<String> = ["cat", "notes.txt", "-l", "10"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(parser.try_parse(&tokens), Ok(ParseOutcome::Bound));
///
/// assert_eq!(parser["file"].as_str(), Some("notes.txt"));
/// if parser["--lines"].present() {
///     assert_eq!(parser["-l"].get(0).to_int().unwrap(), 10);
/// }
/// assert!(!parser["--back"].present());
/// ```
#[derive(Debug, Clone)]
pub struct CommandParser {
    spec: CommandSpec,
    invoked_as: Option<String>,
    values: ValueSet,
}

impl Default for CommandParser {
    /// A parser for a command named "command".
    fn default() -> Self {
        Self::new("command")
    }
}

impl CommandParser {
    /// Creates a parser for the named command.
    pub fn new(name: &str) -> Self {
        Self {
            spec: CommandSpec::new(name),
            invoked_as: None,
            values: ValueSet::default(),
        }
    }

    /// Sets the command note shown in help output.
    pub fn with_note(mut self, note: &str) -> Self {
        self.spec = self.spec.with_note(note);
        self
    }

    /// The declared surface built so far.
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Registers a positional argument; see [`CommandSpec::add_argument`].
    ///
    /// Returns `false` and logs a warning on failure, leaving the spec
    /// unchanged.
    pub fn add_argument(&mut self, name: &str, note: &str, numeric_only: bool) -> bool {
        match self.spec.add_argument(name, note, numeric_only) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(name = name, "argument registration failed: {err}");
                false
            }
        }
    }

    /// Registers the argument pack; see
    /// [`CommandSpec::add_argument_pack`].
    pub fn add_argument_pack(&mut self, name: &str, note: &str, numeric_only: bool) -> bool {
        match self.spec.add_argument_pack(name, note, numeric_only) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(name = name, "argument pack registration failed: {err}");
                false
            }
        }
    }

    /// Registers a named option; see [`CommandSpec::add_option`].
    pub fn add_option(
        &mut self,
        long: &str,
        arity: usize,
        short: Option<&str>,
        note: &str,
        numeric_only: bool,
    ) -> bool {
        match self.spec.add_option(long, arity, short, note, numeric_only) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(long = long, "option registration failed: {err}");
                false
            }
        }
    }

    /// Parses tokens, reporting failures instead of exiting.
    ///
    /// `tokens[0]` is the program's invocation path (stored for display);
    /// `tokens[1..]` are the arguments. The value store is rebuilt on every
    /// call; a failed parse leaves it empty.
    pub fn try_parse(&mut self, tokens: &[String]) -> Result<ParseOutcome, ParseError> {
        self.invoked_as = tokens.first().cloned();
        self.values = ValueSet::default();
        match evaluate(&self.spec, tokens)? {
            Parsed::Values(values) => {
                self.values = values;
                Ok(ParseOutcome::Bound)
            }
            Parsed::Help => Ok(ParseOutcome::HelpRequested),
            Parsed::Usage => Ok(ParseOutcome::UsageRequested),
        }
    }

    /// Parses tokens with the fail-fast contract.
    ///
    /// A lone `--help`/`--usage` prints the corresponding text to stdout
    /// and exits with status 0. Any validation failure prints its
    /// diagnostic, the usage line, and a help hint to stderr, then exits
    /// with a non-zero status. Returns `true` otherwise; there is no
    /// `false` path.
    pub fn parse(&mut self, tokens: &[String]) -> bool {
        match self.try_parse(tokens) {
            Ok(ParseOutcome::Bound) => true,
            Ok(ParseOutcome::HelpRequested) => {
                println!("{}", self.help_text());
                process::exit(0);
            }
            Ok(ParseOutcome::UsageRequested) => {
                println!("{}", self.usage_text());
                process::exit(0);
            }
            Err(err) => self.exit_with(err),
        }
    }

    /// Parses the process's own argument vector; see
    /// [`parse`](CommandParser::parse).
    pub fn parse_env(&mut self) -> bool {
        let tokens: Vec<String> = std::env::args().collect();
        self.parse(&tokens)
    }

    fn exit_with(&self, err: ParseError) -> ! {
        eprintln!("error: {err}");
        eprintln!("{}", self.usage_text());
        if !self.spec.has_option("--help") {
            eprintln!("Try '{} --help' for more information.", self.program());
        }
        process::exit(1);
    }

    /// Display name for diagnostics: the stored invocation path when one
    /// exists, the command name otherwise.
    fn program(&self) -> &str {
        self.invoked_as
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.spec.name())
    }

    /// Looks up a bound value by argument name, option long name, or
    /// option short name. Unknown or unmatched names yield
    /// [`Value::Missing`].
    pub fn value(&self, name: &str) -> &Value {
        self.values.get(name)
    }

    /// The one-line usage summary. A pure function of the spec.
    pub fn usage_text(&self) -> String {
        usage_line(&self.spec, self.spec.name())
    }

    /// The full help text. A pure function of the spec.
    pub fn help_text(&self) -> String {
        help_text(&self.spec)
    }
}

impl Index<&str> for CommandParser {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.value(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn cat_parser() -> CommandParser {
        let mut parser = CommandParser::new("cat").with_note("show text file content");
        assert!(parser.add_argument("file", "text file path", false));
        assert!(parser.add_option("--lines", 1, Some("-l"), "line count to show", true));
        assert!(parser.add_option("--back", 0, Some("-b"), "from the back", false));
        parser
    }

    #[test]
    fn test_registration_failure_returns_false() {
        let mut parser = cat_parser();
        assert!(!parser.add_argument("file", "", false));
        assert!(!parser.add_option("--lines", 2, None, "", false));
        assert!(!parser.add_option("--length", 1, Some("-l"), "", false));
        assert_eq!(parser.spec().arguments().len(), 1);
    }

    #[test]
    fn test_try_parse_binds_values() {
        let mut parser = cat_parser();
        let outcome = parser.try_parse(&tokens(&["./cat", "notes.txt", "-l", "10"]));
        assert_eq!(outcome, Ok(ParseOutcome::Bound));

        assert_eq!(parser["file"].as_str(), Some("notes.txt"));
        assert_eq!(parser["--lines"].to_int().unwrap(), 10);
        assert_eq!(parser["-l"], parser["--lines"]);
        assert!(!parser["--back"].present());
        assert_eq!(parser["unknown"], Value::Missing);
    }

    #[test]
    fn test_try_parse_reports_help_and_usage() {
        let mut parser = cat_parser();
        assert_eq!(
            parser.try_parse(&tokens(&["cat", "--help"])),
            Ok(ParseOutcome::HelpRequested)
        );
        assert_eq!(
            parser.try_parse(&tokens(&["cat", "--usage"])),
            Ok(ParseOutcome::UsageRequested)
        );
    }

    #[test]
    fn test_try_parse_propagates_validation_errors() {
        let mut parser = cat_parser();
        assert!(matches!(
            parser.try_parse(&tokens(&["cat"])),
            Err(ParseError::ArgumentCountMismatch { .. })
        ));
        assert_eq!(parser["file"], Value::Missing);
    }

    #[test]
    fn test_result_store_rebuilt_on_each_parse() {
        let mut parser = cat_parser();

        parser
            .try_parse(&tokens(&["cat", "a.txt", "--back"]))
            .unwrap();
        assert!(parser["--back"].present());

        parser.try_parse(&tokens(&["cat", "b.txt"])).unwrap();
        assert_eq!(parser["file"].as_str(), Some("b.txt"));
        assert!(!parser["--back"].present());
    }

    #[test]
    fn test_usage_text_independent_of_parse_results() {
        let mut parser = cat_parser();
        let before = parser.usage_text();

        parser
            .try_parse(&tokens(&["./some/path/cat", "a.txt"]))
            .unwrap();
        assert_eq!(parser.usage_text(), before);
        assert!(before.starts_with("Usage: cat "));
    }

    #[test]
    fn test_help_text_lists_surface() {
        let parser = cat_parser();
        let help = parser.help_text();
        assert!(help.contains("show text file content"));
        assert!(help.contains("<file>"));
        assert!(help.contains("[-l|--lines N1]"));
        assert!(help.contains("[-b|--back]"));
    }

    #[test]
    fn test_default_command_name() {
        let parser = CommandParser::default();
        assert_eq!(parser.usage_text(), "Usage: command");
    }
}
