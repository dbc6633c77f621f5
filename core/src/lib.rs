//! Declaration and parsing of a program's command-line surface.
//!
//! This crate models a command's surface and parses raw tokens against it:
//!
//! - [`CommandSpec`] — registry of declared positional arguments (at most
//!   one greedy "argument pack") and named options (long name, optional
//!   short alias, fixed arity, numeric-only validation).
//! - [`evaluate`] — the pure parse pipeline: token matching, arity and
//!   numeric validation, greedy pack allocation, and binding.
//! - [`CommandParser`] — the facade: boolean registration calls, the
//!   fail-fast [`parse`](CommandParser::parse) driver, and name-indexed
//!   [`Value`] lookup.
//! - [`usage_line`] / [`help_text`] — usage and help rendering from the
//!   spec.
//!
//! Registration failures ([`RegisterError`]) are non-fatal booleans at the
//! facade; parse-time violations ([`ParseError`]) terminate the process in
//! the [`parse`](CommandParser::parse) driver, or surface as tagged errors
//! from [`try_parse`](CommandParser::try_parse).
//!
//! # Example
//!
//! ```
//! use argline_core::{CommandParser, ParseOutcome};
//!
//! let mut parser = CommandParser::new("cat").with_note("show text file content");
//! parser.add_argument("file", "text file path", false);
//! parser.add_option("--lines", 1, Some("-l"), "line count to show", true);
//! parser.add_option("--back", 0, Some("-b"), "from the back", false);
//!
//! let tokens: Vec<String> = ["cat", "notes.txt", "--lines", "3"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! assert_eq!(parser.try_parse(&tokens), Ok(ParseOutcome::Bound));
//!
//! assert_eq!(parser["file"].as_str(), Some("notes.txt"));
//! assert_eq!(parser["-l"].to_int().unwrap(), 3);
//! assert!(!parser["--back"].present());
//! ```

mod parse;
mod parser;
mod render;
mod schema;
mod types;
mod value;

pub use parse::{ParseError, Parsed, evaluate};
pub use parser::{CommandParser, ParseOutcome};
pub use render::{help_text, usage_line};
pub use schema::{CommandSpec, RegisterError};
pub use types::{ArgSpec, MAX_NAME_LEN, MAX_SHORT_LEN, OptionSpec, is_valid_name};
pub use value::{Value, ValueError, ValueSet};
