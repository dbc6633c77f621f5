//! Token matching, validation, and binding.
//!
//! This module implements the parse pipeline as a pure function over a
//! [`CommandSpec`] and a raw token list:
//!
//! 1. recognize the built-in lone `--help`/`--usage` shortcuts (unless the
//!    spec shadows them with its own option of that name);
//! 2. scan tokens left to right, classifying each as a positional value or
//!    an option start, and consume each matched option's fixed-arity value
//!    window;
//! 3. validate positional counts (exact, or the greedy pack rule) and
//!    numeric-only constraints;
//! 4. bind the results into a [`ValueSet`], with option values reachable
//!    under both long and short names.
//!
//! [`evaluate`] returns a tagged result instead of terminating the process;
//! the facade in [`parser`](crate::parser) maps errors to diagnostics and
//! a fatal exit. This keeps the whole pipeline unit-testable.

use std::collections::HashMap;

use thiserror::Error;

use crate::schema::CommandSpec;
use crate::types::ArgSpec;
use crate::value::{Value, ValueSet};

/// Parse-time validation errors.
///
/// Every variant identifies the offending name, value, or expected-vs-actual
/// counts. These are fatal at the driver level; [`evaluate`] itself only
/// reports them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token list was empty; the program path is required.
    #[error("token count must be > 0, the program path comes first")]
    MissingTokens,
    /// An option had fewer value tokens available than its arity.
    #[error("option [{option}] value count must be: {expected}, current: {actual}")]
    OptionValueCount {
        option: String,
        expected: usize,
        actual: usize,
    },
    /// A numeric-only option captured a non-integer value.
    #[error("option [{option}] value requires a number, current: {value}")]
    OptionValueNotNumeric { option: String, value: String },
    /// Positional token count differs from the declared argument count.
    #[error("argument count must be: {expected}, current: {actual}, they are:{listing}")]
    ArgumentCountMismatch {
        expected: usize,
        actual: usize,
        /// Side-by-side `<declared:supplied>` pairs.
        listing: String,
    },
    /// Too few positional tokens to fill the non-pack arguments.
    #[error("argument count at least: {expected}, current: {actual}")]
    TooFewArguments { expected: usize, actual: usize },
    /// The argument pack would receive zero values.
    #[error("argument pack <{pack}...> value count at least: 1")]
    EmptyPack { pack: String },
    /// A numeric-only argument received a non-integer token.
    #[error("argument <{argument}> value requires a number, current: {value}")]
    ArgumentNotNumeric { argument: String, value: String },
    /// A numeric-only pack received a non-integer token.
    #[error("argument pack <{pack}> value requires a number, current: {value}")]
    PackValueNotNumeric { pack: String, value: String },
}

/// Outcome of evaluating a token list against a spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// Tokens validated and bound.
    Values(ValueSet),
    /// Lone `--help` with no user-defined `--help` option.
    Help,
    /// Lone `--usage` with no user-defined `--usage` option.
    Usage,
}

/// Evaluates raw tokens against a spec.
///
/// `tokens[0]` is the program's invocation path; `tokens[1..]` are the
/// actual arguments. At least one token is required.
///
/// # Examples
///
/// ```
/// use argline_core::{CommandSpec, Parsed, evaluate};
///
/// let mut spec = CommandSpec::new("cat");
/// spec.add_argument("file", "", false).unwrap();
/// spec.add_option("--lines", 1, Some("-l"), "", true).unwrap();
///
/// let tokens: Vec<String> = ["cat", "notes.txt", "-l", "10"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let Parsed::Values(values) = evaluate(&spec, &tokens).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(values.get("file").as_str(), Some("notes.txt"));
/// assert_eq!(values.get("--lines").to_int().unwrap(), 10);
/// assert_eq!(values.get("-l").to_int().unwrap(), 10);
/// ```
pub fn evaluate(spec: &CommandSpec, tokens: &[String]) -> Result<Parsed, ParseError> {
    let Some((_program, raw)) = tokens.split_first() else {
        return Err(ParseError::MissingTokens);
    };

    if let [only] = raw {
        if only == "--help" && !spec.has_option("--help") {
            return Ok(Parsed::Help);
        }
        if only == "--usage" && !spec.has_option("--usage") {
            return Ok(Parsed::Usage);
        }
    }

    let (positionals, captured) = match_tokens(spec, raw)?;
    let values = bind(spec, &positionals, captured)?;
    Ok(Parsed::Values(values))
}

/// Partitions raw tokens into positional values and per-option captures.
///
/// Values are captured strictly positionally: an option token consumes the
/// next `arity` tokens as its value window, whatever they look like.
/// Re-matching an option overwrites its previous capture.
fn match_tokens(
    spec: &CommandSpec,
    raw: &[String],
) -> Result<(Vec<String>, HashMap<String, Vec<String>>), ParseError> {
    let mut positionals = Vec::new();
    let mut captured: HashMap<String, Vec<String>> = HashMap::new();

    let mut i = 0;
    while i < raw.len() {
        let token = &raw[i];
        let Some(opt) = spec.resolve(token) else {
            positionals.push(token.clone());
            i += 1;
            continue;
        };

        let available = raw.len() - i - 1;
        if available < opt.arity {
            return Err(ParseError::OptionValueCount {
                option: opt.long.clone(),
                expected: opt.arity,
                actual: available,
            });
        }
        let window = &raw[i + 1..i + 1 + opt.arity];
        if opt.numeric_only {
            if let Some(bad) = window.iter().find(|v| v.parse::<i64>().is_err()) {
                return Err(ParseError::OptionValueNotNumeric {
                    option: opt.long.clone(),
                    value: bad.clone(),
                });
            }
        }
        captured.insert(opt.long.clone(), window.to_vec());
        i += 1 + opt.arity;
    }

    Ok((positionals, captured))
}

/// Validates positional counts and numeric constraints, then binds the
/// final values.
fn bind(
    spec: &CommandSpec,
    positionals: &[String],
    captured: HashMap<String, Vec<String>>,
) -> Result<ValueSet, ParseError> {
    let declared = spec.arguments();
    let mut values = ValueSet::default();

    if spec.has_pack() {
        let required = declared.len() - 1;
        if positionals.len() < required {
            return Err(ParseError::TooFewArguments {
                expected: required,
                actual: positionals.len(),
            });
        }
        // The pack takes the leftover run, contiguously, at its declared
        // slot; it may be declared anywhere, not only last.
        let pack_len = positionals.len() - required;
        let mut next = 0;
        for arg in declared {
            if arg.is_pack {
                if pack_len == 0 {
                    return Err(ParseError::EmptyPack {
                        pack: arg.name.clone(),
                    });
                }
                let run = &positionals[next..next + pack_len];
                if arg.numeric_only {
                    if let Some(bad) = run.iter().find(|v| v.parse::<i64>().is_err()) {
                        return Err(ParseError::PackValueNotNumeric {
                            pack: arg.name.clone(),
                            value: bad.clone(),
                        });
                    }
                }
                values.insert(&arg.name, Value::Multi(run.to_vec()));
                next += pack_len;
            } else {
                let token = &positionals[next];
                check_numeric_argument(arg, token)?;
                values.insert(&arg.name, Value::Single(token.clone()));
                next += 1;
            }
        }
    } else {
        if positionals.len() != declared.len() {
            return Err(ParseError::ArgumentCountMismatch {
                expected: declared.len(),
                actual: positionals.len(),
                listing: pairing(declared, positionals),
            });
        }
        for (arg, token) in declared.iter().zip(positionals) {
            check_numeric_argument(arg, token)?;
            values.insert(&arg.name, Value::Single(token.clone()));
        }
    }

    for (long, captured_values) in captured {
        if let Some(opt) = spec.option(&long) {
            if let Some(short) = &opt.short {
                values.insert(short, Value::Multi(captured_values.clone()));
            }
        }
        values.insert(&long, Value::Multi(captured_values));
    }

    Ok(values)
}

fn check_numeric_argument(arg: &ArgSpec, token: &str) -> Result<(), ParseError> {
    if arg.numeric_only && token.parse::<i64>().is_err() {
        return Err(ParseError::ArgumentNotNumeric {
            argument: arg.name.clone(),
            value: token.to_string(),
        });
    }
    Ok(())
}

/// Side-by-side `<declared:supplied>` listing for count-mismatch
/// diagnostics, blank on whichever side ran out.
fn pairing(declared: &[ArgSpec], supplied: &[String]) -> String {
    let mut out = String::new();
    for i in 0..declared.len().max(supplied.len()) {
        let name = declared.get(i).map(|arg| arg.name.as_str()).unwrap_or(" ");
        let token = supplied.get(i).map(String::as_str).unwrap_or(" ");
        out.push_str(&format!(" <{name}:{token}>"));
    }
    out
}
