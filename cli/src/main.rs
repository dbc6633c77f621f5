//! `linecat`: a small cat-like text file viewer.
//!
//! Demonstrates the full `argline-core` surface: a positional argument, a
//! numeric option with a short alias, and a zero-arity flag. Prints the
//! first `--lines` lines of a file (all lines when absent), or the last
//! `--lines` lines under `--back`.

use std::fs::File;
use std::io::{BufRead, BufReader};

use argline_core::CommandParser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut parser = CommandParser::new("linecat").with_note("show text file content");
    parser.add_argument("file", "text file path", false);
    parser.add_option("--lines", 1, Some("-l"), "line count to show", true);
    parser.add_option("--back", 0, Some("-b"), "from the back", false);
    parser.parse_env();

    if let Err(err) = run(&parser) {
        let program = std::env::args().next().unwrap_or_else(|| "linecat".to_string());
        eprintln!("error: {err}");
        eprintln!("{}", parser.usage_text());
        eprintln!("Try '{program} --help' for more information.");
        std::process::exit(1);
    }
}

fn run(parser: &CommandParser) -> Result<(), String> {
    let path = parser["file"].to_string();
    let file =
        File::open(&path).map_err(|err| format!("failed to open file '{path}': {err}"))?;

    // --lines is declared numeric-only, so a matched value always parses;
    // negative counts clamp to zero as "show nothing".
    let limit = if parser["--lines"].present() {
        Some(parser["--lines"].get(0).to_int().unwrap_or(0).max(0) as usize)
    } else {
        None
    };
    let back = parser["--back"].present();
    tracing::debug!(path = %path, limit = ?limit, back = back, "showing file");

    let reader = BufReader::new(file);
    let mut lines: Vec<String> = Vec::new();
    for line in reader.lines() {
        if !back && limit == Some(lines.len()) {
            break;
        }
        let line = line.map_err(|err| format!("failed to read '{path}': {err}"))?;
        lines.push(line);
    }
    if back {
        if let Some(limit) = limit {
            if limit < lines.len() {
                lines.drain(..lines.len() - limit);
            }
        }
    }

    for line in &lines {
        println!("{line}");
    }
    Ok(())
}
