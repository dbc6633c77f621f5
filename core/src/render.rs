//! Usage-line and help-text rendering.
//!
//! Both renderers are pure functions of a [`CommandSpec`]: stable across
//! repeated calls and independent of any parse result. Options are always
//! rendered in registration order.

use crate::schema::CommandSpec;

/// Column width cap for the name column of help tables.
const MAX_NAME_COLUMN: usize = 50;

/// Renders the one-line usage summary.
///
/// Positional arguments appear as `<name>`, with `...` appended for the
/// pack and `: NUM` for numeric-only arguments. Options follow in
/// registration order as `[short|long V1 V2]`, each value slot labeled
/// `N` (numeric) or `V` (string) plus its 1-based index.
///
/// # Examples
///
/// ```
/// use argline_core::{CommandSpec, usage_line};
///
/// let mut spec = CommandSpec::new("cat");
/// spec.add_argument("file", "", false).unwrap();
/// spec.add_option("--lines", 1, Some("-l"), "", true).unwrap();
/// spec.add_option("--back", 0, Some("-b"), "", false).unwrap();
///
/// assert_eq!(
///     usage_line(&spec, "cat"),
///     "Usage: cat <file> [-l|--lines N1] [-b|--back]",
/// );
/// ```
pub fn usage_line(spec: &CommandSpec, program: &str) -> String {
    let mut out = format!("Usage: {program}");

    for arg in spec.arguments() {
        out.push_str(" <");
        out.push_str(&arg.name);
        if arg.is_pack {
            out.push_str("...");
        }
        if arg.numeric_only {
            out.push_str(": NUM");
        }
        out.push('>');
    }

    for opt in spec.options_in_order() {
        out.push_str(" [");
        out.push_str(&opt.label());
        for slot in 1..=opt.arity {
            out.push(' ');
            out.push(opt.type_marker());
            out.push_str(&slot.to_string());
        }
        out.push(']');
    }

    out
}

/// Renders the full help text.
///
/// The usage line (with the command name as program) comes first, then the
/// command note if present, then a table of arguments and a table of
/// options. Each table row left-pads its name column to a computed width
/// (capped at 50); multi-line notes continue re-indented to the same
/// column.
pub fn help_text(spec: &CommandSpec) -> String {
    let mut out = usage_line(spec, spec.name());
    out.push('\n');
    if !spec.note().is_empty() {
        out.push_str(spec.note());
        out.push('\n');
    }

    if !spec.arguments().is_empty() {
        out.push_str("\nArgument with '...' is package, 'N' means number, 'V' means string:\n");
        let lefts: Vec<String> = spec
            .arguments()
            .iter()
            .map(|arg| {
                format!(
                    " <{}{}>: {}",
                    arg.name,
                    if arg.is_pack { "..." } else { "" },
                    arg.type_marker(),
                )
            })
            .collect();
        let width = name_column_width(&lefts);
        for (arg, left) in spec.arguments().iter().zip(&lefts) {
            push_row(&mut out, left, &arg.note, width);
        }
    }

    let options = spec.options_in_order();
    if !options.is_empty() {
        out.push_str("\nOption value with 'N' means number, 'V' means string:\n");
        let lefts: Vec<String> = options
            .iter()
            .map(|opt| {
                let mut left = format!(" [{}", opt.label());
                for slot in 1..=opt.arity {
                    left.push(' ');
                    left.push(opt.type_marker());
                    left.push_str(&slot.to_string());
                }
                left.push(']');
                left
            })
            .collect();
        let width = name_column_width(&lefts);
        for (opt, left) in options.iter().zip(&lefts) {
            push_row(&mut out, left, &opt.note, width);
        }
    }

    out
}

fn name_column_width(lefts: &[String]) -> usize {
    let widest = lefts.iter().map(|left| left.len()).max().unwrap_or(0);
    MAX_NAME_COLUMN.min(widest + 10)
}

/// Appends one table row: the padded name column, the note (continuation
/// lines re-indented to the column), and a newline.
fn push_row(out: &mut String, left: &str, note: &str, width: usize) {
    if note.is_empty() {
        out.push_str(left);
        out.push('\n');
        return;
    }
    out.push_str(&format!("{left:<width$}"));
    for (i, line) in note.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&" ".repeat(width));
        }
        out.push(' ');
        out.push_str(line);
    }
    out.push('\n');
}
