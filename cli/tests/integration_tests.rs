use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("linecat_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn write_sample(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{}\n", lines.join("\n"))).expect("failed to write sample file");
    path
}

fn linecat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linecat"))
        .args(args)
        .output()
        .expect("failed to run linecat")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Help and usage shortcuts
// ---------------------------------------------------------------------------

#[test]
fn help_prints_surface_and_exits_zero() {
    let output = linecat(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: linecat <file> [-l|--lines N1] [-b|--back]"));
    assert!(stdout.contains("show text file content"));
    assert!(stdout.contains("text file path"));
    assert!(stdout.contains("line count to show"));
    assert!(stdout.contains("from the back"));
}

#[test]
fn usage_prints_one_line_and_exits_zero() {
    let output = linecat(&["--usage"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "Usage: linecat <file> [-l|--lines N1] [-b|--back]"
    );
}

// ---------------------------------------------------------------------------
// Fatal parse errors
// ---------------------------------------------------------------------------

#[test]
fn missing_file_argument_is_fatal() {
    let output = linecat(&[]);
    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("argument count must be: 1"));
    assert!(stderr.contains("Usage: linecat"));
    assert!(stderr.contains("--help' for more information"));
}

#[test]
fn extra_positional_token_is_fatal() {
    let output = linecat(&["a.txt", "b.txt"]);
    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("argument count must be: 1, current: 2"));
}

#[test]
fn non_numeric_line_count_is_fatal() {
    let dir = TempDir::new("non_numeric");
    let path = write_sample(&dir, "in.txt", &["one"]);

    let output = linecat(&[path.to_str().unwrap(), "--lines", "abc"]);
    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("option [--lines] value requires a number"));
    assert!(stderr.contains("abc"));
}

#[test]
fn missing_option_value_is_fatal() {
    let dir = TempDir::new("missing_value");
    let path = write_sample(&dir, "in.txt", &["one"]);

    let output = linecat(&[path.to_str().unwrap(), "--lines"]);
    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("option [--lines] value count must be: 1, current: 0"));
}

#[test]
fn unreadable_file_reports_and_fails() {
    let dir = TempDir::new("unreadable");
    let path = dir.join("does_not_exist.txt");

    let output = linecat(&[path.to_str().unwrap()]);
    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open file"));
    assert!(stderr.contains("Usage: linecat"));
}

// ---------------------------------------------------------------------------
// Viewing behavior
// ---------------------------------------------------------------------------

#[test]
fn prints_whole_file_by_default() {
    let dir = TempDir::new("whole_file");
    let path = write_sample(&dir, "in.txt", &["one", "two", "three"]);

    let output = linecat(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["one", "two", "three"]);
}

#[test]
fn lines_option_limits_head() {
    let dir = TempDir::new("head");
    let path = write_sample(&dir, "in.txt", &["one", "two", "three", "four"]);

    let output = linecat(&[path.to_str().unwrap(), "--lines", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["one", "two"]);
}

#[test]
fn back_with_lines_shows_tail() {
    let dir = TempDir::new("tail");
    let path = write_sample(&dir, "in.txt", &["one", "two", "three", "four"]);

    let output = linecat(&[path.to_str().unwrap(), "-b", "-l", "2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["three", "four"]);
}

#[test]
fn back_without_lines_shows_whole_file() {
    let dir = TempDir::new("back_all");
    let path = write_sample(&dir, "in.txt", &["one", "two"]);

    let output = linecat(&[path.to_str().unwrap(), "--back"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["one", "two"]);
}

#[test]
fn zero_line_count_prints_nothing() {
    let dir = TempDir::new("zero");
    let path = write_sample(&dir, "in.txt", &["one", "two"]);

    let output = linecat(&[path.to_str().unwrap(), "-l", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn lines_larger_than_file_prints_whole_file() {
    let dir = TempDir::new("overshoot");
    let path = write_sample(&dir, "in.txt", &["one", "two"]);

    let output = linecat(&[path.to_str().unwrap(), "--lines", "10"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["one", "two"]);
}
