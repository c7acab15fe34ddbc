use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Read the whole file at `path`, split it on `separator`, and keep the trimmed,
/// non-empty pieces in file order.
pub fn read_tokens<P: AsRef<Path>>(path: P, separator: char) -> Result<Vec<String>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(split_tokens(&text, separator))
}

pub fn split_tokens(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_split_newlines() {
    assert_eq!(split_tokens("line1\nline2\nline3\n", '\n'), ["line1", "line2", "line3"]);
}

#[test]
fn test_split_commas() {
    assert_eq!(split_tokens("val1,val2,val3", ','), ["val1", "val2", "val3"]);
}

#[test]
fn test_split_skips_blank_pieces() {
    assert_eq!(
        split_tokens("line1\n\nline2\n  \nline3", '\n'),
        ["line1", "line2", "line3"]
    );
    assert!(split_tokens("\n\n\n", '\n').is_empty());
}

#[test]
fn test_split_trims_whitespace() {
    assert_eq!(
        split_tokens("  line1  \n  line2  \n  line3  ", '\n'),
        ["line1", "line2", "line3"]
    );
    assert_eq!(split_tokens("single", '\n'), ["single"]);
}

#[test]
fn test_read_missing_file() {
    let err = read_tokens("no/such/dir/problem_0", '\n').unwrap_err();
    assert!(err.to_string().contains("problem_0"));
}
