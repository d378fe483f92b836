use crate::services::naming;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a wrapped sibling copy of a converted text file, re-flowed at
/// `width` columns on whitespace boundaries. Blank lines are preserved;
/// words longer than the width are left unsplit.
pub fn write_wrapped_copy(source: &Path, width: usize) -> Result<PathBuf> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("cannot read converted file '{}'", source.display()))?;

    let mut out = String::new();
    for line in text.lines() {
        let rows = wrap_line(line, width);
        if rows.is_empty() {
            out.push('\n');
        } else {
            for row in rows {
                out.push_str(&row);
                out.push('\n');
            }
        }
    }

    let target = naming::wrapped_path(source);
    fs::write(&target, out)
        .with_context(|| format!("cannot write wrapped copy '{}'", target.display()))?;
    Ok(target)
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(wrap_line("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn long_lines_break_on_word_boundaries() {
        let rows = wrap_line("aaa bbb ccc ddd eee", 7);
        assert_eq!(rows, vec!["aaa bbb", "ccc ddd", "eee"]);
        assert!(rows.iter().all(|r| r.len() <= 7));
    }

    #[test]
    fn blank_lines_produce_no_rows() {
        assert!(wrap_line("", 10).is_empty());
        assert!(wrap_line("   ", 10).is_empty());
    }

    #[test]
    fn wrapped_copy_preserves_blank_lines() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let source = tmp.path().join("report.txt");
        let long = "word ".repeat(40);
        fs::write(&source, format!("{long}\n\nshort tail\n")).expect("write fixture");

        let target = write_wrapped_copy(&source, 20).expect("wrap");
        assert_eq!(target, tmp.path().join("report-wrap.txt"));

        let wrapped = fs::read_to_string(target).expect("read wrapped");
        assert!(wrapped.lines().all(|l| l.len() <= 20));
        assert!(wrapped.contains("\n\n"));
        assert!(wrapped.ends_with("short tail\n"));
    }
}
