use crate::domain::constants::DOC_EXTENSIONS;
use crate::domain::models::{DocumentFile, RunSummary};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand the user-supplied path list into a deduplicated, ordered sequence
/// of document files. Problems with individual inputs become warnings on the
/// summary; only the surviving files are returned.
pub fn expand_paths(
    paths: &[PathBuf],
    recurse: bool,
    summary: &mut RunSummary,
) -> Vec<DocumentFile> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for path in paths {
        if !path.exists() {
            summary.warn(format!("path not found: '{}'", path.display()));
            continue;
        }

        if path.is_file() {
            if !has_doc_extension(path) {
                summary.warn(format!("not a supported file type: '{}'", path.display()));
                continue;
            }
            push_document(path, &mut seen, &mut found, summary);
        } else if path.is_dir() {
            match scan_dir(path, recurse) {
                Ok(entries) => {
                    for entry in entries {
                        push_document(&entry, &mut seen, &mut found, summary);
                    }
                }
                Err(err) => {
                    summary.warn(format!("cannot read directory '{}': {}", path.display(), err));
                }
            }
        } else {
            summary.warn(format!("cannot process path '{}'", path.display()));
        }
    }

    found
}

fn push_document(
    path: &Path,
    seen: &mut HashSet<PathBuf>,
    found: &mut Vec<DocumentFile>,
    summary: &mut RunSummary,
) {
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !seen.insert(key) {
        return;
    }
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(modified) => found.push(DocumentFile {
            path: path.to_path_buf(),
            modified,
        }),
        Err(err) => summary.warn(format!("cannot stat '{}': {}", path.display(), err)),
    }
}

fn scan_dir(dir: &Path, recurse: bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    if recurse {
        for entry in walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && has_doc_extension(entry.path()) {
                entries.push(entry.path().to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && has_doc_extension(&path) {
                entries.push(path);
            }
        }
    }
    entries.sort();
    Ok(entries)
}

fn has_doc_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| DOC_EXTENSIONS.iter().any(|d| ext.eq_ignore_ascii_case(d)))
        .unwrap_or(false)
}
