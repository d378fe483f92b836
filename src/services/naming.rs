use crate::domain::constants::{DATETIME_TAG_FORMAT, TXT_EXTENSION, WRAP_SUFFIX};
use crate::domain::models::DocumentFile;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Target path for a converted document: same directory, same stem, `.txt`
/// extension. With `datetime_tag`, a tag rendered from the source's
/// last-modified time is inserted between stem and extension.
///
/// Inputs sharing a stem but differing extensions map to the same target
/// unless the tag differentiates them; that collision is intentionally not
/// guarded.
pub fn output_path(doc: &DocumentFile, datetime_tag: bool) -> PathBuf {
    let mut stem = doc
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if datetime_tag {
        stem.push_str(&datetime_tag_for(doc.modified));
    }
    doc.path.with_file_name(format!("{stem}.{TXT_EXTENSION}"))
}

pub fn datetime_tag_for(modified: SystemTime) -> String {
    let dt: DateTime<Local> = modified.into();
    dt.format(DATETIME_TAG_FORMAT).to_string()
}

/// Sibling path for the wrapped copy of a converted file:
/// `report.txt` -> `report-wrap.txt`.
pub fn wrapped_path(txt: &Path) -> PathBuf {
    let stem = txt
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    txt.with_file_name(format!("{stem}{WRAP_SUFFIX}.{TXT_EXTENSION}"))
}
