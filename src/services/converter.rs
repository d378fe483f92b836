use crate::domain::constants::{CONVERTER_CANDIDATES, CONVERT_FILTER, TXT_EXTENSION};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Pick the converter executable: explicit override first, then PATH probe.
/// When nothing is found, the first candidate name is returned as-is so each
/// invocation fails per file instead of aborting the whole run.
pub fn locate_converter(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    for candidate in CONVERTER_CANDIDATES {
        if let Ok(found) = which::which(candidate) {
            log::debug!("using converter '{}'", found.display());
            return found;
        }
    }
    log::warn!(
        "no LibreOffice executable found on PATH, will try '{}'",
        CONVERTER_CANDIDATES[0]
    );
    PathBuf::from(CONVERTER_CANDIDATES[0])
}

/// Run one headless conversion into `outdir` and return the produced file.
/// LibreOffice names its output `<stem>.txt` inside `--outdir`.
pub fn convert_to_txt(exe: &Path, input: &Path, outdir: &Path) -> Result<PathBuf> {
    log::debug!(
        "running '{}' --headless --convert-to {} --outdir '{}' '{}'",
        exe.display(),
        CONVERT_FILTER,
        outdir.display(),
        input.display()
    );

    let output = Command::new(exe)
        .arg("--headless")
        .arg("--convert-to")
        .arg(CONVERT_FILTER)
        .arg("--outdir")
        .arg(outdir)
        .arg(input)
        .output()
        .with_context(|| format!("failed to launch converter '{}'", exe.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "converter exited with {}: {}",
            output.status,
            stderr.trim()
        );
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let produced = outdir.join(format!("{stem}.{TXT_EXTENSION}"));
    if !produced.exists() {
        bail!(
            "converter reported success but produced no file at '{}'",
            produced.display()
        );
    }
    Ok(produced)
}
