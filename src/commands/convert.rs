use crate::cli::Cli;
use crate::domain::constants::WRAP_WIDTH;
use crate::domain::models::{DocumentFile, FileReport, FileStatus, RunSummary};
use crate::services::{converter, discover, naming, wrap};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Drive the whole run: expand inputs, then convert sequentially. Per-file
/// problems land in the summary; only setup-level failures return `Err`.
pub fn run_convert(cli: &Cli) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let files = discover::expand_paths(&cli.paths, cli.recurse, &mut summary);
    if files.is_empty() {
        return Ok(summary);
    }

    let exe = converter::locate_converter(cli.converter.as_deref());

    for doc in files {
        let target = naming::output_path(&doc, cli.datetime_tag);

        if target.exists() && !cli.overwrite {
            if !cli.json {
                println!("skip existing: '{}'", target.display());
            }
            summary.record(FileReport {
                file: doc.path.display().to_string(),
                status: FileStatus::Skipped,
                output: Some(target.display().to_string()),
                detail: Some("existing output not overwritten (use --overwrite)".to_string()),
            });
            continue;
        }

        if !cli.json {
            println!("convert: '{}'", doc.path.display());
        }
        match convert_one(&exe, &doc, &target, cli.wrap) {
            Ok(()) => {
                if !cli.json {
                    println!("     as: '{}'", target.display());
                }
                summary.record(FileReport {
                    file: doc.path.display().to_string(),
                    status: FileStatus::Converted,
                    output: Some(target.display().to_string()),
                    detail: None,
                });
            }
            Err(err) => {
                if !cli.json {
                    eprintln!("failed: '{}': {err:#}", doc.path.display());
                }
                summary.record(FileReport {
                    file: doc.path.display().to_string(),
                    status: FileStatus::Failed,
                    output: None,
                    detail: Some(format!("{err:#}")),
                });
            }
        }
    }

    Ok(summary)
}

/// One conversion. The converter writes `<stem>.txt` into its `--outdir`,
/// so it runs against a staging directory and the produced file is renamed
/// onto the final target; a pre-existing sibling `.txt` is never touched as
/// a side effect of a tagged conversion.
fn convert_one(exe: &Path, doc: &DocumentFile, target: &Path, wrap_copy: bool) -> Result<()> {
    let outdir = target
        .parent()
        .context("output path has no parent directory")?;
    let staging = tempfile::tempdir_in(outdir)
        .with_context(|| format!("cannot create staging directory in '{}'", outdir.display()))?;

    let produced = converter::convert_to_txt(exe, &doc.path, staging.path())?;
    fs::rename(&produced, target).with_context(|| {
        format!(
            "cannot move converted file into place at '{}'",
            target.display()
        )
    })?;

    if wrap_copy {
        wrap::write_wrapped_copy(target, WRAP_WIDTH)?;
    }
    Ok(())
}
