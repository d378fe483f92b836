use crate::domain::models::{ErrorBody, JsonError, JsonOut, RunSummary};
use anyhow::Result;

/// Final report. In JSON mode the whole summary goes out in one envelope;
/// `ok` reflects whether every file converted or was cleanly skipped.
pub fn print_summary(json: bool, summary: &RunSummary) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: !summary.has_failures(),
                data: summary,
            })?
        );
    } else {
        print_warnings(summary);
        println!(
            "converted {}, skipped {}, failed {}",
            summary.converted, summary.skipped, summary.failed
        );
    }
    Ok(())
}

pub fn print_no_input(json: bool, summary: &RunSummary) {
    if json {
        print_error(json, "NO_INPUT_FILES", "no valid input files found");
    } else {
        print_warnings(summary);
        eprintln!("error: no valid input files found");
    }
}

pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        let body = JsonError {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(rendered) => println!("{rendered}"),
            Err(_) => eprintln!("error: {message}"),
        }
    } else {
        eprintln!("error: {message}");
    }
}

fn print_warnings(summary: &RunSummary) {
    if summary.warnings.is_empty() {
        return;
    }
    println!();
    println!("WARNINGS:");
    for warning in &summary.warnings {
        println!("  {warning}");
    }
}
