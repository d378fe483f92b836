use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use services::output;

fn main() {
    env_logger::init();
    let args = cli::Cli::parse();

    let code = match commands::run_convert(&args) {
        Ok(summary) if summary.files.is_empty() => {
            output::print_no_input(args.json, &summary);
            1
        }
        Ok(summary) => match output::print_summary(args.json, &summary) {
            Ok(()) if summary.has_failures() => 1,
            Ok(()) => 0,
            Err(err) => {
                eprintln!("error: {err:#}");
                1
            }
        },
        Err(err) => {
            output::print_error(args.json, "RUN_FAILED", &format!("{err:#}"));
            1
        }
    };
    std::process::exit(code);
}
