use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use roster::cli::{self, Cli};
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match cli::run(&args) {
        Ok(report) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(report.body.as_bytes()) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            for notice in report.notices.iter().filter(|t| t.open) {
                eprintln!("{}", cli::format_notice(notice));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
