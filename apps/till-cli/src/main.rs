use clap::Parser;
use std::process::ExitCode;
use till_cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    till_cli::init_tracing(args.verbose);

    match till_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
