use clap::Parser;
use curconv::cli::Cli;
use curconv::cli::args::parse_error_status;
use curconv::log::init_logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return parse_error_status(&e).into();
        }
    };

    init_logging(cli.verbose);

    match curconv::run(cli).await {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
