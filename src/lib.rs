pub mod cli;
pub mod core;
pub mod log;
pub mod providers;
pub mod store;

use crate::cli::prompt::Prompter;
use crate::cli::{Cli, Presenter, ui};
use crate::core::AppConfig;
use crate::providers::ExchangeRateApiProvider;
use crate::store::HistoryStore;
use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};

/// Overall result of one invocation, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> ExitCode {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

pub async fn run(cli: Cli) -> Result<Status> {
    info!("Currency converter starting...");
    let history = HistoryStore::new(&cli.history_path);
    let mut out = io::stdout();

    if cli.history {
        cli::history::run(&history, &mut out)?;
        return Ok(Status::Success);
    }

    let config = AppConfig::load_or_default(&cli.config_path);
    debug!("Loaded config: {config:#?}");

    let format = cli.format_override().unwrap_or(config.output_format);
    let presenter = Presenter::new(format, config.locale);
    if let Some(header) = presenter.header() {
        writeln!(out, "{header}")?;
    }

    let request = match cli.request() {
        Ok(Some(request)) => Ok(request),
        Ok(None) => Prompter::new(io::stdin().lock(), io::stdout()).read_request(&config),
        Err(e) => {
            writeln!(out, "{}", presenter.error(&e.to_string())?)?;
            if presenter.is_text() {
                writeln!(out, "{}", ui::usage(env!("CARGO_PKG_NAME")))?;
            }
            return Ok(Status::Failure);
        }
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            writeln!(out, "{}", presenter.error(&format!("{e:#}"))?)?;
            return Ok(Status::Failure);
        }
    };
    debug!(?request, "Conversion requested");

    let provider = ExchangeRateApiProvider::new(&config.api_url)?;
    cli::convert::run(&request, &provider, &history, &presenter, &mut out).await
}
