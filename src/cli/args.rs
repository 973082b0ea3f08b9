use crate::Status;
use crate::core::config::{DEFAULT_CONFIG_FILE, OutputFormat};
use crate::store::DEFAULT_HISTORY_FILE;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print results as CSV
    #[arg(long)]
    pub csv: bool,

    /// Show conversion history and exit
    #[arg(long)]
    pub history: bool,

    /// Path to optional configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_path: PathBuf,

    /// Path to the conversion history file
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history_path: PathBuf,

    /// FROM TO[,TO2,...] AMOUNT, or nothing to be prompted
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// Exit status for a command line clap refused to parse. Help and version
/// output succeed; every usage error exits 1 like the other argument errors.
pub fn parse_error_status(err: &clap::Error) -> Status {
    if err.use_stderr() {
        Status::Failure
    } else {
        Status::Success
    }
}

/// A fully specified conversion: one source and one or more targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub targets: Vec<String>,
    pub amount: f64,
}

impl Cli {
    /// Output format forced by flags; JSON wins when both are given.
    pub fn format_override(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else if self.csv {
            Some(OutputFormat::Csv)
        } else {
            None
        }
    }

    /// The request given on the command line, or `None` for interactive mode.
    pub fn request(&self) -> Result<Option<ConversionRequest>> {
        match self.args.as_slice() {
            [] => Ok(None),
            [from, to, amount] => {
                let targets = parse_targets(to)?;
                let amount = parse_amount(amount)?;
                Ok(Some(ConversionRequest {
                    from: from.trim().to_uppercase(),
                    targets,
                    amount,
                }))
            }
            _ => bail!("wrong number of arguments"),
        }
    }
}

/// Splits a comma separated target list, dropping empty entries.
pub fn parse_targets(raw: &str) -> Result<Vec<String>> {
    let targets: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .collect();

    if targets.is_empty() {
        bail!("no target currency given");
    }
    Ok(targets)
}

pub fn parse_amount(raw: &str) -> Result<f64> {
    let amount: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|a: &f64| a.is_finite())
        .context("invalid amount")?;

    if amount <= 0.0 {
        bail!("amount must be positive");
    }
    Ok(amount)
}
