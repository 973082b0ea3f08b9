use super::args::{ConversionRequest, parse_amount, parse_targets};
use super::ui::{self, StyleType};
use crate::core::config::AppConfig;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Asks for a conversion on the terminal when no arguments were given.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn read_request(&mut self, config: &AppConfig) -> Result<ConversionRequest> {
        let from = self.ask(&format!(
            "Source currency (default {}): ",
            config.default_from
        ))?;
        let from = from.unwrap_or_else(|| config.default_from.clone());

        let to = self.ask(&format!(
            "Target currencies (default {}): ",
            config.default_to
        ))?;
        let targets = parse_targets(to.as_deref().unwrap_or(&config.default_to))?;

        let amount = self.ask_amount("Amount to convert: ")?;
        Ok(ConversionRequest {
            from,
            targets,
            amount,
        })
    }

    /// Returns the trimmed, upper-cased answer, or `None` for a blank line.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.read_line(prompt)? {
            Some(answer) if !answer.is_empty() => Ok(Some(answer.to_uppercase())),
            Some(_) => Ok(None),
            None => bail!("input closed"),
        }
    }

    fn ask_amount(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let Some(answer) = self.read_line(prompt)? else {
                bail!("input closed before an amount was entered");
            };
            match parse_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(e) => writeln!(
                    self.output,
                    "{}",
                    ui::style_text(&format!("Error: {e}, try again"), StyleType::Error)
                )?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
