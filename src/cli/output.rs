use super::ui::{self, StyleType};
use crate::core::config::{Locale, OutputFormat};
use crate::core::record::ConversionRecord;
use crate::core::time_ago::format_time_ago;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct SuccessPayload<'a> {
    success: bool,
    #[serde(flatten)]
    record: &'a ConversionRecord,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    success: bool,
    error: &'a str,
}

/// Renders conversions and errors in the selected output format.
pub struct Presenter {
    format: OutputFormat,
    locale: Locale,
}

impl Presenter {
    pub fn new(format: OutputFormat, locale: Locale) -> Self {
        Self { format, locale }
    }

    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Program banner; only text mode has one.
    pub fn header(&self) -> Option<String> {
        self.is_text()
            .then(|| format!("{}\n", ui::banner("CURRENCY CONVERTER")))
    }

    /// `rates_updated` is `None` when the provider did not report when its
    /// rates were published; text mode then leaves out the age line.
    pub fn conversion(
        &self,
        record: &ConversionRecord,
        rates_updated: Option<DateTime<Local>>,
        now: DateTime<Local>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.conversion_text(record, rates_updated, now)),
            OutputFormat::Json => {
                let payload = SuccessPayload {
                    success: true,
                    record,
                };
                serde_json::to_string_pretty(&payload).context("Failed to encode JSON output")
            }
            OutputFormat::Csv => csv_line(&[
                record
                    .timestamp
                    .to_rfc3339_opts(SecondsFormat::Secs, false),
                record.from_currency.clone(),
                record.to_currency.clone(),
                format!("{:.2}", record.amount),
                format!("{:.2}", record.result),
                format!("{:.6}", record.exchange_rate),
            ]),
        }
    }

    pub fn error(&self, message: &str) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(ui::style_text(
                &format!("Error: {message}"),
                StyleType::Error,
            )),
            OutputFormat::Json => {
                let payload = ErrorPayload {
                    success: false,
                    error: message,
                };
                serde_json::to_string_pretty(&payload).context("Failed to encode JSON output")
            }
            OutputFormat::Csv => csv_line(&["error".to_string(), message.to_string()]),
        }
    }

    fn conversion_text(
        &self,
        record: &ConversionRecord,
        rates_updated: Option<DateTime<Local>>,
        now: DateTime<Local>,
    ) -> String {
        let from = &record.from_currency;
        let to = &record.to_currency;

        let mut lines = vec![
            String::new(),
            ui::style_text(
                "════════════════ RESULT ════════════════",
                StyleType::Frame,
            ),
            ui::style_text(
                &format!(
                    "{:.2} {from} = {:.2} {to}",
                    record.amount, record.result
                ),
                StyleType::Result,
            ),
            String::new(),
            ui::style_text(
                &format!("Rate: 1 {from} = {:.4} {to}", record.exchange_rate),
                StyleType::Rate,
            ),
        ];

        if let Some(updated) = rates_updated {
            let time_ago = format_time_ago(now.signed_duration_since(updated), self.locale);
            lines.push(String::new());
            lines.push(ui::style_text(
                &format!(
                    "Last updated: {} ({time_ago})",
                    updated.format(DISPLAY_TIME_FORMAT)
                ),
                StyleType::Subtle,
            ));
        }

        lines.push(String::new());
        lines.push(ui::style_text(
            "════════════════════════════════════════",
            StyleType::Frame,
        ));
        lines.join("\n")
    }
}
