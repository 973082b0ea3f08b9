use super::args::ConversionRequest;
use super::output::Presenter;
use super::ui::{self, StyleType};
use crate::Status;
use crate::core::{ConversionRecord, RateProvider, convert};
use crate::store::HistoryStore;
use anyhow::Result;
use chrono::Local;
use std::io::Write;
use tracing::{debug, warn};

/// Fetches rates once, then converts, saves and prints every target in order.
///
/// Succeeds when at least one target converted; a missing target currency or
/// an out of range result is reported and skipped.
pub async fn run<W: Write>(
    request: &ConversionRequest,
    provider: &dyn RateProvider,
    history: &HistoryStore,
    presenter: &Presenter,
    out: &mut W,
) -> Result<Status> {
    let spinner = presenter
        .is_text()
        .then(|| ui::new_spinner("Fetching latest exchange rates..."));
    let fetched = provider.latest(&request.from).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let snapshot = match fetched {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %format!("{e:#}"), base = %request.from, "Rate fetch failed");
            let message = format!("failed to fetch exchange rates: {e:#}");
            writeln!(out, "{}", presenter.error(&message)?)?;
            return Ok(Status::Failure);
        }
    };
    debug!(base = %snapshot.base, date = %snapshot.date, "Using rate snapshot");

    let mut converted = 0;
    for target in &request.targets {
        let conversion = match convert(request.amount, target, &snapshot) {
            Ok(conversion) => conversion,
            Err(e) => {
                warn!(currency = %target, "Conversion skipped: {e}");
                let rendered = if presenter.is_text() {
                    ui::style_text(
                        &format!("Conversion to {target} failed: {e}"),
                        StyleType::Error,
                    )
                } else {
                    presenter.error(&e.to_string())?
                };
                writeln!(out, "{rendered}")?;
                continue;
            }
        };

        let now = Local::now();
        let rates_updated = snapshot.updated_at();
        let record = ConversionRecord::new(&conversion, rates_updated.unwrap_or(now), now);
        history.append(record.clone());
        writeln!(out, "{}", presenter.conversion(&record, rates_updated, now)?)?;
        converted += 1;
    }

    if converted == 0 {
        return Ok(Status::Failure);
    }
    Ok(Status::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Locale, OutputFormat, RateSnapshot};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct FixedRates(Option<RateSnapshot>);

    #[async_trait]
    impl RateProvider for FixedRates {
        async fn latest(&self, base: &str) -> Result<RateSnapshot> {
            self.0
                .clone()
                .ok_or_else(|| anyhow!("Request error: connection refused for base currency: {base}"))
        }
    }

    fn usd_rates() -> FixedRates {
        FixedRates(Some(RateSnapshot {
            base: "USD".to_string(),
            date: "2024-05-01".to_string(),
            rates: HashMap::from([("RUB".to_string(), 90.0), ("EUR".to_string(), 0.9)]),
            time_last_updated: 1_714_521_601,
        }))
    }

    fn request(targets: &[&str]) -> ConversionRequest {
        request_for(targets, 100.0)
    }

    fn request_for(targets: &[&str], amount: f64) -> ConversionRequest {
        ConversionRequest {
            from: "USD".to_string(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
            amount,
        }
    }

    async fn run_with(
        provider: &FixedRates,
        targets: &[&str],
        format: OutputFormat,
    ) -> (Status, String, HistoryStore, TempDir) {
        console::set_colors_enabled(false);
        let dir = TempDir::new().unwrap();
        let history = HistoryStore::new(dir.path().join("history.json"));
        let presenter = Presenter::new(format, Locale::En);
        let mut out = Vec::new();

        let status = run(&request(targets), provider, &history, &presenter, &mut out)
            .await
            .unwrap();
        (status, String::from_utf8(out).unwrap(), history, dir)
    }

    #[tokio::test]
    async fn test_multiple_targets_are_converted_and_saved() {
        let (status, output, history, _dir) =
            run_with(&usd_rates(), &["RUB", "EUR"], OutputFormat::Text).await;

        assert_eq!(status, Status::Success);
        assert!(output.contains("100.00 USD = 9000.00 RUB"));
        assert!(output.contains("100.00 USD = 90.00 EUR"));

        let records = history.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].to_currency, "RUB");
        assert!((records[0].result - 9000.0).abs() < 1e-9);
        assert_eq!(records[1].to_currency, "EUR");
        assert!((records[1].result - 90.0).abs() < 1e-9);
        assert_eq!(records[1].rate_update_time.timestamp(), 1_714_521_601);
    }

    #[tokio::test]
    async fn test_single_missing_target_fails() {
        let (status, output, history, _dir) =
            run_with(&usd_rates(), &["XXX"], OutputFormat::Json).await;

        assert_eq!(status, Status::Failure);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "error": "currency XXX not found"})
        );
        assert!(history.load().is_none());
    }

    #[tokio::test]
    async fn test_partial_failure_still_succeeds() {
        let (status, output, history, _dir) =
            run_with(&usd_rates(), &["XXX", "EUR"], OutputFormat::Csv).await;

        assert_eq!(status, Status::Success);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "error,currency XXX not found");
        assert!(lines[1].ends_with(",USD,EUR,100.00,90.00,0.900000"));
        assert_eq!(history.records().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_target_in_text_mode() {
        let (status, output, _history, _dir) =
            run_with(&usd_rates(), &["GBP"], OutputFormat::Text).await;

        assert_eq!(status, Status::Failure);
        assert!(output.contains("Conversion to GBP failed: currency GBP not found"));
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let (status, output, history, _dir) =
            run_with(&FixedRates(None), &["EUR"], OutputFormat::Json).await;

        assert_eq!(status, Status::Failure);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("failed to fetch exchange rates: Request error")
        );
        assert!(history.load().is_none());
    }

    #[tokio::test]
    async fn test_overflowing_amount_keeps_history() {
        let dir = TempDir::new().unwrap();
        let history = HistoryStore::new(dir.path().join("history.json"));
        let presenter = Presenter::new(OutputFormat::Json, Locale::En);
        let provider = usd_rates();

        let mut out = Vec::new();
        let status = run(&request(&["RUB", "EUR"]), &provider, &history, &presenter, &mut out)
            .await
            .unwrap();
        assert_eq!(status, Status::Success);
        let before = std::fs::read_to_string(history.path()).unwrap();

        let mut out = Vec::new();
        let amount = crate::cli::args::parse_amount("1e308").unwrap();
        let status = run(&request_for(&["RUB"], amount), &provider, &history, &presenter, &mut out)
            .await
            .unwrap();

        assert_eq!(status, Status::Failure);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "conversion result out of range for RUB");
        assert_eq!(std::fs::read_to_string(history.path()).unwrap(), before);
        assert_eq!(history.records().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_update_time_is_not_shown() {
        let mut snapshot = usd_rates().0.unwrap();
        snapshot.time_last_updated = 0;
        let (status, output, history, _dir) =
            run_with(&FixedRates(Some(snapshot)), &["EUR"], OutputFormat::Text).await;

        assert_eq!(status, Status::Success);
        assert!(output.contains("100.00 USD = 90.00 EUR"));
        assert!(!output.contains("Last updated"));

        let records = history.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rate_update_time, records[0].timestamp);
    }
}
