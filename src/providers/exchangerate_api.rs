use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::core::rates::{RateProvider, RateSnapshot};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base: String,
    #[serde(default)]
    date: String,
    rates: HashMap<String, f64>,
    #[serde(default)]
    time_last_updated: i64,
}

impl From<LatestRatesResponse> for RateSnapshot {
    fn from(response: LatestRatesResponse) -> Self {
        RateSnapshot {
            base: response.base.to_uppercase(),
            date: response.date,
            rates: response
                .rates
                .into_iter()
                .map(|(code, rate)| (code.to_uppercase(), rate))
                .collect(),
            time_last_updated: response.time_last_updated,
        }
    }
}

/// Client for the exchangerate-api.com `latest` endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("curconv/1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "LatestRatesFetch", skip(self), fields(base = %base))]
    async fn latest(&self, base: &str) -> Result<RateSnapshot> {
        let url = format!("{}/{}", self.base_url, base.to_uppercase());
        debug!("Requesting exchange rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, base))?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response
            .text()
            .await
            .context("Failed to read response body")?;

        let data: LatestRatesResponse = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                error!(error = ?e, response = %text, "Failed to parse rates response");
                return Err(anyhow!("Failed to parse JSON response for {}: {}", base, e));
            }
        };

        debug!(count = data.rates.len(), "Received exchange rates");
        Ok(data.into())
    }
}
