//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use std::collections::HashMap;

/// Rates for one base currency, as returned by a single provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    pub base: String,
    pub date: String,
    pub rates: HashMap<String, f64>,
    /// Unix seconds; 0 when the provider did not report it.
    pub time_last_updated: i64,
}

impl RateSnapshot {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&code.to_uppercase()).copied()
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        if self.time_last_updated == 0 {
            return None;
        }
        Local.timestamp_opt(self.time_last_updated, 0).single()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn latest(&self, base: &str) -> Result<RateSnapshot>;
}
