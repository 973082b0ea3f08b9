use super::convert::Conversion;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One persisted history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Local>,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub result: f64,
    pub exchange_rate: f64,
    pub rate_update_time: DateTime<Local>,
}

impl ConversionRecord {
    pub fn new(
        conversion: &Conversion,
        rate_update_time: DateTime<Local>,
        timestamp: DateTime<Local>,
    ) -> Self {
        ConversionRecord {
            timestamp,
            from_currency: conversion.from.clone(),
            to_currency: conversion.to.clone(),
            amount: conversion.amount,
            result: conversion.result,
            exchange_rate: conversion.rate,
            rate_update_time,
        }
    }
}
