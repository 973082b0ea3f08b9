use super::rates::RateSnapshot;
use anyhow::{Result, anyhow, bail};

/// Outcome of converting an amount into one target currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    pub rate: f64,
}

/// Converts `amount` of the snapshot's base currency into `target`.
pub fn convert(amount: f64, target: &str, snapshot: &RateSnapshot) -> Result<Conversion> {
    let to = target.trim().to_uppercase();
    let rate = snapshot
        .rate(&to)
        .ok_or_else(|| anyhow!("currency {to} not found"))?;

    // A non-finite result would serialize as null and break the history file.
    let result = amount * rate;
    if !result.is_finite() {
        bail!("conversion result out of range for {to}");
    }

    Ok(Conversion {
        from: snapshot.base.to_uppercase(),
        to,
        amount,
        result,
        rate,
    })
}
