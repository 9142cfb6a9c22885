use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn parse_date(field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .with_context(|| format!("Failed to parse date '{}'", field))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_quantity(field: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .with_context(|| format!("Failed to parse quantity '{}'", field))
}

pub fn format_currency(value: Decimal) -> String {
    format!("₹{:.2}", value)
}

/// Gain/loss with an explicit sign and the percentage alongside, e.g.
/// "+₹1450.00 (13.12%)".
pub fn format_gain_loss(gain_loss: Decimal, percent: Decimal) -> String {
    let sign = if gain_loss < Decimal::ZERO { "-" } else { "+" };
    format!("{}₹{:.2} ({:.2}%)", sign, gain_loss.abs(), percent.abs())
}
