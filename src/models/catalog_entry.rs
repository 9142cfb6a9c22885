use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::Timeframe;

/// Fixed description used when a symbol has no catalog entry.
pub const PLACEHOLDER_ABOUT: &str = "Description not available for this stock.";

/// Static reference data for a tradable symbol: display metadata,
/// fundamentals and a mocked price history per timeframe. Entries are
/// read-only; user flows never create or mutate them.
#[derive(Clone, Debug, Deserialize, Getters)]
pub struct CatalogEntry {
    symbol: String,
    company_name: String,
    logo_url: String,
    current_price: Decimal,
    change_percent: Decimal,
    market_cap: String,
    pe_ratio: String,
    dividend_yield: String,
    about: String,
    chart: ChartData,
}

impl CatalogEntry {
    /// Synthetic entry for a symbol the catalog does not know. The detail
    /// view must always render, so lookups have no failure mode.
    pub fn placeholder(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            company_name: symbol.to_string(),
            logo_url: String::new(),
            current_price: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            market_cap: String::new(),
            pe_ratio: String::new(),
            dividend_yield: String::new(),
            about: PLACEHOLDER_ABOUT.to_string(),
            chart: ChartData::default(),
        }
    }

    pub fn series(&self, timeframe: Timeframe) -> &[PricePoint] {
        match timeframe {
            Timeframe::Day => &self.chart.day,
            Timeframe::Week => &self.chart.week,
            Timeframe::Month => &self.chart.month,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChartData {
    #[serde(rename = "1D", default)]
    day: Vec<PricePoint>,
    #[serde(rename = "1W", default)]
    week: Vec<PricePoint>,
    #[serde(rename = "1M", default)]
    month: Vec<PricePoint>,
}

#[derive(Clone, Debug, Deserialize, Getters)]
pub struct PricePoint {
    time: String,
    value: Decimal,
}
