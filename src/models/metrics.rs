use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Sign classification of a gain/loss figure, used by the presentation
/// layer to pick a colour.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn of(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            Trend::Positive
        } else if value < Decimal::ZERO {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }
}

/// Portfolio-wide totals. Derived on every read, never stored.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct AggregateMetrics {
    total_investment: Decimal,
    total_current_value: Decimal,
    total_gain_loss: Decimal,
    percentage_change: Decimal,
    trend: Trend,
}

/// The same figures at single-holding granularity, for the list view.
/// `effective_price` is the price the row is valued at after the
/// missing-price fallback.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct HoldingMetrics {
    investment: Decimal,
    current_value: Decimal,
    gain_loss: Decimal,
    gain_loss_percent: Decimal,
    effective_price: Decimal,
    trend: Trend,
}
