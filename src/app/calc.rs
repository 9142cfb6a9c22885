use rust_decimal::Decimal;

use crate::models::{AggregateMetrics, Holding, HoldingMetrics, Trend};

/// Price a holding is valued at: its current price, or its own purchase
/// price when no current price is known. A holding without a live price
/// shows zero gain/loss instead of being excluded.
fn effective_price(holding: &Holding) -> Decimal {
    if *holding.current_price() > Decimal::ZERO {
        *holding.current_price()
    } else {
        *holding.purchase_price()
    }
}

fn percent_of(gain_loss: Decimal, investment: Decimal) -> Decimal {
    if investment > Decimal::ZERO {
        gain_loss / investment * Decimal::from(100)
    } else {
        Decimal::ZERO
    }
}

/// Per-holding breakdown with the same formulas as the aggregate, applied
/// at single-holding granularity.
pub fn breakdown(holding: &Holding) -> HoldingMetrics {
    let quantity = Decimal::from(*holding.quantity());
    let price = effective_price(holding);

    let investment = quantity * *holding.purchase_price();
    let current_value = quantity * price;
    let gain_loss = current_value - investment;

    HoldingMetrics::new(
        investment,
        current_value,
        gain_loss,
        percent_of(gain_loss, investment),
        price,
        Trend::of(gain_loss),
    )
}

/// Portfolio-wide totals over an ordered sequence of holdings. Pure:
/// identical input always yields identical output, and a zero total
/// investment yields a zero percentage change rather than a division
/// error.
pub fn aggregate(holdings: &[Holding]) -> AggregateMetrics {
    let mut total_investment = Decimal::ZERO;
    let mut total_current_value = Decimal::ZERO;

    for holding in holdings {
        let quantity = Decimal::from(*holding.quantity());
        total_investment += quantity * *holding.purchase_price();
        total_current_value += quantity * effective_price(holding);
    }

    let total_gain_loss = total_current_value - total_investment;

    AggregateMetrics::new(
        total_investment,
        total_current_value,
        total_gain_loss,
        percent_of(total_gain_loss, total_investment),
        Trend::of(total_gain_loss),
    )
}
