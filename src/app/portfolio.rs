use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::app::calc;
use crate::models::{AggregateMetrics, Holding, HoldingDraft};

/// Ordered collection of the user's holdings, the single source of truth
/// for the portfolio. Mutated only through `add`, `update` and `delete`;
/// everything else reads.
#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            holdings: Vec::new(),
        }
    }

    /// Sample holdings shown on first launch.
    pub fn seeded() -> Self {
        let mut portfolio = Self::new();

        for (symbol, name, quantity, buy, current, (year, month, day), logo) in [
            (
                "TATASTEEL",
                "Tata Steel Ltd.",
                100,
                dec!(110.50),
                dec!(125.00),
                (2023, 10, 15),
                "https://assets-netstorage.groww.in/stock-assets/logos/GSTK500470.png",
            ),
            (
                "RELIANCE",
                "Reliance Industries",
                50,
                dec!(2400.00),
                dec!(2350.00),
                (2023, 11, 1),
                "https://assets-netstorage.groww.in/stock-assets/logos/GSTK500325.png",
            ),
            (
                "HDFCBANK",
                "HDFC Bank",
                25,
                dec!(1500.00),
                dec!(1550.00),
                (2023, 9, 20),
                "https://assets-netstorage.groww.in/stock-assets/logos/GSTK500180.png",
            ),
        ] {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
            portfolio.holdings.push(Holding::new(
                Uuid::new_v4(),
                symbol.to_string(),
                name.to_string(),
                quantity,
                buy,
                current,
                date,
                logo.to_string(),
            ));
        }

        portfolio
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn get(&self, id: Uuid) -> Option<&Holding> {
        self.holdings.iter().find(|holding| *holding.id() == id)
    }

    pub fn metrics(&self) -> AggregateMetrics {
        calc::aggregate(&self.holdings)
    }

    /// Append a new holding from a submitted draft, taking the logo from
    /// the catalog entry the user was viewing. Returns the freshly
    /// assigned id.
    pub fn add(&mut self, draft: &HoldingDraft, logo_url: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.holdings.push(Holding::new(
            id,
            draft.symbol().clone(),
            draft.company_name().clone(),
            *draft.quantity(),
            *draft.purchase_price(),
            *draft.current_price(),
            *draft.purchase_date(),
            logo_url.to_string(),
        ));
        id
    }

    /// Replace the value fields of the holding with the given id, at its
    /// existing position. Identity fields and the stored logo survive the
    /// edit. No-op when the id is unknown.
    pub fn update(&mut self, id: Uuid, draft: &HoldingDraft) {
        if let Some(holding) = self.holdings.iter_mut().find(|holding| *holding.id() == id) {
            holding.apply_draft(draft);
        }
    }

    /// Remove the holding with the given id. Silently a no-op when no
    /// such holding exists.
    pub fn delete(&mut self, id: Uuid) {
        self.holdings.retain(|holding| *holding.id() != id);
    }
}
