use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single stock position owned by the user. `id`, `symbol`,
/// `company_name` and `logo_url` are fixed at creation; the remaining
/// fields are replaced as a group when the holding is edited.
#[derive(Clone, Debug, Getters, new)]
pub struct Holding {
    id: Uuid,
    symbol: String,
    company_name: String,
    quantity: u32,
    purchase_price: Decimal,
    current_price: Decimal,
    purchase_date: NaiveDate,
    logo_url: String,
}

impl Holding {
    /// Replace the value fields from a submitted draft. Identity fields
    /// (`id`, `symbol`, `company_name`, `logo_url`) are untouched, so an
    /// edit can never blank out a previously known logo.
    pub fn apply_draft(&mut self, draft: &HoldingDraft) {
        self.quantity = *draft.quantity();
        self.purchase_price = *draft.purchase_price();
        self.current_price = *draft.current_price();
        self.purchase_date = *draft.purchase_date();
    }
}

/// Validated payload of the purchase/edit form. Carries no id: whether it
/// creates a new holding or replaces an existing one is decided by the
/// flow controller's mode, never inferred from the payload itself.
#[derive(Clone, Debug, Getters, new)]
pub struct HoldingDraft {
    symbol: String,
    company_name: String,
    quantity: u32,
    purchase_price: Decimal,
    current_price: Decimal,
    purchase_date: NaiveDate,
}

impl HoldingDraft {
    pub fn is_valid(&self) -> bool {
        self.quantity > 0 && self.purchase_price > Decimal::ZERO
    }
}
