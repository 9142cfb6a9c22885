use chrono::Local;
use rust_decimal::Decimal;

use crate::app::utils;
use crate::models::{CatalogEntry, Holding, HoldingDraft};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Quantity,
    Price,
    Date,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Quantity => FormField::Price,
            FormField::Price => FormField::Date,
            FormField::Date => FormField::Quantity,
        }
    }
}

/// Raw text buffers behind the buy/edit panel. Parsing and validation
/// happen on submit; until then any input is kept as typed.
#[derive(Clone, Debug)]
pub struct PurchaseForm {
    quantity: String,
    price: String,
    date: String,
    focus: FormField,
    error: Option<String>,
}

impl PurchaseForm {
    /// Defaults for a fresh purchase: one share at the entry's current
    /// price, dated today.
    pub fn for_add(entry: &CatalogEntry) -> Self {
        Self {
            quantity: "1".to_string(),
            price: format!("{:.2}", entry.current_price()),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            focus: FormField::Quantity,
            error: None,
        }
    }

    /// Seed the fields from the holding being edited.
    pub fn for_edit(holding: &Holding) -> Self {
        Self {
            quantity: holding.quantity().to_string(),
            price: format!("{:.2}", holding.purchase_price()),
            date: holding.purchase_date().format("%Y-%m-%d").to_string(),
            focus: FormField::Quantity,
            error: None,
        }
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn input(&mut self, c: char) {
        self.error = None;
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.field_mut().pop();
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Quantity => &mut self.quantity,
            FormField::Price => &mut self.price,
            FormField::Date => &mut self.date,
        }
    }

    /// Quantity × price for the live total line. Unparseable fields count
    /// as zero here so the display degrades instead of erroring.
    pub fn total(&self) -> Decimal {
        let quantity = self
            .quantity
            .parse::<Decimal>()
            .unwrap_or(Decimal::ZERO);
        let price = self.price.parse::<Decimal>().unwrap_or(Decimal::ZERO);
        quantity * price
    }

    /// Build the submission payload. Symbol, company name and current
    /// price come from the catalog entry on display; the id (if any)
    /// stays with the flow controller's mode.
    pub fn to_draft(&self, entry: &CatalogEntry) -> anyhow::Result<HoldingDraft> {
        let quantity = utils::parse_quantity(&self.quantity)?;
        let price = utils::parse_decimal(&self.price, "price")?;
        let date = utils::parse_date(&self.date)?;

        Ok(HoldingDraft::new(
            entry.symbol().clone(),
            entry.company_name().clone(),
            quantity,
            price,
            *entry.current_price(),
            date,
        ))
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
