use crate::app::portfolio::Portfolio;
use crate::catalog::Catalog;
use crate::models::{CatalogEntry, Holding, HoldingDraft};

/// Which screen is on display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum View {
    Dashboard,
    Details,
}

/// Whether a submission creates a new holding or replaces an existing
/// one. Carried explicitly so the decision never has to be re-derived
/// from the submitted payload.
#[derive(Clone, Debug)]
pub enum FormMode {
    Add,
    Edit(Holding),
}

/// Outcome of a form submission, reported back to the event loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// State machine driving the dashboard/details cycle. Owns the active
/// catalog entry and the edit target while the detail view is open; the
/// holding store is only ever mutated from `submit` and `delete`.
#[derive(Debug)]
pub struct FlowController {
    view: View,
    active_entry: Option<CatalogEntry>,
    mode: FormMode,
}

impl FlowController {
    pub fn new() -> Self {
        Self {
            view: View::Dashboard,
            active_entry: None,
            mode: FormMode::Add,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_entry(&self) -> Option<&CatalogEntry> {
        self.active_entry.as_ref()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn edit_target(&self) -> Option<&Holding> {
        match &self.mode {
            FormMode::Add => None,
            FormMode::Edit(holding) => Some(holding),
        }
    }

    /// Open the detail view for a fresh search result. Any previous edit
    /// target is cleared: this is a pure add flow.
    pub fn select_from_search(&mut self, entry: CatalogEntry) {
        self.active_entry = Some(entry);
        self.mode = FormMode::Add;
        self.view = View::Details;
    }

    /// Open the detail view for an existing holding. The catalog entry is
    /// resolved by the holding's symbol, falling back to a placeholder,
    /// and the holding becomes the edit target.
    pub fn edit_holding(&mut self, holding: &Holding, catalog: &Catalog) {
        self.active_entry = Some(catalog.get(holding.symbol()));
        self.mode = FormMode::Edit(holding.clone());
        self.view = View::Details;
    }

    /// Apply a submitted draft to the store per the current mode, then
    /// return to the dashboard. Invalid drafts are rejected without
    /// touching the store and the detail view stays open.
    pub fn submit(&mut self, draft: &HoldingDraft, portfolio: &mut Portfolio) -> SubmitOutcome {
        if !draft.is_valid() {
            return SubmitOutcome::Rejected;
        }

        match &self.mode {
            FormMode::Add => {
                let logo_url = self
                    .active_entry
                    .as_ref()
                    .map(|entry| entry.logo_url().as_str())
                    .unwrap_or_default();
                portfolio.add(draft, logo_url);
            }
            FormMode::Edit(holding) => {
                portfolio.update(*holding.id(), draft);
            }
        }

        self.reset();
        SubmitOutcome::Accepted
    }

    /// Leave the detail view without mutating the store, discarding any
    /// in-progress form input.
    pub fn go_back(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.view = View::Dashboard;
        self.active_entry = None;
        self.mode = FormMode::Add;
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}
