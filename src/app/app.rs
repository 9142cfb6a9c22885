use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{ListState, TableState},
};
use uuid::Uuid;

use crate::app::flow::{FlowController, SubmitOutcome, View};
use crate::app::form::PurchaseForm;
use crate::app::{Portfolio, ui};
use crate::catalog::Catalog;
use crate::models::Timeframe;

/// Input state of the symbol search popup.
pub struct SearchState {
    input: String,
    list_state: ListState,
}

impl SearchState {
    fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            input: String::new(),
            list_state,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    fn add_char(&mut self, c: char) {
        self.input.push(c);
        self.list_state.select(Some(0));
    }

    fn del_char(&mut self) {
        self.input.pop();
        self.list_state.select(Some(0));
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}

pub struct App {
    portfolio: Portfolio,
    catalog: Catalog,
    flow: FlowController,
    table_state: TableState,
    search: Option<SearchState>,
    form: Option<PurchaseForm>,
    confirm_delete: Option<Uuid>,
    timeframe: Timeframe,
}

impl App {
    pub fn new(portfolio: Portfolio, catalog: Catalog) -> Self {
        Self {
            portfolio,
            catalog,
            flow: FlowController::new(),
            table_state: TableState::default(),
            search: None,
            form: None,
            confirm_delete: None,
            timeframe: Timeframe::Day,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            let confirm_target = self
                .confirm_delete
                .and_then(|id| self.portfolio.get(id))
                .cloned();

            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.portfolio,
                    &self.catalog,
                    &self.flow,
                    &mut self.table_state,
                    self.search.as_mut(),
                    self.form.as_ref(),
                    confirm_target.as_ref(),
                    self.timeframe,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let quit = match self.flow.view() {
                    View::Dashboard => self.on_dashboard_key(key.code),
                    View::Details => self.on_details_key(key.code),
                };

                if quit {
                    return Ok(());
                }
            }
        }
    }

    fn on_dashboard_key(&mut self, code: KeyCode) -> bool {
        if let Some(id) = self.confirm_delete {
            match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.portfolio.delete(id);
                    self.confirm_delete = None;
                    if self.portfolio.holdings().is_empty() {
                        self.table_state.select(None);
                    } else if let Some(i) = self.table_state.selected() {
                        if i >= self.portfolio.holdings().len() {
                            self.table_state
                                .select(Some(self.portfolio.holdings().len() - 1));
                        }
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_delete = None;
                }
                _ => {}
            }
            return false;
        }

        if self.search.is_some() {
            self.on_search_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('/') => {
                self.search = Some(SearchState::new());
            }
            KeyCode::Char('e') => {
                if let Some(holding) = self
                    .table_state
                    .selected()
                    .and_then(|i| self.portfolio.holdings().get(i))
                    .cloned()
                {
                    self.flow.edit_holding(&holding, &self.catalog);
                    self.form = Some(PurchaseForm::for_edit(&holding));
                    self.timeframe = Timeframe::Day;
                }
            }
            KeyCode::Char('d') => {
                if let Some(holding) = self
                    .table_state
                    .selected()
                    .and_then(|i| self.portfolio.holdings().get(i))
                {
                    self.confirm_delete = Some(*holding.id());
                }
            }
            KeyCode::Esc => {
                self.table_state.select(None);
            }
            KeyCode::Down => {
                let holdings = self.portfolio.holdings();
                if !holdings.is_empty() {
                    let i = match self.table_state.selected() {
                        Some(i) if i >= holdings.len() - 1 => 0,
                        Some(i) => i + 1,
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Up => {
                let holdings = self.portfolio.holdings();
                if !holdings.is_empty() {
                    let i = match self.table_state.selected() {
                        Some(0) | None => holdings.len() - 1,
                        Some(i) => i - 1,
                    };
                    self.table_state.select(Some(i));
                }
            }
            _ => {}
        }

        false
    }

    fn on_search_key(&mut self, code: KeyCode) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        let results_len = self.catalog.search(search.input()).len();

        match code {
            KeyCode::Esc => {
                self.search = None;
            }
            KeyCode::Enter => {
                let entry = search
                    .list_state
                    .selected()
                    .and_then(|i| self.catalog.search(search.input()).get(i).cloned())
                    .cloned();
                if let Some(entry) = entry {
                    self.form = Some(PurchaseForm::for_add(&entry));
                    self.flow.select_from_search(entry);
                    self.timeframe = Timeframe::Day;
                    self.search = None;
                }
            }
            KeyCode::Down => search.select_next(results_len),
            KeyCode::Up => search.select_previous(results_len),
            KeyCode::Backspace => search.del_char(),
            KeyCode::Char(c) => search.add_char(c),
            _ => {}
        }
    }

    fn on_details_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.flow.go_back();
                self.form = None;
            }
            KeyCode::Tab => {
                if let Some(form) = self.form.as_mut() {
                    form.focus_next();
                }
            }
            KeyCode::Left => {
                self.timeframe = self.timeframe.previous();
            }
            KeyCode::Right => {
                self.timeframe = self.timeframe.next();
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace => {
                if let Some(form) = self.form.as_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.form.as_mut() {
                    form.input(c);
                }
            }
            _ => {}
        }

        false
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let Some(entry) = self.flow.active_entry().cloned() else {
            return;
        };

        match form.to_draft(&entry) {
            Ok(draft) => match self.flow.submit(&draft, &mut self.portfolio) {
                SubmitOutcome::Accepted => {
                    self.form = None;
                }
                SubmitOutcome::Rejected => {
                    form.set_error("Quantity and price must be greater than zero");
                }
            },
            Err(e) => {
                form.set_error(&format!("{:#}", e));
            }
        }
    }
}
