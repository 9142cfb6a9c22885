use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, List, ListItem, Paragraph,
        Row, Table, TableState, Tabs, Wrap,
    },
};
use rust_decimal::prelude::ToPrimitive;
use strum::IntoEnumIterator;

use crate::app::app::SearchState;
use crate::app::flow::{FlowController, View};
use crate::app::form::{FormField, PurchaseForm};
use crate::app::{Portfolio, calc, utils};
use crate::catalog::Catalog;
use crate::models::{CatalogEntry, Holding, Timeframe, Trend};

fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Positive => Color::Green,
        Trend::Negative => Color::Red,
        Trend::Neutral => Color::DarkGray,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    catalog: &Catalog,
    flow: &FlowController,
    table_state: &mut TableState,
    search: Option<&mut SearchState>,
    form: Option<&PurchaseForm>,
    confirm: Option<&Holding>,
    timeframe: Timeframe,
) {
    match flow.view() {
        View::Dashboard => {
            render_dashboard(frame, portfolio, table_state);
            if let Some(search) = search {
                render_search_popup(frame, catalog, search);
            }
            if let Some(holding) = confirm {
                render_confirm_popup(frame, holding);
            }
        }
        View::Details => {
            if let Some(entry) = flow.active_entry() {
                render_details(frame, flow, entry, form, timeframe);
            }
        }
    }
}

fn render_dashboard(frame: &mut Frame, portfolio: &Portfolio, table_state: &mut TableState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("My Portfolio")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_summary_cards(frame, portfolio, chunks[1]);
    render_holdings_table(frame, portfolio, table_state, chunks[2]);

    let hint = Paragraph::new("/: search  e: edit  d: delete  ↑/↓: select  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[3]);
}

fn render_summary_cards(frame: &mut Frame, portfolio: &Portfolio, area: Rect) {
    if portfolio.holdings().is_empty() {
        let empty = Paragraph::new("Start adding stocks to see your portfolio summary.")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .title("Your Portfolio Summary")
                    .borders(Borders::ALL),
            );
        frame.render_widget(empty, area);
        return;
    }

    let metrics = portfolio.metrics();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let current_value = Paragraph::new(utils::format_currency(*metrics.total_current_value()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().title("Current Value").borders(Borders::ALL));
    frame.render_widget(current_value, cards[0]);

    let investment = Paragraph::new(utils::format_currency(*metrics.total_investment()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title("Total Investment")
                .borders(Borders::ALL),
        );
    frame.render_widget(investment, cards[1]);

    let arrow = match metrics.trend() {
        Trend::Positive => "▲",
        Trend::Negative => "▼",
        Trend::Neutral => "−",
    };
    let returns = Paragraph::new(format!(
        "{} {}",
        utils::format_gain_loss(*metrics.total_gain_loss(), *metrics.percentage_change()),
        arrow
    ))
    .style(
        Style::default()
            .fg(trend_color(*metrics.trend()))
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().title("Total Returns").borders(Borders::ALL));
    frame.render_widget(returns, cards[2]);
}

fn render_holdings_table(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    area: Rect,
) {
    let holdings = portfolio.holdings();

    if holdings.is_empty() {
        let empty = Paragraph::new("Nothing here yet. Press / to search and add your first stock.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header_cells = ["Symbol", "Company", "Qty", "Avg. Price", "LTP", "Cur. Value", "P&L"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = holdings.iter().map(|holding| {
        let metrics = calc::breakdown(holding);
        let pnl_color = trend_color(*metrics.trend());

        let cells = [
            Cell::from(holding.symbol().clone())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(holding.company_name().clone()),
            Cell::from(holding.quantity().to_string()),
            Cell::from(utils::format_currency(*holding.purchase_price())),
            Cell::from(utils::format_currency(*metrics.effective_price())),
            Cell::from(utils::format_currency(*metrics.current_value())),
            Cell::from(utils::format_gain_loss(
                *metrics.gain_loss(),
                *metrics.gain_loss_percent(),
            ))
            .style(Style::default().fg(pnl_color)),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(28),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(24),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_search_popup(frame: &mut Frame, catalog: &Catalog, search: &mut SearchState) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::raw("> "),
        Span::styled(
            search.input().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().title("Search Stocks").borders(Borders::ALL));
    frame.render_widget(input, chunks[0]);

    let results = catalog.search(search.input());
    let items: Vec<ListItem> = results
        .iter()
        .map(|entry| {
            ListItem::new(format!(
                "{}  {}  {}",
                entry.symbol(),
                entry.company_name(),
                utils::format_currency(*entry.current_price()),
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Enter: select  Esc: cancel")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, chunks[1], search.list_state_mut());
}

fn render_confirm_popup(frame: &mut Frame, holding: &Holding) {
    let area = centered_rect(44, 14, frame.area());
    frame.render_widget(Clear, area);

    let message = Paragraph::new(format!(
        "Are you sure you want to delete {} ({})?\n\ny: delete  n: cancel",
        holding.symbol(),
        holding.company_name()
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Delete Holding")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(message, area);
}

fn render_details(
    frame: &mut Frame,
    flow: &FlowController,
    entry: &CatalogEntry,
    form: Option<&PurchaseForm>,
    timeframe: Timeframe,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_details_header(frame, entry, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_details_left(frame, entry, timeframe, body[0]);
    render_form_panel(frame, flow, entry, form, body[1]);

    let hint =
        Paragraph::new("Enter: submit  Tab: next field  ←/→: timeframe  Esc: back to dashboard")
            .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);
}

fn render_details_header(frame: &mut Frame, entry: &CatalogEntry, area: Rect) {
    let change = *entry.change_percent();
    let sign = if change > rust_decimal::Decimal::ZERO {
        "+"
    } else {
        ""
    };
    let lines = vec![
        Line::from(Span::styled(
            entry.company_name().clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                utils::format_currency(*entry.current_price()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{}{:.2}% (1D)", sign, change),
                Style::default().fg(trend_color(Trend::of(change))),
            ),
        ]),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_details_left(frame: &mut Frame, entry: &CatalogEntry, timeframe: Timeframe, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(7),
        ])
        .split(area);

    let titles: Vec<Line> = Timeframe::iter().map(|t| Line::from(t.to_string())).collect();
    let selected = Timeframe::iter().position(|t| t == timeframe).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, chunks[0]);

    render_price_chart(frame, entry, timeframe, chunks[1]);

    let fundamentals = Paragraph::new(vec![
        Line::from(format!("Market Cap      {}", entry.market_cap())),
        Line::from(format!("P/E Ratio       {}", entry.pe_ratio())),
        Line::from(format!("Dividend Yield  {}", entry.dividend_yield())),
        Line::from(format!("Symbol          {}", entry.symbol())),
    ])
    .block(Block::default().title("Fundamentals").borders(Borders::ALL));
    frame.render_widget(fundamentals, chunks[2]);

    let about = Paragraph::new(entry.about().clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!("About {}", entry.company_name()))
                .borders(Borders::ALL),
        );
    frame.render_widget(about, chunks[3]);
}

fn render_price_chart(frame: &mut Frame, entry: &CatalogEntry, timeframe: Timeframe, area: Rect) {
    let series = entry.series(timeframe);

    if series.is_empty() {
        let empty = Paragraph::new("No chart data available.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Price").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value().to_f64().unwrap_or_default()))
        .collect();

    let min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.1).max(0.5);

    // Line needs at least two points to draw anything
    let graph_type = if points.len() < 2 {
        GraphType::Scatter
    } else {
        GraphType::Line
    };

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(graph_type)
            .style(Style::default().fg(Color::Green))
            .data(&points),
    ];

    let x_labels = vec![
        Span::raw(series[0].time().clone()),
        Span::raw(series[series.len() - 1].time().clone()),
    ];
    let y_labels = vec![
        Span::raw(format!("{:.2}", min - pad)),
        Span::raw(format!("{:.2}", max + pad)),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title("Price").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len() - 1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([min - pad, max + pad])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_form_panel(
    frame: &mut Frame,
    flow: &FlowController,
    entry: &CatalogEntry,
    form: Option<&PurchaseForm>,
    area: Rect,
) {
    let Some(form) = form else {
        return;
    };

    let is_edit = flow.edit_target().is_some();
    let title = if is_edit {
        format!("Edit {}", entry.symbol())
    } else {
        format!("Buy {}", entry.symbol())
    };

    let field_line = |label: &str, value: &str, field: FormField| -> Line<'static> {
        let style = if form.focus() == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value.to_string(), style),
        ])
    };

    let mut lines = vec![
        field_line("Quantity (Shares)", form.quantity(), FormField::Quantity),
        Line::from(""),
        field_line("Price (₹)", form.price(), FormField::Price),
        Line::from(""),
        field_line("Date", form.date(), FormField::Date),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Amount      ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                utils::format_currency(form.total()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            if is_edit {
                "Enter: UPDATE HOLDING"
            } else {
                "Enter: BUY"
            },
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(error) = form.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
