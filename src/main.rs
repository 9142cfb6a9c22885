use anyhow::Result;
use clap::Parser;

use holdings_tui::app::{App, Portfolio};
use holdings_tui::catalog::Catalog;

/// A terminal-based stock holdings dashboard with mock market data.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Start with an empty portfolio instead of the sample holdings
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = Catalog::load()?;
    let portfolio = if cli.empty {
        Portfolio::new()
    } else {
        Portfolio::seeded()
    };

    let mut app = App::new(portfolio, catalog);
    app.run()
}
