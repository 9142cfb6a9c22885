pub mod catalog_entry;
pub mod holding;
pub mod metrics;
pub mod timeframe;

pub use catalog_entry::{CatalogEntry, ChartData, PricePoint};
pub use holding::{Holding, HoldingDraft};
pub use metrics::{AggregateMetrics, HoldingMetrics, Trend};
pub use timeframe::Timeframe;
