use anyhow::{Context, Result};

use crate::models::CatalogEntry;

pub use crate::models::catalog_entry::PLACEHOLDER_ABOUT;

/// Embedded reference dataset describing the tradable symbols. Loaded
/// once at startup and passed around by reference; lookups never fail,
/// an unknown symbol resolves to a placeholder entry.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn load() -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(include_str!("data.json"))
            .with_context(|| "Failed to parse embedded catalog data")?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Resolve a symbol to its catalog entry, or a synthetic placeholder
    /// when the symbol is unknown.
    pub fn get(&self, symbol: &str) -> CatalogEntry {
        self.entries
            .iter()
            .find(|entry| entry.symbol() == symbol)
            .cloned()
            .unwrap_or_else(|| CatalogEntry::placeholder(symbol))
    }

    /// Case-insensitive substring search over symbol and company name,
    /// in catalog order.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let query = query.trim().to_uppercase();
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.symbol().to_uppercase().contains(&query)
                    || entry.company_name().to_uppercase().contains(&query)
            })
            .collect()
    }
}
