#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use strum::IntoEnumIterator;

    use crate::catalog::{Catalog, PLACEHOLDER_ABOUT};
    use crate::models::Timeframe;

    #[test]
    fn embedded_dataset_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.entries().is_empty());
    }

    #[test]
    fn known_symbol_resolves_to_its_entry() {
        let catalog = Catalog::load().unwrap();
        let entry = catalog.get("TATASTEEL");

        assert_eq!(entry.company_name(), "Tata Steel Ltd.");
        assert_eq!(*entry.current_price(), dec!(125.00));
        assert!(!entry.series(Timeframe::Day).is_empty());
    }

    #[test]
    fn unknown_symbol_resolves_to_a_placeholder() {
        let catalog = Catalog::load().unwrap();
        let entry = catalog.get("ZZZZ");

        assert_eq!(entry.symbol(), "ZZZZ");
        assert_eq!(entry.about(), PLACEHOLDER_ABOUT);
        assert_eq!(*entry.current_price(), Decimal::ZERO);
        for timeframe in Timeframe::iter() {
            assert!(entry.series(timeframe).is_empty());
        }
    }

    #[test]
    fn search_matches_symbol_and_company_name_case_insensitively() {
        let catalog = Catalog::load().unwrap();

        let by_symbol = catalog.search("tata");
        assert!(by_symbol.iter().any(|e| e.symbol() == "TATASTEEL"));

        let by_name = catalog.search("reliance ind");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].symbol(), "RELIANCE");
    }

    #[test]
    fn empty_query_lists_the_whole_catalog() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.search("  ").len(), catalog.entries().len());
    }

    #[test]
    fn search_with_no_match_returns_nothing() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.search("QQQQQQ").is_empty());
    }
}
