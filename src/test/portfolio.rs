#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::app::Portfolio;
    use crate::models::HoldingDraft;

    fn draft() -> HoldingDraft {
        HoldingDraft::new(
            "INFY".to_string(),
            "Infosys Ltd.".to_string(),
            10,
            dec!(1400.00),
            dec!(1450.55),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut portfolio = Portfolio::seeded();
        let before = portfolio.holdings().len();

        portfolio.add(&draft(), "logo-url");

        assert_eq!(portfolio.holdings().len(), before + 1);
        let added = portfolio.holdings().last().unwrap();
        assert_eq!(added.symbol(), "INFY");
        assert_eq!(added.logo_url(), "logo-url");
        assert_eq!(*added.quantity(), 10);
    }

    #[test]
    fn consecutive_adds_get_distinct_ids() {
        let mut portfolio = Portfolio::new();
        let first = portfolio.add(&draft(), "");
        let second = portfolio.add(&draft(), "");

        assert_ne!(first, second);
    }

    #[test]
    fn add_then_delete_restores_prior_collection() {
        let mut portfolio = Portfolio::seeded();
        let before: Vec<Uuid> = portfolio.holdings().iter().map(|h| *h.id()).collect();

        let id = portfolio.add(&draft(), "");
        portfolio.delete(id);

        let after: Vec<Uuid> = portfolio.holdings().iter().map(|h| *h.id()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn update_replaces_values_and_preserves_identity() {
        let mut portfolio = Portfolio::new();
        let id = portfolio.add(&draft(), "L");

        let edit = HoldingDraft::new(
            "INFY".to_string(),
            "Infosys Ltd.".to_string(),
            50,
            dec!(120),
            dec!(1450.55),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        portfolio.update(id, &edit);

        let holding = portfolio.get(id).unwrap();
        assert_eq!(*holding.id(), id);
        assert_eq!(holding.symbol(), "INFY");
        assert_eq!(holding.company_name(), "Infosys Ltd.");
        assert_eq!(holding.logo_url(), "L");
        assert_eq!(*holding.quantity(), 50);
        assert_eq!(*holding.purchase_price(), dec!(120));
        assert_eq!(
            *holding.purchase_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn update_keeps_position_in_the_list() {
        let mut portfolio = Portfolio::seeded();
        let id = *portfolio.holdings()[1].id();
        let position_before = 1;

        let edit = HoldingDraft::new(
            "RELIANCE".to_string(),
            "Reliance Industries".to_string(),
            5,
            dec!(2000),
            dec!(2350.00),
            NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
        );
        portfolio.update(id, &edit);

        assert_eq!(*portfolio.holdings()[position_before].id(), id);
        assert_eq!(*portfolio.holdings()[position_before].quantity(), 5);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let mut portfolio = Portfolio::seeded();
        let before = portfolio.holdings().len();

        portfolio.delete(Uuid::new_v4());

        assert_eq!(portfolio.holdings().len(), before);
    }

    #[test]
    fn update_of_unknown_id_is_a_noop() {
        let mut portfolio = Portfolio::seeded();
        let before: Vec<u32> = portfolio.holdings().iter().map(|h| *h.quantity()).collect();

        portfolio.update(Uuid::new_v4(), &draft());

        let after: Vec<u32> = portfolio.holdings().iter().map(|h| *h.quantity()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn metrics_cover_the_seeded_holdings() {
        let portfolio = Portfolio::seeded();
        let metrics = portfolio.metrics();

        // 100 × 110.50 + 50 × 2400.00 + 25 × 1500.00
        assert_eq!(*metrics.total_investment(), dec!(168550.00));
        // 100 × 125.00 + 50 × 2350.00 + 25 × 1550.00
        assert_eq!(*metrics.total_current_value(), dec!(168750.00));
        assert_eq!(*metrics.total_gain_loss(), dec!(200.00));
    }
}
