#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::app::calc;
    use crate::models::{Holding, Trend};

    fn holding(quantity: u32, purchase_price: Decimal, current_price: Decimal) -> Holding {
        Holding::new(
            Uuid::new_v4(),
            "TATASTEEL".to_string(),
            "Tata Steel Ltd.".to_string(),
            quantity,
            purchase_price,
            current_price,
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            "logo".to_string(),
        )
    }

    #[test]
    fn aggregate_matches_reference_scenario() {
        let holdings = vec![holding(100, dec!(110.50), dec!(125.00))];
        let metrics = calc::aggregate(&holdings);

        assert_eq!(*metrics.total_investment(), dec!(11050));
        assert_eq!(*metrics.total_current_value(), dec!(12500));
        assert_eq!(*metrics.total_gain_loss(), dec!(1450));
        assert_eq!(metrics.percentage_change().round_dp(2), dec!(13.12));
        assert_eq!(*metrics.trend(), Trend::Positive);
    }

    #[test]
    fn gain_loss_identity_holds_over_mixed_holdings() {
        let holdings = vec![
            holding(100, dec!(110.50), dec!(125.00)),
            holding(50, dec!(2400.00), dec!(2350.00)),
            holding(25, dec!(1500.00), dec!(1550.00)),
        ];
        let metrics = calc::aggregate(&holdings);

        assert_eq!(
            *metrics.total_gain_loss(),
            *metrics.total_current_value() - *metrics.total_investment()
        );
    }

    #[test]
    fn empty_portfolio_yields_zero_percentage_not_an_error() {
        let metrics = calc::aggregate(&[]);

        assert_eq!(*metrics.total_investment(), Decimal::ZERO);
        assert_eq!(*metrics.total_current_value(), Decimal::ZERO);
        assert_eq!(*metrics.percentage_change(), Decimal::ZERO);
        assert_eq!(*metrics.trend(), Trend::Neutral);
    }

    #[test]
    fn zero_purchase_price_yields_zero_percentage() {
        let holdings = vec![holding(10, dec!(0), dec!(0))];
        let metrics = calc::aggregate(&holdings);

        assert_eq!(*metrics.total_investment(), Decimal::ZERO);
        assert_eq!(*metrics.percentage_change(), Decimal::ZERO);
    }

    #[test]
    fn missing_current_price_falls_back_to_purchase_price() {
        let metrics = calc::breakdown(&holding(10, dec!(200.00), Decimal::ZERO));

        assert_eq!(*metrics.effective_price(), dec!(200.00));
        assert_eq!(*metrics.current_value(), dec!(2000.00));
        assert_eq!(*metrics.gain_loss(), Decimal::ZERO);
        assert_eq!(*metrics.trend(), Trend::Neutral);
    }

    #[test]
    fn breakdown_applies_aggregate_formulas_per_holding() {
        let metrics = calc::breakdown(&holding(50, dec!(2400.00), dec!(2350.00)));

        assert_eq!(*metrics.investment(), dec!(120000.00));
        assert_eq!(*metrics.current_value(), dec!(117500.00));
        assert_eq!(*metrics.gain_loss(), dec!(-2500.00));
        assert_eq!(metrics.gain_loss_percent().round_dp(2), dec!(-2.08));
        assert_eq!(*metrics.trend(), Trend::Negative);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let holdings = vec![
            holding(100, dec!(110.50), dec!(125.00)),
            holding(25, dec!(1500.00), dec!(1550.00)),
        ];

        assert_eq!(calc::aggregate(&holdings), calc::aggregate(&holdings));
    }
}
