#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::app::form::{FormField, PurchaseForm};
    use crate::catalog::Catalog;
    use crate::models::Holding;

    fn entry() -> crate::models::CatalogEntry {
        Catalog::load().unwrap().get("TATASTEEL")
    }

    #[test]
    fn add_defaults_to_one_share_at_the_current_price() {
        let form = PurchaseForm::for_add(&entry());

        assert_eq!(form.quantity(), "1");
        assert_eq!(form.price(), "125.00");
        assert_eq!(form.focus(), FormField::Quantity);
    }

    #[test]
    fn edit_seeds_the_fields_from_the_holding() {
        let holding = Holding::new(
            Uuid::new_v4(),
            "TATASTEEL".to_string(),
            "Tata Steel Ltd.".to_string(),
            100,
            dec!(110.50),
            dec!(125.00),
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            "logo".to_string(),
        );
        let form = PurchaseForm::for_edit(&holding);

        assert_eq!(form.quantity(), "100");
        assert_eq!(form.price(), "110.50");
        assert_eq!(form.date(), "2023-10-15");
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = PurchaseForm::for_add(&entry());

        form.focus_next();
        assert_eq!(form.focus(), FormField::Price);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Date);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Quantity);
    }

    #[test]
    fn total_degrades_to_zero_on_junk_input() {
        let mut form = PurchaseForm::for_add(&entry());
        form.input('x');

        assert_eq!(form.total(), Decimal::ZERO);
    }

    #[test]
    fn total_is_quantity_times_price() {
        let entry = entry();
        let mut form = PurchaseForm::for_add(&entry);
        form.input('0'); // quantity "10"

        assert_eq!(form.total(), dec!(1250.00));
    }

    #[test]
    fn draft_carries_symbol_and_current_price_from_the_entry() {
        let entry = entry();
        let form = PurchaseForm::for_add(&entry);
        let draft = form.to_draft(&entry).unwrap();

        assert_eq!(draft.symbol(), "TATASTEEL");
        assert_eq!(*draft.current_price(), dec!(125.00));
        assert_eq!(*draft.quantity(), 1);
    }

    #[test]
    fn unparseable_date_fails_the_draft() {
        let entry = entry();
        let mut form = PurchaseForm::for_add(&entry);
        form.focus_next();
        form.focus_next();
        form.input('x'); // date now invalid

        assert!(form.to_draft(&entry).is_err());
    }
}
