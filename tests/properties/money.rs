//! Property tests for money parsing and display.

use proptest::prelude::*;

use comanda::Money;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Price parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = Money::parse(&s);
    }

    /// PROPERTY: Whole amounts display as `$` plus comma-grouped digits.
    #[test]
    fn property_display_groups_whole_amounts(amount in 0u64..10_000_000_000) {
        let shown = Money::new(amount as f64).to_string();
        let digits: String = shown
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();

        prop_assert!(shown.starts_with('$'));
        prop_assert_eq!(digits, amount.to_string());
        for group in shown.trim_start_matches('$').split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// PROPERTY: Multiplying by a quantity matches repeated addition.
    #[test]
    fn property_times_matches_sum(cents in 0u32..1_000_000, qty in 1u32..50) {
        let price = Money::new(f64::from(cents) / 100.0);
        let summed: Money = std::iter::repeat(price).take(qty as usize).sum();
        prop_assert!((price.times(qty).amount() - summed.amount()).abs() < 1e-6);
    }
}
