//! Property tests for ticket file naming.

use chrono::NaiveDate;
use proptest::prelude::*;

use comanda::OrderNumber;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The number written into a ticket name is the number read back.
    #[test]
    fn property_ticket_name_recovers_number(
        n in 1u32..=u32::MAX,
        h in 0u32..24,
        m in 0u32..60,
        s in 0u32..60,
    ) {
        let number = OrderNumber::new(n).unwrap();
        let at = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap().and_hms_opt(h, m, s).unwrap();
        let name = format!("{}.txt", number.file_stem(at));

        prop_assert_eq!(OrderNumber::from_file_name(&name), Some(number));
        prop_assert!(name.starts_with(&number.file_prefix()));
    }

    /// PROPERTY: Filename parsing never panics and never yields zero.
    #[test]
    fn property_from_file_name_never_panics(s in "(?s).{0,64}") {
        if let Some(number) = OrderNumber::from_file_name(&s) {
            prop_assert!(number.value() > 0);
        }
    }

    /// PROPERTY: A number's prefix never matches a different number's ticket.
    #[test]
    fn property_prefixes_do_not_collide(a in 1u32..100_000, b in 1u32..100_000) {
        prop_assume!(a != b);
        let at = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let a = OrderNumber::new(a).unwrap();
        let b = OrderNumber::new(b).unwrap();
        prop_assert!(!b.file_stem(at).starts_with(&a.file_prefix()));
    }
}
