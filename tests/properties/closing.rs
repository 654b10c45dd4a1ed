//! Property tests for closing report arithmetic.

use proptest::prelude::*;
use tempfile::tempdir;

use comanda::presentation::open_restaurant;
use comanda::{Config, Money};

const CATEGORIES: [&str; 3] = ["Starter", "Main", "Dessert"];

fn orders() -> impl Strategy<Value = Vec<Vec<(usize, u32)>>> {
    let line = (0..CATEGORIES.len(), 1u32..6);
    proptest::collection::vec(proptest::collection::vec(line, 1..4), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Revenue is the sum of order totals and the average divides it evenly.
    #[test]
    fn property_closing_totals_add_up(orders in orders()) {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.storage.root = dir.path().to_path_buf();
        let (mut r, _) = open_restaurant(&config).unwrap();
        for (i, category) in CATEGORIES.iter().enumerate() {
            r.add_dish(&format!("D{}", i), category, &format!("{}", (i + 1) * 1000), category)
                .unwrap();
        }

        for lines in &orders {
            let mut builder = r.begin_order("Guest").unwrap();
            for (dish, qty) in lines {
                r.add_to_order(&mut builder, &format!("D{}", dish), *qty).unwrap();
            }
            r.commit_order(builder).unwrap();
        }

        let expected: Money = r.orders().iter().map(|o| o.total()).sum();
        let units: u64 = orders.iter().flatten().map(|(_, q)| u64::from(*q)).sum();
        let report = r.generate_closing().unwrap();

        prop_assert_eq!(report.order_count(), orders.len());
        prop_assert_eq!(report.total_revenue(), expected);
        prop_assert!(
            (report.average_order().amount() * orders.len() as f64 - expected.amount()).abs() < 1e-6
        );
        prop_assert_eq!(report.items_sold, units);
        let best = report.best_category.as_ref().unwrap();
        prop_assert!(best.quantity > 0);
    }
}
