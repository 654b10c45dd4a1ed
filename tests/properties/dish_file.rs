//! Property tests for the dish file format.

use proptest::prelude::*;

use comanda::infrastructure::repositories::{decode_dish, encode_dish};
use comanda::{Dish, Money};

fn field() -> impl Strategy<Value = String> {
    // Single-line values without surrounding whitespace, as the format requires
    proptest::string::string_regex("[A-Za-z0-9áéíóúñ][A-Za-z0-9áéíóúñ :.-]{0,20}[A-Za-z0-9]")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding arbitrary text never panics.
    #[test]
    fn property_decode_never_panics(s in "(?s).{0,256}") {
        let _ = decode_dish(&s);
    }

    /// PROPERTY: Whatever the store writes, it reads back unchanged.
    #[test]
    fn property_written_dish_reads_back(
        id in "[A-Z][0-9]{1,4}",
        name in field(),
        category in field(),
        cents in 0u32..10_000_000,
        available in any::<bool>(),
    ) {
        let dish = Dish::new(id, name, Money::new(f64::from(cents) / 100.0), category)
            .with_availability(available);

        let decoded = decode_dish(&encode_dish(&dish)).unwrap();
        prop_assert_eq!(decoded, dish);
    }
}
