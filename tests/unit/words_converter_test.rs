// Property-based tests for the amount-in-words converter.
//
// The rendered phrase is baked into exported documents, so the converter
// must be deterministic and total over every valid 2-decimal amount.

use proptest::prelude::*;
use rust_decimal::Decimal;

use findoc::words::WordsConverter;

proptest! {
    #[test]
    fn words_are_deterministic(
        units in 0u64..1_000_000_000u64,
        paise in 0u32..100u32
    ) {
        let amount = Decimal::from(units) + Decimal::new(paise as i64, 2);
        let converter = WordsConverter::indian();

        let first = converter.to_words(amount).unwrap();
        let second = converter.to_words(amount).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn words_always_well_formed(
        units in 0u64..1_000_000_000u64,
        paise in 0u32..100u32
    ) {
        let amount = Decimal::from(units) + Decimal::new(paise as i64, 2);
        let phrase = WordsConverter::indian().to_words(amount).unwrap();

        prop_assert!(phrase.starts_with("Rupees "));
        prop_assert!(phrase.ends_with(" Only"));
        // no doubled spaces from omitted zero groups
        prop_assert!(!phrase.contains("  "), "doubled space in '{}'", phrase);
    }

    #[test]
    fn paise_rendered_iff_nonzero(
        units in 0u64..1_000_000u64,
        paise in 1u32..100u32
    ) {
        let converter = WordsConverter::indian();

        let with_paise = converter
            .to_words(Decimal::from(units) + Decimal::new(paise as i64, 2))
            .unwrap();
        let without = converter.to_words(Decimal::from(units)).unwrap();

        prop_assert!(with_paise.contains(" and "));
        prop_assert!(with_paise.contains("Paise"));
        prop_assert!(!without.contains("Paise"));
    }
}

#[test]
fn zero_renders_as_zero() {
    assert_eq!(
        WordsConverter::indian()
            .to_words(Decimal::ZERO)
            .unwrap(),
        "Rupees Zero Only"
    );
}

#[test]
fn subunit_only_amount_keeps_zero_integer_part() {
    let phrase = WordsConverter::indian()
        .to_words(Decimal::new(50, 2))
        .unwrap();
    assert_eq!(phrase, "Rupees Zero and Fifty Paise Only");
}

#[test]
fn lakh_grouping() {
    assert_eq!(
        WordsConverter::indian()
            .to_words(Decimal::from(150_000))
            .unwrap(),
        "Rupees One Lakh Fifty Thousand Only"
    );
}

#[test]
fn negative_amount_is_invalid() {
    use findoc::AppError;
    let err = WordsConverter::indian()
        .to_words(Decimal::from(-5))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));
}
