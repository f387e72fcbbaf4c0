//! Property tests over the whole conversion catalog.

use proptest::prelude::*;
use tourist_converter::conversion::{
    ConversionEngine, ConversionError, CURRENCY, DISTANCE, SPEED, TEMPERATURE, TIME, VOLUME,
    WEIGHT,
};

const SCALED: [&str; 5] = [WEIGHT, DISTANCE, SPEED, VOLUME, TIME];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Any category of the default catalog together with two of its unit labels.
fn arb_category_units() -> impl Strategy<Value = (String, String, String)> {
    let engine = ConversionEngine::default();
    let catalog: Vec<(String, Vec<String>)> = engine
        .category_names()
        .into_iter()
        .map(|name| {
            let units = engine
                .units_for(name)
                .unwrap()
                .into_iter()
                .map(String::from)
                .collect();
            (name.to_string(), units)
        })
        .collect();
    (0..catalog.len()).prop_flat_map(move |i| {
        let (name, units) = catalog[i].clone();
        let n = units.len();
        (0..n, 0..n).prop_map(move |(a, b)| (name.clone(), units[a].clone(), units[b].clone()))
    })
}

proptest! {
    #[test]
    fn same_unit_returns_the_input(
        (category, unit, _) in arb_category_units(),
        value in -1.0e9f64..1.0e9,
    ) {
        let engine = ConversionEngine::default();
        prop_assert_eq!(engine.convert(&category, &unit, &unit, value).unwrap(), value);
    }

    #[test]
    fn there_and_back_recovers_the_value(
        (category, from, to) in arb_category_units(),
        value in -1.0e6f64..1.0e6,
    ) {
        let engine = ConversionEngine::default();
        let there = engine.convert(&category, &from, &to, value).unwrap();
        let back = engine.convert(&category, &to, &from, there).unwrap();
        prop_assert!(close(back, value), "{category}: {value} {from} -> {there} {to} -> {back}");
    }

    #[test]
    fn scaled_categories_preserve_zero_and_sign(
        (category, from, to) in arb_category_units(),
        value in 1.0e-3f64..1.0e6,
    ) {
        prop_assume!(SCALED.contains(&category.as_str()));
        let engine = ConversionEngine::default();
        prop_assert_eq!(engine.convert(&category, &from, &to, 0.0).unwrap(), 0.0);
        prop_assert!(engine.convert(&category, &from, &to, value).unwrap() > 0.0);
        prop_assert!(engine.convert(&category, &from, &to, -value).unwrap() < 0.0);
    }

    #[test]
    fn currency_cross_rate_goes_through_the_base(value in 0.0f64..1.0e6) {
        let engine = ConversionEngine::default();
        let direct = engine.convert(CURRENCY, "GBP", "JPY", value).unwrap();
        let via_usd = engine.convert(
            CURRENCY,
            "USD",
            "JPY",
            engine.convert(CURRENCY, "GBP", "USD", value).unwrap(),
        )
        .unwrap();
        prop_assert!(close(direct, via_usd));
    }

    #[test]
    fn unknown_units_are_rejected_in_every_category(
        (category, unit, _) in arb_category_units(),
        bogus in "[a-z]{3}[0-9]{2}",
    ) {
        let engine = ConversionEngine::default();
        let err = engine.convert(&category, &bogus, &unit, 1.0).unwrap_err();
        prop_assert!(
            matches!(err, ConversionError::UnknownUnit { .. }),
            "unexpected error: {:?}",
            err
        );
    }
}

#[test]
fn everyday_conversions() {
    let engine = ConversionEngine::default();
    assert_eq!(engine.convert(TEMPERATURE, "°C", "°F", 0.0).unwrap(), 32.0);
    assert_eq!(engine.convert(TEMPERATURE, "°F", "°C", 32.0).unwrap(), 0.0);
    assert_eq!(engine.convert(SPEED, "km/h", "m/s", 36.0).unwrap(), 10.0);
    assert_eq!(engine.convert(CURRENCY, "USD", "EUR", 100.0).unwrap(), 84.0);
    assert_eq!(engine.convert(VOLUME, "L", "mL", 1.0).unwrap(), 1000.0);
    assert_eq!(engine.convert(VOLUME, "L", "mL", 2.5).unwrap(), 2500.0);
    let there = engine.convert(CURRENCY, "USD", "EUR", 1.0).unwrap();
    let back = engine.convert(CURRENCY, "EUR", "USD", 1.0).unwrap();
    assert!(close(there * back, 1.0));
    assert_eq!(engine.convert(TIME, "hours", "minutes", 1.5).unwrap(), 90.0);
    assert!(close(
        engine.convert(WEIGHT, "kg", "lb", 1.0).unwrap(),
        2.2046226218487757
    ));
    assert!(close(
        engine.convert(DISTANCE, "km", "mi", 1.0).unwrap(),
        0.621371192237334
    ));
}

#[test]
fn unknown_category_is_reported_by_name() {
    let engine = ConversionEngine::default();
    match engine.convert("Pressure", "bar", "psi", 1.0) {
        Err(ConversionError::UnknownCategory(name)) => assert_eq!(name, "Pressure"),
        other => panic!("expected unknown category, got {other:?}"),
    }
}

#[test]
fn membership_is_checked_before_identity() {
    let engine = ConversionEngine::default();
    assert!(matches!(
        engine.convert(WEIGHT, "parsec", "parsec", 1.0),
        Err(ConversionError::UnknownUnit { .. })
    ));
    // a unit from a different category is still foreign here
    assert!(matches!(
        engine.convert(WEIGHT, "km", "km", 1.0),
        Err(ConversionError::UnknownUnit { .. })
    ));
}
