//! The conversion engine: a fixed catalog of categories, each converting
//! between its own units.

use std::marker::PhantomData;

use thiserror::Error;
use tracing::debug;

use crate::units::{
    convert_via_base, DistanceUnit, RateTable, SpeedUnit, TemperatureUnit, TimeUnit, Unit,
    VolumeUnit, WeightUnit,
};
use crate::units::currency::RateTableError;

pub const CURRENCY: &str = "Currency";
pub const WEIGHT: &str = "Weight";
pub const TEMPERATURE: &str = "Temperature";
pub const DISTANCE: &str = "Distance";
pub const SPEED: &str = "Speed";
pub const VOLUME: &str = "Volume";
pub const TIME: &str = "Time";

/// Errors produced by a conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The category name is not part of the catalog.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// The unit label is not a member of the category.
    #[error("unknown unit {unit:?} in category {category}")]
    UnknownUnit { category: String, unit: String },
}

/// A conversion domain with a closed set of mutually convertible units.
pub trait Category: Send + Sync {
    fn name(&self) -> &str;

    /// Unit labels in display order. The first two are the default
    /// "from"/"to" selection.
    fn units(&self) -> Vec<&str>;

    /// Converts `value` from one unit of this category to another.
    ///
    /// Both labels must belong to the category. Equal labels return `value`
    /// unchanged.
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError>;
}

/// A category whose units all convert through one base unit, either by a
/// scale factor (weight, distance, ...) or by an affine map (temperature).
struct BaseUnitCategory<U> {
    name: &'static str,
    _unit: PhantomData<U>,
}

impl<U: Unit> BaseUnitCategory<U> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            _unit: PhantomData,
        }
    }

    fn unit(&self, label: &str) -> Result<U, ConversionError> {
        U::from_label(label).ok_or_else(|| unknown_unit(self.name, label))
    }
}

impl<U: Unit> Category for BaseUnitCategory<U> {
    fn name(&self) -> &str {
        self.name
    }

    fn units(&self) -> Vec<&str> {
        U::ALL.iter().map(|u| u.label()).collect()
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from = self.unit(from)?;
        let to = self.unit(to)?;
        Ok(convert_via_base(value, from, to))
    }
}

/// Currency conversion through the reference currency of a [`RateTable`].
struct CurrencyCategory {
    rates: RateTable,
}

impl CurrencyCategory {
    fn rate(&self, code: &str) -> Result<f64, ConversionError> {
        self.rates
            .rate(code)
            .ok_or_else(|| unknown_unit(CURRENCY, code))
    }
}

impl Category for CurrencyCategory {
    fn name(&self) -> &str {
        CURRENCY
    }

    fn units(&self) -> Vec<&str> {
        self.rates.codes().collect()
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        if from == to {
            return Ok(value);
        }
        let base = value / from_rate;
        Ok(base * to_rate)
    }
}

fn unknown_unit(category: &str, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category: category.to_string(),
        unit: unit.to_string(),
    }
}

/// Owns the immutable category catalog.
///
/// The engine holds no mutable state, so a shared reference can be used from
/// any number of threads. To pick up new exchange rates, build a new engine.
pub struct ConversionEngine {
    categories: Vec<Box<dyn Category>>,
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::with_valid_rates(RateTable::default())
    }
}

impl ConversionEngine {
    /// Builds the catalog around the given exchange rates.
    pub fn new(rates: RateTable) -> Result<Self, RateTableError> {
        rates.validate()?;
        Ok(Self::with_valid_rates(rates))
    }

    fn with_valid_rates(rates: RateTable) -> Self {
        debug!(base = %rates.base, currencies = rates.rates.len(), "building conversion catalog");
        let categories: Vec<Box<dyn Category>> = vec![
            Box::new(CurrencyCategory { rates }),
            Box::new(BaseUnitCategory::<WeightUnit>::new(WEIGHT)),
            Box::new(BaseUnitCategory::<TemperatureUnit>::new(TEMPERATURE)),
            Box::new(BaseUnitCategory::<DistanceUnit>::new(DISTANCE)),
            Box::new(BaseUnitCategory::<SpeedUnit>::new(SPEED)),
            Box::new(BaseUnitCategory::<VolumeUnit>::new(VOLUME)),
            Box::new(BaseUnitCategory::<TimeUnit>::new(TIME)),
        ];
        Self { categories }
    }

    /// The fixed catalog in display order.
    pub fn list_categories(&self) -> impl Iterator<Item = &dyn Category> + '_ {
        self.categories.iter().map(|c| c.as_ref())
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.list_categories().map(|c| c.name()).collect()
    }

    pub fn category(&self, name: &str) -> Result<&dyn Category, ConversionError> {
        self.list_categories()
            .find(|c| c.name() == name)
            .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
    }

    pub fn units_for(&self, name: &str) -> Result<Vec<&str>, ConversionError> {
        Ok(self.category(name)?.units())
    }

    /// The initial from/to selection for a category: its first two units.
    pub fn default_pair(&self, name: &str) -> Result<(&str, &str), ConversionError> {
        let units = self.units_for(name)?;
        match units.as_slice() {
            [from, to, ..] => Ok((*from, *to)),
            [only] => Ok((*only, *only)),
            [] => Err(ConversionError::UnknownCategory(name.to_string())),
        }
    }

    /// Converts `value` from `from` to `to` within `category`.
    ///
    /// Returns full precision; see [`format_result`] for display.
    pub fn convert(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, ConversionError> {
        let result = self.category(category)?.convert(value, from, to);
        if let Err(err) = &result {
            debug!(%err, "conversion rejected");
        }
        result
    }
}

/// Formats a conversion result the way every front end displays it.
pub fn format_result(value: f64) -> String {
    format!("{value:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn catalog_order_and_defaults() {
        let engine = ConversionEngine::default();
        assert_eq!(
            engine.category_names(),
            vec![CURRENCY, WEIGHT, TEMPERATURE, DISTANCE, SPEED, VOLUME, TIME]
        );
        assert_eq!(engine.default_pair(CURRENCY), Ok(("USD", "EUR")));
        assert_eq!(engine.default_pair(TEMPERATURE), Ok(("°C", "°F")));
        assert_eq!(engine.default_pair(TIME), Ok(("seconds", "minutes")));
    }

    #[test]
    fn known_scenarios() {
        let engine = ConversionEngine::default();
        assert_close(engine.convert(WEIGHT, "kg", "lb", 1.0).unwrap(), 2.2046226218487757);
        assert_eq!(engine.convert(TEMPERATURE, "°C", "°F", 0.0), Ok(32.0));
        assert_eq!(engine.convert(TEMPERATURE, "°F", "°C", 32.0), Ok(0.0));
        assert_close(engine.convert(DISTANCE, "km", "mi", 1.0).unwrap(), 0.621371192237334);
        assert_eq!(engine.convert(SPEED, "km/h", "m/s", 36.0), Ok(10.0));
        assert_eq!(engine.convert(VOLUME, "L", "mL", 1.0), Ok(1000.0));
        assert_eq!(engine.convert(TIME, "hours", "minutes", 2.0), Ok(120.0));
    }

    #[test]
    fn temperature_covers_every_scale() {
        let engine = ConversionEngine::default();
        // Boiling point of water on each scale.
        let boiling = [
            ("°F", 212.0),
            ("K", 373.15),
            ("°R", 671.67),
            ("°De", 0.0),
            ("°N", 33.0),
            ("°Ré", 80.0),
        ];
        for (unit, expected) in boiling {
            assert_close(engine.convert(TEMPERATURE, "°C", unit, 100.0).unwrap(), expected);
            assert_close(engine.convert(TEMPERATURE, unit, "°C", expected).unwrap(), 100.0);
        }
        assert_close(engine.convert(TEMPERATURE, "K", "°F", 0.0).unwrap(), -459.67);
    }

    #[test]
    fn currency_goes_through_the_reference_rate() {
        let engine = ConversionEngine::default();
        assert_close(engine.convert(CURRENCY, "USD", "JPY", 2.0).unwrap(), 219.3);
        assert_close(engine.convert(CURRENCY, "EUR", "GBP", 0.84).unwrap(), 0.72);
    }

    #[test]
    fn unknown_category_and_unit_are_reported() {
        let engine = ConversionEngine::default();
        assert_eq!(
            engine.convert("Pressure", "bar", "psi", 1.0),
            Err(ConversionError::UnknownCategory("Pressure".into()))
        );
        assert!(matches!(
            engine.units_for("weight"),
            Err(ConversionError::UnknownCategory(_))
        ));
        assert_eq!(
            engine.convert(WEIGHT, "kg", "stones", 1.0),
            Err(ConversionError::UnknownUnit {
                category: WEIGHT.into(),
                unit: "stones".into()
            })
        );
        assert!(engine.convert(CURRENCY, "XYZ", "USD", 1.0).is_err());
    }

    #[test]
    fn identity_still_checks_membership() {
        let engine = ConversionEngine::default();
        assert_eq!(engine.convert(TEMPERATURE, "°Ré", "°Ré", -3.5), Ok(-3.5));
        assert!(engine.convert(TEMPERATURE, "Celsius", "Celsius", 1.0).is_err());
        assert!(engine.convert(CURRENCY, "XYZ", "XYZ", 1.0).is_err());
    }

    #[test]
    fn custom_rates_replace_the_currency_units() {
        let rates: RateTable = toml::from_str(
            r#"
            base = "EUR"
            rates = [{ code = "EUR", rate = 1.0 }, { code = "THB", rate = 39.5 }]
            "#,
        )
        .unwrap();
        let engine = ConversionEngine::new(rates).unwrap();
        assert_eq!(engine.units_for(CURRENCY).unwrap(), vec!["EUR", "THB"]);
        assert_close(engine.convert(CURRENCY, "EUR", "THB", 10.0).unwrap(), 395.0);
        assert!(engine.convert(CURRENCY, "USD", "EUR", 1.0).is_err());
    }

    #[test]
    fn invalid_rates_are_refused() {
        let mut rates = RateTable::default();
        rates.rates[1].rate = -1.0;
        assert!(ConversionEngine::new(rates).is_err());
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConversionEngine>();
    }

    #[test]
    fn format_uses_four_decimals() {
        assert_eq!(format_result(2.204622621848776), "2.2046");
        assert_eq!(format_result(32.0), "32.0000");
    }
}
