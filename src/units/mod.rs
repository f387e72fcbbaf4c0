//! Unit definitions for every conversion category.
//!
//! Each fixed category has a typed unit enum that knows its display label and
//! how to move a value to and from the category's base unit. Currency is the
//! exception: its units come from a configurable [`RateTable`].

pub mod currency;
pub mod distance;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
pub mod weight;

pub use currency::{CurrencyRate, RateTable};
pub use distance::DistanceUnit;
pub use speed::SpeedUnit;
pub use temperature::TemperatureUnit;
pub use time::TimeUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;

/// A unit that converts through a single base unit of its category.
pub trait Unit: Copy + Eq + Send + Sync + 'static {
    /// Every unit of the category, in display order.
    const ALL: &'static [Self];

    /// Label shown in selectors and accepted by the engine.
    fn label(self) -> &'static str;

    /// Converts `value` expressed in this unit into the base unit.
    fn to_base(self, value: f64) -> f64;

    /// Converts `value` expressed in the base unit into this unit.
    fn from_base(self, value: f64) -> f64;

    /// Looks a unit up by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.label() == label)
    }
}

/// Converts between two units of the same category via the base unit.
pub fn convert_via_base<U: Unit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    to.from_base(from.to_base(value))
}
