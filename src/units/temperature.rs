use super::Unit;

pub const KELVIN_OFFSET: f64 = 273.15;
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
pub const RANKINE_AT_ZERO_CELSIUS: f64 = 491.67;

/// Temperature scales.
///
/// Every scale is an affine transform of Celsius, which serves as the
/// canonical base. Going through a single base makes every ordered pair of
/// scales convertible without a pairwise formula table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Delisle,
    Newton,
    Reaumur,
}

impl Unit for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
        TemperatureUnit::Delisle,
        TemperatureUnit::Newton,
        TemperatureUnit::Reaumur,
    ];

    fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "°R",
            TemperatureUnit::Delisle => "°De",
            TemperatureUnit::Newton => "°N",
            TemperatureUnit::Reaumur => "°Ré",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
            TemperatureUnit::Rankine => (value - RANKINE_AT_ZERO_CELSIUS) * 5.0 / 9.0,
            // Delisle runs backwards from the boiling point of water.
            TemperatureUnit::Delisle => 100.0 - value * 2.0 / 3.0,
            TemperatureUnit::Newton => value * 100.0 / 33.0,
            TemperatureUnit::Reaumur => value * 5.0 / 4.0,
        }
    }

    fn from_base(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
            TemperatureUnit::Rankine => celsius * 9.0 / 5.0 + RANKINE_AT_ZERO_CELSIUS,
            TemperatureUnit::Delisle => (100.0 - celsius) * 3.0 / 2.0,
            TemperatureUnit::Newton => celsius * 33.0 / 100.0,
            TemperatureUnit::Reaumur => celsius * 4.0 / 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rankine_freezing_point_is_exact_both_ways() {
        assert_eq!(TemperatureUnit::Rankine.from_base(0.0), RANKINE_AT_ZERO_CELSIUS);
        assert_eq!(TemperatureUnit::Rankine.to_base(RANKINE_AT_ZERO_CELSIUS), 0.0);
    }

    #[test]
    fn every_scale_inverts_its_own_map() {
        for unit in TemperatureUnit::ALL {
            for value in [-40.0, 0.0, 36.6, 100.0, 1234.5] {
                let back = unit.to_base(unit.from_base(value));
                assert!((back - value).abs() < 1e-9, "{}: {value} -> {back}", unit.label());
            }
        }
    }
}
