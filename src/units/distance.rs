use super::Unit;

pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_YARD: f64 = 0.9144;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_INCH: f64 = 0.0254;

/// Distance units. The base unit is the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl Unit for DistanceUnit {
    const ALL: &'static [Self] = &[
        DistanceUnit::Meter,
        DistanceUnit::Kilometer,
        DistanceUnit::Centimeter,
        DistanceUnit::Millimeter,
        DistanceUnit::Mile,
        DistanceUnit::Yard,
        DistanceUnit::Foot,
        DistanceUnit::Inch,
    ];

    fn label(self) -> &'static str {
        match self {
            DistanceUnit::Meter => "m",
            DistanceUnit::Kilometer => "km",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Millimeter => "mm",
            DistanceUnit::Mile => "mi",
            DistanceUnit::Yard => "yd",
            DistanceUnit::Foot => "ft",
            DistanceUnit::Inch => "in",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meter => value,
            DistanceUnit::Kilometer => value * 1000.0,
            DistanceUnit::Centimeter => value / 100.0,
            DistanceUnit::Millimeter => value / 1000.0,
            DistanceUnit::Mile => value * METERS_PER_MILE,
            DistanceUnit::Yard => value * METERS_PER_YARD,
            DistanceUnit::Foot => value * METERS_PER_FOOT,
            DistanceUnit::Inch => value * METERS_PER_INCH,
        }
    }

    fn from_base(self, m: f64) -> f64 {
        match self {
            DistanceUnit::Meter => m,
            DistanceUnit::Kilometer => m / 1000.0,
            DistanceUnit::Centimeter => m * 100.0,
            DistanceUnit::Millimeter => m * 1000.0,
            DistanceUnit::Mile => m / METERS_PER_MILE,
            DistanceUnit::Yard => m / METERS_PER_YARD,
            DistanceUnit::Foot => m / METERS_PER_FOOT,
            DistanceUnit::Inch => m / METERS_PER_INCH,
        }
    }
}
