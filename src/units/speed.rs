use super::Unit;

pub const MPS_PER_MPH: f64 = 0.44704;
pub const MPS_PER_FOOT_PER_SECOND: f64 = 0.3048;
const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Speed units. The base unit is m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    FootPerSecond,
}

impl Unit for SpeedUnit {
    const ALL: &'static [Self] = &[
        SpeedUnit::MeterPerSecond,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::MilePerHour,
        SpeedUnit::Knot,
        SpeedUnit::FootPerSecond,
    ];

    fn label(self) -> &'static str {
        match self {
            SpeedUnit::MeterPerSecond => "m/s",
            SpeedUnit::KilometerPerHour => "km/h",
            SpeedUnit::MilePerHour => "mph",
            SpeedUnit::Knot => "kn",
            SpeedUnit::FootPerSecond => "ft/s",
        }
    }

    // km/h and knots are written as distance over hour so that round numbers
    // such as 36 km/h land exactly on 10 m/s.
    fn to_base(self, value: f64) -> f64 {
        match self {
            SpeedUnit::MeterPerSecond => value,
            SpeedUnit::KilometerPerHour => value * METERS_PER_KILOMETER / SECONDS_PER_HOUR,
            SpeedUnit::MilePerHour => value * MPS_PER_MPH,
            SpeedUnit::Knot => value * METERS_PER_NAUTICAL_MILE / SECONDS_PER_HOUR,
            SpeedUnit::FootPerSecond => value * MPS_PER_FOOT_PER_SECOND,
        }
    }

    fn from_base(self, mps: f64) -> f64 {
        match self {
            SpeedUnit::MeterPerSecond => mps,
            SpeedUnit::KilometerPerHour => mps * SECONDS_PER_HOUR / METERS_PER_KILOMETER,
            SpeedUnit::MilePerHour => mps / MPS_PER_MPH,
            SpeedUnit::Knot => mps * SECONDS_PER_HOUR / METERS_PER_NAUTICAL_MILE,
            SpeedUnit::FootPerSecond => mps / MPS_PER_FOOT_PER_SECOND,
        }
    }
}
