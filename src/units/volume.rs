use super::Unit;

pub const LITERS_PER_GALLON: f64 = 3.785411784;
pub const LITERS_PER_QUART: f64 = 0.946352946;
pub const LITERS_PER_PINT: f64 = 0.473176473;
pub const LITERS_PER_CUP: f64 = 0.2365882365;
pub const LITERS_PER_FLUID_OUNCE: f64 = 0.0295735295625;
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;
pub const MILLILITERS_PER_LITER: f64 = 1000.0;

/// Volume units. The base unit is the liter; the customary units are US
/// liquid measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
}

impl Unit for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicMeter,
        VolumeUnit::Gallon,
        VolumeUnit::Quart,
        VolumeUnit::Pint,
        VolumeUnit::Cup,
        VolumeUnit::FluidOunce,
    ];

    fn label(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Cup => "cup",
            VolumeUnit::FluidOunce => "fl oz",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            VolumeUnit::Liter => value,
            VolumeUnit::Milliliter => value / MILLILITERS_PER_LITER,
            VolumeUnit::CubicMeter => value * LITERS_PER_CUBIC_METER,
            VolumeUnit::Gallon => value * LITERS_PER_GALLON,
            VolumeUnit::Quart => value * LITERS_PER_QUART,
            VolumeUnit::Pint => value * LITERS_PER_PINT,
            VolumeUnit::Cup => value * LITERS_PER_CUP,
            VolumeUnit::FluidOunce => value * LITERS_PER_FLUID_OUNCE,
        }
    }

    fn from_base(self, liters: f64) -> f64 {
        match self {
            VolumeUnit::Liter => liters,
            VolumeUnit::Milliliter => liters * MILLILITERS_PER_LITER,
            VolumeUnit::CubicMeter => liters / LITERS_PER_CUBIC_METER,
            VolumeUnit::Gallon => liters / LITERS_PER_GALLON,
            VolumeUnit::Quart => liters / LITERS_PER_QUART,
            VolumeUnit::Pint => liters / LITERS_PER_PINT,
            VolumeUnit::Cup => liters / LITERS_PER_CUP,
            VolumeUnit::FluidOunce => liters / LITERS_PER_FLUID_OUNCE,
        }
    }
}
