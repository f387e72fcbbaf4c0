use super::Unit;

pub const KG_PER_POUND: f64 = 0.45359237;
pub const KG_PER_OUNCE: f64 = 0.02834952;
pub const KG_PER_STONE: f64 = 6.35029318;
pub const KG_PER_TONNE: f64 = 1000.0;
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Weight units. The base unit is the kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
    Stone,
    Tonne,
}

impl Unit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
        WeightUnit::Stone,
        WeightUnit::Tonne,
    ];

    fn label(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Pound => "lb",
            WeightUnit::Ounce => "oz",
            WeightUnit::Stone => "stone",
            WeightUnit::Tonne => "tonne",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilogram => value,
            WeightUnit::Gram => value / GRAMS_PER_KG,
            WeightUnit::Pound => value * KG_PER_POUND,
            WeightUnit::Ounce => value * KG_PER_OUNCE,
            WeightUnit::Stone => value * KG_PER_STONE,
            WeightUnit::Tonne => value * KG_PER_TONNE,
        }
    }

    fn from_base(self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kilogram => kg,
            WeightUnit::Gram => kg * GRAMS_PER_KG,
            WeightUnit::Pound => kg / KG_PER_POUND,
            WeightUnit::Ounce => kg / KG_PER_OUNCE,
            WeightUnit::Stone => kg / KG_PER_STONE,
            WeightUnit::Tonne => kg / KG_PER_TONNE,
        }
    }
}
