use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Units of each currency bought by one unit of the reference currency (USD).
const DEFAULT_USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.84),
    ("GBP", 0.72),
    ("JPY", 109.65),
    ("AUD", 1.29),
    ("CAD", 1.25),
    ("CHF", 0.92),
    ("CNY", 6.47),
    ("INR", 74.38),
    ("MXN", 20.06),
    ("BRL", 5.24),
    ("RUB", 74.16),
    ("ZAR", 14.73),
    ("SGD", 1.35),
    ("NZD", 1.4),
];

/// One row of the exchange-rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub code: String,
    /// Units of `code` per one unit of the base currency.
    pub rate: f64,
}

/// Static exchange rates relative to a reference currency.
///
/// The rows keep their order; it is the display order of the currency
/// selector. Rates are configuration, so refreshing them means building a
/// new table and a new engine from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub rates: Vec<CurrencyRate>,
}

/// Problems found while validating a [`RateTable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateTableError {
    #[error("exchange-rate table is empty")]
    Empty,
    #[error("currency {0} is listed more than once")]
    DuplicateCode(String),
    #[error("base currency {0} has no rate entry")]
    MissingBase(String),
    #[error("base currency {code} must have rate 1, found {rate}")]
    BaseNotUnity { code: String, rate: f64 },
    #[error("currency {code} has invalid rate {rate}")]
    InvalidRate { code: String, rate: f64 },
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base: "USD".to_string(),
            rates: DEFAULT_USD_RATES
                .iter()
                .map(|(code, rate)| CurrencyRate {
                    code: (*code).to_string(),
                    rate: *rate,
                })
                .collect(),
        }
    }
}

impl RateTable {
    /// Currency codes in display order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|r| r.code.as_str())
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.iter().find(|r| r.code == code).map(|r| r.rate)
    }

    /// Checks the invariants the engine relies on: every rate is finite and
    /// positive, codes are unique, and the base currency is present at 1.
    pub fn validate(&self) -> Result<(), RateTableError> {
        if self.rates.is_empty() {
            return Err(RateTableError::Empty);
        }
        for (i, row) in self.rates.iter().enumerate() {
            if !row.rate.is_finite() || row.rate <= 0.0 {
                return Err(RateTableError::InvalidRate {
                    code: row.code.clone(),
                    rate: row.rate,
                });
            }
            if self.rates[..i].iter().any(|prev| prev.code == row.code) {
                return Err(RateTableError::DuplicateCode(row.code.clone()));
            }
        }
        match self.rate(&self.base) {
            None => Err(RateTableError::MissingBase(self.base.clone())),
            Some(rate) if rate != 1.0 => Err(RateTableError::BaseNotUnity {
                code: self.base.clone(),
                rate,
            }),
            Some(_) => Ok(()),
        }
    }
}
