//! Session expense list with a running total. Nothing here is persisted.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    #[error("amount is required")]
    MissingAmount,
    #[error("description is required")]
    MissingDescription,
    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),
}

/// Append-only list of expenses for the current session.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    entries: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expense. The description is trimmed and must not be empty.
    pub fn add(&mut self, amount: f64, description: &str) -> Result<&Expense, ExpenseError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ExpenseError::MissingDescription);
        }
        if !amount.is_finite() {
            return Err(ExpenseError::InvalidAmount(amount.to_string()));
        }
        debug!(amount, description, "expense added");
        self.entries.push(Expense {
            amount,
            description: description.to_string(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Adds an expense from raw form input, as typed by the user.
    pub fn add_from_input(
        &mut self,
        amount: &str,
        description: &str,
    ) -> Result<&Expense, ExpenseError> {
        let amount = amount.trim();
        if amount.is_empty() {
            return Err(ExpenseError::MissingAmount);
        }
        if description.trim().is_empty() {
            return Err(ExpenseError::MissingDescription);
        }
        let value: f64 = amount
            .parse()
            .map_err(|_| ExpenseError::InvalidAmount(amount.to_string()))?;
        self.add(value, description)
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every amount recorded so far.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

/// Formats an amount as dollars with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tracks_every_entry() {
        let mut ledger = ExpenseLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
        ledger.add(12.5, "Museum").unwrap();
        ledger.add_from_input(" 7.25 ", "Bus ticket").unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), 19.75);
        assert_eq!(ledger.entries()[1].description, "Bus ticket");
        assert_eq!(format_amount(ledger.total()), "$19.75");
    }

    #[test]
    fn form_input_requires_both_fields() {
        let mut ledger = ExpenseLedger::new();
        assert_eq!(
            ledger.add_from_input("", "Lunch").unwrap_err(),
            ExpenseError::MissingAmount
        );
        assert_eq!(
            ledger.add_from_input("3", "   ").unwrap_err(),
            ExpenseError::MissingDescription
        );
        assert_eq!(
            ledger.add_from_input("ten", "Lunch").unwrap_err(),
            ExpenseError::InvalidAmount("ten".into())
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        let mut ledger = ExpenseLedger::new();
        assert!(ledger.add(f64::INFINITY, "Hotel").is_err());
        assert!(ledger.add_from_input("NaN", "Hotel").is_err());
        assert!(ledger.is_empty());
    }
}
