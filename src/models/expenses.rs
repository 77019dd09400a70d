//! Expense sheet
//!
//! One amount per category of the active mode's set, in category order.
//! A sheet is read fresh from the form on every evaluation; only the
//! category label persists as identity between evaluations.

use super::category::{categories_for, find_category, CategoryDef};
use super::mode::Mode;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Per-category expense amounts for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSheet {
    mode: Mode,
    amounts: Vec<Money>,
}

impl ExpenseSheet {
    /// Create an all-zero sheet for a mode
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            amounts: vec![Money::zero(); categories_for(mode).len()],
        }
    }

    /// The mode this sheet belongs to
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of categories in the sheet
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Whether the sheet has no categories (never true for a real mode)
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Iterate categories with their amounts, in set order
    pub fn entries(&self) -> impl Iterator<Item = (&'static CategoryDef, Money)> + '_ {
        categories_for(self.mode)
            .iter()
            .zip(self.amounts.iter().copied())
    }

    /// Get the amount at a category index
    pub fn amount_at(&self, index: usize) -> Option<Money> {
        self.amounts.get(index).copied()
    }

    /// Set the amount at a category index
    ///
    /// Rejects negative amounts at the boundary.
    pub fn set_at(&mut self, index: usize, amount: Money) -> BudgetResult<()> {
        if amount.is_negative() {
            let label = categories_for(self.mode)
                .get(index)
                .map(|c| c.label)
                .unwrap_or("?");
            return Err(BudgetError::negative_amount(label));
        }
        match self.amounts.get_mut(index) {
            Some(slot) => {
                *slot = amount;
                Ok(())
            }
            None => Err(BudgetError::InvalidInput(format!(
                "category index {} out of range",
                index
            ))),
        }
    }

    /// Set the amount for a category by label
    ///
    /// Rejects unknown labels and negative amounts.
    pub fn set_by_label(&mut self, label: &str, amount: Money) -> BudgetResult<()> {
        let index = categories_for(self.mode)
            .iter()
            .position(|c| c.label == label)
            .ok_or_else(|| BudgetError::unknown_category(label))?;
        self.set_at(index, amount)
    }

    /// Get the amount for a category by label
    pub fn amount_for(&self, label: &str) -> Option<Money> {
        find_category(self.mode, label)?;
        categories_for(self.mode)
            .iter()
            .position(|c| c.label == label)
            .and_then(|i| self.amount_at(i))
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.amounts.iter().copied().sum()
    }

    /// Check every amount is non-negative (re-validation for sheets built
    /// outside the setters)
    pub fn validate(&self) -> BudgetResult<()> {
        for (cat, amount) in self.entries() {
            if amount.is_negative() {
                return Err(BudgetError::negative_amount(cat.label));
            }
        }
        Ok(())
    }
}
