//! Core data models for CampusBudget
//!
//! This module contains the data structures that represent the budgeting
//! domain: money, the budgeting mode, category sets, the expense sheet,
//! and the session history log.

pub mod category;
pub mod expenses;
pub mod history;
pub mod mode;
pub mod money;

pub use category::{categories_for, find_category, CategoryDef};
pub use expenses::ExpenseSheet;
pub use history::{HistoryLog, HistoryRecord};
pub use mode::Mode;
pub use money::Money;
