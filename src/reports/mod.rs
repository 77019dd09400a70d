//! Report generation
//!
//! Derived series for the charts: expense distribution shares and the
//! budget-vs-expenses comparison bars.

pub mod distribution;

pub use distribution::{comparison_bars, CategoryShare, ComparisonBar, ExpenseDistribution};
