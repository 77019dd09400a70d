//! Service layer for CampusBudget
//!
//! The calculator core and the advice (AI tips) client. Both are invoked
//! per refresh/button press with the latest form state; neither holds
//! state of its own.

pub mod advice;
pub mod summary;

pub use advice::AdviceService;
pub use summary::{
    classify_status, compute_equivalent, compute_remaining, compute_total, BudgetState,
    BudgetStatus, BudgetSummary,
};
