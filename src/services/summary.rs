//! Budget summary computation
//!
//! The calculator core: pure, stateless functions over the current form
//! state, invoked on every refresh. Total, remaining, the time-scaled
//! equivalent, and the status classification.

use crate::error::BudgetResult;
use crate::models::{ExpenseSheet, Mode, Money};

/// Status classification of the remaining balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Remaining is negative: budget exceeded
    Exceeded,
    /// Remaining is below 20% of the budget
    NearLimit,
    /// Comfortably within budget
    OnTrack,
}

impl BudgetStatus {
    /// One-line banner text for this status
    pub const fn banner(&self) -> &'static str {
        match self {
            Self::Exceeded => "You exceeded your budget!",
            Self::NearLimit => "You are close to exceeding your budget.",
            Self::OnTrack => "You're on track!",
        }
    }
}

/// Current form state: everything a single evaluation reads
#[derive(Debug, Clone)]
pub struct BudgetState {
    /// Budgeting mode
    pub mode: Mode,
    /// Total budget (non-negative)
    pub budget: Money,
    /// Savings goal (non-negative)
    pub goal: Money,
    /// Per-category expense amounts
    pub expenses: ExpenseSheet,
}

impl BudgetState {
    /// Create a state with an all-zero expense sheet
    pub fn new(mode: Mode, budget: Money, goal: Money) -> Self {
        Self {
            mode,
            budget,
            goal,
            expenses: ExpenseSheet::new(mode),
        }
    }
}

/// Derived figures for one evaluation of the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    /// Budgeting mode the summary was computed under
    pub mode: Mode,
    /// Total budget
    pub budget: Money,
    /// Savings goal
    pub goal: Money,
    /// Sum of all expense amounts
    pub total: Money,
    /// budget − total; negative is a valid over-budget state
    pub remaining: Money,
    /// Budget scaled to its time equivalent, in rupees; 0.0 when budget is
    /// zero and only surfaced when budget > 0
    pub equivalent: f64,
    /// Three-way classification of (remaining, budget)
    pub status: BudgetStatus,
}

impl BudgetSummary {
    /// Evaluate the calculator over a validated state
    pub fn compute(state: &BudgetState) -> BudgetResult<Self> {
        let total = compute_total(&state.expenses)?;
        let remaining = compute_remaining(state.budget, total);
        Ok(Self {
            mode: state.mode,
            budget: state.budget,
            goal: state.goal,
            total,
            remaining,
            equivalent: compute_equivalent(state.mode, state.budget),
            status: classify_status(remaining, state.budget),
        })
    }

    /// Whether the equivalent figure should be shown at all
    pub fn shows_equivalent(&self) -> bool {
        self.budget.is_positive()
    }
}

/// Sum all expense amounts; zero for an empty sheet
///
/// Negative amounts are rejected here as well as at the input boundary.
pub fn compute_total(expenses: &ExpenseSheet) -> BudgetResult<Money> {
    expenses.validate()?;
    Ok(expenses.total())
}

/// budget − total; may be negative (over-budget is representable, not an error)
pub fn compute_remaining(budget: Money, total: Money) -> Money {
    budget - total
}

/// Scale the budget to its time equivalent in rupees: budget / 30 for
/// Monthly, budget / 6 for Semester. Returns 0.0 for a zero budget.
pub fn compute_equivalent(mode: Mode, budget: Money) -> f64 {
    if budget.is_zero() {
        return 0.0;
    }
    budget.as_f64() / mode.divisor() as f64
}

/// Classify (remaining, budget) into a status
///
/// Exceeded when remaining < 0; NearLimit when 0 <= remaining < 0.2×budget;
/// OnTrack otherwise. The threshold comparison is `5·remaining < budget` in
/// paise, which is exact for budgets not divisible by 5. At budget zero the
/// strict comparison makes remaining == 0 OnTrack; negative budgets never
/// reach this function (inputs are validated non-negative).
pub fn classify_status(remaining: Money, budget: Money) -> BudgetStatus {
    if remaining.is_negative() {
        BudgetStatus::Exceeded
    } else if remaining.paise().saturating_mul(5) < budget.paise() {
        BudgetStatus::NearLimit
    } else {
        BudgetStatus::OnTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(r: i64) -> Money {
        Money::from_rupees(r)
    }

    #[test]
    fn test_compute_total_empty_sheet() {
        let sheet = ExpenseSheet::new(Mode::Monthly);
        assert_eq!(compute_total(&sheet).unwrap(), Money::zero());
    }

    #[test]
    fn test_compute_total_sums_values() {
        let mut sheet = ExpenseSheet::new(Mode::Monthly);
        sheet.set_by_label("Food", rupees(2000)).unwrap();
        sheet.set_by_label("Transport", rupees(500)).unwrap();
        assert_eq!(compute_total(&sheet).unwrap(), rupees(2500));
    }

    #[test]
    fn test_compute_remaining_may_be_negative() {
        assert_eq!(compute_remaining(rupees(100), rupees(40)), rupees(60));
        assert_eq!(compute_remaining(rupees(100), rupees(150)), rupees(-50));
    }

    #[test]
    fn test_classify_status_boundaries() {
        assert_eq!(classify_status(rupees(-1), rupees(100)), BudgetStatus::Exceeded);
        assert_eq!(classify_status(rupees(19), rupees(100)), BudgetStatus::NearLimit);
        assert_eq!(classify_status(rupees(20), rupees(100)), BudgetStatus::OnTrack);
        assert_eq!(classify_status(rupees(0), rupees(0)), BudgetStatus::OnTrack);
    }

    #[test]
    fn test_classify_status_zero_budget_overspend() {
        assert_eq!(classify_status(rupees(-1), rupees(0)), BudgetStatus::Exceeded);
    }

    #[test]
    fn test_classify_status_threshold_is_exact() {
        // 0.2 × 101 = 20.2; remaining 20 must be NearLimit, not OnTrack
        assert_eq!(classify_status(rupees(20), rupees(101)), BudgetStatus::NearLimit);
    }

    #[test]
    fn test_compute_equivalent() {
        assert_eq!(compute_equivalent(Mode::Monthly, rupees(3000)), 100.0);
        assert_eq!(compute_equivalent(Mode::Semester, rupees(6000)), 1000.0);
        assert_eq!(compute_equivalent(Mode::Monthly, Money::zero()), 0.0);
    }

    #[test]
    fn test_summary_monthly_scenario() {
        let mut state = BudgetState::new(Mode::Monthly, rupees(5000), rupees(1000));
        state.expenses.set_by_label("Food", rupees(2000)).unwrap();
        state.expenses.set_by_label("Transport", rupees(500)).unwrap();
        state
            .expenses
            .set_by_label("Rent/Hostel", rupees(1500))
            .unwrap();

        let summary = BudgetSummary::compute(&state).unwrap();
        assert_eq!(summary.total, rupees(4000));
        assert_eq!(summary.remaining, rupees(1000));
        // remaining == 0.2 × budget exactly: boundary is OnTrack
        assert_eq!(summary.status, BudgetStatus::OnTrack);
        assert!((summary.equivalent - 166.67).abs() < 0.01);
        assert!(summary.shows_equivalent());
    }

    #[test]
    fn test_summary_semester_overspend_scenario() {
        let mut state = BudgetState::new(Mode::Semester, rupees(50000), rupees(5000));
        state
            .expenses
            .set_by_label("Tuition Fees", rupees(40000))
            .unwrap();
        state
            .expenses
            .set_by_label("Hostel/PG Rent", rupees(12000))
            .unwrap();

        let summary = BudgetSummary::compute(&state).unwrap();
        assert_eq!(summary.total, rupees(52000));
        assert_eq!(summary.remaining, rupees(-2000));
        assert_eq!(summary.status, BudgetStatus::Exceeded);
    }

    #[test]
    fn test_zero_budget_equivalent_not_surfaced() {
        let state = BudgetState::new(Mode::Monthly, Money::zero(), Money::zero());
        let summary = BudgetSummary::compute(&state).unwrap();
        assert_eq!(summary.equivalent, 0.0);
        assert!(!summary.shows_equivalent());
        assert_eq!(summary.status, BudgetStatus::OnTrack);
    }
}
