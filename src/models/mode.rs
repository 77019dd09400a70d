//! Budgeting mode
//!
//! The mode is the budgeting horizon: one month or one semester. It selects
//! the category set, the time-scaling divisor, and the input step.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Budgeting horizon
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Monthly budgeting (default)
    #[default]
    Monthly,
    /// Semester budgeting
    Semester,
}

impl Mode {
    /// All modes, in display order
    pub fn all() -> &'static [Self] {
        &[Self::Monthly, Self::Semester]
    }

    /// Divisor used to scale the budget to its time equivalent:
    /// days per month (30) or months per semester (6)
    pub const fn divisor(&self) -> i64 {
        match self {
            Self::Monthly => 30,
            Self::Semester => 6,
        }
    }

    /// Suggested input step for budget/goal amounts, in whole rupees
    pub const fn step(&self) -> i64 {
        match self {
            Self::Monthly => 500,
            Self::Semester => 1000,
        }
    }

    /// Short display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Semester => "Semester",
        }
    }

    /// Label for the time-scaled equivalent figure
    pub const fn equivalent_label(&self) -> &'static str {
        match self {
            Self::Monthly => "Daily spending allowance",
            Self::Semester => "Equivalent monthly budget",
        }
    }

    /// The other mode
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Monthly => Self::Semester,
            Self::Semester => Self::Monthly,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors() {
        assert_eq!(Mode::Monthly.divisor(), 30);
        assert_eq!(Mode::Semester.divisor(), 6);
    }

    #[test]
    fn test_steps() {
        assert_eq!(Mode::Monthly.step(), 500);
        assert_eq!(Mode::Semester.step(), 1000);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Mode::Monthly.toggled(), Mode::Semester);
        assert_eq!(Mode::Semester.toggled(), Mode::Monthly);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Monthly.to_string(), "Monthly");
        assert_eq!(Mode::Semester.to_string(), "Semester");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Semester).unwrap(), "\"semester\"");
        let mode: Mode = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(mode, Mode::Monthly);
    }
}
