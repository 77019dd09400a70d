//! CampusBudget - Terminal budgeting planner for college students
//!
//! This library provides the core functionality for the CampusBudget
//! application: an interactive budgeting form for monthly or semester
//! horizons with computed summaries, charts, session history with CSV
//! export, and optional AI-generated budgeting tips.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, mode, categories, expenses, history)
//! - `services`: The budget calculator and the advice client
//! - `reports`: Distribution and comparison series for the charts
//! - `export`: CSV export of the history log
//! - `display`: Plain-terminal formatting
//! - `cli`: CLI command handlers
//! - `tui`: The interactive form
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_budget::models::{ExpenseSheet, Mode, Money};
//! use campus_budget::services::{BudgetState, BudgetSummary};
//!
//! let mut state = BudgetState::new(Mode::Monthly, Money::from_rupees(5000), Money::zero());
//! state.expenses.set_by_label("Food", Money::from_rupees(2000))?;
//! let summary = BudgetSummary::compute(&state)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::BudgetError;
