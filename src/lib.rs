//! `debt_consolidation` is a Rust library for estimating how much a set of
//! unsecured debts would save if rolled into a single consolidated loan.
//!
//! It compares two repayment plans over their full lifetimes:
//! - **Current debts**: each debt keeps its own balance, APR, and fixed
//!   monthly payment, paid until the balance reaches zero.
//! - **Consolidated loan**: one new loan covering the combined balance,
//!   amortized over a chosen term at a chosen APR.
//!
//! The result reports both totals plus the signed savings deltas (positive
//! means consolidating is cheaper). The loan's APR and term can be given
//! directly or derived from normalized 0-100 control values (slider
//! positions) mapped onto configurable ranges.
//!
//! ## Usage
//!
//! Add `debt_consolidation` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! debt_consolidation = "0.1.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then describe the current debts and the terms of the replacement loan:
//!
//! ```rust
//! use debt_consolidation::{
//!     calculate_consolidation_savings, ConsolidationParameters, Debt, ParameterRanges,
//! };
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let debts = vec![
//!         Debt {
//!             principal: dec!(5000),
//!             annual_rate_percent: dec!(15.99),
//!             monthly_payment: dec!(200),
//!         },
//!         Debt {
//!             principal: dec!(3000),
//!             annual_rate_percent: dec!(22.5),
//!             monthly_payment: dec!(150),
//!         },
//!     ];
//!
//!     let ranges = ParameterRanges::default();
//!     let result = ConsolidationParameters::from_controls(dec!(25), dec!(50), &ranges)
//!         .and_then(|parameters| calculate_consolidation_savings(&debts, &parameters));
//!
//!     match result {
//!         Ok(savings) => {
//!             let savings = savings.rounded();
//!             println!("New Monthly Payment:   {:.2}", savings.new_monthly_payment);
//!             println!("Total Monthly Savings: {:.2}", savings.monthly_savings);
//!             println!("Repayment Savings:     {:.2}", savings.repayment_savings);
//!         }
//!         Err(e) => {
//!             eprintln!("Error calculating savings: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod consolidation;
pub mod debt;
pub mod error;
pub mod rate;
pub mod savings;

pub use consolidation::{
    ConsolidationParameters, ControlRange, NewLoanProjection, ParameterRanges, project_new_loan,
};
pub use debt::{Debt, DebtPayoff, calculate_payoff};
pub use error::CalculationError;
pub use rate::{monthly_rate_from_annual_percent, round_currency};
pub use savings::{ConsolidationSavings, aggregate_savings, calculate_consolidation_savings};
