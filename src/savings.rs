//! Aggregation of per-debt payoff costs against a single consolidated loan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::consolidation::{ConsolidationParameters, NewLoanProjection, project_new_loan};
use crate::debt::{Debt, calculate_payoff};
use crate::error::CalculationError;
use crate::rate::round_currency;

/// Side-by-side cost of the current debts and the consolidated loan.
///
/// Savings are signed with `current - new`: positive means the consolidated
/// loan is the cheaper option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationSavings {
    /// Sum of the current balances, i.e. the principal of the new loan.
    pub consolidated_principal: Decimal,
    /// Lifetime cost of the current debts at their own rates and payments.
    pub current_total_repayment: Decimal,
    /// Combined monthly payment across the current debts.
    pub current_total_monthly_payment: Decimal,
    /// Lifetime cost of the consolidated loan.
    pub new_total_repayment: Decimal,
    /// Fixed monthly payment of the consolidated loan.
    pub new_monthly_payment: Decimal,
    pub repayment_savings: Decimal,
    pub monthly_savings: Decimal,
}

impl ConsolidationSavings {
    /// Returns a copy with every amount rounded to cents for display.
    pub fn rounded(&self) -> ConsolidationSavings {
        ConsolidationSavings {
            consolidated_principal: round_currency(self.consolidated_principal),
            current_total_repayment: round_currency(self.current_total_repayment),
            current_total_monthly_payment: round_currency(self.current_total_monthly_payment),
            new_total_repayment: round_currency(self.new_total_repayment),
            new_monthly_payment: round_currency(self.new_monthly_payment),
            repayment_savings: round_currency(self.repayment_savings),
            monthly_savings: round_currency(self.monthly_savings),
        }
    }
}

/// Sums the payoff cost of every debt and compares it against an already
/// projected consolidated loan.
///
/// An empty slice yields zero current-side totals, so the savings are the
/// negative of the new loan's costs.
///
/// # Errors
///
/// A failure for any single debt aborts the whole aggregation, wrapped in
/// [`CalculationError::Debt`] with the zero-based index of the offending
/// entry.
pub fn aggregate_savings(
    debts: &[Debt],
    new_loan: &NewLoanProjection,
) -> Result<ConsolidationSavings, CalculationError> {
    let mut consolidated_principal = Decimal::ZERO;
    let mut current_total_repayment = Decimal::ZERO;
    let mut current_total_monthly_payment = Decimal::ZERO;

    for (index, debt) in debts.iter().enumerate() {
        let payoff =
            calculate_payoff(debt).map_err(|source| CalculationError::for_debt(index, source))?;
        consolidated_principal += debt.principal;
        current_total_repayment += payoff.total_paid;
        current_total_monthly_payment += debt.monthly_payment;
    }

    Ok(ConsolidationSavings {
        consolidated_principal,
        current_total_repayment,
        current_total_monthly_payment,
        new_total_repayment: new_loan.total_paid,
        new_monthly_payment: new_loan.monthly_payment,
        repayment_savings: current_total_repayment - new_loan.total_paid,
        monthly_savings: current_total_monthly_payment - new_loan.monthly_payment,
    })
}

/// Calculates the savings of consolidating `debts` into one loan with the
/// given parameters.
///
/// This is the library's entry point: it validates every debt, projects a new
/// loan covering the combined balance, and aggregates the comparison. It holds
/// no state; every call recomputes the full result from its inputs.
///
/// # Errors
///
/// Returns [`CalculationError::Debt`] for a failure attributable to one debt
/// (invalid fields or a non-amortizing payment) and
/// [`CalculationError::InvalidInput`] for bad consolidation parameters.
pub fn calculate_consolidation_savings(
    debts: &[Debt],
    parameters: &ConsolidationParameters,
) -> Result<ConsolidationSavings, CalculationError> {
    for (index, debt) in debts.iter().enumerate() {
        debt.validate()
            .map_err(|source| CalculationError::for_debt(index, source))?;
    }

    let total_principal: Decimal = debts.iter().map(|debt| debt.principal).sum();
    let new_loan = project_new_loan(
        total_principal,
        parameters.annual_rate_percent,
        parameters.term_months,
    )?;
    aggregate_savings(debts, &new_loan)
}
