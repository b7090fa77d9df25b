//! Payoff cost of an existing debt paid down with a fixed monthly payment.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, overflow, require_non_negative, require_positive};
use crate::rate::monthly_rate_from_annual_percent;

/// One existing unsecured debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Amount currently owed.
    pub principal: Decimal,
    /// Nominal annual percentage rate (e.g. 15.99 for 15.99%).
    pub annual_rate_percent: Decimal,
    /// Fixed amount paid each month toward this debt.
    pub monthly_payment: Decimal,
}

impl Debt {
    /// Checks the debt's fields before any formula evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidInput`] if `principal` or
    /// `monthly_payment` is not positive, or if `annual_rate_percent` is
    /// negative.
    pub fn validate(&self) -> Result<(), CalculationError> {
        require_positive(self.principal, "principal")?;
        require_non_negative(self.annual_rate_percent, "annual rate")?;
        require_positive(self.monthly_payment, "monthly payment")
    }
}

/// Result of paying a debt down to zero with its fixed monthly payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoff {
    /// Number of whole payments needed; a partial final payment counts as a
    /// full one.
    pub payments: u32,
    /// Total amount paid over the life of the debt.
    pub total_paid: Decimal,
}

/// Calculates how many payments retire a debt and what they add up to.
///
/// The number of periods is the closed-form inverse of the annuity payment
/// formula, `n = -ln(1 - P*i / M) / ln(1 + i)`, rounded up to the next whole
/// payment. At a zero rate this degenerates to `P / M`.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] for out-of-domain fields,
/// [`CalculationError::NonAmortizingPayment`] when the payment does not exceed
/// the first month's interest (the balance would never be repaid), and
/// [`CalculationError::ArithmeticOverflow`] if an intermediate value leaves
/// the representable range.
pub fn calculate_payoff(debt: &Debt) -> Result<DebtPayoff, CalculationError> {
    debt.validate()?;

    let monthly_rate = monthly_rate_from_annual_percent(debt.annual_rate_percent);
    let periods = if monthly_rate.is_zero() {
        debt.principal / debt.monthly_payment
    } else {
        let first_month_interest = debt
            .principal
            .checked_mul(monthly_rate)
            .ok_or(overflow("first month interest"))?;
        if debt.monthly_payment <= first_month_interest {
            return Err(CalculationError::NonAmortizingPayment {
                monthly_payment: debt.monthly_payment,
                first_month_interest,
            });
        }

        // n = -ln(1 - P*i / M) / ln(1 + i)
        let numerator = (Decimal::ONE - first_month_interest / debt.monthly_payment)
            .checked_ln()
            .ok_or(overflow("payoff periods"))?;
        let denominator = (Decimal::ONE + monthly_rate)
            .checked_ln()
            .ok_or(overflow("payoff periods"))?;
        -numerator
            .checked_div(denominator)
            .ok_or(overflow("payoff periods"))?
    };

    // ln is series-evaluated; shave its residual noise before the ceiling so
    // an exactly amortizing payment does not pick up an extra period.
    let payments = periods
        .round_dp(4)
        .ceil()
        .to_u32()
        .ok_or(overflow("payment count"))?;
    let total_paid = debt
        .monthly_payment
        .checked_mul(Decimal::from(payments))
        .ok_or(overflow("total paid"))?;

    Ok(DebtPayoff {
        payments,
        total_paid,
    })
}
