//! Error taxonomy for the savings engine.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced by the calculators.
///
/// The engine never catches or retries these; they propagate to the caller,
/// which decides whether to show a validation message or recompute with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// An input is non-positive where positivity is required, or lies outside
    /// its configured range. Raised before any formula evaluation.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        reason: String,
    },

    /// The fixed monthly payment does not exceed the first month's interest
    /// charge, so the balance would never be repaid.
    #[error(
        "monthly payment {monthly_payment} does not exceed the first month's interest {first_month_interest}"
    )]
    NonAmortizingPayment {
        monthly_payment: Decimal,
        first_month_interest: Decimal,
    },

    /// A rate/term combination pushed an intermediate value outside the
    /// representable decimal range.
    #[error("arithmetic overflow computing {operation}")]
    ArithmeticOverflow { operation: &'static str },

    /// A calculation failed for one debt in a collection. `index` is the
    /// zero-based position of the offending debt in the input slice.
    #[error("debt {index}: {source}")]
    Debt {
        index: usize,
        source: Box<CalculationError>,
    },
}

impl CalculationError {
    /// Attributes an error to the debt at `index`.
    pub fn for_debt(index: usize, source: CalculationError) -> CalculationError {
        CalculationError::Debt {
            index,
            source: Box::new(source),
        }
    }
}

pub(crate) fn require_positive(value: Decimal, field: &'static str) -> Result<(), CalculationError> {
    if value <= Decimal::ZERO {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    value: Decimal,
    field: &'static str,
) -> Result<(), CalculationError> {
    if value < Decimal::ZERO {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

pub(crate) fn overflow(operation: &'static str) -> CalculationError {
    CalculationError::ArithmeticOverflow { operation }
}
