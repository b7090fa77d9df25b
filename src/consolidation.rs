//! Projection of the single consolidated loan, and the mapping from
//! normalized 0-100 control values to real APR/term parameters.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, overflow, require_non_negative};
use crate::rate::monthly_rate_from_annual_percent;

/// An inclusive value range addressed through a normalized 0-100 control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ControlRange {
    /// Linearly interpolates the range at a 0-100 control value.
    pub fn value_at(&self, control: Decimal) -> Decimal {
        self.min + control / dec!(100) * (self.max - self.min)
    }
}

/// Configured domains for the consolidated loan's APR and term.
///
/// These are data, not constants: a host can widen or narrow either range
/// without touching the formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterRanges {
    /// Allowed APR domain, in percent.
    pub annual_rate_percent: ControlRange,
    /// Allowed term domain, in months.
    pub term_months: ControlRange,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        ParameterRanges {
            annual_rate_percent: ControlRange {
                min: dec!(4),
                max: dec!(36),
            },
            term_months: ControlRange {
                min: dec!(12),
                max: dec!(60),
            },
        }
    }
}

/// Validated parameters of the consolidated loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationParameters {
    /// Nominal annual percentage rate of the new loan.
    pub annual_rate_percent: Decimal,
    /// Term of the new loan in whole months.
    pub term_months: u32,
}

impl ConsolidationParameters {
    /// Builds parameters from explicit values, checked against `ranges`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidInput`] if either value lies outside
    /// its configured range.
    pub fn new(
        annual_rate_percent: Decimal,
        term_months: u32,
        ranges: &ParameterRanges,
    ) -> Result<Self, CalculationError> {
        require_in_range(
            annual_rate_percent,
            &ranges.annual_rate_percent,
            "annual rate",
        )?;
        require_in_range(Decimal::from(term_months), &ranges.term_months, "term")?;
        Ok(ConsolidationParameters {
            annual_rate_percent,
            term_months,
        })
    }

    /// Builds parameters from two 0-100 control values (slider positions).
    ///
    /// The APR is interpolated as-is; the term is interpolated and rounded to
    /// the nearest whole month, half away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidInput`] if a control value lies
    /// outside 0-100.
    pub fn from_controls(
        rate_control: Decimal,
        term_control: Decimal,
        ranges: &ParameterRanges,
    ) -> Result<Self, CalculationError> {
        require_control(rate_control, "rate control")?;
        require_control(term_control, "term control")?;

        let annual_rate_percent = ranges.annual_rate_percent.value_at(rate_control);
        let term_months = ranges
            .term_months
            .value_at(term_control)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .ok_or_else(|| CalculationError::InvalidInput {
                field: "term",
                reason: "configured term range does not map to whole months".to_string(),
            })?;
        Ok(ConsolidationParameters {
            annual_rate_percent,
            term_months,
        })
    }
}

/// Payment profile of the projected consolidated loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoanProjection {
    /// Fixed monthly payment that fully amortizes the principal over the term.
    pub monthly_payment: Decimal,
    /// Total amount paid over the full term.
    pub total_paid: Decimal,
}

/// Projects the fixed payment and total cost of a loan covering
/// `total_principal` over `term_months` at the given APR.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if the principal or rate is
/// negative or the term is zero, and [`CalculationError::ArithmeticOverflow`]
/// if an intermediate value leaves the representable range.
pub fn project_new_loan(
    total_principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<NewLoanProjection, CalculationError> {
    require_non_negative(total_principal, "total principal")?;
    require_non_negative(annual_rate_percent, "annual rate")?;
    if term_months == 0 {
        return Err(CalculationError::InvalidInput {
            field: "term",
            reason: "must be at least one month".to_string(),
        });
    }

    let monthly_rate = monthly_rate_from_annual_percent(annual_rate_percent);
    let monthly_payment = if monthly_rate.is_zero() {
        total_principal / Decimal::from(term_months)
    } else {
        // PMT = P * [i(1 + i)^n] / [(1 + i)^n - 1]
        let growth = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(term_months))
            .ok_or(overflow("rate compounding"))?;
        total_principal
            .checked_mul(monthly_rate * growth)
            .and_then(|payment| payment.checked_div(growth - Decimal::ONE))
            .ok_or(overflow("monthly payment"))?
    };
    let total_paid = monthly_payment
        .checked_mul(Decimal::from(term_months))
        .ok_or(overflow("total paid"))?;

    Ok(NewLoanProjection {
        monthly_payment,
        total_paid,
    })
}

fn require_control(value: Decimal, field: &'static str) -> Result<(), CalculationError> {
    if value < Decimal::ZERO || value > dec!(100) {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must lie within 0-100, got {value}"),
        });
    }
    Ok(())
}

fn require_in_range(
    value: Decimal,
    range: &ControlRange,
    field: &'static str,
) -> Result<(), CalculationError> {
    if value < range.min || value > range.max {
        return Err(CalculationError::InvalidInput {
            field,
            reason: format!("must lie within {}-{}, got {value}", range.min, range.max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::{Debt, calculate_payoff};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), dec!(0), dec!(4), 12)]
    #[case(dec!(100), dec!(100), dec!(36), 60)]
    #[case(dec!(50), dec!(50), dec!(20), 36)]
    fn test_controls_interpolate_default_ranges(
        #[case] rate_control: Decimal,
        #[case] term_control: Decimal,
        #[case] expected_rate: Decimal,
        #[case] expected_term: u32,
    ) {
        let parameters = ConsolidationParameters::from_controls(
            rate_control,
            term_control,
            &ParameterRanges::default(),
        )
        .unwrap();
        assert_eq!(parameters.annual_rate_percent, expected_rate);
        assert_eq!(parameters.term_months, expected_term);
    }

    #[test]
    fn test_term_rounds_to_nearest_month() {
        let parameters = ConsolidationParameters::from_controls(
            dec!(0),
            dec!(30),
            &ParameterRanges::default(),
        )
        .unwrap();
        // 12 + 0.30 * 48 = 26.4
        assert_eq!(parameters.term_months, 26);
    }

    #[test]
    fn test_term_midpoint_rounds_away_from_zero() {
        let ranges = ParameterRanges {
            annual_rate_percent: ControlRange {
                min: dec!(4),
                max: dec!(36),
            },
            term_months: ControlRange {
                min: dec!(0),
                max: dec!(10),
            },
        };
        let parameters =
            ConsolidationParameters::from_controls(dec!(0), dec!(45), &ranges).unwrap();
        assert_eq!(parameters.term_months, 5);
    }

    #[rstest]
    #[case(dec!(-1), dec!(50))]
    #[case(dec!(101), dec!(50))]
    #[case(dec!(50), dec!(-0.5))]
    #[case(dec!(50), dec!(100.5))]
    fn test_out_of_range_controls_are_rejected(
        #[case] rate_control: Decimal,
        #[case] term_control: Decimal,
    ) {
        let result = ConsolidationParameters::from_controls(
            rate_control,
            term_control,
            &ParameterRanges::default(),
        );
        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_explicit_parameters_are_range_checked() {
        let ranges = ParameterRanges::default();
        assert!(ConsolidationParameters::new(dec!(12), 36, &ranges).is_ok());
        assert!(matches!(
            ConsolidationParameters::new(dec!(3.9), 36, &ranges),
            Err(CalculationError::InvalidInput { field: "annual rate", .. })
        ));
        assert!(matches!(
            ConsolidationParameters::new(dec!(12), 61, &ranges),
            Err(CalculationError::InvalidInput { field: "term", .. })
        ));
    }

    #[test]
    fn test_projection_happy_path() {
        let projection = project_new_loan(dec!(8000), dec!(12), 36).unwrap();
        assert_eq!(projection.monthly_payment.round_dp(2), dec!(265.71));
        assert_eq!(projection.total_paid.round_dp(2), dec!(9565.72));
        assert_eq!(
            projection.total_paid,
            projection.monthly_payment * dec!(36)
        );
    }

    #[test]
    fn test_zero_rate_projection_is_plain_division() {
        let projection = project_new_loan(dec!(12000), dec!(0), 12).unwrap();
        assert_eq!(projection.monthly_payment, dec!(1000));
        assert_eq!(projection.total_paid, dec!(12000));
    }

    #[test]
    fn test_zero_principal_projects_zero_loan() {
        let projection = project_new_loan(dec!(0), dec!(12), 36).unwrap();
        assert_eq!(projection.monthly_payment, dec!(0));
        assert_eq!(projection.total_paid, dec!(0));
    }

    #[test]
    fn test_zero_term_is_rejected() {
        let result = project_new_loan(dec!(8000), dec!(12), 0);
        assert!(matches!(
            result,
            Err(CalculationError::InvalidInput { field: "term", .. })
        ));
    }

    #[rstest]
    #[case(dec!(4), dec!(8))]
    #[case(dec!(8), dec!(12))]
    #[case(dec!(12), dec!(36))]
    fn test_payment_and_total_grow_with_rate(#[case] lower: Decimal, #[case] higher: Decimal) {
        let cheap = project_new_loan(dec!(8000), lower, 36).unwrap();
        let dear = project_new_loan(dec!(8000), higher, 36).unwrap();
        assert!(dear.monthly_payment > cheap.monthly_payment);
        assert!(dear.total_paid > cheap.total_paid);
    }

    #[test]
    fn test_projected_payment_pays_off_in_exactly_the_term() {
        let projection = project_new_loan(dec!(8000), dec!(12), 36).unwrap();
        let payoff = calculate_payoff(&Debt {
            principal: dec!(8000),
            annual_rate_percent: dec!(12),
            monthly_payment: projection.monthly_payment,
        })
        .unwrap();
        assert_eq!(payoff.payments, 36);
        assert_eq!(payoff.total_paid, projection.monthly_payment * dec!(36));
    }
}
