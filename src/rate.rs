//! Rate conversion and rounding conventions shared by the calculators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Converts a nominal annual percentage rate to a monthly periodic rate.
///
/// The convention is monthly compounding on a monthly nominal rate: 15.99 (%)
/// becomes 0.1599 / 12. No effective-rate adjustment is applied.
pub fn monthly_rate_from_annual_percent(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / dec!(100) / dec!(12)
}

/// Rounds a monetary amount to cents.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}
