use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// fixed monthly installment for an amortizing loan
///
/// A zero annual rate yields a zero installment. The system this crate
/// models reports 0 for zero-rate loans rather than principal / tenure, and
/// that behavior is kept.
pub fn monthly_installment(principal: Money, annual_rate: Rate, tenure_months: u32) -> Money {
    if tenure_months == 0 {
        return Money::ZERO;
    }

    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    if monthly_rate.is_zero() {
        return Money::ZERO;
    }

    // EMI = P * r / (1 - (1 + r)^-n), computed as P * r * (1 + r)^n / ((1 + r)^n - 1)
    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..tenure_months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}
