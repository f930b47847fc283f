use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::{Field, MortgageInput, MortgageType, RepaymentQuote};

/// monthly and total payment for a parsed input, at full precision
pub fn calculate(input: &MortgageInput) -> Result<RepaymentQuote> {
    RepaymentCalculator::new(input.mortgage_type).quote(input.principal, input.annual_rate, input.term_years)
}

/// payment calculator for one mortgage type
#[derive(Debug, Clone, Copy)]
pub struct RepaymentCalculator {
    mortgage_type: MortgageType,
}

impl RepaymentCalculator {
    pub fn new(mortgage_type: MortgageType) -> Self {
        Self { mortgage_type }
    }

    pub fn mortgage_type(&self) -> MortgageType {
        self.mortgage_type
    }

    pub fn quote(&self, principal: Money, annual_rate: Rate, term_years: u32) -> Result<RepaymentQuote> {
        let months = term_years.checked_mul(12).ok_or_else(|| overflow(Field::Term, "term in months"))?;
        if months == 0 {
            return Err(CalculatorError::InvalidTerm);
        }

        let monthly_payment = self.monthly_payment(principal, annual_rate, months)?;
        let total_payment = monthly_payment
            .as_decimal()
            .checked_mul(Decimal::from(months))
            .map(Money::from_decimal)
            .ok_or_else(|| overflow(Field::Amount, "total payment"))?;

        log::debug!(
            "{} quote: principal {}, rate {}, {} months -> monthly {}, total {}",
            self.mortgage_type,
            principal,
            annual_rate,
            months,
            monthly_payment,
            total_payment
        );

        Ok(RepaymentQuote {
            mortgage_type: self.mortgage_type,
            term_months: months,
            monthly_payment,
            total_payment,
        })
    }

    /// monthly payment over `months` periods
    pub fn monthly_payment(&self, principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
        if months == 0 {
            return Err(CalculatorError::InvalidTerm);
        }

        let monthly_rate = annual_rate.monthly_rate().as_decimal();

        match self.mortgage_type {
            MortgageType::Repayment => annuity_payment(principal, monthly_rate, months),
            MortgageType::InterestOnly => principal
                .as_decimal()
                .checked_mul(monthly_rate)
                .map(Money::from_decimal)
                .ok_or_else(|| overflow(Field::Amount, "interest payment")),
        }
    }
}

/// level payment P * r * (1 + r)^n / ((1 + r)^n - 1)
fn annuity_payment(principal: Money, monthly_rate: Decimal, months: u32) -> Result<Money> {
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let compound = checked_powu(Decimal::ONE + monthly_rate, months)
        .ok_or_else(|| overflow(Field::Term, "compound factor"))?;

    let numerator = principal
        .as_decimal()
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(compound))
        .ok_or_else(|| overflow(Field::Amount, "annuity numerator"))?;
    let denominator = compound - Decimal::ONE;

    // a rate small enough to vanish at decimal precision behaves like zero interest
    if denominator.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    numerator
        .checked_div(denominator)
        .map(Money::from_decimal)
        .ok_or_else(|| overflow(Field::Amount, "annuity payment"))
}

/// base^exp by repeated squaring, None on overflow
fn checked_powu(base: Decimal, exp: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut factor = base;
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(factor)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor.checked_mul(factor)?;
        }
    }

    Some(result)
}

/// overflow blamed on the input that pushed the figure out of range
fn overflow(field: Field, what: &str) -> CalculatorError {
    CalculatorError::CalculationError {
        field,
        message: format!("{what} out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(principal: i64, term_years: u32, rate: Decimal, mortgage_type: MortgageType) -> MortgageInput {
        MortgageInput::new(
            Money::from_major(principal),
            Rate::from_percentage(rate),
            term_years,
            mortgage_type,
        )
    }

    #[test]
    fn test_repayment_annuity() {
        let quote = calculate(&input(300_000, 25, dec!(5.25), MortgageType::Repayment)).unwrap();
        let rounded = quote.rounded(2);

        assert_eq!(quote.term_months, 300);
        assert_eq!(rounded.monthly_payment.as_decimal(), dec!(1797.74));
        assert_eq!(rounded.total_payment.as_decimal(), dec!(539322.94));
    }

    #[test]
    fn test_total_uses_unrounded_monthly() {
        let quote = calculate(&input(300_000, 25, dec!(5.25), MortgageType::Repayment)).unwrap();

        // 1797.74 * 300 would give 539322.00
        let from_rounded = quote.monthly_payment.round_dp(2).as_decimal() * dec!(300);
        assert_ne!(quote.total_payment.round_dp(2).as_decimal(), from_rounded);
    }

    #[test]
    fn test_interest_only() {
        let quote = calculate(&input(300_000, 25, dec!(5.25), MortgageType::InterestOnly)).unwrap();

        assert_eq!(quote.monthly_payment.as_decimal(), dec!(1312.5));
        assert_eq!(quote.total_payment.as_decimal(), dec!(393750));
        assert_eq!(quote.monthly_payment.display(2), "1312.50");
        assert_eq!(quote.total_payment.display(2), "393750.00");
    }

    #[test]
    fn test_zero_rate_repayment() {
        let quote = calculate(&input(120_000, 10, Decimal::ZERO, MortgageType::Repayment)).unwrap();

        assert_eq!(quote.monthly_payment.as_decimal(), dec!(1000));
        assert_eq!(quote.total_payment.as_decimal(), dec!(120000));
    }

    #[test]
    fn test_zero_rate_interest_only_pays_nothing() {
        let quote = calculate(&input(120_000, 10, Decimal::ZERO, MortgageType::InterestOnly)).unwrap();
        assert!(quote.monthly_payment.is_zero());
        assert!(quote.total_payment.is_zero());
    }

    #[test]
    fn test_zero_term_is_refused() {
        let result = calculate(&input(100_000, 0, dec!(4), MortgageType::Repayment));
        assert!(matches!(result, Err(CalculatorError::InvalidTerm)));
    }

    #[test]
    fn test_repayment_exceeds_interest_only() {
        let repayment = calculate(&input(250_000, 30, dec!(4.5), MortgageType::Repayment)).unwrap();
        let interest_only = calculate(&input(250_000, 30, dec!(4.5), MortgageType::InterestOnly)).unwrap();

        assert!(repayment.monthly_payment > interest_only.monthly_payment);
        // repaying the loan costs at least the principal
        assert!(repayment.total_payment > Money::from_major(250_000));
    }

    #[test]
    fn test_one_year_twelve_percent() {
        // standard textbook figure: 10,000 at 12% over 12 months -> 888.49
        let quote = calculate(&input(10_000, 1, dec!(12), MortgageType::Repayment)).unwrap();
        assert_eq!(quote.monthly_payment.round_dp(2).as_decimal(), dec!(888.49));
    }

    #[test]
    fn test_checked_powu() {
        assert_eq!(checked_powu(dec!(1.01), 0), Some(Decimal::ONE));
        assert_eq!(checked_powu(dec!(2), 10), Some(dec!(1024)));
        assert_eq!(checked_powu(dec!(1.5), 3), Some(dec!(3.375)));
        assert_eq!(checked_powu(dec!(10), 40), None);
    }

    #[test]
    fn test_huge_term_overflows_cleanly() {
        let result = calculate(&input(100_000, 100_000, dec!(5), MortgageType::Repayment));
        assert!(matches!(
            result,
            Err(CalculatorError::CalculationError { field: Field::Term, .. })
        ));
    }

    #[test]
    fn test_huge_term_months_overflow() {
        let result = calculate(&input(100_000, u32::MAX, dec!(5), MortgageType::Repayment));
        assert!(matches!(
            result,
            Err(CalculatorError::CalculationError { field: Field::Term, .. })
        ));
    }

    #[test]
    fn test_huge_principal_blames_amount() {
        let input = MortgageInput::new(
            Money::from_decimal(Decimal::MAX),
            Rate::from_percentage(dec!(5.25)),
            25,
            MortgageType::Repayment,
        );
        assert!(matches!(
            calculate(&input),
            Err(CalculatorError::CalculationError { field: Field::Amount, .. })
        ));
    }
}
