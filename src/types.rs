use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::CalculatorError;

/// mortgage type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MortgageType {
    /// each payment reduces principal and pays interest
    #[default]
    Repayment,
    /// payments cover interest only, principal repaid at term end
    InterestOnly,
}

impl MortgageType {
    /// value used by the form selector
    pub fn as_str(&self) -> &'static str {
        match self {
            MortgageType::Repayment => "repayment",
            MortgageType::InterestOnly => "interestOnly",
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MortgageType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "repayment" => Ok(MortgageType::Repayment),
            "interestOnly" | "interest-only" => Ok(MortgageType::InterestOnly),
            other => Err(CalculatorError::UnknownMortgageType {
                value: other.to_string(),
            }),
        }
    }
}

/// the required form inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Amount,
    Term,
    Rate,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Amount, Field::Term, Field::Rate];

    /// label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Amount => "Mortgage Amount",
            Field::Term => "Mortgage Term (years)",
            Field::Rate => "Interest Rate (%)",
        }
    }

    /// lower-case noun used inside error messages
    pub fn description(&self) -> &'static str {
        match self {
            Field::Amount => "Mortgage amount",
            Field::Term => "Mortgage term",
            Field::Rate => "Interest rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// parsed calculation input, rebuilt on every submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_years: u32,
    pub mortgage_type: MortgageType,
}

impl MortgageInput {
    pub fn new(principal: Money, annual_rate: Rate, term_years: u32, mortgage_type: MortgageType) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
            mortgage_type,
        }
    }

    /// number of monthly payments over the term
    pub fn term_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }
}

/// calculation result at full precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentQuote {
    pub mortgage_type: MortgageType,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
}

impl RepaymentQuote {
    /// copy with both figures rounded for presentation
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            monthly_payment: self.monthly_payment.round_dp(dp),
            total_payment: self.total_payment.round_dp(dp),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mortgage_type_defaults_to_repayment() {
        assert_eq!(MortgageType::default(), MortgageType::Repayment);
    }

    #[test]
    fn test_mortgage_type_selector_values() {
        assert_eq!("repayment".parse::<MortgageType>().unwrap(), MortgageType::Repayment);
        assert_eq!("interestOnly".parse::<MortgageType>().unwrap(), MortgageType::InterestOnly);
        assert_eq!("interest-only".parse::<MortgageType>().unwrap(), MortgageType::InterestOnly);
        assert!(matches!(
            "balloon".parse::<MortgageType>(),
            Err(CalculatorError::UnknownMortgageType { value }) if value == "balloon"
        ));

        let json = serde_json::to_string(&MortgageType::InterestOnly).unwrap();
        assert_eq!(json, "\"interestOnly\"");
    }

    #[test]
    fn test_rounded_quote() {
        let quote = RepaymentQuote {
            mortgage_type: MortgageType::Repayment,
            term_months: 300,
            monthly_payment: Money::from_decimal(dec!(1797.7431455)),
            total_payment: Money::from_decimal(dec!(539322.9436541)),
        };

        let rounded = quote.rounded(2);
        assert_eq!(rounded.monthly_payment.as_decimal(), dec!(1797.74));
        assert_eq!(rounded.total_payment.as_decimal(), dec!(539322.94));
        assert_eq!(rounded.term_months, 300);
    }

    #[test]
    fn test_term_months() {
        let input = MortgageInput::new(Money::from_major(1), Rate::ZERO, 25, MortgageType::Repayment);
        assert_eq!(input.term_months(), 300);
    }
}
