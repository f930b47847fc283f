use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{FieldError, ValidationErrors};
use crate::types::{Field, MortgageInput, MortgageType};

/// raw text of the three required inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub amount: String,
    pub term: String,
    pub rate: String,
}

impl FormInput {
    pub fn new(amount: impl Into<String>, term: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            term: term.into(),
            rate: rate.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Term => &self.term,
            Field::Rate => &self.rate,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Amount => &mut self.amount,
            Field::Term => &mut self.term,
            Field::Rate => &mut self.rate,
        }
    }
}

/// presence check: one `MissingRequiredField` per empty input, nothing else
pub fn validate_form(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in Field::ALL {
        if input.value(field).trim().is_empty() {
            errors.insert(field, FieldError::MissingRequiredField { field });
        }
    }

    errors
}

/// presence check followed by numeric parsing of every present field
pub fn parse_input(
    input: &FormInput,
    mortgage_type: MortgageType,
) -> Result<MortgageInput, ValidationErrors> {
    let mut errors = validate_form(input);

    let principal = parse_field(input, Field::Amount, &errors, parse_amount);
    let term_years = parse_field(input, Field::Term, &errors, parse_term);
    let annual_rate = parse_field(input, Field::Rate, &errors, parse_rate);

    let (principal, term_years, annual_rate) = match (principal, term_years, annual_rate) {
        (Some(Ok(p)), Some(Ok(t)), Some(Ok(r))) => (p, t, r),
        (principal, term_years, annual_rate) => {
            for (field, error) in [
                (Field::Amount, principal.and_then(|r| r.err())),
                (Field::Term, term_years.and_then(|r| r.err())),
                (Field::Rate, annual_rate.and_then(|r| r.err())),
            ] {
                if let Some(error) = error {
                    errors.insert(field, error);
                }
            }
            return Err(errors);
        }
    };

    Ok(MortgageInput::new(principal, annual_rate, term_years, mortgage_type))
}

/// skip fields that already failed the presence check
fn parse_field<T>(
    input: &FormInput,
    field: Field,
    errors: &ValidationErrors,
    parse: fn(&str) -> Result<T, FieldError>,
) -> Option<Result<T, FieldError>> {
    if errors.contains(field) {
        None
    } else {
        Some(parse(input.value(field).trim()))
    }
}

fn parse_amount(raw: &str) -> Result<Money, FieldError> {
    let amount = parse_decimal(raw, Field::Amount)?;
    if amount <= Decimal::ZERO {
        return Err(FieldError::NotPositive { field: Field::Amount });
    }
    Ok(Money::from_decimal(amount))
}

fn parse_term(raw: &str) -> Result<u32, FieldError> {
    // whole years only; "-5" parses so it can be reported as non-positive
    let years = i64::from_str(raw).map_err(|_| unparsable(raw, Field::Term, false))?;
    if years <= 0 {
        return Err(FieldError::NotPositive { field: Field::Term });
    }
    u32::try_from(years).map_err(|_| FieldError::OutOfRange { field: Field::Term })
}

fn parse_rate(raw: &str) -> Result<Rate, FieldError> {
    let percent = parse_decimal(raw, Field::Rate)?;
    if percent < Decimal::ZERO {
        return Err(FieldError::NegativeRate);
    }
    Ok(Rate::from_percentage(percent))
}

fn parse_decimal(raw: &str, field: Field) -> Result<Decimal, FieldError> {
    Decimal::from_str(raw).map_err(|_| unparsable(raw, field, true))
}

/// a well-formed number that failed to parse is too large, anything else is not a number
fn unparsable(raw: &str, field: Field, allow_fraction: bool) -> FieldError {
    if looks_numeric(raw, allow_fraction) {
        FieldError::OutOfRange { field }
    } else {
        FieldError::InvalidNumber {
            field,
            input: raw.to_string(),
        }
    }
}

fn looks_numeric(raw: &str, allow_fraction: bool) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) if allow_fraction => (whole, fraction),
        Some(_) => return false,
        None => (unsigned, ""),
    };

    !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
