use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::types::Field;

/// problem with a single form input; `Display` is the text shown next to it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} is required")]
    MissingRequiredField { field: Field },

    #[error("{field} must be a number")]
    InvalidNumber { field: Field, input: String },

    #[error("{field} is out of range")]
    OutOfRange { field: Field },

    #[error("{field} must be greater than zero")]
    NotPositive { field: Field },

    #[error("Interest rate cannot be negative")]
    NegativeRate,
}

impl FieldError {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldError::MissingRequiredField { .. })
    }
}

/// every field error from one submission, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// record an error; an existing entry for the field is kept
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// field -> message mapping as handed to a presentation layer
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.iter().map(|(field, error)| (field, error.to_string())).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid input: {0}")]
    Validation(ValidationErrors),

    #[error("mortgage term must be at least one month")]
    InvalidTerm,

    /// the figures overflowed; `field` is the input that drove them there
    #[error("calculation error: {message}")]
    CalculationError { field: Field, message: String },

    #[error("unknown mortgage type: {value}")]
    UnknownMortgageType { value: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl CalculatorError {
    /// the message to show next to an input, for errors that belong to one
    pub fn field_error(&self) -> Option<(Field, FieldError)> {
        match self {
            CalculatorError::CalculationError { field, .. } => {
                Some((*field, FieldError::OutOfRange { field: *field }))
            }
            CalculatorError::InvalidTerm => Some((Field::Term, FieldError::NotPositive { field: Field::Term })),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for CalculatorError {
    fn from(errors: ValidationErrors) -> Self {
        CalculatorError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
