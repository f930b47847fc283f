pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod serialization;
pub mod types;
pub mod validation;

// re-export key types
pub use calculator::{calculate, RepaymentCalculator};
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, FieldError, Result, ValidationErrors};
pub use form::MortgageForm;
pub use types::{Field, MortgageInput, MortgageType, RepaymentQuote};
pub use validation::{parse_input, validate_form, FormInput};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
