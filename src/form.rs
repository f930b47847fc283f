use crate::calculator;
use crate::config::CalculatorConfig;
use crate::errors::{CalculatorError, Result, ValidationErrors};
use crate::serialization::FormView;
use crate::types::{Field, MortgageType, RepaymentQuote};
use crate::validation::{self, FormInput};

/// state behind the calculator form
///
/// Inputs are set through controlled setters and only [`MortgageForm::submit`]
/// recomputes. Editing a field or switching the mortgage type leaves the last
/// result and the last errors exactly as they were.
#[derive(Debug, Clone, Default)]
pub struct MortgageForm {
    input: FormInput,
    mortgage_type: MortgageType,
    errors: ValidationErrors,
    quote: Option<RepaymentQuote>,
    config: CalculatorConfig,
}

impl MortgageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.set_field(Field::Amount, value.into());
    }

    pub fn set_term(&mut self, value: impl Into<String>) {
        self.set_field(Field::Term, value.into());
    }

    pub fn set_rate(&mut self, value: impl Into<String>) {
        self.set_field(Field::Rate, value.into());
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        log::debug!("{} set to {:?}", field, value);
        *self.input.value_mut(field) = value;
    }

    pub fn select_type(&mut self, mortgage_type: MortgageType) {
        log::debug!("mortgage type set to {}", mortgage_type);
        self.mortgage_type = mortgage_type;
    }

    /// validate the current inputs and, if they pass, compute a fresh quote
    pub fn submit(&mut self) -> Result<&RepaymentQuote> {
        let parsed = match validation::parse_input(&self.input, self.mortgage_type) {
            Ok(parsed) => parsed,
            Err(errors) => {
                log::warn!("submission rejected: {}", errors);
                self.errors = errors.clone();
                self.quote = None;
                return Err(CalculatorError::Validation(errors));
            }
        };

        self.errors = ValidationErrors::new();
        let quote = match calculator::calculate(&parsed) {
            Ok(quote) => quote,
            Err(e) => {
                log::warn!("submission could not be calculated: {}", e);
                if let Some((field, error)) = e.field_error() {
                    self.errors.insert(field, error);
                }
                self.quote = None;
                return Err(e);
            }
        };

        log::info!(
            "{} mortgage over {} months: monthly {}, total {}",
            quote.mortgage_type,
            quote.term_months,
            quote.monthly_payment.display(self.config.decimal_places),
            quote.total_payment.display(self.config.decimal_places)
        );

        Ok(&*self.quote.insert(quote))
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn mortgage_type(&self) -> MortgageType {
        self.mortgage_type
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// text shown next to the input, if the last submission flagged it
    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    /// last successful quote at full precision
    pub fn quote(&self) -> Option<&RepaymentQuote> {
        self.quote.as_ref()
    }

    /// monthly and total lines for the results panel
    pub fn result_lines(&self) -> Option<[String; 2]> {
        let quote = self.quote.as_ref()?;
        let symbol = &self.config.currency_symbol;
        let dp = self.config.decimal_places;

        Some([
            format!("Monthly Repayment: {}{}", symbol, quote.monthly_payment.display(dp)),
            format!("Total Payment: {}{}", symbol, quote.total_payment.display(dp)),
        ])
    }

    /// pretty-printed snapshot of the form
    pub fn to_json_pretty(&self) -> String {
        FormView::from_form(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}
