/// serializable snapshot of the calculator form
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::form::MortgageForm;
use crate::types::{Field, MortgageType};
use crate::validation::FormInput;

#[derive(Debug, Serialize, Deserialize)]
pub struct FormView {
    pub input: FormInput,
    pub mortgage_type: MortgageType,
    pub errors: BTreeMap<Field, String>,
    pub result: Option<ResultView>,
}

/// figures as displayed, already rounded
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultView {
    pub mortgage_type: MortgageType,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub currency_symbol: String,
}

impl FormView {
    pub fn from_form(form: &MortgageForm) -> Self {
        let config = form.config();

        FormView {
            input: form.input().clone(),
            mortgage_type: form.mortgage_type(),
            errors: form.errors().messages(),
            result: form.quote().map(|quote| {
                let rounded = quote.rounded(config.decimal_places);
                ResultView {
                    mortgage_type: rounded.mortgage_type,
                    term_months: rounded.term_months,
                    monthly_payment: rounded.monthly_payment,
                    total_payment: rounded.total_payment,
                    currency_symbol: config.currency_symbol.clone(),
                }
            }),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
