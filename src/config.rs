use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};

/// presentation settings for the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// symbol prefixed to every displayed amount
    pub currency_symbol: String,
    /// fractional digits shown in results
    pub decimal_places: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            decimal_places: 2,
        }
    }
}

impl CalculatorConfig {
    /// load from json, missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Decimal carries at most 28 fractional digits
        if self.decimal_places > 28 {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("decimal_places must be at most 28, got {}", self.decimal_places),
            });
        }
        Ok(())
    }
}
