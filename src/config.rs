use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{AccountError, Result};

/// length of a billing cycle in days
pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 30;

/// days per year used to derive the daily rate
pub const DEFAULT_YEAR_BASIS: u32 = 365;

fn default_cycle_length_days() -> u32 {
    DEFAULT_CYCLE_LENGTH_DAYS
}

fn default_year_basis() -> u32 {
    DEFAULT_YEAR_BASIS
}

/// account configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub credit_limit: Money,
    pub apr: Rate,
    #[serde(default = "default_cycle_length_days")]
    pub cycle_length_days: u32,
    #[serde(default = "default_year_basis")]
    pub year_basis: u32,
}

impl AccountConfig {
    /// 30-day cycle, 365-day year
    pub fn new(credit_limit: Money, apr: Rate) -> Self {
        Self {
            credit_limit,
            apr,
            cycle_length_days: DEFAULT_CYCLE_LENGTH_DAYS,
            year_basis: DEFAULT_YEAR_BASIS,
        }
    }

    /// load from a json document, then validate
    ///
    /// `cycle_length_days` and `year_basis` may be omitted and fall back to
    /// the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AccountConfig =
            serde_json::from_str(json).map_err(|e| AccountError::InvalidConfiguration {
                message: format!("unreadable account config: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.credit_limit.is_negative() {
            return Err(AccountError::InvalidConfiguration {
                message: format!("credit limit cannot be negative: {}", self.credit_limit),
            });
        }

        if self.apr.is_negative() {
            return Err(AccountError::InvalidConfiguration {
                message: format!("apr cannot be negative: {}", self.apr),
            });
        }

        if self.cycle_length_days == 0 {
            return Err(AccountError::InvalidConfiguration {
                message: "cycle length must be at least one day".to_string(),
            });
        }

        if self.year_basis == 0 {
            return Err(AccountError::InvalidConfiguration {
                message: "year basis must be at least one day".to_string(),
            });
        }

        Ok(())
    }
}
