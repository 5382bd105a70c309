use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Result, ZarinpalError};
use crate::modules::validation::check_currency;

/// Currencies the gateway accepts for a payment request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Iranian Toman (gateway default)
    #[default]
    IRT,
    /// Iranian Rial
    IRR,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::IRT => "IRT",
            Currency::IRR => "IRR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = ZarinpalError;

    /// Exact, case-sensitive match; the gateway rejects `irt`.
    fn from_str(s: &str) -> Result<Self> {
        let validity = check_currency(s);
        if !validity.ok {
            return Err(ZarinpalError::validation("currency", validity.reason));
        }

        match s {
            "IRR" => Ok(Currency::IRR),
            _ => Ok(Currency::IRT),
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = ZarinpalError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}
