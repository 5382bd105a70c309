use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::core::{Result, ZarinpalError};

/// Required length of a merchant id, in characters
pub const MERCHANT_ID_LEN: usize = 36;

/// Credential identifying the integration to the gateway
///
/// Always exactly 36 characters; immutable once constructed. `Debug` shows
/// only the first segment so ids do not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MerchantId(String);

impl MerchantId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let len = value.chars().count();

        if len != MERCHANT_ID_LEN {
            return Err(ZarinpalError::configuration(format!(
                "merchant id should be {MERCHANT_ID_LEN} characters long, got {len}"
            )));
        }

        Ok(Self(value))
    }

    /// A well-formed random id (hyphenated UUID v4), for tests and local runs
    pub fn random() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "MerchantId({prefix}-[REDACTED])")
    }
}

impl TryFrom<&str> for MerchantId {
    type Error = ZarinpalError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for MerchantId {
    type Error = ZarinpalError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for MerchantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
