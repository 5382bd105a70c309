use std::env;
use url::Url;

use crate::core::{Result, ZarinpalError};
use crate::modules::gateways::models::{GatewayEnvironment, MerchantId};

/// Gateway client configuration
///
/// `Debug` redacts the merchant id.
#[derive(Clone)]
pub struct GatewayConfig {
    pub merchant_id: String,
    pub sandbox: bool,
    /// Overrides the API host (e.g. a local mock server)
    pub api_base_url: Option<Url>,
    /// Overrides the StartPay host used in redirect URLs
    pub start_pay_base_url: Option<Url>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("merchant_id", &"[REDACTED]")
            .field("sandbox", &self.sandbox)
            .field("api_base_url", &self.api_base_url)
            .field("start_pay_base_url", &self.start_pay_base_url)
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            sandbox: false,
            api_base_url: None,
            start_pay_base_url: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Variables:
    /// - `ZARINPAL_MERCHANT_ID` (required)
    /// - `ZARINPAL_SANDBOX` (default: `false`)
    /// - `ZARINPAL_API_BASE_URL` (default: host of the selected environment)
    /// - `ZARINPAL_START_PAY_BASE_URL` (default: host of the selected environment)
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let merchant_id = lookup("ZARINPAL_MERCHANT_ID")
            .ok_or_else(|| ZarinpalError::configuration("ZARINPAL_MERCHANT_ID not set"))?;

        let sandbox = match lookup("ZARINPAL_SANDBOX") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ZarinpalError::configuration(format!("Invalid ZARINPAL_SANDBOX: {raw}"))
            })?,
            None => false,
        };

        let config = GatewayConfig {
            merchant_id,
            sandbox,
            api_base_url: optional_url(&lookup, "ZARINPAL_API_BASE_URL")?,
            start_pay_base_url: optional_url(&lookup, "ZARINPAL_START_PAY_BASE_URL")?,
        };

        Ok(config)
    }

    pub fn environment(&self) -> GatewayEnvironment {
        GatewayEnvironment::from_sandbox_flag(self.sandbox)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        MerchantId::new(self.merchant_id.as_str())?;
        self.environment().ensure_available()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn optional_url<F>(lookup: &F, var: &str) -> Result<Option<Url>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => Url::parse(raw.trim())
            .map(Some)
            .map_err(|e| ZarinpalError::configuration(format!("Invalid {var} '{raw}': {e}"))),
        _ => Ok(None),
    }
}
