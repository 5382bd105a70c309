use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::{Result, ZarinpalError};

pub const PAYMENT_REQUEST_PATH: &str = "/pg/v4/payment/request.json";
pub const PAYMENT_VERIFY_PATH: &str = "/pg/v4/payment/verify.json";
pub const UNVERIFIED_PATH: &str = "/pg/v4/payment/unVerified.json";
pub const REFUND_PATH: &str = "/pg/v4/payment/refund.json";
pub const START_PAY_PATH: &str = "/pg/StartPay/";

/// Which gateway deployment a client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayEnvironment {
    Sandbox,
    #[default]
    Production,
}

impl GatewayEnvironment {
    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            GatewayEnvironment::Sandbox
        } else {
            GatewayEnvironment::Production
        }
    }

    /// Host receiving the JSON API calls
    pub fn api_base_url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Sandbox => "https://sandbox.zarinpal.com",
            GatewayEnvironment::Production => "https://api.zarinpal.com",
        }
    }

    /// Host serving the StartPay page users are redirected to
    pub fn start_pay_base_url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Sandbox => "https://sandbox.zarinpal.com",
            GatewayEnvironment::Production => "https://www.zarinpal.com",
        }
    }

    /// Fails while the gateway keeps its sandbox switched off.
    pub fn ensure_available(&self) -> Result<()> {
        match self {
            GatewayEnvironment::Sandbox => Err(ZarinpalError::configuration(
                "Zarinpal has disabled the sandbox mode, it cannot be used until they enable it again",
            )),
            GatewayEnvironment::Production => Ok(()),
        }
    }
}

impl std::fmt::Display for GatewayEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayEnvironment::Sandbox => write!(f, "sandbox"),
            GatewayEnvironment::Production => write!(f, "production"),
        }
    }
}

/// Resolved URLs for every call a client makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEndpoints {
    pub payment_request: Url,
    pub payment_verify: Url,
    /// Unverified listing and refunds have no sandbox variant.
    pub unverified: Url,
    pub refund: Url,
    start_pay_base: Url,
}

impl GatewayEndpoints {
    /// Endpoints of `environment`, with optional host overrides for both the
    /// API and the StartPay page
    pub fn resolve(
        environment: GatewayEnvironment,
        api_base_url: Option<&Url>,
        start_pay_base_url: Option<&Url>,
    ) -> Result<Self> {
        let api_base = match api_base_url {
            Some(url) => url.clone(),
            None => parse_base(environment.api_base_url())?,
        };
        let production_api_base = match api_base_url {
            Some(url) => url.clone(),
            None => parse_base(GatewayEnvironment::Production.api_base_url())?,
        };
        let start_pay_base = match start_pay_base_url {
            Some(url) => url.clone(),
            None => parse_base(environment.start_pay_base_url())?,
        };

        Ok(Self {
            payment_request: join(&api_base, PAYMENT_REQUEST_PATH)?,
            payment_verify: join(&api_base, PAYMENT_VERIFY_PATH)?,
            unverified: join(&production_api_base, UNVERIFIED_PATH)?,
            refund: join(&production_api_base, REFUND_PATH)?,
            start_pay_base,
        })
    }

    /// `{start-pay-host}/pg/StartPay/{authority}`
    pub fn start_pay_url(&self, authority: &str) -> String {
        format!(
            "{}{}{}",
            self.start_pay_base.as_str().trim_end_matches('/'),
            START_PAY_PATH,
            authority
        )
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|e| ZarinpalError::configuration(format!("invalid base URL '{raw}': {e}")))
}

fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(|e| {
        ZarinpalError::configuration(format!("cannot join '{path}' onto '{base}': {e}"))
    })
}
