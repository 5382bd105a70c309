use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Currency;
use crate::modules::gateways::models::MerchantId;

/// Input for starting a payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequestInput {
    pub amount: i64,
    pub description: String,
    pub callback_url: String,
    /// Forwarded to the gateway unchanged; values may be nested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub currency: Currency,
}

impl PaymentRequestInput {
    pub fn new(amount: i64, description: impl Into<String>, callback_url: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            callback_url: callback_url.into(),
            metadata: None,
            mobile: None,
            email: None,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Input for confirming a completed payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyInput {
    pub amount: i64,
    pub authority: String,
}

impl VerifyInput {
    pub fn new(amount: i64, authority: impl Into<String>) -> Self {
        Self {
            amount,
            authority: authority.into(),
        }
    }
}

/// Input for refunding a verified payment
///
/// The gateway also requires an access token for refunds; attach it to the
/// HTTP client passed to `ZarinpalClient::with_http_client`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundInput {
    pub authority: String,
}

impl RefundInput {
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }
}

/// Query parameters the gateway appends to the callback URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Authority", default)]
    pub authority: Option<String>,
}

impl CallbackQuery {
    /// Parses a raw query string such as `Authority=A00..&Status=OK`.
    ///
    /// Unknown keys are ignored; missing keys stay `None`.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = CallbackQuery::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "Status" => parsed.status = Some(value.into_owned()),
                "Authority" => parsed.authority = Some(value.into_owned()),
                _ => {}
            }
        }

        parsed
    }
}

// Request bodies as sent on the wire

#[derive(Debug, Serialize)]
pub(crate) struct PaymentRequestBody<'a> {
    pub merchant_id: &'a MerchantId,
    pub amount: i64,
    pub description: &'a str,
    pub currency: Currency,
    pub callback_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyBody<'a> {
    pub merchant_id: &'a MerchantId,
    pub amount: i64,
    pub authority: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MerchantBody<'a> {
    pub merchant_id: &'a MerchantId,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefundBody<'a> {
    pub merchant_id: &'a MerchantId,
    pub authority: &'a str,
}
