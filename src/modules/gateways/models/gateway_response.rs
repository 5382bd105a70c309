use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `data.code` of an accepted payment request or a first-time verification
pub const CODE_SUCCESS: i64 = 100;

/// `data.code` of a verification that already succeeded earlier
pub const CODE_ALREADY_VERIFIED: i64 = 101;

/// Raw JSON answer from the gateway
///
/// The remote service owns the schema, so fields are read on demand and
/// every accessor tolerates absence. Successful calls carry a `data` object;
/// failures carry `errors` and usually an empty `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayResponse(Value);

impl GatewayResponse {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }

    fn data(&self, key: &str) -> Option<&Value> {
        self.0.get("data").and_then(|data| data.get(key))
    }

    fn errors(&self, key: &str) -> Option<&Value> {
        self.0.get("errors").and_then(|errors| errors.get(key))
    }

    pub fn code(&self) -> Option<i64> {
        self.data("code").and_then(as_integer)
    }

    /// `data.authority`, or `""` when absent
    pub fn authority(&self) -> &str {
        self.data("authority")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Masked card number, e.g. `502229******5995`
    pub fn card_pan(&self) -> Option<&str> {
        self.data("card_pan").and_then(Value::as_str)
    }

    pub fn ref_id(&self) -> Option<i64> {
        self.data("ref_id").and_then(as_integer)
    }

    pub fn fee(&self) -> Option<i64> {
        self.data("fee").and_then(as_integer)
    }

    pub fn error_code(&self) -> Option<i64> {
        self.errors("code").and_then(as_integer)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.errors("message").and_then(Value::as_str)
    }

    /// Entries of `data.authorities` from an unverified-list call.
    ///
    /// Entries that do not decode are skipped.
    pub fn unverified_authorities(&self) -> Vec<UnverifiedAuthority> {
        match self.data("authorities").and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl From<Value> for GatewayResponse {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

/// A paid request still waiting for verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnverifiedAuthority {
    pub authority: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub callback_url: String,
    #[serde(default)]
    pub referer: String,
    /// Gateway local time, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub date: String,
}

/// Integer view of a JSON number; integral floats such as `-9.0` count.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}
