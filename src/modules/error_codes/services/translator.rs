use std::collections::HashMap;
use std::sync::LazyLock;

use crate::modules::gateways::models::GatewayResponse;

static ERROR_TABLE_JSON: &str = include_str!("../error_codes.json");

/// Gateway error code to Farsi message, parsed once on first use
static ERROR_MESSAGES: LazyLock<HashMap<i64, String>> = LazyLock::new(|| {
    let raw: HashMap<String, String> = match serde_json::from_str(ERROR_TABLE_JSON) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, "Embedded error code table is not valid JSON");
            return HashMap::new();
        }
    };

    raw.into_iter()
        .filter_map(|(code, message)| code.parse::<i64>().ok().map(|code| (code, message)))
        .collect()
});

/// Farsi message for a known gateway code, `None` otherwise
pub fn message_for_code(code: i64) -> Option<&'static str> {
    ERROR_MESSAGES.get(&code).map(String::as_str)
}

/// Farsi message for `errors.code` of a failed response.
///
/// Empty when the code is missing, not an integer, or not in the table.
/// See <https://www.zarinpal.com/docs/md/paymentGateway/errorList.html>.
pub fn translate_error_code(response: &GatewayResponse) -> &'static str {
    response
        .error_code()
        .and_then(message_for_code)
        .unwrap_or_default()
}
