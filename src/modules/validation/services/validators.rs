//! Local field checks run before any request leaves the process.
//!
//! Each check inspects one value and reports a [`ValidationResult`]. Type
//! checks of the wire format (integer amount, string fields) are carried by
//! the Rust signatures, so only value-level rules remain here.

use url::Url;

use crate::modules::validation::models::ValidationResult;

/// Characters a callback URL may contain after its scheme.
const CALLBACK_URL_CHARSET: &str = "-()@:%_+.~#?&/=";

/// Rejects zero only. Negative amounts pass and are left to the gateway.
pub fn check_amount(amount: i64) -> ValidationResult {
    if amount == 0 {
        return ValidationResult::invalid(&["Amount is not valid, amount cannot be 0"]);
    }

    ValidationResult::valid()
}

pub fn check_description(description: &str) -> ValidationResult {
    if description.is_empty() {
        return ValidationResult::invalid(&[
            "description is not valid it cannot be an empty string",
        ]);
    }

    ValidationResult::valid()
}

/// Accepts absolute `http`/`https` URLs with a host, optional port and
/// optional path or query, e.g. `http://localhost:3000/api/payment`.
pub fn check_callback_url(callback_url: &str) -> ValidationResult {
    if callback_url.is_empty() {
        return ValidationResult::invalid(&["callback url is not valid it cannot be an empty string"]);
    }

    if !has_callback_url_shape(callback_url) {
        return ValidationResult::invalid(&[
            "callback url is not valid it should be a valid url",
            callback_url,
        ]);
    }

    ValidationResult::valid()
}

pub fn check_authority(authority: &str) -> ValidationResult {
    if authority.is_empty() {
        return ValidationResult::invalid(&["authority is not valid it should be a non empty string"]);
    }

    ValidationResult::valid()
}

/// Case-sensitive membership in `{IRT, IRR}`
pub fn check_currency(currency: &str) -> ValidationResult {
    if currency != "IRT" && currency != "IRR" {
        let reason = format!(
            "Currency is not valid it can be either 'IRR' for rial or 'IRT' for toman, currency {currency}"
        );
        return ValidationResult::invalid(&[reason.as_str()]);
    }

    ValidationResult::valid()
}

fn has_callback_url_shape(raw: &str) -> bool {
    let Some(rest) = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
    else {
        return false;
    };

    // Host must open with a word character
    match rest.chars().next() {
        Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => {}
        _ => return false,
    }

    if !rest
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || CALLBACK_URL_CHARSET.contains(ch))
    {
        return false;
    }

    match Url::parse(raw) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
