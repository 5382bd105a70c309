// Tests for gateway error code translation

use proptest::prelude::*;
use serde_json::json;
use zarinpal::modules::error_codes::message_for_code;
use zarinpal::{translate_error_code, GatewayResponse};

#[test]
fn test_published_codes_are_translated() {
    for code in [-9, -10, -11, -12, -15, -16, -30, -31, -32, -33, -34, -35, -40, -50, -51, -52, -53, -54, 100, 101] {
        let response = GatewayResponse::new(json!({"data": [], "errors": {"code": code}}));
        assert!(
            !translate_error_code(&response).is_empty(),
            "code {code} should have a message"
        );
    }
}

#[test]
fn test_validation_error_code() {
    let response = GatewayResponse::new(json!({"errors": {"code": -9}}));
    assert_eq!(translate_error_code(&response), "خطای اعتبار سنجی");
}

#[test]
fn test_integral_float_code_is_accepted() {
    let response = GatewayResponse::new(json!({"errors": {"code": -9.0}}));
    assert_eq!(translate_error_code(&response), "خطای اعتبار سنجی");
}

#[test]
fn test_missing_or_malformed_codes_translate_to_empty() {
    for raw in [
        json!({}),
        json!({"errors": []}),
        json!({"errors": {"message": "no code"}}),
        json!({"errors": {"code": null}}),
        json!({"errors": {"code": "-9"}}),
        json!({"errors": {"code": -9.5}}),
        json!(null),
    ] {
        let response = GatewayResponse::new(raw.clone());
        assert_eq!(translate_error_code(&response), "", "input {raw}");
    }
}

proptest! {
    #[test]
    fn test_translation_matches_table(code in -200i64..200i64) {
        let response = GatewayResponse::new(json!({"errors": {"code": code}}));
        prop_assert_eq!(
            translate_error_code(&response),
            message_for_code(code).unwrap_or("")
        );
    }
}
