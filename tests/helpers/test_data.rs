// Test Data Factory
//
// Canned gateway payloads, shaped after the responses documented by Zarinpal.

use serde_json::{json, Value};

pub const MERCHANT_ID: &str = "1344b5d4-0048-11e8-94db-005056a205be";
pub const AUTHORITY: &str = "A0000000000000000000000000000wwOGYpd";
pub const CALLBACK_URL: &str = "http://localhost:3000/api/payment";

/// Test data factory for gateway responses
pub struct TestDataFactory;

impl TestDataFactory {
    pub fn payment_request_accepted() -> Value {
        json!({
            "data": {
                "code": 100,
                "message": "Success",
                "authority": AUTHORITY,
                "fee_type": "Merchant",
                "fee": 100
            },
            "errors": []
        })
    }

    /// Body returned together with an HTTP 4xx status
    pub fn gateway_error(code: i64, message: &str) -> Value {
        json!({
            "data": [],
            "errors": {
                "code": code,
                "message": message,
                "validations": []
            }
        })
    }

    pub fn verified(code: i64) -> Value {
        json!({
            "data": {
                "code": code,
                "message": if code == 100 { "Verified" } else { "Verified before" },
                "card_hash": "1EBE3EBEBE35C7EC0F8D6EE4F2F859107A87822CA179BC9528767EA7B5489B69",
                "card_pan": "502229******5995",
                "ref_id": 201,
                "fee_type": "Merchant",
                "fee": 0
            },
            "errors": []
        })
    }

    pub fn unverified_list() -> Value {
        json!({
            "data": {
                "code": 100,
                "message": "Success",
                "authorities": [
                    {
                        "authority": "A00000000000000000000000000207288780",
                        "amount": 50500,
                        "callback_url": "https://golroz.com/vpay",
                        "referer": "https://golroz.com/test-form/",
                        "date": "2020-07-01 17:33:21"
                    },
                    {
                        "authority": "A00000000000000000000000000207288781",
                        "amount": 12000,
                        "callback_url": "https://golroz.com/vpay",
                        "referer": "https://golroz.com/test-form/",
                        "date": "2020-07-01 17:41:02"
                    }
                ]
            },
            "errors": []
        })
    }

    pub fn refunded() -> Value {
        json!({
            "data": {
                "code": 100,
                "message": "Success",
                "ref_id": 3,
                "session_id": "ZP.2020.07.02.0001"
            },
            "errors": []
        })
    }
}
