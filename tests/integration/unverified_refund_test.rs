// Integration tests for listing unverified requests and refunds

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zarinpal::{PaymentGateway, RefundInput, ZarinpalError};

#[tokio::test]
async fn test_list_unverified_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(UNVERIFIED_PATH))
        .and(body_json(json!({"merchant_id": MERCHANT_ID})))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataFactory::unverified_list()))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client.list_unverified_requests().await.unwrap();

    assert_eq!(response.code(), Some(100));
    let authorities = response.unverified_authorities();
    assert_eq!(authorities.len(), 2);
    assert_eq!(authorities[0].amount, 50500);
    assert_eq!(authorities[1].authority, "A00000000000000000000000000207288781");
    assert_eq!(authorities[1].callback_url, "https://golroz.com/vpay");
}

#[tokio::test]
async fn test_refund_carries_caller_supplied_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFUND_PATH))
        .and(header("authorization", "Bearer access-token"))
        .and(body_json(json!({
            "merchant_id": MERCHANT_ID,
            "authority": AUTHORITY
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataFactory::refunded()))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer access-token"));
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let client = mock_client(&server).with_http_client(http);
    let response = client.refund(RefundInput::new(AUTHORITY)).await.unwrap();

    assert_eq!(response.code(), Some(100));
    assert_eq!(response.ref_id(), Some(3));
}

#[tokio::test]
async fn test_refund_without_token_returns_gateway_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REFUND_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(TestDataFactory::gateway_error(-10, "Terminal is not valid")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let response = client.refund(RefundInput::new(AUTHORITY)).await.unwrap();

    assert_eq!(response.code(), None);
    assert_eq!(
        client.translate_error(&response),
        "ای پی و يا مرچنت كد پذيرنده صحيح نيست"
    );
}

#[tokio::test]
async fn test_refund_requires_authority() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    match client.refund(RefundInput::new("")).await {
        Err(ZarinpalError::Validation { field, reason }) => {
            assert_eq!(field, "authority");
            assert_eq!(reason, "authority is not valid it should be a non empty string");
        }
        other => panic!("expected authority validation error, got {other:?}"),
    }
}
