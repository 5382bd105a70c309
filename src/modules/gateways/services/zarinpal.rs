use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use url::Url;

use super::gateway_trait::PaymentGateway;
use crate::config::GatewayConfig;
use crate::core::{Result, TransportError};
use crate::modules::error_codes::translate_error_code;
use crate::modules::gateways::models::payment_request::{
    MerchantBody, PaymentRequestBody, RefundBody, VerifyBody,
};
use crate::modules::gateways::models::{
    CallbackQuery, GatewayEndpoints, GatewayEnvironment, GatewayResponse, MerchantId,
    PaymentRequestInput, RefundInput, VerifyInput, CODE_ALREADY_VERIFIED, CODE_SUCCESS,
};
use crate::modules::validation::{
    check_amount, check_authority, check_callback_url, check_description,
};

/// Zarinpal payment gateway client
///
/// Implements the PaymentGateway trait for the Zarinpal v4 JSON API.
/// API Documentation: https://www.zarinpal.com/docs/paymentGateway/
///
/// Configuration is fixed at construction, so a client can be cloned and
/// shared across tasks freely.
#[derive(Debug, Clone)]
pub struct ZarinpalClient {
    client: Client,
    merchant_id: MerchantId,
    environment: GatewayEnvironment,
    endpoints: GatewayEndpoints,
}

impl ZarinpalClient {
    /// Create a new Zarinpal client
    ///
    /// # Arguments
    /// * `merchant_id` - 36 character merchant id from the Zarinpal panel
    /// * `sandbox` - must be `false`; the gateway has its sandbox switched off
    ///
    /// # Errors
    /// `ZarinpalError::Configuration` for a malformed merchant id or when
    /// sandbox mode is requested.
    pub fn new(merchant_id: &str, sandbox: bool) -> Result<Self> {
        let merchant_id = MerchantId::new(merchant_id)?;
        Self::build(merchant_id, GatewayEnvironment::from_sandbox_flag(sandbox), None, None)
    }

    /// Create a client from environment-derived configuration, honouring its
    /// base URL overrides
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let merchant_id = MerchantId::new(config.merchant_id.as_str())?;
        Self::build(
            merchant_id,
            config.environment(),
            config.api_base_url.as_ref(),
            config.start_pay_base_url.as_ref(),
        )
    }

    fn build(
        merchant_id: MerchantId,
        environment: GatewayEnvironment,
        api_base_url: Option<&Url>,
        start_pay_base_url: Option<&Url>,
    ) -> Result<Self> {
        environment.ensure_available()?;
        let endpoints = GatewayEndpoints::resolve(environment, api_base_url, start_pay_base_url)?;

        Ok(Self {
            client: Client::new(),
            merchant_id,
            environment,
            endpoints,
        })
    }

    /// Replace the underlying HTTP client.
    ///
    /// Refunds need a gateway access token; supply a client whose default
    /// headers carry it.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn merchant_id(&self) -> &MerchantId {
        &self.merchant_id
    }

    pub fn environment(&self) -> GatewayEnvironment {
        self.environment
    }

    pub fn endpoints(&self) -> &GatewayEndpoints {
        &self.endpoints
    }

    /// POST `payload` as JSON and parse whatever JSON comes back.
    ///
    /// Gateway-level failures arrive as JSON with an `errors` object and a
    /// 4xx status; those are returned as responses, not errors.
    async fn send<T: Serialize + ?Sized>(
        &self,
        endpoint: &Url,
        payload: &T,
    ) -> std::result::Result<GatewayResponse, TransportError> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %endpoint, error = %e, "Zarinpal request failed");
                TransportError::Http {
                    endpoint: endpoint.to_string(),
                    source: e,
                }
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            error!(endpoint = %endpoint, error = %e, "Failed to read Zarinpal response");
            TransportError::Http {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })?;

        if !status.is_success() {
            warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "Zarinpal answered with a non-success status"
            );
        }

        let raw: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            error!(endpoint = %endpoint, error = %e, "Zarinpal response is not JSON");
            TransportError::Decode {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })?;

        let response = GatewayResponse::new(raw);
        debug!(
            endpoint = %endpoint,
            code = ?response.code(),
            error_code = ?response.error_code(),
            "Zarinpal response received"
        );

        Ok(response)
    }

    /// True iff `data.code` is 100
    pub fn was_payment_request_successful(&self, response: &GatewayResponse) -> bool {
        response.code() == Some(CODE_SUCCESS)
    }

    pub fn get_authority<'a>(&self, response: &'a GatewayResponse) -> &'a str {
        response.authority()
    }

    /// StartPay URL for a successful payment request, `""` otherwise
    pub fn get_redirect_url(&self, response: &GatewayResponse) -> String {
        if !self.was_payment_request_successful(response) {
            return String::new();
        }

        self.endpoints.start_pay_url(response.authority())
    }

    /// True iff the callback carried `Status=OK`
    pub fn did_user_pay_successfully(&self, query: &CallbackQuery) -> bool {
        query.status.as_deref() == Some("OK")
    }

    pub fn get_authority_from_callback<'a>(&self, query: &'a CallbackQuery) -> Option<&'a str> {
        query.authority.as_deref()
    }

    /// 100 for a fresh verification, 101 when the payment was verified before
    pub fn was_verify_successful(&self, response: &GatewayResponse) -> bool {
        matches!(response.code(), Some(CODE_SUCCESS | CODE_ALREADY_VERIFIED))
    }

    pub fn get_masked_card_pan<'a>(&self, response: &'a GatewayResponse) -> Option<&'a str> {
        response.card_pan()
    }

    pub fn get_ref_id(&self, response: &GatewayResponse) -> Option<i64> {
        response.ref_id()
    }

    pub fn get_fee(&self, response: &GatewayResponse) -> Option<i64> {
        response.fee()
    }

    /// Farsi message for the response's error code, `""` if unknown
    pub fn translate_error(&self, response: &GatewayResponse) -> &'static str {
        translate_error_code(response)
    }
}

fn reject(field: &'static str, reason: &str) {
    warn!(field, reason, "Rejected Zarinpal call before sending");
}

#[async_trait]
impl PaymentGateway for ZarinpalClient {
    async fn create_payment_request(&self, input: PaymentRequestInput) -> Result<GatewayResponse> {
        for (field, validity) in [
            ("amount", check_amount(input.amount)),
            ("description", check_description(&input.description)),
            ("callback_url", check_callback_url(&input.callback_url)),
        ] {
            if !validity.ok {
                reject(field, &validity.reason);
            }
            validity.into_result(field)?;
        }

        info!(
            amount = input.amount,
            currency = %input.currency,
            environment = %self.environment,
            "Requesting Zarinpal payment"
        );

        let body = PaymentRequestBody {
            merchant_id: &self.merchant_id,
            amount: input.amount,
            description: &input.description,
            currency: input.currency,
            callback_url: &input.callback_url,
            metadata: input.metadata.as_ref(),
            mobile: input.mobile.as_deref(),
            email: input.email.as_deref(),
        };

        let response = self.send(&self.endpoints.payment_request, &body).await?;

        if self.was_payment_request_successful(&response) {
            info!(authority = %response.authority(), "Zarinpal payment request accepted");
        } else {
            warn!(
                error_code = ?response.error_code(),
                "Zarinpal payment request was not accepted"
            );
        }

        Ok(response)
    }

    async fn verify_payment(&self, input: VerifyInput) -> Result<GatewayResponse> {
        for (field, validity) in [
            ("amount", check_amount(input.amount)),
            ("authority", check_authority(&input.authority)),
        ] {
            if !validity.ok {
                reject(field, &validity.reason);
            }
            validity.into_result(field)?;
        }

        info!(
            amount = input.amount,
            authority = %input.authority,
            "Verifying Zarinpal payment"
        );

        let body = VerifyBody {
            merchant_id: &self.merchant_id,
            amount: input.amount,
            authority: &input.authority,
        };

        let response = self.send(&self.endpoints.payment_verify, &body).await?;

        if response.code() == Some(CODE_ALREADY_VERIFIED) {
            info!(authority = %input.authority, "Zarinpal payment was already verified");
        }

        Ok(response)
    }

    async fn list_unverified_requests(&self) -> Result<GatewayResponse> {
        info!("Listing unverified Zarinpal requests");

        let body = MerchantBody {
            merchant_id: &self.merchant_id,
        };

        Ok(self.send(&self.endpoints.unverified, &body).await?)
    }

    async fn refund(&self, input: RefundInput) -> Result<GatewayResponse> {
        let validity = check_authority(&input.authority);
        if !validity.ok {
            reject("authority", &validity.reason);
        }
        validity.into_result("authority")?;

        info!(authority = %input.authority, "Refunding Zarinpal payment");

        let body = RefundBody {
            merchant_id: &self.merchant_id,
            authority: &input.authority,
        };

        Ok(self.send(&self.endpoints.refund, &body).await?)
    }

    fn name(&self) -> &str {
        "zarinpal"
    }
}
