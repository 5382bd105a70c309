use crate::core::Result;
use crate::modules::gateways::models::{
    GatewayResponse, PaymentRequestInput, RefundInput, VerifyInput,
};
use async_trait::async_trait;

/// Network operations of a payment gateway
///
/// Each call validates its input locally, then issues exactly one POST and
/// returns the parsed JSON answer. Interpreting that answer is left to the
/// accessors on [`GatewayResponse`] and the client.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the gateway for an authority to start a payment
    async fn create_payment_request(&self, input: PaymentRequestInput) -> Result<GatewayResponse>;

    /// Confirm a payment after the user returns to the callback URL
    async fn verify_payment(&self, input: VerifyInput) -> Result<GatewayResponse>;

    /// Paid requests that were never verified
    async fn list_unverified_requests(&self) -> Result<GatewayResponse>;

    /// Refund a verified payment
    async fn refund(&self, input: RefundInput) -> Result<GatewayResponse>;

    /// Get gateway name
    fn name(&self) -> &str;
}
