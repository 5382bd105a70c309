//! Zarinpal Payment Gateway Client Library
//!
//! Requests payments, verifies them after the user returns to the callback
//! URL, lists unverified requests and issues refunds against the Zarinpal v4
//! JSON API. Inputs are validated locally before any network call, and the
//! gateway's answers are exposed as raw JSON with accessors for the fields
//! that matter.
//!
//! ```no_run
//! use zarinpal::{PaymentGateway, PaymentRequestInput, ZarinpalClient};
//!
//! # async fn run() -> zarinpal::Result<()> {
//! let client = ZarinpalClient::new("1344b5d4-0048-11e8-94db-005056a205be", false)?;
//! let input = PaymentRequestInput::new(1000, "a simple test", "http://localhost:3000/api/payment");
//! let response = client.create_payment_request(input).await?;
//!
//! if client.was_payment_request_successful(&response) {
//!     println!("redirect to {}", client.get_redirect_url(&response));
//! } else {
//!     println!("{}", client.translate_error(&response));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::config::GatewayConfig;
pub use crate::core::{Currency, Result, TransportError, ZarinpalError};
pub use modules::error_codes::translate_error_code;
pub use modules::gateways::{
    CallbackQuery, GatewayEnvironment, GatewayResponse, MerchantId, PaymentGateway,
    PaymentRequestInput, RefundInput, UnverifiedAuthority, VerifyInput, ZarinpalClient,
};
pub use modules::validation::{
    check_amount, check_authority, check_callback_url, check_currency, check_description,
    ValidationResult,
};
