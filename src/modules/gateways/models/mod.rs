pub mod gateway_config;
pub mod gateway_response;
pub mod merchant;
pub mod payment_request;

pub use gateway_config::{GatewayEndpoints, GatewayEnvironment};
pub use gateway_response::{
    GatewayResponse, UnverifiedAuthority, CODE_ALREADY_VERIFIED, CODE_SUCCESS,
};
pub use merchant::{MerchantId, MERCHANT_ID_LEN};
pub use payment_request::{CallbackQuery, PaymentRequestInput, RefundInput, VerifyInput};
