pub mod models;
pub mod services;

pub use models::{
    CallbackQuery, GatewayEndpoints, GatewayEnvironment, GatewayResponse, MerchantId,
    PaymentRequestInput, RefundInput, UnverifiedAuthority, VerifyInput,
};
pub use services::{PaymentGateway, ZarinpalClient};
