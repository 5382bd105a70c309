pub mod gateway_trait;
pub mod zarinpal;

pub use gateway_trait::PaymentGateway;
pub use zarinpal::ZarinpalClient;
