pub mod error_codes;
pub mod gateways;
pub mod validation;
