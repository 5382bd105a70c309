pub mod models;
pub mod services;

pub use models::ValidationResult;
pub use services::{
    check_amount, check_authority, check_callback_url, check_currency, check_description,
};
