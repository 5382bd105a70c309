pub mod services;

pub use services::{message_for_code, translate_error_code};
