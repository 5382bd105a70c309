pub mod translator;

pub use translator::{message_for_code, translate_error_code};
