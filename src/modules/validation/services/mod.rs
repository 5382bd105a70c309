pub mod validators;

pub use validators::{
    check_amount, check_authority, check_callback_url, check_currency, check_description,
};
