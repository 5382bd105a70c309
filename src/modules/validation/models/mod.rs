pub mod validation_result;

pub use validation_result::ValidationResult;
