use serde::Serialize;

use crate::core::{Result, ZarinpalError};

/// Outcome of a single field check
///
/// `reason` is empty when `ok` is true, otherwise the failure parts joined
/// with `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub reason: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            ok: true,
            reason: String::new(),
        }
    }

    /// Empty parts are dropped so an empty offending value leaves no trailing separator.
    pub fn invalid(reasons: &[&str]) -> Self {
        let reason = reasons
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");

        Self { ok: false, reason }
    }

    /// Converts a failed check into `ZarinpalError::Validation` for `field`
    pub fn into_result(self, field: &'static str) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(ZarinpalError::validation(field, self.reason))
        }
    }
}
