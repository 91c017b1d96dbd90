//! # Error Types
//!
//! Domain-specific error types for booth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  booth-core errors (this file)                                         │
//! │  ├── ValidationError    - One field's verdict (reason + message)       │
//! │  ├── ContactRejection   - Name and/or email failed                     │
//! │  ├── PurchaseRejection  - Any of quantity, name, email failed          │
//! │  └── CoreError          - Misconfigured domain values                  │
//! │                                                                         │
//! │  checkout app errors (separate crate)                                  │
//! │  └── AppError           - Config loading, terminal I/O                 │
//! │                                                                         │
//! │  Validation errors never escape the page: they become inline feedback. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of a `ValidationError` IS the message shown next to
//!    the field
//! 3. Every verdict carries a machine-readable [`ValidationReason`]

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::types::Field;
use crate::{MAX_TICKETS, MIN_TICKETS};

// =============================================================================
// Validation Reason
// =============================================================================

/// Machine-readable reason code attached to every invalid verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ValidationReason {
    /// Field was blank or could not be read as a number.
    NotANumber,

    /// A number, but not one of the allowed ticket counts.
    OutOfRange,

    /// Required text was empty after trimming.
    Empty,

    /// Text did not have the expected shape.
    Malformed,
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field's invalid verdict.
///
/// Both quantity variants show the same message; the reason code tells them
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quantity field blank or non-numeric.
    #[error("Enter a number between {min} and {max}.")]
    QuantityNotANumber { min: u8, max: u8 },

    /// Quantity numeric but outside `min..=max` (or not whole).
    #[error("Enter a number between {min} and {max}.")]
    QuantityOutOfRange { min: u8, max: u8 },

    /// Name blank after trimming.
    #[error("Please enter your name.")]
    NameRequired,

    /// Email missing or not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// Quantity verdict for blank or non-numeric input.
    pub const fn quantity_not_a_number() -> Self {
        ValidationError::QuantityNotANumber {
            min: MIN_TICKETS,
            max: MAX_TICKETS,
        }
    }

    /// Quantity verdict for numbers outside the allowed ticket counts.
    pub const fn quantity_out_of_range() -> Self {
        ValidationError::QuantityOutOfRange {
            min: MIN_TICKETS,
            max: MAX_TICKETS,
        }
    }

    /// The field this verdict belongs to.
    pub const fn field(&self) -> Field {
        match self {
            ValidationError::QuantityNotANumber { .. }
            | ValidationError::QuantityOutOfRange { .. } => Field::Quantity,
            ValidationError::NameRequired => Field::Name,
            ValidationError::InvalidEmail => Field::Email,
        }
    }

    /// The reason code for this verdict.
    pub const fn reason(&self) -> ValidationReason {
        match self {
            ValidationError::QuantityNotANumber { .. } => ValidationReason::NotANumber,
            ValidationError::QuantityOutOfRange { .. } => ValidationReason::OutOfRange,
            ValidationError::NameRequired => ValidationReason::Empty,
            ValidationError::InvalidEmail => ValidationReason::Malformed,
        }
    }
}

// =============================================================================
// Rejections
// =============================================================================

/// Contact details failed validation.
///
/// Each field reports independently; both may be set at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("contact details rejected")]
pub struct ContactRejection {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

/// A purchase attempt failed re-validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("purchase rejected: {}", describe(.quantity, .name, .email))]
pub struct PurchaseRejection {
    pub quantity: Option<ValidationError>,
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl PurchaseRejection {
    /// All failing verdicts, quantity first.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        [&self.quantity, &self.name, &self.email]
            .into_iter()
            .filter_map(Option::as_ref)
    }
}

fn describe(
    quantity: &Option<ValidationError>,
    name: &Option<ValidationError>,
    email: &Option<ValidationError>,
) -> String {
    [quantity, name, email]
        .into_iter()
        .flatten()
        .map(|e| e.field().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Core Error
// =============================================================================

/// Domain values that cannot describe a working purchase page.
///
/// Raised while the host is being configured, never in response to user
/// input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A countdown needs at least one second to run.
    #[error("Session duration must be at least 1 second, got {secs}")]
    InvalidDuration { secs: u32 },

    /// Ticket price below zero.
    #[error("Ticket price cannot be negative: {cents} cents")]
    NegativePrice { cents: i64 },

    /// Ticket price too large to total the maximum ticket count.
    #[error("Ticket price too large: {cents} cents")]
    PriceTooLarge { cents: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_messages_share_text() {
        assert_eq!(
            ValidationError::quantity_not_a_number().to_string(),
            "Enter a number between 1 and 3."
        );
        assert_eq!(
            ValidationError::quantity_out_of_range().to_string(),
            "Enter a number between 1 and 3."
        );
    }

    #[test]
    fn test_contact_messages() {
        assert_eq!(
            ValidationError::NameRequired.to_string(),
            "Please enter your name."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_field_and_reason() {
        let err = ValidationError::quantity_out_of_range();
        assert_eq!(err.field(), Field::Quantity);
        assert_eq!(err.reason(), ValidationReason::OutOfRange);

        assert_eq!(ValidationError::NameRequired.reason(), ValidationReason::Empty);
        assert_eq!(ValidationError::InvalidEmail.field(), Field::Email);
    }

    #[test]
    fn test_reason_serializes_screaming_snake() {
        let json = serde_json::to_string(&ValidationReason::NotANumber).unwrap();
        assert_eq!(json, "\"NOT_A_NUMBER\"");
    }

    #[test]
    fn test_rejection_display_counts_fields() {
        let rejection = PurchaseRejection {
            quantity: None,
            name: Some(ValidationError::NameRequired),
            email: Some(ValidationError::InvalidEmail),
        };
        assert_eq!(
            rejection.to_string(),
            "purchase rejected: name, email"
        );
        assert_eq!(rejection.errors().count(), 2);
        assert_eq!(PurchaseRejection::default().errors().count(), 0);
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::InvalidDuration { secs: 0 };
        assert_eq!(
            err.to_string(),
            "Session duration must be at least 1 second, got 0"
        );
        assert_eq!(
            CoreError::PriceTooLarge { cents: i64::MAX }.to_string(),
            "Ticket price too large: 9223372036854775807 cents"
        );
    }
}
