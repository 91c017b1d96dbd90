//! # Validation Module
//!
//! Field validators for the purchase form.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Field Verdicts                                     │
//! │                                                                         │
//! │  tickets field ──► validate_quantity ──► Ok(Quantity) ──► TicketQuote  │
//! │                          │                                              │
//! │                          ├── blank / not a number ──► NotANumber       │
//! │                          └── not 1, 2 or 3 ───────► OutOfRange         │
//! │                                                                         │
//! │  name field ─────► validate_name ─────► Ok(trimmed) | NameRequired     │
//! │  email field ────► validate_email ────► Ok(trimmed) | InvalidEmail     │
//! │                                                                         │
//! │  validate_contact runs both and reports each field independently       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use booth_core::validation::{validate_email, validate_quantity};
//!
//! assert_eq!(validate_quantity("2").unwrap().get(), 2);
//! assert!(validate_email("a@b.co").is_ok());
//! assert!(validate_email("a@b").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ContactRejection, CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{ContactInfo, Quantity, TicketQuote};
use crate::MAX_TICKETS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `local@domain.tld`: no whitespace, a single `@`, a dot, and a final
/// segment of two or more characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern is a valid regex")
});

// =============================================================================
// Quantity
// =============================================================================

/// Validates the raw contents of the tickets field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Blank, unparseable or `NaN` input → `NotANumber`
/// - Any other number that is not a whole 1, 2 or 3 → `OutOfRange`
///   (`2.0` is accepted as 2, `2.5` and `inf` are out of range)
///
/// ## Example
/// ```rust
/// use booth_core::validation::validate_quantity;
/// use booth_core::ValidationReason;
///
/// assert_eq!(validate_quantity(" 3 ").unwrap().get(), 3);
/// assert_eq!(validate_quantity("").unwrap_err().reason(), ValidationReason::NotANumber);
/// assert_eq!(validate_quantity("abc").unwrap_err().reason(), ValidationReason::NotANumber);
/// assert_eq!(validate_quantity("4").unwrap_err().reason(), ValidationReason::OutOfRange);
/// ```
pub fn validate_quantity(raw: &str) -> ValidationResult<Quantity> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::quantity_not_a_number());
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::quantity_not_a_number())?;

    if value.is_nan() {
        return Err(ValidationError::quantity_not_a_number());
    }

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ValidationError::quantity_out_of_range());
    }

    // Finite and whole; anything beyond i64 is clamped and then rejected
    // by the range check.
    Quantity::new(value as i64)
}

/// Validates the tickets field and derives the total.
///
/// The quantity is always recomputed from `raw`; callers never reuse an
/// earlier quote.
pub fn quote_tickets(raw: &str, unit_price: Money) -> ValidationResult<TicketQuote> {
    let quantity = validate_quantity(raw)?;
    Ok(TicketQuote::new(quantity, unit_price))
}

/// Rejects ticket prices below zero, or too large to total
/// [`MAX_TICKETS`] tickets without overflow.
pub fn validate_unit_price(price: Money) -> CoreResult<Money> {
    if price.is_negative() {
        return Err(CoreError::NegativePrice {
            cents: price.cents(),
        });
    }

    if price
        .checked_multiply_quantity(i64::from(MAX_TICKETS))
        .is_none()
    {
        return Err(CoreError::PriceTooLarge {
            cents: price.cents(),
        });
    }

    Ok(price)
}

// =============================================================================
// Contact
// =============================================================================

/// Validates the buyer's name.
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    Ok(name.to_string())
}

/// Validates the buyer's email address.
///
/// ## Returns
/// The trimmed address.
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    let email = raw.trim();

    if email.is_empty() || !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(email.to_string())
}

/// Validates name and email together.
///
/// Both fields are always checked, so a rejection can carry two verdicts.
pub fn validate_contact(name: &str, email: &str) -> Result<ContactInfo, ContactRejection> {
    match (validate_name(name), validate_email(email)) {
        (Ok(name), Ok(email)) => Ok(ContactInfo { name, email }),
        (name, email) => Err(ContactRejection {
            name: name.err(),
            email: email.err(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
