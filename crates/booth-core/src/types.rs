//! # Domain Types
//!
//! Core domain types for the purchase page.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Quantity     │   │   TicketQuote   │   │ PurchaseConfirmation │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  u8 in 1..=3    │──►│  quantity       │──►│  quantity            │  │
//! │  │                 │   │  unit_price     │   │  total               │  │
//! │  └─────────────────┘   │  total          │   │  contact             │  │
//! │                        └─────────────────┘   └──────────────────────┘  │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  ContactInfo    │   │     Field       │                             │
//! │  │  name, email    │   │ Quantity/Name/  │                             │
//! │  │  (trimmed)      │   │ Email           │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_TICKETS, MIN_TICKETS};

// =============================================================================
// Field
// =============================================================================

/// The user-editable fields of the purchase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Field {
    Quantity,
    Name,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Quantity => write!(f, "quantity"),
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
        }
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A ticket count known to be within `MIN_TICKETS..=MAX_TICKETS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Quantity(u8);

impl Quantity {
    /// Checks a whole number against the allowed ticket counts.
    pub fn new(count: i64) -> Result<Self, ValidationError> {
        if count < i64::from(MIN_TICKETS) || count > i64::from(MAX_TICKETS) {
            return Err(ValidationError::quantity_out_of_range());
        }
        // In range, so it fits in a u8.
        Ok(Quantity(count as u8))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Quantity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Quantity::new(i64::from(value))
    }
}

impl From<Quantity> for u8 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Ticket Quote
// =============================================================================

/// A validated ticket count with its derived total.
///
/// The total only exists alongside a valid quantity; there is no way to
/// build a quote for an invalid count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TicketQuote {
    pub quantity: Quantity,
    pub unit_price: Money,
    pub total: Money,
}

impl TicketQuote {
    pub fn new(quantity: Quantity, unit_price: Money) -> Self {
        TicketQuote {
            quantity,
            unit_price,
            total: unit_price.multiply_quantity(i64::from(quantity.get())),
        }
    }
}

// =============================================================================
// Contact Info
// =============================================================================

/// Validated contact details, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
}

// =============================================================================
// Purchase Confirmation
// =============================================================================

/// Result of a purchase that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseConfirmation {
    pub quote: TicketQuote,
    pub contact: ContactInfo,
}

impl PurchaseConfirmation {
    /// The thank-you text shown to the buyer.
    ///
    /// ```rust
    /// use booth_core::{ContactInfo, PurchaseConfirmation, Quantity, TicketQuote, TICKET_PRICE};
    ///
    /// let confirmation = PurchaseConfirmation {
    ///     quote: TicketQuote::new(Quantity::new(2).unwrap(), TICKET_PRICE),
    ///     contact: ContactInfo { name: "A".into(), email: "a@b.co".into() },
    /// };
    /// assert_eq!(
    ///     confirmation.message(),
    ///     "Thank you for your purchase of 2 ticket(s) totaling $50.00!"
    /// );
    /// ```
    pub fn message(&self) -> String {
        format!(
            "Thank you for your purchase of {} ticket(s) totaling {}!",
            self.quote.quantity, self.quote.total
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
