//! # booth-core: Pure Business Logic for the Ticketbooth Purchase Page
//!
//! This crate holds the state machine behind the purchase page: ticket
//! quantity validation, the derived total, contact validation, the session
//! countdown and the final purchase review. Everything here is deterministic
//! and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ticketbooth Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Purchase Page (surface)                       │   │
//! │  │    timer ── tickets ── total ── contact ── buy                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ input / blur / click / tick            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 checkout app (event loop)                       │   │
//! │  │    calculate_total, complete_purchase, tick                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ booth-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │validation │  │ countdown │  │ checkout  │  │   │
//! │  │   │   Money   │  │ Quantity  │  │ Countdown │  │  review   │  │   │
//! │  │   │           │  │ Contact   │  │ TickOut.  │  │ Confirm.  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Quantity, ContactInfo, TicketQuote, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Validation and domain error types
//! - [`validation`] - Field validators
//! - [`countdown`] - Session countdown state machine
//! - [`checkout`] - Purchase review across all fields
//!
//! ## Example Usage
//!
//! ```rust
//! use booth_core::validation::quote_tickets;
//! use booth_core::TICKET_PRICE;
//!
//! let quote = quote_tickets(" 2 ", TICKET_PRICE).unwrap();
//! assert_eq!(quote.total.to_string(), "$50.00");
//! ```

pub mod checkout;
pub mod countdown;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use checkout::{review_purchase, PurchaseForm};
pub use countdown::{format_clock, Countdown, CountdownState, TickOutcome};
pub use error::{
    ContactRejection, CoreError, CoreResult, PurchaseRejection, ValidationError, ValidationReason,
};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Price of a single ticket.
pub const TICKET_PRICE: Money = Money::from_cents(2500);

/// Fewest tickets a single purchase may contain.
pub const MIN_TICKETS: u8 = 1;

/// Most tickets a single purchase may contain.
pub const MAX_TICKETS: u8 = 3;

/// Length of a purchase session before it expires (10 minutes).
pub const SESSION_DURATION_SECS: u32 = 10 * 60;
