//! # Ticket Commands
//!
//! Quantity validation and the running total.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tickets field        total        contact section    tickets input    │
//! │  ─────────────        ─────        ───────────────    ─────────────    │
//! │  "2"             ──►  "$50.00"     shown              normal           │
//! │  "4" / "abc" / ""──►  "$0.00"      hidden             error style +    │
//! │                                                       "Enter a number  │
//! │                                                        between 1 and 3."│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use booth_core::validation::quote_tickets;
use booth_core::{Money, TicketQuote};
use tracing::debug;

use super::{read_value, set_field_state, set_text, set_visible};
use crate::page::CheckoutPage;
use crate::surface::PageSurface;

impl<S: PageSurface> CheckoutPage<S> {
    /// Validates the tickets field and updates the total.
    ///
    /// Runs on input and blur of the tickets field and on the calculate
    /// button. The quantity is read fresh from the field every time.
    pub fn calculate_total(&mut self) -> Option<TicketQuote> {
        let raw = read_value(&self.surface, self.elements.tickets.as_deref());
        let tickets = self.elements.tickets.as_deref();
        let tickets_error = self.elements.tickets_error.as_deref();
        let total = self.elements.total.as_deref();
        let contact = self.elements.contact.as_deref();

        match quote_tickets(&raw, self.unit_price) {
            Ok(quote) => {
                set_field_state(&mut self.surface, tickets, tickets_error, None);
                set_text(&mut self.surface, total, &quote.total.to_string());
                set_visible(&mut self.surface, contact, true);
                debug!(quantity = %quote.quantity, total = %quote.total, "Ticket total updated");
                Some(quote)
            }
            Err(verdict) => {
                set_field_state(&mut self.surface, tickets, tickets_error, Some(&verdict));
                set_text(&mut self.surface, total, &Money::zero().to_string());
                set_visible(&mut self.surface, contact, false);
                debug!(raw = %raw, reason = ?verdict.reason(), "Ticket quantity rejected");
                None
            }
        }
    }
}
