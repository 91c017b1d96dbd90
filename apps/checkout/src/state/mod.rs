//! # State Module
//!
//! Startup state for the checkout page: configuration and element bindings.
//! Both are read-only once the page is built.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Startup                                              │
//! │                                                                         │
//! │  checkout.toml + TICKETBOOTH_* ──► AppConfig ──► validate()            │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                    PageBindings.resolve(page) ──► Elements              │
//! │                    (once; missing ids become None)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutable page state (countdown, field values) lives in
//! [`crate::page::CheckoutPage`] and is owned by the event loop, so nothing
//! here needs a lock.

mod bindings;
mod config;

pub use bindings::{Elements, PageBindings};
pub use config::{
    AppConfig, PageConfig, PricingConfig, SessionConfig, CONFIG_PATH_ENV, SESSION_SECS_ENV,
    TICKET_PRICE_ENV,
};
