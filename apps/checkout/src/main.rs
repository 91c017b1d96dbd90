//! # Ticketbooth Checkout Entry Point
//!
//! Terminal host for the ticket purchase page.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ticketbooth Checkout                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Terminal                                    │  │
//! │  │   stdin:  input tickets 2 / click buyBtn / show / quit           │  │
//! │  │   stdout: [alert] ..., [reload], page snapshots (JSON)           │  │
//! │  │   stderr: logs                                                   │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    checkout_lib (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Exit code                                        │  │
//! │  │  lib.rs ─────► Logging, config, runtime, page                   │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         booth-core                               │  │
//! │  │  quantity, contact and purchase validation, session countdown   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match checkout_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Checkout failed");
            eprintln!("ticketbooth-checkout: {e}");
            ExitCode::FAILURE
        }
    }
}
