//! # Page Event Loop
//!
//! Drives one [`CheckoutPage`]: page events from a channel, countdown ticks
//! from a timer. Both are handled on a single task, so the page never sees
//! two things at once.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         run_page                                        │
//! │                                                                         │
//! │   mpsc::Receiver<PageEvent> ──┐                                         │
//! │                               ├──► tokio::select! ──► page.handle(ev)   │
//! │   interval(period) ───────────┘          │        └─► page.tick()       │
//! │   (only while countdown runs)            │                              │
//! │                                          ▼                              │
//! │                          Close event / channel closed ──► return page   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ticker is anchored one period after start so the first tick shows
//! `9:59` a full second after `10:00` was rendered. A purchase cancels the
//! countdown and the tick branch goes quiet for good.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::events::PageEvent;
use crate::page::{CheckoutPage, Control};
use crate::surface::PageSurface;

/// Runs the page until it is closed, then hands it back.
pub async fn run_page<S: PageSurface>(
    mut page: CheckoutPage<S>,
    mut events: mpsc::Receiver<PageEvent>,
    period: Duration,
) -> CheckoutPage<S> {
    info!(session = %page.session().id, ?period, "Checkout page running");

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    debug!("Event channel closed");
                    break;
                };
                if page.handle(event) == Control::Close {
                    break;
                }
            }
            _ = ticker.tick(), if page.is_counting_down() => {
                page.tick();
            }
        }
    }

    info!(
        session = %page.session().id,
        countdown = ?page.countdown().state(),
        "Checkout page closed"
    );
    page
}
