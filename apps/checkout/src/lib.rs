//! # Ticketbooth Checkout Library
//!
//! The purchase page host. Loads configuration, mounts the page on a
//! terminal surface and runs it until the user quits.
//!
//! ## Module Organization
//! ```text
//! checkout_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── AppConfig (file + env)
//! │   └── bindings.rs ◄─── Element id bindings
//! ├── commands/
//! │   ├── mod.rs      ◄─── Field helpers
//! │   ├── tickets.rs  ◄─── calculate_total
//! │   ├── purchase.rs ◄─── complete_purchase
//! │   └── timer.rs    ◄─── render_time, tick
//! ├── page.rs         ◄─── CheckoutPage, event routing
//! ├── surface.rs      ◄─── PageSurface, Document, TerminalSurface
//! ├── events.rs       ◄─── PageEvent, terminal line parsing
//! ├── event_loop.rs   ◄─── select! over events and countdown ticks
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Task Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  current-thread tokio runtime                           │
//! │                                                                         │
//! │  ┌──────────────────────┐   mpsc<PageEvent>   ┌─────────────────────┐  │
//! │  │  forward_lines       │ ──────────────────► │  run_page           │  │
//! │  │  (stdin reader task) │                     │  CheckoutPage owner │  │
//! │  └──────────────────────┘                     │  + countdown ticker │  │
//! │                                               └─────────────────────┘  │
//! │                                                                         │
//! │  Only run_page touches the page, so no locks are needed.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod event_loop;
pub mod events;
pub mod page;
pub mod state;
pub mod surface;

use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::AppResult;
use events::PageEvent;
use page::CheckoutPage;
use state::AppConfig;
use surface::{Document, TerminalSurface};

/// Pending terminal events before the reader waits on the page.
const EVENT_BUFFER: usize = 32;

/// Runs the checkout page on the terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • checkout.toml, then TICKETBOOTH_* overrides, then validate        │
/// │                                                                         │
/// │  3. Mount Page ───────────────────────────────────────────────────────► │
/// │     • Resolve element bindings, show "10:00", hide contact section      │
/// │                                                                         │
/// │  4. Run ──────────────────────────────────────────────────────────────► │
/// │     • stdin reader task feeds the page event loop                       │
/// │     • returns on `quit` or end of input                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting Ticketbooth checkout");

    let config = AppConfig::load()?;
    let surface = TerminalSurface::stdout(Document::new(config.page_elements()));
    let mut page = CheckoutPage::new(&config, surface)?;
    page.handle(PageEvent::Show);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let period = config.tick_period();
    let result = runtime.block_on(async move {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let reader = tokio::spawn(events::forward_lines(
            BufReader::new(tokio::io::stdin()),
            tx,
        ));

        let page = event_loop::run_page(page, rx, period).await;
        info!(
            session = %page.session().id,
            alerts = page.surface().document().alerts().len(),
            reloads = page.surface().document().reloads(),
            "Checkout finished"
        );

        if reader.is_finished() {
            match reader.await {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, "Terminal reader task failed");
                    Ok(())
                }
            }
        } else {
            reader.abort();
            Ok(())
        }
    });

    // A blocked stdin read would otherwise hold up runtime drop.
    runtime.shutdown_background();
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries the page itself.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=checkout_lib=trace` - Include every countdown tick
/// - Default: INFO, DEBUG for the checkout crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,checkout_lib=debug,booth_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
