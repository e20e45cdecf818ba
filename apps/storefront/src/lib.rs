//! # Bazaar Storefront Library
//!
//! Application layer of the storefront: state, commands, rendering, and
//! the stdin shell. All storefront rules live in `bazaar-core`.
//!
//! ## Module Organization
//! ```text
//! bazaar_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── StoreState: Arc<Mutex<Storefront>> + watch channel
//! │   ├── checkout.rs ◄─── CheckoutState: delayed, cancellable checkout task
//! │   └── config.rs   ◄─── StoreConfig: name, locale, direction, delay
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── List, view, back
//! │   ├── cart.rs     ◄─── Cart manipulation, cart panel
//! │   └── checkout.rs ◄─── Checkout, cancel
//! ├── render.rs       ◄─── HTML page (askama)
//! ├── shell.rs        ◄─── Line-driven event source
//! └── error.rs        ◄─── ApiError for commands, StartupError for run()
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   StoreState     │ │  CheckoutState   │ │    StoreConfig       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Catalog       │ │  • Delay         │ │  • Store name        │   │
//! │  │  • Cart entries  │ │  • Task handle   │ │  • Locale, direction │   │
//! │  │  • Panels        │ │  • Notifier      │ │  • Currency label    │   │
//! │  │  • Checkout phase│ │                  │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bazaar_core::{Catalog, Storefront};

use error::StartupResult;
use shell::Shell;
use state::{StoreConfig, StoreState};

/// Runs the storefront until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,bazaar=debug; RUST_LOG overrides                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < BAZAAR_CONFIG file < BAZAAR_* env vars                 │
/// │                                                                         │
/// │  3. Build Catalog ────────────────────────────────────────────────────► │
/// │     • Static product list, validated once                               │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • StoreState + a logging subscriber on its watch channel            │
/// │     • Shell builds CheckoutState; notices go to stdout                  │
/// │                                                                         │
/// │  5. Run Shell ────────────────────────────────────────────────────────► │
/// │     • stdin lines → commands → stdout                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> StartupResult<()> {
    init_tracing();

    info!("Starting Bazaar storefront");

    let config = StoreConfig::load()?;
    let catalog = Catalog::new(Catalog::default_catalog().products().to_vec())?;
    info!(
        store = %config.store_name,
        products = catalog.len(),
        delay_ms = config.checkout_delay_ms,
        "Catalog loaded"
    );

    let store = StoreState::new(Storefront::new(catalog));
    spawn_state_logger(&store);

    let mut shell = Shell::new(store, config);

    info!("State initialized; reading commands from stdin (type `help`)");
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Storefront stopped");
    Ok(())
}

/// Logs every published snapshot. Ends when the store is dropped.
fn spawn_state_logger(store: &StoreState) {
    let mut updates = store.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            debug!(
                panel = ?snapshot.panel,
                cart_count = snapshot.cart_count,
                total = %snapshot.total,
                checkout = ?snapshot.checkout,
                "State changed"
            );
        }
    });
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bazaar=trace` - Show trace for bazaar crates only
/// - Default: INFO, DEBUG for bazaar crates
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bazaar=debug"));

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
