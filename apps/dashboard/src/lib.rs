//! # Shelf Dashboard Library
//!
//! The book catalog application: store, notification timer, configuration
//! and the commands the views call.
//!
//! ## Module Organization
//! ```text
//! shelf_dashboard/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── books.rs    ◄─── BookStore: list + status + CRUD
//! │   ├── notice.rs   ◄─── StatusToast: 3 s auto-dismiss
//! │   └── config.rs   ◄─── DashboardConfig (shelf.toml + env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── books.rs    ◄─── Dashboard table, toggle, delete, edit prefill
//! │   └── form.rs     ◄─── Add/Edit submit
//! └── error.rs        ◄─── Startup error type
//! ```

pub mod commands;
pub mod error;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;
use std::sync::Arc;

use shelf_client::HttpBookApi;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, AppResult};
use state::{BookStore, DashboardConfig, StatusToast};

/// Boots the dashboard and prints the initial page.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ──────────────────────────────────────────────► │
/// │     • defaults → shelf.toml (or path in argv[1]) → SHELF_* env          │
/// │                                                                         │
/// │  2. Initialize Logging ──────────────────────────────────────────────► │
/// │     • RUST_LOG if set, otherwise [dashboard] log_filter                 │
/// │                                                                         │
/// │  3. Build HTTP Client ───────────────────────────────────────────────► │
/// │     • base_url + timeout from [api]                                     │
/// │                                                                         │
/// │  4. Mount Store ─────────────────────────────────────────────────────► │
/// │     • one automatic load (list starts empty)                            │
/// │     • StatusToast attached for auto-dismiss                             │
/// │                                                                         │
/// │  5. Render Dashboard ────────────────────────────────────────────────► │
/// │     • default filter, plus the current status message if any           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load(config_path)?;

    init_tracing(&config.dashboard.log_filter);
    info!(base_url = %config.api.base_url, "Starting Shelf dashboard");

    let api = HttpBookApi::new(config.http_config()?)?;
    let store = BookStore::mount(Arc::new(api), Vec::new()).await;
    let toast = StatusToast::attach(store.clone());

    let view = commands::dashboard(&store, config.dashboard.default_filter);
    print!("{}", view);

    if let Some(status) = toast.current() {
        println!("{}", status);
    }

    info!(total = view.total, shown = view.shown, "Dashboard rendered");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf=trace` - Show trace for shelf crates only
/// - Default: `[dashboard] log_filter` (`info,shelf=debug`)
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
