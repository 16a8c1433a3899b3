//! # State Module
//!
//! Owned application state for the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   BookStore      │  │   StatusToast    │  │   DashboardConfig    │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  RwLock<Vec<     │  │  JoinHandle of   │  │  [api] base_url      │  │
//! │  │    Book>>        │◄─│  the 3 s dismiss │  │  [api] timeout_secs  │  │
//! │  │  watch::Sender<  │  │  loop            │  │  [dashboard] filter  │  │
//! │  │    status>       │  │                  │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • BookStore: list behind RwLock, never held across an await           │
//! │  • StatusToast: owns its task; dropping it aborts the timer            │
//! │  • DashboardConfig: read-only after startup                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod books;
mod config;
mod notice;

pub use books::{messages, BookStore, Outcome};
pub use config::{ApiSettings, DashboardConfig, DashboardSettings};
pub use notice::{StatusToast, STATUS_DISPLAY_WINDOW};
