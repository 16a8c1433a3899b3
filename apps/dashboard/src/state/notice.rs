//! # Status Toast
//!
//! Auto-dismiss timer for the store's status message.
//!
//! ## Timer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Toast Timer                                          │
//! │                                                                         │
//! │   status = msg#4 ──► window starts ──── 3 s ────► dismiss(4)            │
//! │                           │                                             │
//! │   status = msg#5 ─────────┘ (window restarts for #5; #4's dismissal     │
//! │                              never fires)                               │
//! │                                                                         │
//! │   close() ─────────► clear_status() now                                 │
//! │   drop(toast) ─────► task aborted, pending dismissal cancelled          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dismissal goes through `BookStore::dismiss(id)`, so even a timer that
//! fires late can only clear the message it was started for.

use std::sync::Arc;
use std::time::Duration;

use shelf_core::StatusMessage;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::books::BookStore;

/// How long a status message stays up before it is cleared automatically.
pub const STATUS_DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// The notification view's handle on the store.
///
/// Holds the background dismiss task; dropping the toast tears it down.
pub struct StatusToast {
    store: Arc<BookStore>,
    task: JoinHandle<()>,
}

impl StatusToast {
    /// Starts watching `store` with the standard display window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn attach(store: Arc<BookStore>) -> Self {
        Self::with_window(store, STATUS_DISPLAY_WINDOW)
    }

    pub fn with_window(store: Arc<BookStore>, window: Duration) -> Self {
        let rx = store.subscribe_status();
        let task = tokio::spawn(dismiss_loop(store.clone(), rx, window));
        Self { store, task }
    }

    /// The message to render, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        self.store.status()
    }

    /// User clicked the close button.
    pub fn close(&self) {
        debug!("Status closed by user");
        self.store.clear_status();
    }
}

impl Drop for StatusToast {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn dismiss_loop(
    store: Arc<BookStore>,
    mut rx: watch::Receiver<Option<StatusMessage>>,
    window: Duration,
) {
    loop {
        let pending = rx.borrow_and_update().as_ref().map(|msg| msg.id);

        match pending {
            Some(id) => {
                tokio::select! {
                    _ = tokio::time::sleep(window) => {
                        if store.dismiss(id) {
                            debug!(status_id = id, "Status dismissed after display window");
                        }
                    }
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
            None => {
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{book, FakeApi};
    use shelf_core::BookPatch;
    use tokio::time::sleep;

    fn store() -> Arc<BookStore> {
        let api = FakeApi::with_books(vec![book("1", true)]);
        Arc::new(BookStore::new(api, vec![book("1", true)]))
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_cleared_after_window() {
        let store = store();
        let _toast = StatusToast::attach(store.clone());

        store.update("1", BookPatch::active(false)).await;

        sleep(Duration::from_millis(2900)).await;
        assert!(store.status().is_some());

        sleep(Duration::from_millis(200)).await;
        assert!(store.status().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_restarts_window() {
        let store = store();
        let toast = StatusToast::attach(store.clone());

        store.update("1", BookPatch::active(false)).await;
        sleep(Duration::from_secs(2)).await;

        store.update("1", BookPatch::active(true)).await;
        let second = store.status().unwrap();

        // Past the first message's deadline, inside the second's.
        sleep(Duration::from_secs(2)).await;
        assert_eq!(toast.current(), Some(second));

        sleep(Duration::from_millis(1500)).await;
        assert!(toast.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_clears_immediately() {
        let store = store();
        let toast = StatusToast::attach(store.clone());

        store.update("1", BookPatch::active(false)).await;
        toast.close();

        assert!(store.status().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_dismissal() {
        let store = store();
        let toast = StatusToast::attach(store.clone());

        store.update("1", BookPatch::active(false)).await;
        sleep(Duration::from_secs(1)).await;
        drop(toast);

        sleep(Duration::from_secs(5)).await;
        assert!(store.status().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_present_at_attach_is_timed() {
        let store = store();
        store.update("1", BookPatch::active(false)).await;

        let _toast = StatusToast::with_window(store.clone(), Duration::from_secs(1));

        sleep(Duration::from_millis(1100)).await;
        assert!(store.status().is_none());
    }
}
