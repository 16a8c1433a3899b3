//! # Book Store
//!
//! Single source of truth for the book list and the current status message.
//! All backend I/O goes through here; views only read snapshots and call the
//! four operations.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Operation         Backend call          Local list on success          │
//! │  ─────────         ────────────          ─────────────────────          │
//! │                                                                         │
//! │  load()    ──────► GET /books    ──────► replaced (failure: cleared)   │
//! │                                                                         │
//! │  create()  ──────► POST /books   ──────► response appended             │
//! │                                                                         │
//! │  update()  ──────► PUT /books/id ──────► record replaced by response   │
//! │     (id missing locally: fails, no call)                                │
//! │                                                                         │
//! │  remove()  ──────► DELETE /books/id ───► record removed                │
//! │                                                                         │
//! │  Every terminal outcome except a successful load overwrites the        │
//! │  single current status message. Failures leave the list untouched      │
//! │  (load excepted).                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Operations take `&self` and may run concurrently. The list lock is never
//! held across an await: each operation reads a snapshot, awaits the backend,
//! then applies its change against the list as it is at completion time.
//! Two racing updates of the same id resolve last-response-wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use shelf_client::BookApi;
use shelf_core::{Book, BookFields, BookPatch, CoreError, NewBook, StatusMessage};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// User-facing status texts.
pub mod messages {
    pub const LOAD_FAILED: &str = "Failed to fetch books.";
    pub const CREATED: &str = "Book added successfully!";
    pub const CREATE_FAILED: &str = "Failed to add book.";
    pub const STATUS_UPDATED: &str = "Book status updated!";
    pub const UPDATED: &str = "Book updated successfully!";
    pub const UPDATE_FAILED: &str = "Failed to update book.";
    pub const DELETED: &str = "Book deleted successfully!";
    pub const DELETE_FAILED: &str = "Failed to delete book.";
}

// =============================================================================
// Outcome
// =============================================================================

/// Result of a store operation, as seen by the calling view.
///
/// Callers branch on success/failure only; the message is what was also
/// published as the current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation worked. `None` when it publishes no status (load).
    Succeeded(Option<StatusMessage>),

    /// The operation failed; the list is unchanged (load excepted).
    Failed(StatusMessage),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        match self {
            Outcome::Succeeded(msg) => msg.as_ref(),
            Outcome::Failed(msg) => Some(msg),
        }
    }
}

// =============================================================================
// Book Store
// =============================================================================

pub struct BookStore {
    api: Arc<dyn BookApi>,

    /// Records in backend order.
    books: RwLock<Vec<Book>>,

    /// Current status message, at most one.
    status: watch::Sender<Option<StatusMessage>>,

    /// Source of `StatusMessage::id`.
    next_status_id: AtomicU64,
}

impl BookStore {
    /// Creates a store over `initial` without touching the backend.
    pub fn new(api: Arc<dyn BookApi>, initial: Vec<Book>) -> Self {
        let (status, _) = watch::channel(None);
        Self {
            api,
            books: RwLock::new(initial),
            status,
            next_status_id: AtomicU64::new(1),
        }
    }

    /// Creates the store and performs the one automatic load.
    ///
    /// The load is skipped when `initial` already holds records, so a
    /// remount with existing data does not refetch.
    pub async fn mount(api: Arc<dyn BookApi>, initial: Vec<Book>) -> Arc<Self> {
        let store = Arc::new(Self::new(api, initial));
        if store.is_empty() {
            store.load().await;
        } else {
            debug!(count = store.len(), "Store mounted with existing books, skipping load");
        }
        store
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replaces the list with the backend's. On failure the list is cleared.
    pub async fn load(&self) -> Outcome {
        debug!("Loading books");

        match self.api.list_books().await {
            Ok(books) => {
                info!(count = books.len(), "Books loaded");
                self.replace_all(books);
                Outcome::Succeeded(None)
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch books");
                self.replace_all(Vec::new());
                Outcome::Failed(self.publish_error(messages::LOAD_FAILED))
            }
        }
    }

    /// Submits a new active, never-modified record and appends the
    /// backend's copy.
    pub async fn create(&self, fields: BookFields) -> Outcome {
        debug!(title = %fields.title, "Creating book");
        let body = NewBook::from_fields(fields, Utc::now());

        match self.api.create_book(&body).await {
            Ok(created) => {
                info!(id = %created.id, "Book created");
                if let Ok(mut books) = self.books.write() {
                    books.push(created);
                }
                Outcome::Succeeded(Some(self.publish_success(messages::CREATED)))
            }
            Err(e) => {
                error!(error = %e, "Failed to add book");
                Outcome::Failed(self.publish_error(messages::CREATE_FAILED))
            }
        }
    }

    /// Merges `patch` over the local record, stamps `modified_at` and PUTs
    /// the full record.
    pub async fn update(&self, id: &str, patch: BookPatch) -> Outcome {
        debug!(id = %id, ?patch, "Updating book");

        let Some(current) = self.get(id) else {
            warn!(error = %CoreError::BookNotFound(id.to_string()), "Update skipped");
            return Outcome::Failed(self.publish_error(messages::UPDATE_FAILED));
        };

        let merged = current.merged(&patch, Utc::now());

        match self.api.update_book(&merged).await {
            Ok(updated) => {
                info!(id = %id, is_active = updated.is_active, "Book updated");
                if let Ok(mut books) = self.books.write() {
                    if let Some(slot) = books.iter_mut().find(|b| b.id == id) {
                        *slot = updated;
                    }
                }
                let text = if patch.is_status_change() {
                    messages::STATUS_UPDATED
                } else {
                    messages::UPDATED
                };
                Outcome::Succeeded(Some(self.publish_success(text)))
            }
            Err(e) => {
                error!(id = %id, error = %e, "Failed to update book");
                Outcome::Failed(self.publish_error(messages::UPDATE_FAILED))
            }
        }
    }

    /// Deletes on the backend, then locally.
    ///
    /// The request is sent even when the id is not in the local list.
    pub async fn remove(&self, id: &str) -> Outcome {
        debug!(id = %id, "Deleting book");

        match self.api.delete_book(id).await {
            Ok(()) => {
                info!(id = %id, "Book deleted");
                if let Ok(mut books) = self.books.write() {
                    books.retain(|b| b.id != id);
                }
                Outcome::Succeeded(Some(self.publish_success(messages::DELETED)))
            }
            Err(e) => {
                error!(id = %id, error = %e, "Failed to delete book");
                Outcome::Failed(self.publish_error(messages::DELETE_FAILED))
            }
        }
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// The message currently on display, if any.
    pub fn status(&self) -> Option<StatusMessage> {
        self.status.borrow().clone()
    }

    /// Observes every status overwrite and clear.
    pub fn subscribe_status(&self) -> watch::Receiver<Option<StatusMessage>> {
        self.status.subscribe()
    }

    /// Explicit user dismissal.
    pub fn clear_status(&self) {
        self.status.send_if_modified(|current| current.take().is_some());
    }

    /// Clears the status only if message `id` is still the current one.
    ///
    /// Returns whether anything was cleared.
    pub fn dismiss(&self, id: u64) -> bool {
        self.status.send_if_modified(|current| {
            if current.as_ref().is_some_and(|msg| msg.id == id) {
                *current = None;
                true
            } else {
                false
            }
        })
    }

    fn publish_success(&self, text: &str) -> StatusMessage {
        self.publish(StatusMessage::success(self.next_id(), text))
    }

    fn publish_error(&self, text: &str) -> StatusMessage {
        self.publish(StatusMessage::error(self.next_id(), text))
    }

    fn publish(&self, msg: StatusMessage) -> StatusMessage {
        self.status.send_replace(Some(msg.clone()));
        msg
    }

    fn next_id(&self) -> u64 {
        self.next_status_id.fetch_add(1, Ordering::Relaxed)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Snapshot of the list in backend order.
    pub fn books(&self) -> Vec<Book> {
        self.books.read().map(|b| b.clone()).unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<Book> {
        self.books
            .read()
            .ok()
            .and_then(|b| b.iter().find(|book| book.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.books.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn replace_all(&self, books: Vec<Book>) {
        if let Ok(mut current) = self.books.write() {
            *current = books;
        }
    }
}

impl std::fmt::Debug for BookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookStore")
            .field("books", &self.len())
            .field("status", &self.status())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
