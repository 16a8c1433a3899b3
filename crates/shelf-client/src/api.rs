//! # Backend Trait
//!
//! The seam between the book store and the network.

use async_trait::async_trait;
use shelf_core::{Book, NewBook};

use crate::error::ClientResult;

/// CRUD access to the remote book collection.
///
/// Implementations report every non-success as `Err`; they never retry.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// Fetches every record, in backend order.
    async fn list_books(&self) -> ClientResult<Vec<Book>>;

    /// Submits a new record and returns it with its assigned id.
    async fn create_book(&self, book: &NewBook) -> ClientResult<Book>;

    /// Replaces the record with `book.id` and returns the backend's copy.
    async fn update_book(&self, book: &Book) -> ClientResult<Book>;

    /// Deletes the record. Any response body is ignored.
    async fn delete_book(&self, id: &str) -> ClientResult<()>;
}
