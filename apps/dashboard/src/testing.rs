//! In-memory backend and fixtures shared by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shelf_client::{BookApi, ClientError, ClientResult};
use shelf_core::{Book, BookFields, Category, NewBook};

/// A `BookApi` backed by a `Vec`, with per-operation failure switches and
/// call counters.
#[derive(Default)]
pub struct FakeApi {
    books: Mutex<Vec<Book>>,

    /// Title the backend writes into every create/update response.
    server_title: Mutex<Option<String>>,

    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_delete: AtomicBool,

    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_books(books: Vec<Book>) -> Arc<Self> {
        Arc::new(Self {
            books: Mutex::new(books),
            ..Default::default()
        })
    }

    pub fn rewrite_title(&self, title: &str) {
        *self.server_title.lock().unwrap() = Some(title.to_string());
    }

    fn apply_rewrite(&self, book: &mut Book) {
        if let Some(title) = self.server_title.lock().unwrap().clone() {
            book.title = title;
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// What the backend currently holds.
    pub fn stored(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }
}

fn refused() -> ClientError {
    ClientError::Transport("connection refused".to_string())
}

fn not_found(method: &'static str, id: &str) -> ClientError {
    ClientError::Status {
        method,
        url: format!("http://fake/books/{}", id),
        status: 404,
    }
}

#[async_trait]
impl BookApi for FakeApi {
    async fn list_books(&self) -> ClientResult<Vec<Book>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(refused());
        }
        Ok(self.stored())
    }

    async fn create_book(&self, book: &NewBook) -> ClientResult<Book> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(refused());
        }
        let mut created = Book {
            id: uuid::Uuid::new_v4().to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category,
            isbn: book.isbn.clone(),
            is_active: book.is_active,
            created_at: book.created_at,
            modified_at: book.modified_at,
        };
        self.apply_rewrite(&mut created);
        self.books.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_book(&self, book: &Book) -> ClientResult<Book> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(refused());
        }
        let mut saved = book.clone();
        self.apply_rewrite(&mut saved);
        let mut books = self.books.lock().unwrap();
        let slot = books
            .iter_mut()
            .find(|b| b.id == book.id)
            .ok_or_else(|| not_found("PUT", &book.id))?;
        *slot = saved.clone();
        Ok(saved)
    }

    async fn delete_book(&self, id: &str) -> ClientResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(refused());
        }
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(not_found("DELETE", id));
        }
        Ok(())
    }
}

/// A never-modified record created on 1 March 2024, 9:30 UTC.
pub fn book(id: &str, is_active: bool) -> Book {
    Book {
        id: id.to_string(),
        title: "T".to_string(),
        author: "A".to_string(),
        category: Category::Fiction,
        isbn: "111".to_string(),
        is_active,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        modified_at: None,
    }
}

pub fn fields(title: &str, author: &str, category: Category, isbn: &str) -> BookFields {
    BookFields {
        title: title.to_string(),
        author: author.to_string(),
        category,
        isbn: isbn.to_string(),
    }
}
