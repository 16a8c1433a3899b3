//! # HTTP Backend
//!
//! `BookApi` over JSON/HTTP with reqwest.
//!
//! ## URL Layout
//! ```text
//! base_url = http://localhost:3000/          (trailing slash enforced)
//!
//!   list / create   →  http://localhost:3000/books
//!   update / delete →  http://localhost:3000/books/{id}   (id percent-encoded)
//! ```
//!
//! Any 2xx is success. For DELETE the body is ignored; for the other verbs
//! it must decode as JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shelf_core::{Book, NewBook};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::BookApi;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Configuration
// =============================================================================

/// Connection settings for [`HttpBookApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApiConfig {
    /// Root of the REST API. Always ends with `/`.
    pub base_url: Url,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpApiConfig {
    /// Parses and normalizes the base URL.
    ///
    /// Only `http` and `https` are accepted. A missing trailing slash is
    /// added so `books` joins beneath the base path rather than replacing
    /// its last segment.
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let mut url = Url::parse(base_url)?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                base_url
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            timeout,
        })
    }

    /// Collection endpoint.
    pub fn books_url(&self) -> ClientResult<Url> {
        Ok(self.base_url.join("books")?)
    }

    /// Item endpoint for one record.
    pub fn book_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = self.books_url()?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .push(id);
        Ok(url)
    }
}

// =============================================================================
// Client
// =============================================================================

/// reqwest-backed catalog client.
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    config: HttpApiConfig,
    client: Client,
}

impl HttpBookApi {
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: HttpApiConfig) -> ClientResult<Self> {
        debug!("Creating catalog client");
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpApiConfig {
        &self.config
    }

    /// Maps a non-2xx response to [`ClientError::Status`].
    fn check_status(method: &'static str, url: &Url, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        warn!(%method, %url, status = status.as_u16(), "Backend returned error status");
        Err(ClientError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse response");
            ClientError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    #[instrument(skip(self))]
    async fn list_books(&self) -> ClientResult<Vec<Book>> {
        let url = self.config.books_url()?;
        debug!(%url, "Fetching books");

        let response = self.client.get(url.clone()).send().await?;
        let response = Self::check_status("GET", &url, response)?;

        // A `null` body is treated as an empty collection.
        let books: Option<Vec<Book>> = Self::decode(response).await?;
        let books = books.unwrap_or_default();

        debug!(count = books.len(), "Fetched books");
        Ok(books)
    }

    #[instrument(skip(self, book), fields(title = %book.title))]
    async fn create_book(&self, book: &NewBook) -> ClientResult<Book> {
        let url = self.config.books_url()?;
        debug!(%url, "Creating book");

        let response = self.client.post(url.clone()).json(book).send().await?;
        let response = Self::check_status("POST", &url, response)?;

        let created: Book = Self::decode(response).await?;
        debug!(id = %created.id, "Book created");
        Ok(created)
    }

    #[instrument(skip(self, book), fields(id = %book.id))]
    async fn update_book(&self, book: &Book) -> ClientResult<Book> {
        let url = self.config.book_url(&book.id)?;
        debug!(%url, "Updating book");

        let response = self.client.put(url.clone()).json(book).send().await?;
        let response = Self::check_status("PUT", &url, response)?;

        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete_book(&self, id: &str) -> ClientResult<()> {
        let url = self.config.book_url(id)?;
        debug!(%url, "Deleting book");

        let response = self.client.delete(url.clone()).send().await?;
        Self::check_status("DELETE", &url, response)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> HttpApiConfig {
        HttpApiConfig::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_books_url_with_trailing_slash() {
        let cfg = config("http://localhost:3000/");
        assert_eq!(cfg.books_url().unwrap().as_str(), "http://localhost:3000/books");
    }

    #[test]
    fn test_missing_trailing_slash_is_added() {
        let cfg = config("http://example.com/api/v1");
        assert_eq!(cfg.base_url.as_str(), "http://example.com/api/v1/");
        assert_eq!(
            cfg.book_url("42").unwrap().as_str(),
            "http://example.com/api/v1/books/42"
        );
    }

    #[test]
    fn test_book_id_is_percent_encoded() {
        let cfg = config("http://localhost:3000/");
        assert_eq!(
            cfg.book_url("a/b c").unwrap().as_str(),
            "http://localhost:3000/books/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = HttpApiConfig::new("ftp://files.local/", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));

        let err = HttpApiConfig::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
