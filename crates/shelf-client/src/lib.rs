//! # shelf-client: Catalog Backend Client
//!
//! HTTP access to the `/books` REST resource.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   BookStore (apps/dashboard)                                            │
//! │        │                                                                │
//! │        │  Arc<dyn BookApi>                                              │
//! │        ▼                                                                │
//! │   ┌──────────────────────┐      ┌──────────────────────────────────┐   │
//! │   │  BookApi (trait)     │◄─────│  HttpBookApi (reqwest)           │   │
//! │   │  list / create /     │      │  JSON over HTTP to {base}/books  │   │
//! │   │  update / delete     │      └──────────────────────────────────┘   │
//! │   └──────────────────────┘                                              │
//! │              ▲                                                          │
//! │              └──── in-memory fakes in tests                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`api`] - The `BookApi` trait the store depends on
//! - [`http`] - `HttpBookApi`, the reqwest implementation
//! - [`error`] - Client error types

pub mod api;
pub mod error;
pub mod http;

pub use api::BookApi;
pub use error::{ClientError, ClientResult};
pub use http::{HttpApiConfig, HttpBookApi};
