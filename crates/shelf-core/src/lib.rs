//! # shelf-core: Pure Domain Logic for Shelf
//!
//! This crate holds everything about a book catalog that can be decided
//! without touching the network: the record types exchanged with the
//! backend, the dashboard filter, form validation and display formatting.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (web frontend)                         │   │
//! │  │    Dashboard table ──► Add/Edit form ──► Toast                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            apps/dashboard: BookStore + commands                 │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼────────────────────┐  │
//! │  │ ★ shelf-core (THIS CRATE) ★ │  │ shelf-client (HTTP /books)      │  │
//! │  │  types  filter  validation  │  │                                 │  │
//! │  │  format                     │  │                                 │  │
//! │  └─────────────────────────────┘  └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shelf_core::{validate_form, BookFilter, BookForm};
//!
//! let form = BookForm::new("Dune", "Frank Herbert", "Fiction", "9780441013593");
//! let fields = validate_form(&form).unwrap();
//! assert_eq!(fields.title, "Dune");
//!
//! assert_eq!(BookFilter::default(), BookFilter::Active);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod format;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::BookFilter;
pub use status::{StatusKind, StatusMessage};
pub use types::*;
pub use validation::{validate_form, BookForm, FormErrors, FormField};
