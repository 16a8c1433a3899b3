//! # Commands Module
//!
//! Entry points the views call. Each command is a thin wrapper: it reads or
//! drives the [`BookStore`](crate::state::BookStore) and shapes the result
//! for rendering.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Organization                                 │
//! │                                                                         │
//! │  books.rs                           form.rs                             │
//! │  ────────                           ───────                             │
//! │  • dashboard(filter)                • submit_book_form(id?, form)       │
//! │  • toggle_active(id, active)                                            │
//! │  • delete_book(id)                                                      │
//! │  • edit_form(id)                                                        │
//! │                                                                         │
//! │  Notification view: state::StatusToast (attach / close)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod books;
pub mod form;

pub use books::{dashboard, dashboard_in, delete_book, edit_form, toggle_active, BookRow, DashboardView};
pub use form::{submit_book_form, FormSubmission};
