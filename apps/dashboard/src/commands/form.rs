//! # Add/Edit Form Commands
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_book_form(editing_id, form)                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validate_form ── errors ──────────────────────────► Rejected(errors)   │
//! │         │ ok                                                            │
//! │         ▼                                                               │
//! │  editing a known record?                                                │
//! │     ├── yes, nothing changed ──────────────────────► Unchanged          │
//! │     ├── yes ─────► store.update(id, 4 fields) ──┐                       │
//! │     └── no ──────► store.create(4 fields) ──────┤                       │
//! │                                                 ▼                       │
//! │                                   ok ──────────► Saved(msg)             │
//! │                                   failed ──────► Failed { msg, errors } │
//! │                                                  ("Something went       │
//! │                                                   wrong" on title)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Unchanged` and `Saved` navigate back to the dashboard; the other two keep
//! the form open.

use shelf_core::{
    validate_form, BookForm, BookPatch, FormErrors, FormField, StatusMessage, ValidationError,
};
use tracing::debug;

use crate::state::{BookStore, Outcome};

/// What the form view should do after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    /// Validation failed; no request was made.
    Rejected(FormErrors),

    /// Edit with identical values; no request, no status message.
    Unchanged,

    /// The record was created or updated.
    Saved(Option<StatusMessage>),

    /// The backend call failed.
    Failed {
        message: StatusMessage,
        errors: FormErrors,
    },
}

impl FormSubmission {
    /// Whether the view returns to the dashboard.
    pub fn navigates_away(&self) -> bool {
        matches!(self, FormSubmission::Unchanged | FormSubmission::Saved(_))
    }
}

/// Validates and saves the form.
///
/// `editing_id` is the `/edit/{id}` route parameter. An id that is not in
/// the store is treated as a new record.
pub async fn submit_book_form(
    store: &BookStore,
    editing_id: Option<&str>,
    form: &BookForm,
) -> FormSubmission {
    debug!(?editing_id, "submit_book_form command");

    let fields = match validate_form(form) {
        Ok(fields) => fields,
        Err(errors) => {
            debug!(%errors, "Form rejected");
            return FormSubmission::Rejected(errors);
        }
    };

    let existing = editing_id.and_then(|id| store.get(id));

    let outcome = match existing {
        Some(book) if !fields.differs_from(&book) => {
            debug!(id = %book.id, "No changes detected");
            return FormSubmission::Unchanged;
        }
        Some(book) => store.update(&book.id, BookPatch::from(fields)).await,
        None => store.create(fields).await,
    };

    match outcome {
        Outcome::Succeeded(message) => FormSubmission::Saved(message),
        Outcome::Failed(message) => {
            let mut errors = FormErrors::new();
            errors.insert(FormField::Title, ValidationError::SubmitFailed);
            FormSubmission::Failed { message, errors }
        }
    }
}
