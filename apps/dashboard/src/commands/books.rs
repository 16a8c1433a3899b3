//! # Book List Commands
//!
//! The dashboard table and the per-row intents.
//!
//! ## Row Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [Show Active ▾]  Showing 2 of 3                          + Add a Book  │
//! ├──────────┬──────────┬──────────┬────────┬──────────┬──────────┬────────┤
//! │ Title    │ Author   │ Category │ ISBN   │ Created  │ Modified │ Actions│
//! ├──────────┼──────────┼──────────┼────────┼──────────┼──────────┼────────┤
//! │ Dune     │ Herbert  │ Fiction  │ 978..  │ 01 March │ --       │ Edit   │
//! │          │          │          │        │ 2024 ... │          │ Deact. │
//! │ Cosmos   │ Sagan    │ Science  │ 978..  │ ...      │ ...      │ Edit   │
//! │ (inactive)          │          │        │          │          │ Re-Act.│
//! │          │          │          │        │          │          │ Delete │
//! └──────────┴──────────┴──────────┴────────┴──────────┴──────────┴────────┘
//!
//!   Edit        → edit_form(id)        (prefill; submit via form.rs)
//!   Deactivate  → toggle_active(id, true)
//!   Re-Activate → toggle_active(id, false)
//!   Delete      → delete_book(id)      (offered on inactive rows only)
//! ```

use chrono::{Local, TimeZone};
use serde::Serialize;
use shelf_core::format::{format_optional, format_timestamp};
use shelf_core::{Book, BookFilter, BookForm, BookPatch, Category};
use tracing::debug;

use crate::state::{BookStore, Outcome};

/// Shown in place of the table body when the filter matches nothing.
pub const NO_BOOKS: &str = "No books found.";

// =============================================================================
// View Models
// =============================================================================

/// One table row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub isbn: String,
    pub is_active: bool,
    pub created_at: String,
    pub modified_at: String,
    pub toggle_label: &'static str,
    pub can_delete: bool,
}

impl BookRow {
    /// Builds a row with dates rendered in `tz`.
    pub fn new<Tz>(book: &Book, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let modified = book.modified_at.map(|at| at.with_timezone(tz));
        BookRow {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category,
            isbn: book.isbn.clone(),
            is_active: book.is_active,
            created_at: format_timestamp(&book.created_at.with_timezone(tz)),
            modified_at: format_optional(modified.as_ref()),
            toggle_label: if book.is_active { "Deactivate" } else { "Re-Activate" },
            can_delete: !book.is_active,
        }
    }

    /// The actions cell: `Edit / {toggle}`, plus `Delete` on inactive rows.
    pub fn actions(&self) -> String {
        let mut actions = format!("Edit / {}", self.toggle_label);
        if self.can_delete {
            actions.push_str(" / Delete");
        }
        actions
    }
}

/// The dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub filter: BookFilter,
    pub rows: Vec<BookRow>,
    pub shown: usize,
    pub total: usize,
}

impl DashboardView {
    /// `Showing {shown} of {total}`.
    pub fn summary(&self) -> String {
        format!("Showing {} of {}", self.shown, self.total)
    }

    /// Placeholder text when no row matches.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(NO_BOOKS)
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}]  {}", self.filter.label(), self.summary())?;

        if let Some(empty) = self.empty_message() {
            return writeln!(f, "{}", empty);
        }

        for row in &self.rows {
            writeln!(
                f,
                "{:<30} {:<20} {:<12} {:<14} {:<28} {:<28} {}",
                row.title,
                row.author,
                row.category.as_str(),
                row.isbn,
                row.created_at,
                row.modified_at,
                row.actions(),
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Renders the dashboard for `filter`, dates in local time.
pub fn dashboard(store: &BookStore, filter: BookFilter) -> DashboardView {
    dashboard_in(store, filter, &Local)
}

/// Renders the dashboard with dates in an explicit zone.
pub fn dashboard_in<Tz>(store: &BookStore, filter: BookFilter, tz: &Tz) -> DashboardView
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let books = store.books();
    let rows: Vec<BookRow> = filter
        .apply(&books)
        .into_iter()
        .map(|book| BookRow::new(book, tz))
        .collect();

    debug!(%filter, shown = rows.len(), total = books.len(), "dashboard command");

    DashboardView {
        filter,
        shown: rows.len(),
        total: books.len(),
        rows,
    }
}

/// Deactivate / Re-Activate button.
pub async fn toggle_active(store: &BookStore, id: &str, currently_active: bool) -> Outcome {
    debug!(id = %id, currently_active, "toggle_active command");
    store.update(id, BookPatch::active(!currently_active)).await
}

/// Delete button.
pub async fn delete_book(store: &BookStore, id: &str) -> Outcome {
    debug!(id = %id, "delete_book command");
    store.remove(id).await
}

/// Form contents for `/edit/{id}`; empty when the id is unknown.
pub fn edit_form(store: &BookStore, id: &str) -> BookForm {
    store
        .get(id)
        .map(|book| BookForm::from(&book))
        .unwrap_or_default()
}
