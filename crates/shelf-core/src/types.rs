//! # Domain Types
//!
//! The book record and the shapes derived from it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │    NewBook      │   │   BookPatch     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (backend)   │   │  (no id)        │   │  title?         │       │
//! │  │  title, author  │   │  4 fields       │   │  author?        │       │
//! │  │  category, isbn │   │  isActive=true  │   │  category?      │       │
//! │  │  isActive       │   │  createdAt=now  │   │  isbn?          │       │
//! │  │  createdAt      │   │  modifiedAt=null│   │  isActive?      │       │
//! │  │  modifiedAt?    │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │           ▲                     ▲                     │                 │
//! │           │ PUT response        │ POST body           │ merged()        │
//! │           └─────────────────────┴─────────────────────┘                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   BookFields    │   │    Category     │                             │
//! │  │  the 4 editable │   │  Fiction        │                             │
//! │  │  fields         │   │  Non-Fiction    │                             │
//! │  └─────────────────┘   │  Science        │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timestamp Invariant
//! `modified_at` is `None` iff the record has never been updated since
//! creation. Both field edits and `is_active` toggles count as updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Category
// =============================================================================

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Science,
}

impl Category {
    /// All categories in the order the form lists them.
    pub const ALL: [Category; 3] = [Category::Fiction, Category::NonFiction, Category::Science];

    /// Wire / display string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::Science => "Science",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Book
// =============================================================================

/// A catalog record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Backend-assigned identifier, immutable after creation.
    pub id: String,

    pub title: String,

    pub author: String,

    pub category: Category,

    /// Digits only.
    pub isbn: String,

    /// Deactivated records stay in the catalog but drop out of the
    /// default dashboard view.
    pub is_active: bool,

    /// Set once at creation.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Serialized as `null` until the first update.
    #[ts(as = "Option<String>")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Returns the four editable fields.
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category,
            isbn: self.isbn.clone(),
        }
    }

    /// Applies a patch over this record and stamps `modified_at`.
    ///
    /// `id` and `created_at` are never touched; every merge counts as an
    /// update, even one that changes no values.
    pub fn merged(&self, patch: &BookPatch, now: DateTime<Utc>) -> Book {
        Book {
            id: self.id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            author: patch.author.clone().unwrap_or_else(|| self.author.clone()),
            category: patch.category.unwrap_or(self.category),
            isbn: patch.isbn.clone().unwrap_or_else(|| self.isbn.clone()),
            is_active: patch.is_active.unwrap_or(self.is_active),
            created_at: self.created_at,
            modified_at: Some(now),
        }
    }

    /// Checks whether the record has been updated since creation.
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.modified_at.is_some()
    }
}

// =============================================================================
// Book Fields
// =============================================================================

/// The four user-editable fields of a record, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub isbn: String,
}

impl BookFields {
    /// Returns true if any editable field differs from the record.
    pub fn differs_from(&self, book: &Book) -> bool {
        self.title != book.title
            || self.author != book.author
            || self.category != book.category
            || self.isbn != book.isbn
    }
}

// =============================================================================
// New Book
// =============================================================================

/// POST body for creating a record. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub isbn: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl NewBook {
    /// Builds a fresh, active, never-modified record body.
    pub fn from_fields(fields: BookFields, now: DateTime<Utc>) -> Self {
        NewBook {
            title: fields.title,
            author: fields.author,
            category: fields.category,
            isbn: fields.isbn,
            is_active: true,
            created_at: now,
            modified_at: None,
        }
    }
}

// =============================================================================
// Book Patch
// =============================================================================

/// A partial update. `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl BookPatch {
    /// A patch that only flips the active flag.
    pub fn active(is_active: bool) -> Self {
        BookPatch {
            is_active: Some(is_active),
            ..Default::default()
        }
    }

    /// Whether `is_active` is among the changed fields.
    #[inline]
    pub fn is_status_change(&self) -> bool {
        self.is_active.is_some()
    }
}

impl From<BookFields> for BookPatch {
    fn from(fields: BookFields) -> Self {
        BookPatch {
            title: Some(fields.title),
            author: Some(fields.author),
            category: Some(fields.category),
            isbn: Some(fields.isbn),
            is_active: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
