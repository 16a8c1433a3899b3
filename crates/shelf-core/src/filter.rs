//! # Dashboard Filter
//!
//! The three-way selector above the book table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ Show Active ▾ ]   Showing 3 of 5                      [+ Add a Book] │
//! │                                                                         │
//! │  all          ──► every record                                         │
//! │  active       ──► is_active == true      (default on first render)     │
//! │  deactivated  ──► is_active == false                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering is pure: it is recomputed from the full list on every change
//! and never mutates the store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Book;

/// Which records the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BookFilter {
    All,
    #[default]
    Active,
    Deactivated,
}

impl BookFilter {
    /// Returns true if the record passes this filter.
    #[inline]
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Active => book.is_active,
            BookFilter::Deactivated => !book.is_active,
        }
    }

    /// Returns the passing records, preserving list order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }

    /// Label for the selector option.
    pub fn label(&self) -> &'static str {
        match self {
            BookFilter::All => "Show All",
            BookFilter::Active => "Show Active",
            BookFilter::Deactivated => "Show Deactivated",
        }
    }
}

impl std::fmt::Display for BookFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookFilter::All => write!(f, "all"),
            BookFilter::Active => write!(f, "active"),
            BookFilter::Deactivated => write!(f, "deactivated"),
        }
    }
}

impl std::str::FromStr for BookFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(BookFilter::All),
            "active" => Ok(BookFilter::Active),
            "deactivated" | "inactive" => Ok(BookFilter::Deactivated),
            other => Err(CoreError::UnknownFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Utc;

    fn book(id: &str, is_active: bool) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Title {}", id),
            author: "Author".to_string(),
            category: Category::Fiction,
            isbn: "123".to_string(),
            is_active,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    fn mixed_list() -> Vec<Book> {
        vec![
            book("1", true),
            book("2", false),
            book("3", true),
            book("4", false),
            book("5", true),
        ]
    }

    #[test]
    fn test_default_is_active() {
        assert_eq!(BookFilter::default(), BookFilter::Active);
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let books = mixed_list();
        let shown = BookFilter::All.apply(&books);
        assert_eq!(shown.len(), books.len());
        let ids: Vec<&str> = shown.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_active_and_deactivated_partition_the_list() {
        let books = mixed_list();
        let active = BookFilter::Active.apply(&books);
        let deactivated = BookFilter::Deactivated.apply(&books);

        assert!(active.iter().all(|b| b.is_active));
        assert!(deactivated.iter().all(|b| !b.is_active));
        assert_eq!(active.len() + deactivated.len(), books.len());
        assert!(active
            .iter()
            .all(|a| deactivated.iter().all(|d| d.id != a.id)));
    }

    #[test]
    fn test_empty_list() {
        let books: Vec<Book> = Vec::new();
        assert!(BookFilter::Active.apply(&books).is_empty());
        assert!(BookFilter::All.apply(&books).is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<BookFilter>().unwrap(), BookFilter::All);
        assert_eq!("Active".parse::<BookFilter>().unwrap(), BookFilter::Active);
        assert_eq!(
            "deactivated".parse::<BookFilter>().unwrap(),
            BookFilter::Deactivated
        );
        assert!("archived".parse::<BookFilter>().is_err());
    }
}
