//! # Validation Module
//!
//! Add/Edit form validation.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field      Check                         Message                       │
//! │  ─────────  ────────────────────────────  ───────────────────────────── │
//! │  title      empty?                        "Title is required"           │
//! │  author     empty?                        "Author is required"          │
//! │  category   empty?                        "Category is required"        │
//! │  isbn       empty?                        "ISBN is required"            │
//! │             any non-digit?                "ISBN must contain only       │
//! │                                            numbers"                     │
//! │                                                                         │
//! │  Every field is checked; the form shows all errors at once.             │
//! │  Validation passes iff no field has an error.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are checked as typed, without trimming. The category select only
//! offers the fixed set, so a non-empty value outside it can only come from
//! a tampered request; it is rejected because [`Category`] cannot hold it.
//!
//! ## Usage
//! ```rust
//! use shelf_core::validation::{validate_form, BookForm, FormField};
//!
//! let errors = validate_form(&BookForm::new("t", "a", "Fiction", "12a")).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors.message(FormField::Isbn).as_deref(),
//!     Some("ISBN must contain only numbers")
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Book, BookFields, Category};

/// Result type for single-field validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Input
// =============================================================================

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Author,
    Category,
    Isbn,
}

impl FormField {
    /// Label used in error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Category => "Category",
            FormField::Isbn => "ISBN",
        }
    }
}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        BookForm {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            isbn: isbn.into(),
        }
    }
}

/// Prefills the edit form from an existing record.
impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        BookForm {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.as_str().to_string(),
            isbn: book.isbn.clone(),
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// Per-field error map. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, ValidationError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The text shown under the input, if any.
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (_, err) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a field is not empty.
pub fn validate_required(field: FormField, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.label().to_string(),
        });
    }
    Ok(())
}

/// Validates an ISBN: required, ASCII digits only. No length or checksum
/// rule is applied.
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_isbn;
///
/// assert!(validate_isbn("9780441013593").is_ok());
/// assert!(validate_isbn("978-0441").is_err());
/// assert!(validate_isbn("").is_err());
/// ```
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    validate_required(FormField::Isbn, isbn)?;

    if !isbn.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::DigitsOnly {
            field: FormField::Isbn.label().to_string(),
        });
    }

    Ok(())
}

/// Validates the category select and parses it.
pub fn validate_category(category: &str) -> ValidationResult<Category> {
    validate_required(FormField::Category, category)?;

    category
        .parse::<Category>()
        .map_err(|_| ValidationError::NotAllowed {
            field: FormField::Category.label().to_string(),
            allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        })
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates the whole form, collecting every field error.
///
/// Returns the typed fields when the form is valid.
///
/// The category is checked beyond presence: a non-empty value outside the
/// fixed set (Fiction, Non-Fiction, Science) fails with
/// [`ValidationError::NotAllowed`], since [`Category`] cannot hold it.
pub fn validate_form(form: &BookForm) -> Result<BookFields, FormErrors> {
    let mut errors = FormErrors::new();

    if let Err(e) = validate_required(FormField::Title, &form.title) {
        errors.insert(FormField::Title, e);
    }
    if let Err(e) = validate_required(FormField::Author, &form.author) {
        errors.insert(FormField::Author, e);
    }
    let category = match validate_category(&form.category) {
        Ok(category) => Some(category),
        Err(e) => {
            errors.insert(FormField::Category, e);
            None
        }
    };
    if let Err(e) = validate_isbn(&form.isbn) {
        errors.insert(FormField::Isbn, e);
    }

    match category {
        Some(category) if errors.is_empty() => Ok(BookFields {
            title: form.title.clone(),
            author: form.author.clone(),
            category,
            isbn: form.isbn.clone(),
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_the_only_error() {
        let errors = validate_form(&BookForm::new("", "a", "Fiction", "123")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FormField::Title).as_deref(),
            Some("Title is required")
        );
    }

    #[test]
    fn test_non_digit_isbn_is_the_only_error() {
        let errors = validate_form(&BookForm::new("t", "a", "Fiction", "12a")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Isbn),
            Some(&ValidationError::DigitsOnly {
                field: "ISBN".to_string()
            })
        );
    }

    #[test]
    fn test_valid_form_passes() {
        let fields = validate_form(&BookForm::new("t", "a", "Non-Fiction", "0123")).unwrap();
        assert_eq!(fields.category, Category::NonFiction);
        assert_eq!(fields.isbn, "0123");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_form(&BookForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.message(FormField::Isbn).as_deref(),
            Some("ISBN is required")
        );
        assert_eq!(
            errors.message(FormField::Category).as_deref(),
            Some("Category is required")
        );
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let errors = validate_form(&BookForm::new("t", "a", "Poetry", "1")).unwrap_err();
        assert!(matches!(
            errors.get(FormField::Category),
            Some(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_isbn_rules() {
        assert!(validate_isbn("0").is_ok());
        assert!(validate_isbn(" 123").is_err());
        assert!(validate_isbn("１２３").is_err()); // full-width digits
    }

    #[test]
    fn test_whitespace_title_is_not_empty() {
        assert!(validate_required(FormField::Title, " ").is_ok());
    }
}
