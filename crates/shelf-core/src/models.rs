//! Data models for Shelf
//!
//! Defines the single entity of the catalog: a Book record, plus the
//! identifier newtype and the sample records every session starts with.

use serde::{Deserialize, Serialize};

/// Identifier of a book record
///
/// Opaque string, unique within a catalog. Sample ids look like `b1`,
/// generated ids like `bk3x9q0a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Create an id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A book record
///
/// Records are never edited once they are in a catalog; the `with_*`
/// methods are only used while building one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier
    pub id: BookId,
    /// Title (may be empty for user-added records)
    pub title: String,
    /// Author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISBN, kept as an opaque string (no checksum validation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Publication year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Book {
    /// Create a book with only an id and a title
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            isbn: None,
            year: None,
            cover: None,
            description: String::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// ISBN if present and non-empty
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref().filter(|s| !s.is_empty())
    }
}

/// The records present at startup
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("b1", "Pride and Prejudice")
            .with_author("Jane Austen")
            .with_isbn("9780141040349")
            .with_year(1813)
            .with_cover("https://covers.openlibrary.org/b/isbn/9780141040349-M.jpg")
            .with_description(
                "A classic novel of manners that charts the emotional development of Elizabeth Bennet.",
            ),
        Book::new("b2", "The Hobbit")
            .with_author("J.R.R. Tolkien")
            .with_isbn("9780261102217")
            .with_year(1937)
            .with_cover("https://covers.openlibrary.org/b/isbn/9780261102217-M.jpg")
            .with_description(
                "Bilbo Baggins goes on an unexpected journey in this prelude to the Lord of the Rings.",
            ),
        Book::new("b3", "Thinking, Fast and Slow")
            .with_author("Daniel Kahneman")
            .with_isbn("9780374533557")
            .with_year(2011)
            .with_cover("https://covers.openlibrary.org/b/isbn/9780374533557-M.jpg")
            .with_description(
                "A tour of the mind from Nobel laureate Kahneman, exploring the two systems that drive the way we think.",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new() {
        let book = Book::new("b9", "Dune");
        assert_eq!(book.id.as_str(), "b9");
        assert_eq!(book.title, "Dune");
        assert!(book.author.is_none());
        assert!(book.isbn.is_none());
        assert!(book.year.is_none());
        assert!(book.cover.is_none());
        assert!(book.description.is_empty());
    }

    #[test]
    fn test_empty_isbn_is_absent() {
        let book = Book::new("b9", "Dune").with_isbn("");
        assert_eq!(book.isbn(), None);

        let book = book.with_isbn("9780441013593");
        assert_eq!(book.isbn(), Some("9780441013593"));
    }

    #[test]
    fn test_sample_books() {
        let books = sample_books();
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
        assert_eq!(books[1].title, "The Hobbit");
        assert_eq!(books[1].year, Some(1937));
    }

    #[test]
    fn test_book_id_display() {
        let id = BookId::new("b2");
        assert_eq!(format!("{}", id), "b2");
        assert_eq!(BookId::from("b2"), id);
    }

    #[test]
    fn test_book_serialization() {
        let book = sample_books().remove(0);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"id\":\"b1\""));
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let book: Book = serde_json::from_str(r#"{"id":"b7","title":"Untitled"}"#).unwrap();
        assert!(book.author.is_none());
        assert!(book.description.is_empty());
    }
}
