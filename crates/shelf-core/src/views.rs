//! View projections of a book
//!
//! Every surface (HTML page, terminal) shows the same text for a record.
//! These structs hold that text with the placeholders already applied, so
//! the surfaces only decide on layout.

use serde::Serialize;

use crate::models::{Book, BookId};

/// Shown in place of a missing ISBN
pub const ISBN_PLACEHOLDER: &str = "—";

/// Shown in place of a missing description
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided.";

/// Default label of a card's copy action
pub const COPY_LABEL: &str = "Copy ISBN";

/// Label of a card's copy action right after a successful copy
pub const COPIED_LABEL: &str = "Copied ✓";

/// One entry of the results listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: BookId,
    pub title: String,
    /// `"<author> • <year>"`
    pub meta: String,
    /// Cover URL, empty when absent
    pub cover: String,
    /// ISBN, empty when absent
    pub isbn: String,
}

impl CardView {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            meta: meta_line(book),
            cover: book.cover.clone().unwrap_or_default(),
            isbn: book.isbn().unwrap_or_default().to_string(),
        }
    }

    /// Whether the copy action has anything to copy
    pub fn has_isbn(&self) -> bool {
        !self.isbn.is_empty()
    }
}

/// The full page of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: BookId,
    pub title: String,
    pub meta: String,
    pub cover: String,
    /// ISBN or the em dash placeholder
    pub isbn: String,
    /// Description or the placeholder sentence
    pub description: String,
    /// External catalog page; `None` hides the link
    pub external_url: Option<String>,
}

impl DetailView {
    /// Project a record, building its external link from `lookup_prefix`
    pub fn from_book(book: &Book, lookup_prefix: &str) -> Self {
        let description = if book.description.is_empty() {
            DESCRIPTION_PLACEHOLDER.to_string()
        } else {
            book.description.clone()
        };

        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            meta: meta_line(book),
            cover: book.cover.clone().unwrap_or_default(),
            isbn: book.isbn().unwrap_or(ISBN_PLACEHOLDER).to_string(),
            description,
            external_url: external_url(book, lookup_prefix),
        }
    }
}

/// Project a list of records into cards
pub fn cards(books: &[Book]) -> Vec<CardView> {
    books.iter().map(CardView::from_book).collect()
}

/// `"<author> • <year>"`, each part empty when absent
pub fn meta_line(book: &Book) -> String {
    let author = book.author.as_deref().unwrap_or("");
    let year = book.year.map(|y| y.to_string()).unwrap_or_default();
    format!("{} • {}", author, year)
}

/// External catalog URL for a record, if it has an ISBN
pub fn external_url(book: &Book, lookup_prefix: &str) -> Option<String> {
    book.isbn()
        .map(|isbn| format!("{}{}", lookup_prefix, encode_uri_component(isbn)))
}

/// Percent-encode a string for use as one URL path segment
///
/// Leaves the same characters unescaped as a browser's
/// `encodeURIComponent`: ASCII letters, digits and `-_.!~*'()`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
