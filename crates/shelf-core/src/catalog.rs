//! In-memory catalog store
//!
//! The `Catalog` owns every book record for the lifetime of the process.
//! Readers get shared slices; the only mutation is `prepend`, which puts a
//! new record at the front. Nothing is persisted: a new process starts
//! from the sample set again.

use tracing::debug;

use crate::error::CatalogError;
use crate::models::{sample_books, Book, BookId};

/// Ordered collection of book records, most recently added first
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the sample records
    pub fn with_samples() -> Self {
        Self {
            books: sample_books(),
        }
    }

    /// All records in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a record by id
    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    /// Check whether a record with this id exists
    pub fn contains(&self, id: &BookId) -> bool {
        self.get(id).is_some()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Insert a record at the front
    ///
    /// Fails without touching the catalog if the id is already taken.
    pub fn prepend(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.contains(&book.id) {
            return Err(CatalogError::DuplicateId { id: book.id });
        }
        debug!(id = %book.id, "prepending book");
        self.books.insert(0, book);
        Ok(())
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}
