//! Add-book form
//!
//! Raw field values as typed by the user, and the rules that turn them into
//! a record. Only trimming is applied; an empty title is accepted.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Book, BookId};

/// Field values of the add-book form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: String,
    pub cover: String,
}

impl AddBookForm {
    /// Build a record from the form
    ///
    /// Empty optional fields stay unset. A year that is not a whole number
    /// is dropped.
    pub fn into_book(self, id: BookId) -> Book {
        let year = self.year.trim();
        let year = if year.is_empty() {
            None
        } else {
            let parsed = parse_year(year);
            if parsed.is_none() {
                warn!(year, "ignoring unparseable year");
            }
            parsed
        };

        Book {
            id,
            title: self.title.trim().to_string(),
            author: non_empty(&self.author),
            isbn: non_empty(&self.isbn),
            year,
            cover: non_empty(&self.cover),
            description: String::new(),
        }
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Accept any numeric spelling of a whole year: `1965`, `+1965`,
/// `1965.0`, `1.965e3`
fn parse_year(value: &str) -> Option<i32> {
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    let number = value.parse::<f64>().ok()?;
    let whole = number.is_finite()
        && number.fract() == 0.0
        && number >= f64::from(i32::MIN)
        && number <= f64::from(i32::MAX);
    whole.then_some(number as i32)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Search text used after a record is added: the first `len` characters of
/// its title
pub fn seed_query(title: &str, len: usize) -> String {
    title.chars().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, isbn: &str, year: &str) -> AddBookForm {
        AddBookForm {
            title: title.to_string(),
            isbn: isbn.to_string(),
            year: year.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_into_book_trims_fields() {
        let f = AddBookForm {
            title: "  Dune ".to_string(),
            author: " Frank Herbert ".to_string(),
            isbn: " 9780441013593".to_string(),
            year: " 1965 ".to_string(),
            cover: "  ".to_string(),
        };
        let book = f.into_book(BookId::new("b9"));

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.isbn.as_deref(), Some("9780441013593"));
        assert_eq!(book.year, Some(1965));
        assert!(book.cover.is_none());
        assert!(book.description.is_empty());
    }

    #[test]
    fn test_empty_year_is_unset() {
        let book = form("Dune", "", "   ").into_book(BookId::new("b9"));
        assert!(book.year.is_none());
        assert!(book.isbn.is_none());
    }

    #[test]
    fn test_bad_year_is_unset() {
        let book = form("Dune", "", "nineteen").into_book(BookId::new("b9"));
        assert!(book.year.is_none());
    }

    #[test]
    fn test_year_spellings() {
        for (raw, expected) in [
            ("1965", Some(1965)),
            ("+1965", Some(1965)),
            ("1965.0", Some(1965)),
            ("1.965e3", Some(1965)),
            ("-500", Some(-500)),
            ("1965.5", None),
            ("inf", None),
            ("NaN", None),
            ("1e12", None),
        ] {
            let book = form("Dune", "", raw).into_book(BookId::new("b9"));
            assert_eq!(book.year, expected, "year {:?}", raw);
        }
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let book = AddBookForm::default().into_book(BookId::new("b9"));
        assert_eq!(book.title, "");
        assert_eq!(book.id.as_str(), "b9");
    }

    #[test]
    fn test_clear() {
        let mut f = form("Dune", "1", "1965");
        f.clear();
        assert_eq!(f, AddBookForm::default());
    }

    #[test]
    fn test_seed_query() {
        assert_eq!(seed_query("Dune", 7), "Dune");
        assert_eq!(seed_query("The Left Hand of Darkness", 7), "The Lef");
        assert_eq!(seed_query("", 7), "");
        assert_eq!(seed_query("Ça ira, ça ira", 4), "Ça i");
    }
}
