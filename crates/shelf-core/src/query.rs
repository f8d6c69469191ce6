//! Query engine
//!
//! Case-insensitive substring search over title, author and ISBN.

use crate::models::Book;

/// Normalize a raw query: trim and lowercase
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Return the records matching `query`, in catalog order
///
/// An empty (or whitespace-only) query returns every record. Otherwise a
/// record matches when its title, author or ISBN contains the normalized
/// query. Missing fields never match. The result is an owned copy; the
/// catalog is never touched.
pub fn matches(query: &str, books: &[Book]) -> Vec<Book> {
    let q = normalize(query);
    if q.is_empty() {
        return books.to_vec();
    }

    books
        .iter()
        .filter(|book| is_match(book, &q))
        .cloned()
        .collect()
}

fn is_match(book: &Book, normalized: &str) -> bool {
    contains_folded(Some(&book.title), normalized)
        || contains_folded(book.author.as_ref(), normalized)
        || contains_folded(book.isbn.as_ref(), normalized)
}

fn contains_folded(field: Option<&String>, normalized: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_books;

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  The HOBBIT \n"), "the hobbit");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let books = sample_books();
        let result = matches("", &books);
        assert_eq!(result, books);

        let result = matches("   ", &books);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let books = sample_books();
        assert_eq!(titles(&matches("the", &books)), vec!["The Hobbit"]);
        assert_eq!(titles(&matches("HOBBIT", &books)), vec!["The Hobbit"]);
    }

    #[test]
    fn test_isbn_substring_match() {
        let books = sample_books();
        assert_eq!(titles(&matches("97802611", &books)), vec!["The Hobbit"]);
    }

    #[test]
    fn test_author_match() {
        let books = sample_books();
        assert_eq!(titles(&matches("austen", &books)), vec!["Pride and Prejudice"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let books = sample_books();
        assert_eq!(titles(&matches("  tolkien  ", &books)), vec!["The Hobbit"]);
    }

    #[test]
    fn test_substring_not_word_match() {
        let books = sample_books();
        // "ink" is inside "Thinking"
        assert_eq!(titles(&matches("ink", &books)), vec!["Thinking, Fast and Slow"]);
    }

    #[test]
    fn test_description_is_not_searched() {
        let books = sample_books();
        assert!(matches("Bilbo", &books).is_empty());
    }

    #[test]
    fn test_missing_fields_never_match() {
        let books = vec![Book::new("b9", "Untitled")];
        assert!(matches("9780", &books).is_empty());
        assert_eq!(matches("untitled", &books).len(), 1);
    }

    #[test]
    fn test_matches_preserves_store_order() {
        let books = vec![
            Book::new("x1", "Alpha").with_author("Same"),
            Book::new("x2", "Beta").with_author("Other"),
            Book::new("x3", "Gamma").with_author("Same"),
        ];
        let result = matches("same", &books);
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "x3"]);
    }

    #[test]
    fn test_matches_does_not_mutate_input() {
        let books = sample_books();
        let before = books.clone();
        for _ in 0..3 {
            let _ = matches("the", &books);
        }
        assert_eq!(books, before);
    }
}
