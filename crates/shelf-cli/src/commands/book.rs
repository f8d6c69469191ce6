//! Book command handlers
//!
//! Every invocation starts from the sample catalog; records added here live
//! only as long as the command.

use anyhow::{anyhow, Context, Result};

use shelf_core::router::parse_fragment;
use shelf_core::{AddBookForm, BookId, Config, HtmlSurface, Library, Surface};

use crate::output::Output;

/// List the records matching a query
pub fn search(config: Config, query: String, output: &Output) -> Result<()> {
    let library = Library::new(HtmlSurface::new(), config);
    let books = library.matches(&query);
    output.print_books(&books);
    Ok(())
}

/// Show one record, by id or by `#book-<id>` fragment
pub fn show(config: Config, id: String, output: &Output) -> Result<()> {
    let library = Library::new(HtmlSurface::new(), config);
    let book_id = parse_book_ref(&id);

    let book = library
        .catalog()
        .get(&book_id)
        .ok_or_else(|| anyhow!("Book not found: {}", id))?;
    let view = library
        .detail_view(&book_id)
        .ok_or_else(|| anyhow!("Book not found: {}", id))?;

    output.print_detail(book, &view);
    Ok(())
}

/// Run the add-book flow and report where it landed
pub fn add(config: Config, form: AddBookForm, html: bool, output: &Output) -> Result<()> {
    let mut library = Library::new(HtmlSurface::new(), config);
    library.start();

    let id = library.submit(form).context("Failed to add book")?;

    if html {
        print!("{}", library.surface().page_html());
        return Ok(());
    }

    // Scripts only need the new id
    if output.is_quiet() {
        println!("{}", id);
        return Ok(());
    }

    output.success(&format!("Added book: {}", id));
    let fragment = library.surface().fragment().unwrap_or_default();
    output.message(&format!("Fragment: #{}", fragment));
    output.message(&format!("Search:   {}", library.surface().search_text()));

    if let (Some(book), Some(view)) = (library.catalog().get(&id), library.detail_view(&id)) {
        output.print_detail(book, &view);
    }
    Ok(())
}

/// Accept `b2`, `book-b2` or `#book-b2`
fn parse_book_ref(input: &str) -> BookId {
    parse_fragment(input).unwrap_or_else(|| BookId::new(input.trim_start_matches('#')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_ref() {
        assert_eq!(parse_book_ref("b2"), BookId::new("b2"));
        assert_eq!(parse_book_ref("book-b2"), BookId::new("b2"));
        assert_eq!(parse_book_ref("#book-b2"), BookId::new("b2"));
    }
}
