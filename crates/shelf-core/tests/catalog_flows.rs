//! End-to-end flows over the sample catalog, driven through an in-memory
//! HTML page.

use std::time::{Duration, Instant};

use shelf_core::{
    AddBookForm, BookId, Config, HtmlSurface, Library, Route, SequentialIds, Surface,
};

fn started_library() -> Library<HtmlSurface> {
    let mut library = Library::new(HtmlSurface::new(), Config::default())
        .with_id_generator(SequentialIds::default());
    library.start();
    library
}

fn card_titles(library: &Library<HtmlSurface>, query: &str) -> Vec<String> {
    library.matches(query).into_iter().map(|b| b.title).collect()
}

#[test]
fn test_sample_queries() {
    let library = started_library();

    assert_eq!(card_titles(&library, "the"), vec!["The Hobbit"]);
    assert_eq!(card_titles(&library, "97802611"), vec!["The Hobbit"]);
    assert_eq!(
        card_titles(&library, ""),
        vec!["Pride and Prejudice", "The Hobbit", "Thinking, Fast and Slow"]
    );
}

#[test]
fn test_open_hobbit_detail_page() {
    let mut library = started_library();

    assert!(library.open_book(&BookId::new("b2")));
    let page = library.surface();
    assert_eq!(page.fragment().as_deref(), Some("book-b2"));
    assert!(page.is_detail_visible());
    assert!(page.detail_html().contains(r#"<h2 id="book-title">The Hobbit</h2>"#));
    assert!(page.detail_html().contains("<strong>9780261102217</strong>"));
    assert!(page
        .detail_html()
        .contains(r#"href="https://openlibrary.org/isbn/9780261102217""#));
}

#[test]
fn test_open_then_back_returns_to_listing() {
    let mut library = started_library();

    library.open_book(&BookId::new("b1"));
    let history_after_open = library.surface().history_len();

    library.back();
    assert_eq!(library.route(), &Route::Listing);
    assert!(library.surface().fragment().is_none());
    assert!(!library.surface().is_detail_visible());
    assert!(library.surface().detail_html().is_empty());
    // Back replaces the entry instead of adding one
    assert_eq!(library.surface().history_len(), history_after_open);
}

#[test]
fn test_open_missing_book_is_not_an_error() {
    let mut library = started_library();

    assert!(!library.open_book(&BookId::new("b404")));
    assert_eq!(library.route(), &Route::Listing);
    assert!(library.surface().fragment().is_none());
}

#[test]
fn test_stale_bookmark_resolves_to_listing() {
    let mut library = Library::new(HtmlSurface::with_fragment("#book-gone"), Config::default());
    library.start();

    assert_eq!(library.route(), &Route::Listing);
    assert!(!library.surface().is_detail_visible());
}

#[test]
fn test_add_dune() {
    let mut library = started_library();

    let form = AddBookForm {
        title: "Dune".to_string(),
        isbn: "9780441013593".to_string(),
        year: "1965".to_string(),
        ..Default::default()
    };
    let id = library.submit(form).unwrap();

    assert_eq!(library.catalog().len(), 4);
    assert_eq!(library.catalog().books()[0].id, id);
    assert_eq!(library.catalog().books()[0].year, Some(1965));

    let page = library.surface();
    assert_eq!(page.fragment(), Some(format!("book-{}", id)));
    assert_eq!(page.search_text(), "Dune");
    assert!(page.detail_html().contains(r#"<h2 id="book-title">Dune</h2>"#));
    assert!(page.results_html().contains("Dune"));
    assert_eq!(library.route(), &Route::Detail(id));
}

#[test]
fn test_add_many_keeps_prior_order() {
    let mut library = started_library();
    let before: Vec<BookId> = library.catalog().books().iter().map(|b| b.id.clone()).collect();

    let mut added = Vec::new();
    for title in ["One", "Two", "Three"] {
        let form = AddBookForm {
            title: title.to_string(),
            ..Default::default()
        };
        added.push(library.submit(form).unwrap());
    }

    let ids: Vec<BookId> = library.catalog().books().iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids.len(), before.len() + 3);

    // Newest first, then the untouched originals
    added.reverse();
    assert_eq!(&ids[..3], added.as_slice());
    assert_eq!(&ids[3..], before.as_slice());
}

#[test]
fn test_script_title_is_inert_everywhere() {
    let mut library = started_library();

    let form = AddBookForm {
        title: "<script>alert(1)</script>".to_string(),
        ..Default::default()
    };
    library.submit(form).unwrap();

    let page = library.surface();
    for html in [page.results_html(), page.detail_html()] {
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}

#[test]
fn test_bookmark_to_added_record_follows_catalog() {
    let mut library = started_library();
    library.navigate("#book-b1001");
    assert_eq!(library.route(), &Route::Listing);

    let id = library
        .submit(AddBookForm {
            title: "Later".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(id.as_str(), "b1001");

    library.back();
    library.navigate("#book-b1001");
    assert_eq!(library.route(), &Route::Detail(id));
}

#[test]
fn test_search_never_mutates_catalog() {
    let mut library = started_library();
    let before = library.catalog().books().to_vec();

    for q in ["the", "", "zzz", "AUSTEN"] {
        library.search(q);
    }
    assert_eq!(library.catalog().books(), before.as_slice());
}

#[test]
fn test_copied_label_shows_until_results_redraw() {
    let mut library = started_library();
    let b2 = BookId::new("b2");

    let request = library.begin_copy(&b2).unwrap();
    library.complete_copy(&request, Ok(()), Instant::now());
    assert_eq!(library.surface().copy_label(&b2), "Copied ✓");
    assert!(library.surface().results_html().contains("Copied ✓"));

    library.search("");
    assert_eq!(library.surface().copy_label(&b2), "Copy ISBN");
    assert!(!library.surface().results_html().contains("Copied ✓"));

    // the pending revert lands on a card that already reads "Copy ISBN"
    library.tick(Instant::now() + Duration::from_secs(5));
    assert_eq!(library.surface().copy_label(&b2), "Copy ISBN");
}
