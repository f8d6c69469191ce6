//! HTML rendering
//!
//! Produces the markup of the results listing and the detail page. Every
//! value that comes from a record goes through `escape_html` before it is
//! placed in the markup, attributes included.

use crate::views::{CardView, DetailView, COPY_LABEL};

/// Heading of the placeholder card shown when nothing matches
pub const NO_RESULTS_TITLE: &str = "No books found";

/// Hint under the placeholder heading
pub const NO_RESULTS_HINT: &str = "Try different keywords or add a sample book below.";

/// Escape the five HTML-special characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup of one result card
pub fn card_html(card: &CardView) -> String {
    card_html_with_label(card, COPY_LABEL)
}

/// Markup of one result card whose copy action reads `copy_label`
pub fn card_html_with_label(card: &CardView, copy_label: &str) -> String {
    let id = escape_html(card.id.as_str());
    format!(
        r#"<article class="card" data-id="{id}">
  <div class="cover" style="background-image:url('{cover}');"></div>
  <div class="card-body">
    <h3 class="card-title">{title}</h3>
    <div class="card-meta">{meta}</div>
    <div class="card-actions">
      <button class="btn open-btn" data-id="{id}">Open page</button>
      <button class="btn secondary copy-btn" data-isbn="{isbn}">{copy}</button>
    </div>
  </div>
</article>
"#,
        id = id,
        cover = escape_html(&card.cover),
        title = escape_html(&card.title),
        meta = escape_html(&card.meta),
        isbn = escape_html(&card.isbn),
        copy = escape_html(copy_label),
    )
}

/// Markup of the whole results listing
///
/// An empty listing renders a single placeholder card.
pub fn results_html(cards: &[CardView]) -> String {
    results_html_with(cards, |_| COPY_LABEL)
}

/// Markup of the results listing with a per-card copy label
pub fn results_html_with<'a>(
    cards: &[CardView],
    copy_label: impl Fn(&CardView) -> &'a str,
) -> String {
    if cards.is_empty() {
        return format!(
            r#"<div class="card" style="padding:18px"><strong>{}</strong><div class="help">{}</div></div>"#,
            NO_RESULTS_TITLE, NO_RESULTS_HINT
        );
    }
    cards
        .iter()
        .map(|card| card_html_with_label(card, copy_label(card)))
        .collect()
}

/// Markup of the detail page
///
/// Without an external URL the link is kept in the markup but hidden.
pub fn detail_html(view: &DetailView) -> String {
    let external = match &view.external_url {
        Some(url) => format!(
            r#"<a class="btn secondary" href="{}" target="_blank" id="open-external">Open external (Open Library)</a>"#,
            escape_html(url)
        ),
        None => r##"<a class="btn secondary" href="#" id="open-external" style="display:none">Open external (Open Library)</a>"##
            .to_string(),
    };

    format!(
        r#"<div class="book-page-inner">
  <div class="top">
    <div class="book-cover-large" style="background-image:url('{cover}')"></div>
    <div class="details">
      <h2 id="book-title">{title}</h2>
      <div class="meta">{meta}</div>
      <div class="meta">ISBN: <strong>{isbn}</strong></div>
      <p>{description}</p>
      <div style="margin-top:12px;display:flex;gap:8px">
        <button class="btn go-back">Back to results</button>
        {external}
      </div>
    </div>
  </div>
</div>
"#,
        cover = escape_html(&view.cover),
        title = escape_html(&view.title),
        meta = escape_html(&view.meta),
        isbn = escape_html(&view.isbn),
        description = escape_html(&view.description),
        external = external,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_books, Book};
    use crate::views::cards;

    const PREFIX: &str = "https://openlibrary.org/isbn/";

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_results_html_one_card_per_book() {
        let html = results_html(&cards(&sample_books()));
        assert_eq!(html.matches("<article class=\"card\"").count(), 3);
        assert!(html.contains(r#"data-id="b2""#));
        assert!(html.contains("J.R.R. Tolkien • 1937"));
        assert!(html.contains(r#"data-isbn="9780261102217""#));
        assert!(!html.contains(NO_RESULTS_TITLE));
    }

    #[test]
    fn test_results_html_placeholder() {
        let html = results_html(&[]);
        assert!(html.contains(NO_RESULTS_TITLE));
        assert!(html.contains(NO_RESULTS_HINT));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_card_html_escapes_title() {
        let book = Book::new("b9", "<script>alert(1)</script>");
        let html = card_html(&CardView::from_book(&book));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_card_html_escapes_cover_in_style() {
        let book = Book::new("b9", "Cover").with_cover("x');background:url('evil");
        let html = card_html(&CardView::from_book(&book));
        assert!(html.contains("url('x&#39;);background:url(&#39;evil')"));
    }

    #[test]
    fn test_detail_html_with_isbn() {
        let view = DetailView::from_book(&sample_books()[1], PREFIX);
        let html = detail_html(&view);
        assert!(html.contains(r#"<h2 id="book-title">The Hobbit</h2>"#));
        assert!(html.contains("<strong>9780261102217</strong>"));
        assert!(html.contains(r#"href="https://openlibrary.org/isbn/9780261102217""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("Back to results"));
    }

    #[test]
    fn test_detail_html_without_isbn_hides_link() {
        let view = DetailView::from_book(&Book::new("b9", "Bare"), PREFIX);
        let html = detail_html(&view);
        assert!(html.contains(r#"id="open-external" style="display:none""#));
        assert!(html.contains("<strong>—</strong>"));
        assert!(html.contains("No description provided."));
    }

    #[test]
    fn test_detail_html_escapes_fields() {
        let book = Book::new("b9", "<script>alert(1)</script>")
            .with_author("A & B")
            .with_description("<img src=x onerror=alert(1)>");
        let html = detail_html(&DetailView::from_book(&book, PREFIX));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("A &amp; B"));
    }
}
