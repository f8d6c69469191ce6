//! Host surfaces
//!
//! A `Surface` is the page the catalog is shown on: a search box, a results
//! region, a detail region, the URL fragment, the add-book form and a way
//! to put a blocking notice in front of the user. The controller drives a
//! surface; it never reads layout back from it.
//!
//! `HtmlSurface` keeps every region as rendered HTML in memory. The
//! terminal front-end provides its own implementation.

use std::collections::HashMap;

use crate::form::AddBookForm;
use crate::html;
use crate::models::BookId;
use crate::views::{CardView, DetailView, COPY_LABEL};

/// The page the controller renders into
pub trait Surface {
    /// Replace the whole results region
    fn render_results(&mut self, cards: &[CardView]);

    /// Show the detail region and replace its content
    fn render_detail(&mut self, view: &DetailView);

    /// Hide the detail region and drop its content
    fn hide_detail(&mut self);

    /// Current fragment without the leading `#`, if any
    fn fragment(&self) -> Option<String>;

    /// Set the fragment, adding a history entry
    fn push_fragment(&mut self, fragment: &str);

    /// Remove the fragment, replacing the current history entry
    fn clear_fragment(&mut self);

    fn search_text(&self) -> String;

    fn set_search_text(&mut self, text: &str);

    /// Empty every add-book field
    fn reset_form(&mut self);

    /// Change the label of a card's copy action
    fn set_copy_label(&mut self, id: &BookId, label: &str);

    /// Show a notice the user has to acknowledge
    fn alert(&mut self, message: &str);
}

/// In-memory HTML page
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    cards: Vec<CardView>,
    results: String,
    detail: String,
    detail_visible: bool,
    fragment: Option<String>,
    history_len: usize,
    search: String,
    /// Field values of the add-book form
    pub form: AddBookForm,
    copy_labels: HashMap<BookId, String>,
    alerts: Vec<String>,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            results: String::new(),
            detail: String::new(),
            detail_visible: false,
            fragment: None,
            // the initial page load is the first entry
            history_len: 1,
            search: String::new(),
            form: AddBookForm::default(),
            copy_labels: HashMap::new(),
            alerts: Vec::new(),
        }
    }
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page opened at a given fragment (a bookmark or shared link)
    pub fn with_fragment(fragment: &str) -> Self {
        let mut surface = Self::default();
        surface.fragment = normalize_fragment(fragment);
        surface
    }

    /// HTML of the results region
    pub fn results_html(&self) -> &str {
        &self.results
    }

    /// HTML of the detail region (empty while hidden)
    pub fn detail_html(&self) -> &str {
        &self.detail
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail_visible
    }

    /// Number of history entries; replacing the fragment does not add one
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Label of a card's copy action
    pub fn copy_label(&self, id: &BookId) -> &str {
        self.copy_labels
            .get(id)
            .map(String::as_str)
            .unwrap_or(COPY_LABEL)
    }

    /// Notices shown so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    fn redraw_results(&mut self) {
        self.results = html::results_html_with(&self.cards, |card| self.copy_label(&card.id));
    }

    /// Both regions as one document fragment
    pub fn page_html(&self) -> String {
        let hidden = if self.detail_visible { "" } else { " hidden" };
        format!(
            "<main>\n<section id=\"results\">\n{}</section>\n<section id=\"book-page\" class=\"book-page{}\">\n{}</section>\n</main>\n",
            self.results, hidden, self.detail
        )
    }
}

impl Surface for HtmlSurface {
    fn render_results(&mut self, cards: &[CardView]) {
        // fresh cards start with the default copy label
        self.copy_labels.clear();
        self.cards = cards.to_vec();
        self.redraw_results();
    }

    fn render_detail(&mut self, view: &DetailView) {
        self.detail_visible = true;
        self.detail = html::detail_html(view);
    }

    fn hide_detail(&mut self) {
        self.detail_visible = false;
        self.detail.clear();
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn push_fragment(&mut self, fragment: &str) {
        let fragment = normalize_fragment(fragment);
        if fragment != self.fragment {
            self.history_len += 1;
        }
        self.fragment = fragment;
    }

    fn clear_fragment(&mut self) {
        self.fragment = None;
    }

    fn search_text(&self) -> String {
        self.search.clone()
    }

    fn set_search_text(&mut self, text: &str) {
        self.search = text.to_string();
    }

    fn reset_form(&mut self) {
        self.form.clear();
    }

    fn set_copy_label(&mut self, id: &BookId, label: &str) {
        self.copy_labels.insert(id.clone(), label.to_string());
        self.redraw_results();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// Strip a leading `#`; an empty fragment is no fragment
pub fn normalize_fragment(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_books;
    use crate::views::cards;

    #[test]
    fn test_normalize_fragment() {
        assert_eq!(normalize_fragment("#book-b2").as_deref(), Some("book-b2"));
        assert_eq!(normalize_fragment("book-b2").as_deref(), Some("book-b2"));
        assert_eq!(normalize_fragment("#"), None);
        assert_eq!(normalize_fragment(""), None);
    }

    #[test]
    fn test_push_fragment_adds_history() {
        let mut page = HtmlSurface::new();
        assert_eq!(page.history_len(), 1);

        page.push_fragment("book-b1");
        assert_eq!(page.fragment().as_deref(), Some("book-b1"));
        assert_eq!(page.history_len(), 2);

        // Same fragment again is not a navigation
        page.push_fragment("#book-b1");
        assert_eq!(page.history_len(), 2);
    }

    #[test]
    fn test_clear_fragment_keeps_history() {
        let mut page = HtmlSurface::with_fragment("#book-b2");
        page.clear_fragment();
        assert!(page.fragment().is_none());
        assert_eq!(page.history_len(), 1);
    }

    #[test]
    fn test_render_and_hide_detail() {
        let mut page = HtmlSurface::new();
        let view = DetailView::from_book(&sample_books()[0], "https://openlibrary.org/isbn/");

        page.render_detail(&view);
        assert!(page.is_detail_visible());
        assert!(page.detail_html().contains("Pride and Prejudice"));

        page.hide_detail();
        assert!(!page.is_detail_visible());
        assert!(page.detail_html().is_empty());
    }

    #[test]
    fn test_copy_label_in_markup_until_rerender() {
        let mut page = HtmlSurface::new();
        let cards = cards(&sample_books());
        page.render_results(&cards);

        page.set_copy_label(&BookId::new("b2"), crate::views::COPIED_LABEL);
        assert!(page.results_html().contains("Copied ✓"));
        assert_eq!(page.copy_label(&BookId::new("b2")), "Copied ✓");

        page.render_results(&cards);
        assert!(!page.results_html().contains("Copied ✓"));
        assert_eq!(page.copy_label(&BookId::new("b2")), COPY_LABEL);
    }

    #[test]
    fn test_render_results_replaces_content() {
        let mut page = HtmlSurface::new();
        page.render_results(&cards(&sample_books()));
        assert!(page.results_html().contains("The Hobbit"));

        page.render_results(&[]);
        assert!(!page.results_html().contains("The Hobbit"));
        assert!(page.results_html().contains(html::NO_RESULTS_TITLE));
    }

    #[test]
    fn test_copy_label_defaults() {
        let mut page = HtmlSurface::new();
        let id = BookId::new("b1");
        assert_eq!(page.copy_label(&id), COPY_LABEL);

        page.set_copy_label(&id, "Copied ✓");
        assert_eq!(page.copy_label(&id), "Copied ✓");
    }

    #[test]
    fn test_page_html_marks_hidden_detail() {
        let page = HtmlSurface::new();
        assert!(page.page_html().contains("class=\"book-page hidden\""));
    }
}
