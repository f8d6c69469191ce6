//! Terminal page
//!
//! Holds what the terminal shows: the cards of the last search, the open
//! detail page, the fragment, the form fields and pending alerts. The
//! controller writes into it; `ui::draw` reads from it.

use std::collections::{HashMap, VecDeque};

use shelf_core::views::COPY_LABEL;
use shelf_core::{AddBookForm, BookId, CardView, DetailView, Surface};

#[derive(Debug, Default)]
pub struct TuiSurface {
    /// Cards of the results region
    pub cards: Vec<CardView>,
    /// Highlighted card
    pub selected: usize,
    /// Content of the detail region; `None` while hidden
    pub detail: Option<DetailView>,
    /// Scroll offset of the detail region
    pub detail_scroll: u16,
    /// Search box text
    pub search: String,
    /// Add-book form fields
    pub form: AddBookForm,
    fragment: Option<String>,
    copy_labels: HashMap<BookId, String>,
    alerts: VecDeque<String>,
}

impl TuiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted card, if the listing is not empty
    pub fn current_card(&self) -> Option<&CardView> {
        self.cards.get(self.selected)
    }

    /// Label of a card's copy action
    pub fn copy_label(&self, id: &BookId) -> &str {
        self.copy_labels
            .get(id)
            .map(String::as_str)
            .unwrap_or(COPY_LABEL)
    }

    /// The alert waiting to be acknowledged
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Acknowledge the front alert
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.cards.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.cards.len().saturating_sub(1);
    }
}

impl Surface for TuiSurface {
    fn render_results(&mut self, cards: &[CardView]) {
        self.cards = cards.to_vec();
        self.selected = 0;
        self.copy_labels.clear();
    }

    fn render_detail(&mut self, view: &DetailView) {
        if self.detail.as_ref().map(|d| &d.id) != Some(&view.id) {
            self.detail_scroll = 0;
        }
        self.detail = Some(view.clone());
    }

    fn hide_detail(&mut self) {
        self.detail = None;
        self.detail_scroll = 0;
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.fragment = shelf_core::surface::normalize_fragment(fragment);
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
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::views::cards;
    use shelf_core::{Config, Library, Route};

    fn library() -> Library<TuiSurface> {
        let mut library = Library::new(TuiSurface::new(), Config::default());
        library.start();
        library
    }

    #[test]
    fn test_start_lists_samples() {
        let library = library();
        assert_eq!(library.surface().cards.len(), 3);
        assert!(library.surface().detail.is_none());
    }

    #[test]
    fn test_new_results_reset_selection() {
        let mut surface = TuiSurface::new();
        surface.render_results(&cards(&shelf_core::models::sample_books()));
        surface.select_last();
        assert_eq!(surface.selected, 2);

        surface.render_results(&[]);
        assert_eq!(surface.selected, 0);
        assert!(surface.current_card().is_none());
    }

    #[test]
    fn test_selection_bounds() {
        let mut surface = TuiSurface::new();
        surface.select_prev();
        surface.select_next();
        assert_eq!(surface.selected, 0);
    }

    #[test]
    fn test_open_and_back() {
        let mut library = library();
        library.open_book(&BookId::new("b2"));
        assert_eq!(library.route(), &Route::Detail(BookId::new("b2")));
        assert_eq!(
            library.surface().detail.as_ref().map(|d| d.title.as_str()),
            Some("The Hobbit")
        );

        library.back();
        assert!(library.surface().detail.is_none());
        assert!(library.surface().fragment().is_none());
    }

    #[test]
    fn test_search_resets_copied_label() {
        let mut library = library();
        let b2 = BookId::new("b2");
        let request = library.begin_copy(&b2).unwrap();
        library.complete_copy(&request, Ok(()), std::time::Instant::now());
        assert_eq!(library.surface().copy_label(&b2), shelf_core::views::COPIED_LABEL);

        library.search("hob");
        assert_eq!(library.surface().copy_label(&b2), COPY_LABEL);
    }

    #[test]
    fn test_alert_queue() {
        let mut surface = TuiSurface::new();
        surface.alert("first");
        surface.alert("second");
        assert_eq!(surface.current_alert(), Some("first"));
        surface.dismiss_alert();
        assert_eq!(surface.current_alert(), Some("second"));
        surface.dismiss_alert();
        assert!(!surface.has_alert());
    }
}
