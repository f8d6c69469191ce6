//! Catalog controller
//!
//! `Library` ties the catalog, the query engine and the router to a
//! `Surface`. Each public method handles one user event (typing in the
//! search box, opening a card, submitting the add form, a fragment change)
//! and leaves the surface consistent with the fragment.
//!
//! ## Usage
//!
//! ```
//! use shelf_core::{BookId, Config, HtmlSurface, Library, Route, Surface};
//!
//! let mut library = Library::new(HtmlSurface::new(), Config::default());
//! library.start();
//!
//! library.search("hobbit");
//! library.open_book(&BookId::new("b2"));
//! assert_eq!(library.route(), &Route::Detail(BookId::new("b2")));
//! assert_eq!(library.surface().fragment().as_deref(), Some("book-b2"));
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{CatalogError, ClipboardError};
use crate::form::{seed_query, AddBookForm};
use crate::ids::{IdGenerator, RandomIds};
use crate::models::{Book, BookId};
use crate::query;
use crate::router::{derive_state, detail_fragment, Route};
use crate::surface::{normalize_fragment, Surface};
use crate::views::{cards, DetailView, COPIED_LABEL, COPY_LABEL};

/// Notice shown when the copy action has no ISBN to copy
pub const NO_ISBN_MESSAGE: &str = "No ISBN available for this book.";

/// How many fresh ids the add flow draws before giving up on a collision
const MAX_ID_ATTEMPTS: usize = 16;

/// A pending clipboard write started by the copy action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    /// Record whose card started the copy
    pub id: BookId,
    /// Text to put on the clipboard
    pub isbn: String,
}

/// Catalog controller bound to one surface
pub struct Library<S: Surface> {
    catalog: Catalog,
    surface: S,
    config: Config,
    ids: Box<dyn IdGenerator>,
    route: Route,
    /// Copy labels to restore, with the instant they expire
    copy_reverts: Vec<(BookId, Instant)>,
}

impl<S: Surface> Library<S> {
    /// Controller over the sample catalog with random ids
    pub fn new(surface: S, config: Config) -> Self {
        Self::with_catalog(Catalog::with_samples(), surface, config)
    }

    /// Controller over a given catalog
    pub fn with_catalog(catalog: Catalog, surface: S, config: Config) -> Self {
        Self {
            catalog,
            surface,
            config,
            ids: Box::new(RandomIds),
            route: Route::Listing,
            copy_reverts: Vec::new(),
        }
    }

    /// Replace the id generator used by the add flow
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The route derived from the last fragment change
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Records matching `query`
    pub fn matches(&self, query: &str) -> Vec<Book> {
        query::matches(query, self.catalog.books())
    }

    /// Detail projection of a record
    pub fn detail_view(&self, id: &BookId) -> Option<DetailView> {
        self.catalog
            .get(id)
            .map(|book| DetailView::from_book(book, &self.config.external_url))
    }

    /// First render: the full listing, then whatever the fragment selects
    pub fn start(&mut self) {
        let query = self.surface.search_text();
        self.render_results_for(&query);
        self.fragment_changed();
    }

    /// Search input changed
    pub fn search(&mut self, query: &str) {
        if self.surface.search_text() != query {
            self.surface.set_search_text(query);
        }
        self.render_results_for(query);
    }

    /// Clear action: empty search, full listing, no detail page
    pub fn clear(&mut self) {
        self.surface.set_search_text("");
        self.render_results_for("");
        self.surface.clear_fragment();
        self.fragment_changed();
    }

    /// Open the detail page of a record
    ///
    /// An unknown id clears the fragment instead. Returns whether the
    /// record is now shown.
    pub fn open_book(&mut self, id: &BookId) -> bool {
        if self.catalog.contains(id) {
            self.surface.push_fragment(&detail_fragment(id));
        } else {
            debug!(%id, "open requested for unknown book");
            self.surface.clear_fragment();
        }
        self.fragment_changed().is_detail()
    }

    /// "Back to results": leave the detail page without a new history entry
    pub fn back(&mut self) {
        self.surface.clear_fragment();
        self.fragment_changed();
    }

    /// Go to a fragment typed or followed by the user
    pub fn navigate(&mut self, fragment: &str) {
        match normalize_fragment(fragment) {
            Some(f) => self.surface.push_fragment(&f),
            None => self.surface.clear_fragment(),
        }
        self.fragment_changed();
    }

    /// Re-derive the visible region from the current fragment
    pub fn fragment_changed(&mut self) -> &Route {
        let fragment = self.surface.fragment();
        let route = derive_state(fragment.as_deref(), &self.catalog);

        match &route {
            Route::Detail(id) => match self.detail_view(id) {
                Some(view) => self.surface.render_detail(&view),
                None => self.surface.hide_detail(),
            },
            Route::Listing => self.surface.hide_detail(),
        }

        self.route = route;
        &self.route
    }

    /// Copy action on a card
    ///
    /// Returns the clipboard write to perform, or alerts when the record
    /// has no ISBN.
    pub fn begin_copy(&mut self, id: &BookId) -> Option<CopyRequest> {
        match self.catalog.get(id).and_then(Book::isbn) {
            Some(isbn) => Some(CopyRequest {
                id: id.clone(),
                isbn: isbn.to_string(),
            }),
            None => {
                self.surface.alert(NO_ISBN_MESSAGE);
                None
            }
        }
    }

    /// A clipboard write finished
    ///
    /// Success flips the card label for `copy_feedback_ms`; failure only
    /// alerts.
    pub fn complete_copy(
        &mut self,
        request: &CopyRequest,
        result: Result<(), ClipboardError>,
        now: Instant,
    ) {
        match result {
            Ok(()) => {
                self.surface.set_copy_label(&request.id, COPIED_LABEL);
                self.copy_reverts.retain(|(id, _)| id != &request.id);
                self.copy_reverts
                    .push((request.id.clone(), now + self.config.copy_feedback()));
            }
            Err(e) => {
                debug!(error = %e, "clipboard write failed");
                self.surface.alert(e.user_message());
            }
        }
    }

    /// Restore copy labels whose feedback period is over
    pub fn tick(&mut self, now: Instant) {
        let (expired, pending): (Vec<_>, Vec<_>) = self
            .copy_reverts
            .drain(..)
            .partition(|(_, until)| *until <= now);
        self.copy_reverts = pending;

        for (id, _) in expired {
            self.surface.set_copy_label(&id, COPY_LABEL);
        }
    }

    /// Add-book form submitted
    ///
    /// Prepends the new record, resets the form, seeds the search with the
    /// start of the title and opens the record.
    pub fn submit(&mut self, form: AddBookForm) -> Result<BookId, CatalogError> {
        let id = self.fresh_id();
        let book = form.into_book(id.clone());
        let title = book.title.clone();

        self.catalog.prepend(book)?;
        info!(%id, %title, "added book");

        self.surface.reset_form();
        let seed = seed_query(&title, self.config.search_seed_len);
        self.surface.set_search_text(&seed);
        self.render_results_for(&seed);
        self.open_book(&id);

        Ok(id)
    }

    fn fresh_id(&mut self) -> BookId {
        let mut id = self.ids.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.catalog.contains(&id) {
                break;
            }
            debug!(%id, "generated id already taken");
            id = self.ids.next_id();
        }
        id
    }

    fn render_results_for(&mut self, query: &str) {
        let results = self.matches(query);
        debug!(query, count = results.len(), "rendering results");
        self.surface.render_results(&cards(&results));
    }
}
