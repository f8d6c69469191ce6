//! Fragment routing
//!
//! The URL fragment decides which region is visible. `#book-<id>` selects
//! the detail page of `<id>`; any other fragment, or none, selects the
//! listing. `derive_state` is the only place that turns a fragment into a
//! `Route`.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::BookId;

/// Prefix of a detail fragment (without the leading `#`)
pub const DETAIL_PREFIX: &str = "book-";

/// Which region is visible
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// Detail region hidden
    Listing,
    /// Detail region visible, bound to one record
    Detail(BookId),
}

impl Route {
    pub fn is_detail(&self) -> bool {
        matches!(self, Route::Detail(_))
    }

    /// Id of the record on screen, if any
    pub fn book_id(&self) -> Option<&BookId> {
        match self {
            Route::Detail(id) => Some(id),
            Route::Listing => None,
        }
    }
}

/// Fragment (without `#`) that selects the detail page of `id`
pub fn detail_fragment(id: &BookId) -> String {
    format!("{}{}", DETAIL_PREFIX, id)
}

/// Extract the record id a fragment points at
///
/// Accepts the fragment with or without its leading `#`.
pub fn parse_fragment(fragment: &str) -> Option<BookId> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment.strip_prefix(DETAIL_PREFIX).map(BookId::new)
}

/// Derive the active route from the current fragment
///
/// A detail fragment whose id is not in the catalog resolves to the
/// listing; a stale bookmark is not an error.
pub fn derive_state(fragment: Option<&str>, catalog: &Catalog) -> Route {
    let route = match fragment.and_then(parse_fragment) {
        Some(id) if catalog.contains(&id) => Route::Detail(id),
        _ => Route::Listing,
    };
    debug!(?fragment, ?route, "derived route");
    route
}
