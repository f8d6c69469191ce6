//! Shelf Core Library
//!
//! This crate provides the core functionality for Shelf, a small catalog
//! browser: search a list of book records, open a detail page for one of
//! them, deep-link to that page through the URL fragment, and add records
//! through a form.
//!
//! # Architecture
//!
//! - **Catalog**: the in-memory record list, owned by the controller
//! - **Router**: the fragment is the source of truth for which region is
//!   visible; `derive_state` turns it into a `Route`
//! - **Surface**: the page being drawn on (HTML in memory, or a terminal)
//!
//! Nothing is persisted. Every process starts from the sample records.
//!
//! # Quick Start
//!
//! ```text
//! let mut library = Library::new(HtmlSurface::new(), Config::load()?);
//! library.start();
//!
//! // Type in the search box
//! library.search("tolkien");
//!
//! // Add a record
//! let id = library.submit(AddBookForm { title: "Dune".into(), ..Default::default() })?;
//! ```
//!
//! # Modules
//!
//! - `library`: event handling controller (main entry point)
//! - `catalog`: the record store
//! - `query`: search over title, author and ISBN
//! - `router`: fragment parsing and route derivation
//! - `views` / `html`: projections and markup
//! - `surface`: the page abstraction
//! - `config`: application configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod html;
pub mod ids;
pub mod library;
pub mod models;
pub mod query;
pub mod router;
pub mod surface;
pub mod views;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, ClipboardError};
pub use form::AddBookForm;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use library::{CopyRequest, Library};
pub use models::{Book, BookId};
pub use router::{derive_state, Route};
pub use surface::{HtmlSurface, Surface};
pub use views::{CardView, DetailView};
