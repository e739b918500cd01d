//! # Screenings Catalog
//!
//! In-memory catalog of film screening records with three read-only queries:
//!
//! - [`find_by_title`] - exact, case-insensitive title lookup
//! - [`search`] - case-insensitive substring search over title, director and description
//! - [`filter`] - category/director narrowing plus a venue and date window over screenings
//!
//! ## Example
//!
//! ```no_run
//! use screenings_catalog::{CatalogStore, DataSource, FilmFilter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = CatalogStore::new(DataSource::from_path("data/bfi_all_films.json"));
//!     let catalog = store.catalog().await?;
//!
//!     let imax = catalog.filter(&FilmFilter::new().location("imax").start_date("2025-10-24"));
//!     for film in imax {
//!         println!("{}: {} screenings", film.title, film.screenings.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod error;
mod model;
mod query;
mod source;
mod store;

pub use catalog::{Catalog, CatalogSummary, UNKNOWN_CATEGORY};
pub use error::{CatalogError, Result};
pub use model::{Film, Screening};
pub use query::{
    filter, find_by_title, search, FilmFilter, DEFAULT_FILTER_LIMIT, DEFAULT_SEARCH_LIMIT,
};
pub use source::{parse_document, DataSource, DocumentShape, DIRECTORY_DOCUMENT_PATTERN};
pub use store::CatalogStore;
