use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::Film;
use crate::source::DataSource;
use tokio::sync::OnceCell;

/// Owner of the process-wide catalog.
///
/// The first call to [`CatalogStore::catalog`] reads the data source; concurrent callers wait
/// for that single load and every later call returns the same snapshot without touching the
/// source again. A failed load leaves the store empty, so the next call tries again.
#[derive(Debug)]
pub struct CatalogStore {
    source: Option<DataSource>,
    catalog: OnceCell<Catalog>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(source: DataSource) -> Self {
        Self {
            source: Some(source),
            catalog: OnceCell::new(),
        }
    }

    /// Store that is already materialized from `films` and never reads anything.
    #[must_use]
    pub fn from_films(films: Vec<Film>) -> Self {
        Self {
            source: None,
            catalog: OnceCell::new_with(Some(Catalog::from_films(films))),
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&DataSource> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    pub async fn catalog(&self) -> Result<&Catalog> {
        self.catalog.get_or_try_init(|| self.load()).await
    }

    async fn load(&self) -> Result<Catalog> {
        // Fixture stores are initialised at construction and never reach this point.
        let Some(source) = &self.source else {
            return Ok(Catalog::default());
        };
        let catalog = source.load().await?;
        log::info!(
            "Loaded {} films, {} screenings from {}",
            catalog.len(),
            catalog.total_screenings(),
            source.path().display()
        );
        Ok(catalog)
    }
}
