use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failure to materialize the catalog from its data source.
///
/// Every variant is fatal for the call that triggered the load; no partial catalog is ever
/// published.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read film data {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed film data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Unrecognised document shape in {}: expected an array of films or an object with a `films` array",
        path.display()
    )]
    Shape { path: PathBuf },

    #[error("No film documents matching '{pattern}' in {}", dir.display())]
    NoDocuments { dir: PathBuf, pattern: String },

    #[error("Invalid document pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
