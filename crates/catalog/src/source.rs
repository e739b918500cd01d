//! Backing data sources for the catalog.
//!
//! A source is either one JSON document or a directory of `bfi_*.json` documents. Each
//! document is an array of films or an object holding that array under `films`.

use crate::catalog::{dedup_by_title, Catalog};
use crate::error::{CatalogError, Result};
use crate::model::Film;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// File name pattern of documents read from a directory source
pub const DIRECTORY_DOCUMENT_PATTERN: &str = "bfi_*.json";

/// Field holding the film array in a wrapped document
const WRAPPED_FIELD: &str = "films";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A single JSON document
    File(PathBuf),
    /// Every `bfi_*.json` document in a directory, merged in file name order
    Directory(PathBuf),
}

/// Which accepted layout a document turned out to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    Wrapped,
    Bare,
}

impl DataSource {
    /// Classify `path` by what currently exists on disk. Anything that is not a directory
    /// is treated as a file, so a missing path surfaces as a read error on load.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            Self::Directory(path)
        } else {
            Self::File(path)
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Directory(path) => path,
        }
    }

    pub async fn load(&self) -> Result<Catalog> {
        match self {
            Self::File(path) => Ok(Catalog::from_films(read_document(path).await?)),
            Self::Directory(dir) => load_directory(dir).await,
        }
    }
}

async fn load_directory(dir: &Path) -> Result<Catalog> {
    let pattern = format!(
        "{}/{DIRECTORY_DOCUMENT_PATTERN}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let mut documents = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|err| CatalogError::Io {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;
        documents.push(path);
    }
    documents.sort();

    if documents.is_empty() {
        return Err(CatalogError::NoDocuments {
            dir: dir.to_path_buf(),
            pattern: DIRECTORY_DOCUMENT_PATTERN.to_string(),
        });
    }

    let mut films = Vec::new();
    for path in &documents {
        films.extend(read_document(path).await?);
    }
    let total = films.len();
    let films = dedup_by_title(films);
    log::debug!(
        "Merged {} documents from {}: {total} films, {} after removing duplicate titles",
        documents.len(),
        dir.display(),
        films.len()
    );

    Ok(Catalog::from_films(films))
}

async fn read_document(path: &Path) -> Result<Vec<Film>> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (shape, films) = parse_document(path, &bytes)?;
    log::debug!("Parsed {} films from {} ({shape:?})", films.len(), path.display());
    Ok(films)
}

/// Decode a document, trying the wrapped shape first and the bare array second.
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<(DocumentShape, Vec<Film>)> {
    let parse_error = |source: serde_json::Error| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let document: Value = serde_json::from_slice(bytes).map_err(parse_error)?;
    let (shape, films) = match document {
        Value::Object(mut object) => match object.remove(WRAPPED_FIELD) {
            Some(films @ Value::Array(_)) => (DocumentShape::Wrapped, films),
            _ => {
                return Err(CatalogError::Shape {
                    path: path.to_path_buf(),
                })
            }
        },
        films @ Value::Array(_) => (DocumentShape::Bare, films),
        _ => {
            return Err(CatalogError::Shape {
                path: path.to_path_buf(),
            })
        }
    };

    let films = serde_json::from_value(films).map_err(parse_error)?;
    Ok((shape, films))
}
