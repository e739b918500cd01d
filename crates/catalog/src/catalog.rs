use crate::model::Film;
use crate::query::{self, FilmFilter};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Category reported for films that carry none
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Immutable snapshot of every loaded film, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    films: Vec<Film>,
}

/// Aggregate view of a catalog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub films: usize,
    pub screenings: usize,
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub directors: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub const fn from_films(films: Vec<Film>) -> Self {
        Self { films }
    }

    #[must_use]
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.films.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    #[must_use]
    pub fn total_screenings(&self) -> usize {
        self.films.iter().map(Film::screening_count).sum()
    }

    /// Sorted distinct categories; films without one count as [`UNKNOWN_CATEGORY`].
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.films
            .iter()
            .map(|film| film.category.as_deref().unwrap_or(UNKNOWN_CATEGORY))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorted distinct non-empty screening locations.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        self.films
            .iter()
            .flat_map(|film| film.screenings.iter())
            .map(|screening| screening.location.as_str())
            .filter(|location| !location.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorted distinct non-empty directors.
    #[must_use]
    pub fn directors(&self) -> Vec<String> {
        self.films
            .iter()
            .filter_map(|film| film.director.as_deref())
            .filter(|director| !director.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn films_in_category(&self, category: &str) -> Vec<&Film> {
        self.films
            .iter()
            .filter(|film| film.category.as_deref().unwrap_or(UNKNOWN_CATEGORY) == category)
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            films: self.len(),
            screenings: self.total_screenings(),
            categories: self.categories(),
            locations: self.locations(),
            directors: self.directors(),
        }
    }

    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Film> {
        query::find_by_title(&self.films, title)
    }

    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Film> {
        query::search(&self.films, query, limit)
    }

    #[must_use]
    pub fn filter(&self, criteria: &FilmFilter) -> Vec<Film> {
        query::filter(&self.films, criteria)
    }
}

/// Keep the first film for every exact title, preserving order.
pub(crate) fn dedup_by_title(films: Vec<Film>) -> Vec<Film> {
    let mut seen = HashSet::new();
    films
        .into_iter()
        .filter(|film| seen.insert(film.title.clone()))
        .collect()
}
