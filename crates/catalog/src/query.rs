//! Query engine over a catalog snapshot.
//!
//! All functions are pure: they borrow the film slice, never mutate it, and return films in
//! catalog order. Case-insensitive comparisons use Unicode lower-casing on both sides.

use crate::model::{Film, Screening};

/// Result cap applied by [`search`] callers when none is requested
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Result cap applied by [`filter`] when [`FilmFilter::limit`] is unset
pub const DEFAULT_FILTER_LIMIT: usize = 50;

/// Criteria for [`filter`]. Every unset or empty criterion is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmFilter {
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    /// Case-insensitive substring of the director
    pub director: Option<String>,
    /// Case-insensitive substring of a screening location
    pub location: Option<String>,
    /// Inclusive lower bound on screening date (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// Inclusive upper bound on screening date (`YYYY-MM-DD`)
    pub end_date: Option<String>,
    /// Maximum number of films returned
    pub limit: Option<usize>,
}

impl FilmFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_FILTER_LIMIT)
    }

    /// Whether any screening-level criterion is set
    #[must_use]
    pub fn narrows_screenings(&self) -> bool {
        given(&self.location).is_some()
            || given(&self.start_date).is_some()
            || given(&self.end_date).is_some()
    }
}

/// First film whose title equals `title` ignoring case.
#[must_use]
pub fn find_by_title<'a>(films: &'a [Film], title: &str) -> Option<&'a Film> {
    let wanted = title.to_lowercase();
    films.iter().find(|film| film.title.to_lowercase() == wanted)
}

/// Films whose title, director or description contains `query` ignoring case, capped at
/// `limit`.
///
/// An empty query is a substring of every title and therefore matches every film; blank
/// input must be rejected before it gets here.
#[must_use]
pub fn search<'a>(films: &'a [Film], query: &str, limit: usize) -> Vec<&'a Film> {
    let needle = query.to_lowercase();
    films
        .iter()
        .filter(|film| {
            contains_ignore_case(Some(film.title.as_str()), &needle)
                || contains_ignore_case(film.director.as_deref(), &needle)
                || contains_ignore_case(film.description.as_deref(), &needle)
        })
        .take(limit)
        .collect()
}

/// Narrow the catalog by `criteria`.
///
/// Film-level criteria (category, director) run first. Screening-level criteria then rewrite
/// each surviving film's screening list, and a film left without screenings is dropped.
/// Without screening-level criteria films keep their full screening list.
#[must_use]
pub fn filter(films: &[Film], criteria: &FilmFilter) -> Vec<Film> {
    let category = given(&criteria.category);
    let director = given(&criteria.director).map(str::to_lowercase);
    let window = ScreeningWindow::from_filter(criteria);

    films
        .iter()
        .filter(|film| match category {
            Some(category) => film.category.as_deref() == Some(category),
            None => true,
        })
        .filter(|film| match director.as_deref() {
            Some(needle) => contains_ignore_case(film.director.as_deref(), needle),
            None => true,
        })
        .filter_map(|film| match &window {
            Some(window) => window.narrow(film),
            None => Some(film.clone()),
        })
        .take(criteria.effective_limit())
        .collect()
}

/// Screening-level criteria, pre-lowered once per query.
struct ScreeningWindow<'a> {
    location: Option<String>,
    start_date: Option<&'a str>,
    end_date: Option<&'a str>,
}

impl<'a> ScreeningWindow<'a> {
    fn from_filter(criteria: &'a FilmFilter) -> Option<Self> {
        if !criteria.narrows_screenings() {
            return None;
        }
        Some(Self {
            location: given(&criteria.location).map(str::to_lowercase),
            start_date: given(&criteria.start_date),
            end_date: given(&criteria.end_date),
        })
    }

    fn admits(&self, screening: &Screening) -> bool {
        if let Some(location) = self.location.as_deref() {
            if !contains_ignore_case(Some(screening.location.as_str()), location) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if screening.date.as_str() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if screening.date.as_str() > end {
                return false;
            }
        }
        true
    }

    fn narrow(&self, film: &Film) -> Option<Film> {
        let screenings: Vec<Screening> = film
            .screenings
            .iter()
            .filter(|screening| self.admits(screening))
            .cloned()
            .collect();
        if screenings.is_empty() {
            return None;
        }
        Some(Film {
            screenings,
            ..film.clone()
        })
    }
}

/// An empty string counts as not given.
fn given(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

/// `needle` must already be lower-cased. Absent haystacks never match.
fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| value.to_lowercase().contains(needle))
}
