//! Tool argument schemas and the validation performed before the catalog is queried.
//!
//! Validation failures are returned as the user-visible message text.

use rmcp::schemars;
use screenings_catalog::{FilmFilter, DEFAULT_SEARCH_LIMIT};
use serde::Deserialize;

/// Directors listed by `catalog-overview` unless the caller asks otherwise
pub const DEFAULT_OVERVIEW_DIRECTORS: usize = 10;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListFilmsRequest {
    #[schemars(
        description = "Filter by category, exact match (e.g., 'james_cameron', 'christmas_films', 'classics')"
    )]
    pub category: Option<String>,

    #[schemars(description = "Filter by cinema location, partial match (e.g., 'NFT1', 'BFI IMAX')")]
    pub location: Option<String>,

    #[schemars(description = "Filter by director name (partial match)")]
    pub director: Option<String>,

    #[schemars(description = "Filter screenings from date, inclusive (YYYY-MM-DD)")]
    pub start_date: Option<String>,

    #[schemars(description = "Filter screenings until date, inclusive (YYYY-MM-DD)")]
    pub end_date: Option<String>,

    /// Maximum films (default: 50)
    #[schemars(description = "Maximum number of films to return (default 50)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFilmsRequest {
    #[schemars(description = "Search query, matched against title, director and description")]
    pub query: String,

    /// Maximum results (default: 20)
    #[schemars(description = "Maximum number of results to return (default 20)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FilmDetailsRequest {
    #[schemars(description = "Film title (exact match, case-insensitive)")]
    pub title: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CatalogOverviewRequest {
    #[schemars(description = "Maximum number of directors to list (default 10, 0 hides them)")]
    pub max_directors: Option<usize>,
}

impl ListFilmsRequest {
    /// Blank optional strings count as unset.
    pub fn into_filter(self) -> Result<FilmFilter, String> {
        let limit = positive_limit(self.limit)?;
        let start_date = checked_date("start_date", self.start_date)?;
        let end_date = checked_date("end_date", self.end_date)?;

        Ok(FilmFilter {
            category: non_blank(self.category),
            director: non_blank(self.director),
            location: non_blank(self.location),
            start_date,
            end_date,
            limit,
        })
    }
}

impl SearchFilmsRequest {
    /// Returns the query (untrimmed) and the effective result cap.
    pub fn validate(&self) -> Result<(&str, usize), String> {
        if self.query.trim().is_empty() {
            return Err("Error: Search query cannot be empty".to_string());
        }
        let limit = positive_limit(self.limit)?.unwrap_or(DEFAULT_SEARCH_LIMIT);
        Ok((self.query.as_str(), limit))
    }
}

impl FilmDetailsRequest {
    pub fn validate(&self) -> Result<&str, String> {
        if self.title.trim().is_empty() {
            return Err("Error: Title cannot be empty".to_string());
        }
        Ok(self.title.as_str())
    }
}

impl CatalogOverviewRequest {
    pub fn max_directors(&self) -> usize {
        self.max_directors.unwrap_or(DEFAULT_OVERVIEW_DIRECTORS)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn positive_limit(limit: Option<usize>) -> Result<Option<usize>, String> {
    match limit {
        Some(0) => Err("Error: limit must be a positive integer".to_string()),
        other => Ok(other),
    }
}

fn checked_date(field: &str, value: Option<String>) -> Result<Option<String>, String> {
    match non_blank(value) {
        Some(date) if !is_iso_date(date.trim()) => Err(format!(
            "Error: {field} must be a date in YYYY-MM-DD format, got '{date}'"
        )),
        Some(date) => Ok(Some(date.trim().to_string())),
        None => Ok(None),
    }
}

/// `YYYY-MM-DD` with a plausible month and day. Calendar validity is not checked; bounds
/// are only ever compared lexicographically.
fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &value[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };
    matches!(
        (digits(0..4), digits(5..7), digits(8..10)),
        (Some(_), Some(1..=12), Some(1..=31))
    )
}
