use serde::{Deserialize, Serialize};

/// A single scheduled showing of a film.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Screening {
    /// Calendar date in `YYYY-MM-DD` form; lexicographic order is chronological order
    #[serde(default)]
    pub date: String,

    /// Display time, never compared
    #[serde(default)]
    pub time: String,

    /// Venue identifier (e.g. `NFT1`, `BFI IMAX`)
    #[serde(default)]
    pub location: String,
}

impl Screening {
    #[must_use]
    pub fn new(date: impl Into<String>, time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }
}

/// A film record together with its screenings.
///
/// Every descriptive attribute is optional. Absence is a normal state: predicates over an
/// absent attribute never match, and renderers show it as unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    /// Natural key, compared case-insensitively
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub screenings: Vec<Screening>,
}

impl Film {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_screening(mut self, screening: Screening) -> Self {
        self.screenings.push(screening);
        self
    }

    /// Number of scheduled screenings
    #[must_use]
    pub fn screening_count(&self) -> usize {
        self.screenings.len()
    }
}
