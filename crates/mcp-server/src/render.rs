//! Human-readable text for tool results.
//!
//! Empty strings are rendered like absent attributes.

use screenings_catalog::{CatalogSummary, Film};

/// Cast lists longer than this many characters are cut and suffixed with `...`
pub const CAST_PREVIEW_CHARS: usize = 100;

pub const NO_FILMS_MATCHING_CRITERIA: &str = "No films found matching the criteria.";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    present(value).unwrap_or(fallback)
}

/// Result of `list-films`.
pub fn film_list(films: &[Film]) -> String {
    if films.is_empty() {
        return NO_FILMS_MATCHING_CRITERIA.to_string();
    }

    let mut lines = vec![format!("Found {} film(s):\n", films.len())];
    for film in films {
        lines.push(format!(
            "• {}\n  Director: {} | Runtime: {} | Rating: {}\n  Screenings: {}\n",
            film.title,
            or_default(film.director.as_deref(), "Unknown"),
            or_default(film.runtime.as_deref(), "Unknown"),
            or_default(film.rating.as_deref(), "Not rated"),
            film.screening_count()
        ));
    }
    lines.join("\n")
}

/// Result of `search-films`.
pub fn search_results(query: &str, films: &[&Film]) -> String {
    if films.is_empty() {
        return format!("No films found matching '{query}'.");
    }

    let mut lines = vec![format!("Found {} film(s) matching '{query}':\n", films.len())];
    for film in films {
        lines.push(format!(
            "• {}\n  Director: {}\n  Screenings: {}\n",
            film.title,
            or_default(film.director.as_deref(), "Unknown"),
            film.screening_count()
        ));
    }
    lines.join("\n")
}

pub fn film_not_found(title: &str) -> String {
    format!("Film '{title}' not found")
}

/// Full record of one film, as returned by `get-film-details`.
pub fn film_details(film: &Film) -> String {
    let mut lines = vec![format!("🎬 {}", film.title)];

    let metadata = [
        ("Country/Year", film.country_year.as_deref()),
        ("Director", film.director.as_deref()),
        ("Cast", film.cast.as_deref()),
        ("Runtime", film.runtime.as_deref()),
        ("Format", film.format.as_deref()),
        ("Rating", film.rating.as_deref()),
    ];
    for (label, value) in metadata {
        let Some(value) = present(value) else {
            continue;
        };
        if label == "Cast" {
            lines.push(format!("{label}: {}", cast_preview(value)));
        } else {
            lines.push(format!("{label}: {value}"));
        }
    }

    if let Some(description) = present(film.description.as_deref()) {
        lines.push(String::new());
        lines.push(format!("Description:\n{description}"));
    }

    lines.push(String::new());
    if film.screenings.is_empty() {
        lines.push("No screenings scheduled.".to_string());
    } else {
        lines.push(format!("Screenings ({} total):", film.screening_count()));
        for screening in &film.screenings {
            lines.push(format!(
                "  • {} at {} ({})",
                or_default(Some(screening.date.as_str()), "Unknown"),
                or_default(Some(screening.time.as_str()), "Unknown"),
                or_default(Some(screening.location.as_str()), "Unknown"),
            ));
        }
    }

    lines.join("\n")
}

fn cast_preview(cast: &str) -> String {
    if cast.chars().count() <= CAST_PREVIEW_CHARS {
        return cast.to_string();
    }
    let mut preview: String = cast.chars().take(CAST_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Result of `catalog-overview`.
pub fn catalog_overview(summary: &CatalogSummary, max_directors: usize) -> String {
    let mut lines = vec![
        format!(
            "Catalog: {} film(s), {} screening(s)",
            summary.films, summary.screenings
        ),
        String::new(),
        format!(
            "Categories ({}): {}",
            summary.categories.len(),
            summary.categories.join(", ")
        ),
        format!(
            "Locations ({}): {}",
            summary.locations.len(),
            summary.locations.join(", ")
        ),
    ];

    if !summary.directors.is_empty() && max_directors > 0 {
        let shown = summary.directors.len().min(max_directors);
        lines.push(String::new());
        lines.push(format!(
            "Directors (showing {shown} of {}):",
            summary.directors.len()
        ));
        for director in summary.directors.iter().take(shown) {
            lines.push(format!("  • {director}"));
        }
    }

    lines.join("\n")
}

/// Titles filed under one category bucket, `unknown` included.
pub fn category_films(category: &str, films: &[&Film]) -> String {
    if films.is_empty() {
        return format!("No films in category '{category}'");
    }
    let mut lines = vec![format!("Films in '{category}' ({}):", films.len())];
    lines.extend(films.iter().map(|film| format!("  • {}", film.title)));
    lines.join("\n")
}
