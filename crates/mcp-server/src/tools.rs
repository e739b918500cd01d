//! MCP tools for the film screenings catalog
//!
//! Each tool validates its arguments, queries the shared [`CatalogStore`] and renders the
//! result as text.

pub mod schemas;

use crate::render;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemas::{CatalogOverviewRequest, FilmDetailsRequest, ListFilmsRequest, SearchFilmsRequest};
use screenings_catalog::{Catalog, CatalogStore};
use std::sync::Arc;

/// Screenings MCP Service
#[derive(Clone)]
pub struct ScreeningsService {
    /// Shared catalog (loaded on first tool call)
    store: Arc<CatalogStore>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl ScreeningsService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Catalog snapshot, or the tool error to return when it cannot be loaded.
    async fn catalog(&self) -> Result<&Catalog, CallToolResult> {
        self.store.catalog().await.map_err(|err| {
            log::error!("Failed to load film data: {err}");
            error_text(format!("Error: Failed to load film data: {err}"))
        })
    }
}

#[tool_handler]
impl ServerHandler for ScreeningsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Film screenings catalog. Use 'list-films' to browse with category, director, venue or date filters, 'search-films' for keyword search over titles, directors and descriptions, 'get-film-details' for the full record and screening times of one film, and 'catalog-overview' to discover available categories and venues.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

fn text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn error_text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ScreeningsService {
    /// Filtered listing
    #[tool(
        name = "list-films",
        description = "List films with optional filtering by category, location, director, or date range. Date and location filters narrow each film's screenings; films without a matching screening are left out."
    )]
    pub async fn list_films(
        &self,
        Parameters(request): Parameters<ListFilmsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let criteria = match request.into_filter() {
            Ok(criteria) => criteria,
            Err(message) => return Ok(error_text(message)),
        };
        let catalog = match self.catalog().await {
            Ok(catalog) => catalog,
            Err(result) => return Ok(result),
        };

        let films = catalog.filter(&criteria);
        log::debug!("list-films {criteria:?} -> {} films", films.len());
        Ok(text(render::film_list(&films)))
    }

    /// Keyword search
    #[tool(
        name = "search-films",
        description = "Search for films by title, director, or description (case-insensitive substring match). Results keep catalog order."
    )]
    pub async fn search_films(
        &self,
        Parameters(request): Parameters<SearchFilmsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let (query, limit) = match request.validate() {
            Ok(validated) => validated,
            Err(message) => return Ok(error_text(message)),
        };
        let catalog = match self.catalog().await {
            Ok(catalog) => catalog,
            Err(result) => return Ok(result),
        };

        let films = catalog.search(query, limit);
        log::debug!("search-films '{query}' (limit {limit}) -> {} films", films.len());
        Ok(text(render::search_results(query, &films)))
    }

    /// Exact title lookup
    #[tool(
        name = "get-film-details",
        description = "Get complete details for a specific film including screenings and metadata. The title must match exactly, ignoring case."
    )]
    pub async fn get_film_details(
        &self,
        Parameters(request): Parameters<FilmDetailsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let title = match request.validate() {
            Ok(title) => title,
            Err(message) => return Ok(error_text(message)),
        };
        let catalog = match self.catalog().await {
            Ok(catalog) => catalog,
            Err(result) => return Ok(result),
        };

        Ok(text(match catalog.find_by_title(title) {
            Some(film) => render::film_details(film),
            None => render::film_not_found(title),
        }))
    }

    /// Catalog-wide counts and facets
    #[tool(
        name = "catalog-overview",
        description = "Summarize the catalog: film and screening counts, available categories, venues, and directors. Useful for picking filter values."
    )]
    pub async fn catalog_overview(
        &self,
        Parameters(request): Parameters<CatalogOverviewRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = match self.catalog().await {
            Ok(catalog) => catalog,
            Err(result) => return Ok(result),
        };

        Ok(text(render::catalog_overview(
            &catalog.summary(),
            request.max_directors(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use screenings_catalog::{DataSource, Film, Screening};

    fn service() -> ScreeningsService {
        let films = vec![
            Film::new("Film A")
                .with_category("classics")
                .with_director("Jane Doe")
                .with_screening(Screening::new("2024-05-01", "18:00", "NFT1")),
            Film::new("Film B")
                .with_category("classics")
                .with_director("John Roe")
                .with_description("Made in homage to Jane Doe.")
                .with_screening(Screening::new("2024-05-02", "20:30", "IMAX")),
        ];
        ScreeningsService::new(Arc::new(CatalogStore::from_films(films)))
    }

    fn output(result: &CallToolResult) -> &str {
        result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.as_str())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn list_films_filters_by_category_and_location() {
        let request = ListFilmsRequest {
            category: Some("classics".to_string()),
            location: Some("imax".to_string()),
            ..ListFilmsRequest::default()
        };

        let result = service().list_films(Parameters(request)).await.unwrap();
        assert_ne!(result.is_error, Some(true));
        let text = output(&result);
        assert!(text.starts_with("Found 1 film(s):"), "{text}");
        assert!(text.contains("• Film B"));
        assert!(!text.contains("Film A"));
    }

    #[tokio::test]
    async fn list_films_without_matches_is_not_an_error() {
        let request = ListFilmsRequest {
            start_date: Some("2030-01-01".to_string()),
            ..ListFilmsRequest::default()
        };

        let result = service().list_films(Parameters(request)).await.unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(output(&result), render::NO_FILMS_MATCHING_CRITERIA);
    }

    #[tokio::test]
    async fn search_films_returns_matches_in_catalog_order() {
        let request = SearchFilmsRequest {
            query: "doe".to_string(),
            limit: None,
        };

        let result = service().search_films(Parameters(request)).await.unwrap();
        let text = output(&result);
        assert!(text.starts_with("Found 2 film(s) matching 'doe':"), "{text}");
        let a = text.find("• Film A").unwrap();
        let b = text.find("• Film B").unwrap();
        assert!(a < b);
    }

    #[tokio::test]
    async fn blank_arguments_never_reach_the_catalog() {
        let service = ScreeningsService::new(Arc::new(CatalogStore::new(DataSource::File(
            "/nonexistent/films.json".into(),
        ))));

        let search = service
            .search_films(Parameters(SearchFilmsRequest {
                query: "  ".to_string(),
                limit: None,
            }))
            .await
            .unwrap();
        assert_eq!(search.is_error, Some(true));
        assert_eq!(output(&search), "Error: Search query cannot be empty");

        let details = service
            .get_film_details(Parameters(FilmDetailsRequest {
                title: String::new(),
            }))
            .await
            .unwrap();
        assert_eq!(output(&details), "Error: Title cannot be empty");
        assert!(!service.store().is_loaded());
    }

    #[tokio::test]
    async fn get_film_details_ignores_case() {
        let result = service()
            .get_film_details(Parameters(FilmDetailsRequest {
                title: "film a".to_string(),
            }))
            .await
            .unwrap();
        let text = output(&result);
        assert!(text.starts_with("🎬 Film A"), "{text}");
        assert!(text.contains("Director: Jane Doe"));
        assert!(text.contains("  • 2024-05-01 at 18:00 (NFT1)"));
    }

    #[tokio::test]
    async fn get_film_details_reports_missing_film() {
        let result = service()
            .get_film_details(Parameters(FilmDetailsRequest {
                title: "Film".to_string(),
            }))
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(output(&result), "Film 'Film' not found");
    }

    #[tokio::test]
    async fn load_failure_is_a_tool_error() {
        let service = ScreeningsService::new(Arc::new(CatalogStore::new(DataSource::File(
            "/nonexistent/films.json".into(),
        ))));

        let result = service
            .catalog_overview(Parameters(CatalogOverviewRequest::default()))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(output(&result).starts_with("Error: Failed to load film data"));
    }

    #[tokio::test]
    async fn overview_lists_facets() {
        let result = service()
            .catalog_overview(Parameters(CatalogOverviewRequest::default()))
            .await
            .unwrap();
        let text = output(&result);
        assert!(text.starts_with("Catalog: 2 film(s), 2 screening(s)"), "{text}");
        assert!(text.contains("Categories (1): classics"));
        assert!(text.contains("Locations (2): IMAX, NFT1"));
    }
}
