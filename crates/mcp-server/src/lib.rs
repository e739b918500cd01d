//! Screenings MCP Server
//!
//! Exposes a film screenings catalog to AI agents via MCP protocol.
//!
//! ## Tools
//!
//! - `list-films` - List films filtered by category, director, venue or date range
//! - `search-films` - Keyword search over titles, directors and descriptions
//! - `get-film-details` - Full record and screening times for one title
//! - `catalog-overview` - Counts, categories, venues and directors
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "screenings": {
//!       "command": "screenings-mcp",
//!       "env": { "SCREENINGS_DATA": "/path/to/bfi_all_films.json" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use screenings_catalog::CatalogStore;
use std::sync::Arc;

pub mod render;
pub mod runtime_env;
mod tools;

pub use tools::schemas;
pub use tools::ScreeningsService;

use runtime_env::RuntimeConfig;

/// Default `RUST_LOG` directives: warnings, plus the catalog's load summary.
pub const DEFAULT_LOG_FILTER: &str = "warn,screenings_catalog=info";

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Stderr)
        .init();

    let config = RuntimeConfig::from_env();
    log::info!(
        "Starting screenings MCP server (data: {})",
        config.data_path.display()
    );

    let store = Arc::new(CatalogStore::new(config.data_source()));
    if config.preload {
        // A failed preload is not fatal; the first tool call reports the error.
        if let Err(err) = store.catalog().await {
            log::warn!("Preloading film data failed: {err}");
        }
    }

    let service = ScreeningsService::new(store);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Screenings MCP server stopped");
    Ok(())
}
