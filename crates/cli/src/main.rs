use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use screenings_catalog::{Catalog, CatalogStore, DataSource};
use screenings_mcp::render;
use screenings_mcp::runtime_env::RuntimeConfig;
use screenings_mcp::schemas::{
    CatalogOverviewRequest, FilmDetailsRequest, ListFilmsRequest, SearchFilmsRequest,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screenings")]
#[command(about = "Browse a film screenings catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Film data: a JSON document or a directory of bfi_*.json documents (overrides SCREENINGS_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List films, optionally filtered by category, director, venue or date range
    List(ListArgs),

    /// Search titles, directors and descriptions
    Search(SearchArgs),

    /// Show the full record of one film
    Show(ShowArgs),

    /// Catalog counts, categories, venues and directors
    Stats(StatsArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Exact category (e.g. james_cameron, christmas_films, classics)
    #[arg(long)]
    category: Option<String>,

    /// Director name (partial match)
    #[arg(long)]
    director: Option<String>,

    /// Cinema location (partial match)
    #[arg(long)]
    location: Option<String>,

    /// First screening date to include (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Last screening date to include (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,

    /// Maximum number of films (default 50)
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Args)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Maximum number of results (default 20)
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Args)]
struct ShowArgs {
    /// Film title (exact match, case-insensitive)
    title: String,
}

#[derive(Args)]
struct StatsArgs {
    /// Maximum number of directors to list
    #[arg(long)]
    max_directors: Option<usize>,

    /// List the titles filed under one category instead ("unknown" for films without one)
    #[arg(long)]
    category: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| RuntimeConfig::from_env().data_path);
    let store = CatalogStore::new(DataSource::from_path(&data_path));
    let catalog = store
        .catalog()
        .await
        .with_context(|| format!("Failed to load film data from {}", data_path.display()))?;

    let output = run(cli.command, catalog, cli.json)?;
    println!("{output}");
    Ok(())
}

fn run(command: Commands, catalog: &Catalog, json: bool) -> Result<String> {
    match command {
        Commands::List(args) => {
            let criteria = ListFilmsRequest {
                category: args.category,
                location: args.location,
                director: args.director,
                start_date: args.start_date,
                end_date: args.end_date,
                limit: args.limit,
            }
            .into_filter()
            .map_err(invalid_argument)?;
            let films = catalog.filter(&criteria);
            if json {
                return to_json(&films);
            }
            Ok(render::film_list(&films))
        }
        Commands::Search(args) => {
            let request = SearchFilmsRequest {
                query: args.query,
                limit: args.limit,
            };
            let (query, limit) = request.validate().map_err(invalid_argument)?;
            let films = catalog.search(query, limit);
            if json {
                return to_json(&films);
            }
            Ok(render::search_results(query, &films))
        }
        Commands::Show(args) => {
            let request = FilmDetailsRequest { title: args.title };
            let title = request.validate().map_err(invalid_argument)?;
            let film = catalog.find_by_title(title);
            if json {
                return to_json(&film);
            }
            Ok(match film {
                Some(film) => render::film_details(film),
                None => render::film_not_found(title),
            })
        }
        Commands::Stats(args) => {
            if let Some(category) = args.category.as_deref() {
                let films = catalog.films_in_category(category);
                if json {
                    return to_json(&films);
                }
                return Ok(render::category_films(category, &films));
            }
            let request = CatalogOverviewRequest {
                max_directors: args.max_directors,
            };
            let summary = catalog.summary();
            if json {
                return to_json(&summary);
            }
            Ok(render::catalog_overview(&summary, request.max_directors()))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Argument validation messages are phrased for tool output; anyhow adds its own prefix.
fn invalid_argument(message: String) -> anyhow::Error {
    anyhow::anyhow!(message.trim_start_matches("Error: ").to_string())
}
