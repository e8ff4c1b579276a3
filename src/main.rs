// travel-search - the agency site's search box, from the terminal
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use travel_search_lib::{
    catalog::EntryType,
    core::{Matcher, PanelState, SearchController, SearchOutcome, Suggestions},
    config::Overrides,
    Catalog, Config, Database,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Store file (overrides TRAVEL_SEARCH_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Catalog JSON file (overrides TRAVEL_SEARCH_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show grouped suggestions for partial input
    Suggest {
        query: Vec<String>,

        /// List every match, not just the first page
        #[arg(long)]
        all: bool,
    },
    /// Run an exact-match search and remember the query
    Search { query: Vec<String> },
    /// Show recent searches
    History,
    /// Forget recent searches
    ClearHistory,
    /// List the loaded catalog
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = Overrides {
        db_path: cli.db,
        catalog_path: cli.catalog,
    };
    let config = Config::load(overrides).context("Could not load configuration")?;

    let catalog = config.load_catalog().context("Could not load the catalog")?;

    match cli.command {
        Command::Suggest { query, all } => handle_suggest(&catalog, &query.join(" "), all),
        Command::Catalog => handle_catalog(&catalog),
        command => {
            let db = Database::new(&config.db_path)
                .await
                .with_context(|| format!("Could not open store at {}", config.db_path.display()))?;
            let db = Arc::new(db);

            let mut controller = SearchController::open(catalog, Arc::clone(&db)).await;
            let result = handle_store_command(&mut controller, command).await;

            db.close().await;
            result
        }
    }
}

async fn handle_store_command(
    controller: &mut SearchController,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Search { query } => handle_search(controller, &query.join(" ")).await,
        Command::History => handle_history(controller),
        Command::ClearHistory => {
            controller
                .clear_history()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("Search history cleared.");
            Ok(())
        }
        Command::Suggest { .. } | Command::Catalog => Ok(()),
    }
}

fn handle_suggest(catalog: &Catalog, query: &str, all: bool) -> anyhow::Result<()> {
    if all {
        let matches = Matcher::candidates(query, catalog.entries());
        println!("\n{} match(es) for '{}':", matches.len(), query.trim());
        println!("{}", "=".repeat(60));
        for (i, entry) in matches.iter().enumerate() {
            println!("{:3}. {} ({}, {})", i + 1, entry.name, entry.category, entry.country);
        }
        println!("{}", "=".repeat(60));
        return Ok(());
    }

    match Matcher::suggest(query, catalog.entries()) {
        Suggestions::Hidden => {
            println!("Type at least two characters to see suggestions.");
        }
        Suggestions::Matches(set) if set.is_empty() => {
            println!("No results found for \"{}\"", set.query);
        }
        Suggestions::Matches(set) => {
            println!("{}", "=".repeat(60));
            for group in set.grouped().iter() {
                println!("{}", group.category);
                for entry in &group.entries {
                    println!("  {:<34} {:<22} -> {}", entry.name, entry.country, entry.target);
                }
            }
            println!("{}", "=".repeat(60));
        }
    }

    Ok(())
}

async fn handle_search(controller: &mut SearchController, query: &str) -> anyhow::Result<()> {
    match controller.perform_search(query).await {
        SearchOutcome::Navigate { entry, target } => {
            let kind = if target.is_anchor() { "section" } else { "page" };
            println!("{} -> {} {}", entry.name, kind, target);
        }
        SearchOutcome::Unresolved { notification, .. } => {
            println!("{}", notification);
        }
        SearchOutcome::Ignored => {
            eprintln!("Error: No search query provided");
        }
    }

    Ok(())
}

fn handle_history(controller: &mut SearchController) -> anyhow::Result<()> {
    match controller.on_focus("") {
        PanelState::History(queries) => {
            println!("\nRecent Searches");
            println!("{}", "=".repeat(60));
            for (i, query) in queries.iter().enumerate() {
                println!("{:3}. {}", i + 1, query);
            }
            println!("{}", "=".repeat(60));
        }
        _ => println!("No recent searches."),
    }

    Ok(())
}

fn handle_catalog(catalog: &Catalog) -> anyhow::Result<()> {
    let sections = [
        ("Destinations", EntryType::Destination),
        ("Flights", EntryType::Flight),
        ("Hotels", EntryType::Hotel),
        ("Services", EntryType::Service),
    ];

    println!("\nCatalog ({} entries)", catalog.len());
    println!("{}", "=".repeat(60));
    for (title, entry_type) in sections {
        let entries: Vec<_> = catalog.of_type(entry_type).collect();
        if entries.is_empty() {
            continue;
        }

        println!("\n{}:", title);
        for entry in entries {
            println!("  {:<34} {:<16} {}", entry.name, entry.category, entry.target);
        }
    }
    println!("{}", "=".repeat(60));

    Ok(())
}
