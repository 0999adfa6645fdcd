//! Saleor Dashboard CLI - catalogue inspection and ad-hoc queries.
//!
//! # Usage
//!
//! ```bash
//! # List catalogue entries
//! sd-cli catalogue list
//!
//! # Print the composed document of one entry
//! sd-cli catalogue show product-list
//!
//! # Lint every document in the catalogue
//! sd-cli catalogue check
//!
//! # Run an entry against SALEOR_API_URL
//! sd-cli query product-list --variables '{"first": 10}'
//!
//! # Search product types, following "load more" for two pages
//! sd-cli search product-types bev --first 5 --pages 2
//!
//! # Render the "assign to shop" card
//! sd-cli render warehouse-assign-to-shop --locale pl
//! ```
//!
//! # Commands
//!
//! - `catalogue` - Inspect and lint the query catalogue (offline)
//! - `query` - Run a catalogue entry against the API
//! - `search` - Run a top-level search
//! - `render` - Render a view component to stdout

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sd-cli")]
#[command(author, version, about = "Saleor dashboard catalogue tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the query catalogue
    Catalogue {
        #[command(subcommand)]
        action: CatalogueAction,
    },
    /// Run a catalogue entry against the configured API
    Query {
        /// Catalogue key (see `catalogue list`)
        key: String,

        /// Variables as a JSON object (defaults to the entry's example)
        #[arg(short, long)]
        variables: Option<String>,
    },
    /// Run a top-level search
    Search {
        #[command(subcommand)]
        target: SearchTarget,
    },
    /// Render a view component
    Render {
        #[command(subcommand)]
        component: RenderComponent,
    },
}

#[derive(Subcommand)]
enum CatalogueAction {
    /// List every entry with its operation name and kind
    List,
    /// Print the composed document and example variables of an entry
    Show {
        /// Catalogue key
        key: String,
    },
    /// Lint every document; exits non-zero on any issue
    Check,
}

#[derive(Subcommand)]
enum SearchTarget {
    /// Search product types by name
    ProductTypes {
        /// Search term
        term: String,

        /// Page size
        #[arg(short, long, default_value_t = 20)]
        first: i64,

        /// Maximum number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
}

#[derive(Subcommand)]
enum RenderComponent {
    /// The "assign to shop" card shown on unassigned warehouses
    WarehouseAssignToShop {
        /// Locale, e.g. `en` or `pl-PL`
        #[arg(short, long)]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saleor_dashboard_admin=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalogue { action } => match action {
            CatalogueAction::List => commands::catalogue::list(),
            CatalogueAction::Show { key } => commands::catalogue::show(&key)?,
            CatalogueAction::Check => commands::catalogue::check()?,
        },
        Commands::Query { key, variables } => {
            commands::query::run(&key, variables.as_deref()).await?;
        }
        Commands::Search { target } => match target {
            SearchTarget::ProductTypes { term, first, pages } => {
                commands::search::product_types(&term, first, pages).await?;
            }
        },
        Commands::Render { component } => match component {
            RenderComponent::WarehouseAssignToShop { locale } => {
                commands::render::warehouse_assign_to_shop(locale.as_deref())?;
            }
        },
    }
    Ok(())
}
