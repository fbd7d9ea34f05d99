//! Estoca CLI - drive the client flows from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List houses, marking the selected one
//! estoca houses list
//!
//! # Create and select a house
//! estoca houses create -n "Casa do Joao" --state SP --city "Sao Paulo" \
//!     --neighborhood "Vila Joao" --street "Rua Joao" --number 300
//! estoca houses select 63f2a1
//!
//! # Inspect and edit the selected house's pantry
//! estoca pantry list -f arroz
//! estoca pantry set 63a9f0 4
//!
//! # Search the catalog and add the first hit to the shopping list
//! estoca catalog search arroz --pages 2
//! estoca add list -s arroz -q 2
//! ```
//!
//! # Environment Variables
//!
//! - `ESTOCA_API_URL` - Backend base URL (defaults to the hosted instance)
//! - `ESTOCA_API_TOKEN` - Bearer token; required for every command

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "estoca")]
#[command(author, version, about = "Estoca client CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage houses
    Houses {
        #[command(subcommand)]
        action: HouseAction,
    },
    /// Inspect and edit the selected house's pantry
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },
    /// Search the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Add a catalog product to the pantry or shopping list
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },
}

#[derive(Subcommand)]
enum HouseAction {
    /// List houses, marking the selected one
    List,
    /// Create a house
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// State (e.g. SP)
        #[arg(long)]
        state: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        neighborhood: String,

        #[arg(long)]
        street: String,

        #[arg(long)]
        number: i64,

        /// Address complement (apartment, block)
        #[arg(long)]
        complement: Option<String>,
    },
    /// Select a house as the active context
    Select {
        /// House id
        id: String,
    },
    /// Delete a house
    Delete {
        /// House id
        id: String,
    },
}

#[derive(Subcommand)]
enum PantryAction {
    /// List pantry items of the selected house
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Set a pantry item's quantity
    Set {
        /// Product id
        product_id: String,
        /// New quantity
        quantity: u32,
    },
    /// Remove a product from the pantry
    Remove {
        /// Product id
        product_id: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Search products, fetching one or more pages
    Search {
        /// Search term
        term: String,

        /// Number of pages to fetch
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
}

#[derive(Subcommand)]
enum AddTarget {
    /// Add to the selected house's pantry
    Pantry(AddArgs),
    /// Add to the selected house's shopping list
    List(AddArgs),
}

#[derive(Args)]
struct AddArgs {
    /// Search term used to find the product
    #[arg(short, long)]
    search: String,

    /// Index of the search result to add
    #[arg(short, long, default_value_t = 0)]
    pick: usize,

    /// Quantity to add
    #[arg(short, long, default_value_t = 1)]
    quantity: u32,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Houses { action } => match action {
            HouseAction::List => commands::houses::list().await?,
            HouseAction::Create {
                name,
                state,
                city,
                neighborhood,
                street,
                number,
                complement,
            } => {
                commands::houses::create(estoca_client::NewHouse {
                    name,
                    state,
                    city,
                    neighborhood,
                    street,
                    number,
                    complement,
                })
                .await?;
            }
            HouseAction::Select { id } => commands::houses::select(&id).await?,
            HouseAction::Delete { id } => commands::houses::delete(&id).await?,
        },
        Commands::Pantry { action } => match action {
            PantryAction::List { filter } => commands::pantry::list(filter.as_deref()).await?,
            PantryAction::Set {
                product_id,
                quantity,
            } => commands::pantry::set(&product_id, quantity).await?,
            PantryAction::Remove { product_id } => commands::pantry::remove(&product_id).await?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Search { term, pages } => {
                commands::catalog::search(&term, pages).await?;
            }
        },
        Commands::Add { target } => match target {
            AddTarget::Pantry(args) => {
                commands::add::run(
                    commands::add::Target::Pantry,
                    &args.search,
                    args.pick,
                    args.quantity,
                )
                .await?;
            }
            AddTarget::List(args) => {
                commands::add::run(
                    commands::add::Target::ShoppingList,
                    &args.search,
                    args.pick,
                    args.quantity,
                )
                .await?;
            }
        },
    }
    Ok(())
}
