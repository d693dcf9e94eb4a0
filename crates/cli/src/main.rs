//! Cadastro CLI - customer registration from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Register a new customer (interactive, with CEP auto-fill)
//! cadastro create
//!
//! # List registered customers
//! cadastro list
//!
//! # Re-enter and update an existing customer
//! cadastro update 7
//!
//! # Delete a customer
//! cadastro delete 7
//! ```
//!
//! # Commands
//!
//! - `create` - Drive the registration form interactively and submit
//! - `list` - Print the registered customers
//! - `update` - Re-enter a customer's data and PUT it by id
//! - `delete` - Delete a customer by id

#![cfg_attr(not(test), forbid(unsafe_code))]
// A terminal front end prints to the terminal.
#![allow(clippy::print_stdout)]

use cadastro_registration::RegistrationConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cadastro")]
#[command(author, version, about = "Cadastro customer registration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new customer interactively
    Create,
    /// List registered customers
    List,
    /// Update an existing customer interactively
    Update {
        /// Server-assigned customer id
        id: String,
    },
    /// Delete a customer
    Delete {
        /// Server-assigned customer id
        id: String,
    },
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
    let config = RegistrationConfig::from_env()?;

    match cli.command {
        Commands::Create => commands::register::create(&config).await?,
        Commands::List => commands::manage::list(&config).await?,
        Commands::Update { id } => commands::register::update(&config, &id).await?,
        Commands::Delete { id } => commands::manage::delete(&config, &id).await?,
    }
    Ok(())
}
