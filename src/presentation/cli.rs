//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --data-dir, --json, --verbose) are inherited by all subcommands
//! - Running without a subcommand starts the interactive session

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Comanda - restaurant menu, orders and end-of-day closing
#[derive(Parser, Debug)]
#[command(name = "comanda")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'comanda' without arguments for the interactive session.")]
pub struct Cli {
    /// Configuration file (default: ./comanda.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base directory for menu, ticket and report files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format for scripts (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage menu dishes
    Dish {
        #[command(subcommand)]
        command: DishCommand,
    },

    /// Create orders and manage stored tickets
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum DishCommand {
    /// Add a dish to the menu
    Add {
        /// Dish identifier, also its file name (e.g. P001)
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long, allow_hyphen_values = true)]
        price: String,

        #[arg(long)]
        category: String,
    },

    /// Show the menu grouped by category
    List,

    /// Show one dish
    Show { id: String },

    /// Change fields of a dish; omitted fields keep their value
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Mark the dish as available or not (true/false)
        #[arg(long, value_name = "BOOL")]
        available: Option<bool>,
    },

    /// Remove a dish and its file
    Remove {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// Commit a new order in one step
    Create {
        #[arg(long)]
        customer: String,

        /// Line item as DISH_ID=QUANTITY (repeatable)
        #[arg(long = "item", value_name = "ID=QTY", required = true)]
        items: Vec<String>,
    },

    /// Show the next order number and stored ticket count
    Status,

    /// Delete every stored ticket and restart numbering at 1
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
