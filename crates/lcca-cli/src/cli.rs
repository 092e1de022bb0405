//! CLI argument definitions using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// LCCA - lifecycle cost comparison for wastewater collection systems
#[derive(Parser, Debug)]
#[command(name = "lcca")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// LCCA service URL for remote commands
    #[arg(
        short = 'u',
        long,
        env = "LCCA_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare vacuum and pressure systems for a cluster
    Compare(commands::compare::CompareArgs),

    /// Validate a cost book file
    Validate(commands::validate::ValidateArgs),

    /// Fetch the cost book from a running service
    Costs(commands::costs::CostsArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Compare(args) => commands::compare::execute(args, self.json).await,
            Commands::Validate(args) => commands::validate::execute(args, self.json).await,
            Commands::Costs(args) => commands::costs::execute(args, &self.url, self.json).await,
        }
    }
}
