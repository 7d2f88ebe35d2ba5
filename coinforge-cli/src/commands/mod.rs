//! CLI command definitions.

mod generate;

use clap::{Parser, Subcommand};

pub use generate::GenerateCommand;

/// Multi-chain deterministic wallet generator.
#[derive(Parser)]
#[command(name = "coinforge", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate wallets, one fresh mnemonic per network.
    Generate(GenerateCommand),
}
