//! Coinforge - a multi-chain deterministic wallet generator.
//!
//! Generates fresh wallets for Tron, Ethereum, BSC, Bitcoin, and Solana
//! from independent BIP-39 mnemonics.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate(cmd) => cmd.execute(),
    }
}
