//! Wallet generation command.

use clap::Args;
use colored::Colorize;

use coinforge::{Network, Wallet, WalletRecord};

/// Generate wallets for one network or all of them.
#[derive(Args)]
pub struct GenerateCommand {
    /// Network to generate for (tron, ethereum, bsc, bitcoin, solana).
    /// Omit to generate all.
    #[arg(short, long)]
    network: Option<String>,

    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// BIP39 passphrase (optional extra security).
    #[arg(short, long)]
    passphrase: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let networks: Vec<Network> = match &self.network {
            Some(name) => vec![name.parse()?],
            None => Network::ALL.to_vec(),
        };

        println!();
        println!("  {}", "Master wallets generator".bold());
        println!();

        // One network failing must not stop the others.
        for network in networks {
            match self.generate_for(network) {
                Ok(record) => print_record(&record),
                Err(e) => eprintln!("{} {network}: {e}", "error:".red().bold()),
            }
        }

        Ok(())
    }

    /// Generate a wallet for one network from a fresh mnemonic.
    fn generate_for(&self, network: Network) -> Result<WalletRecord, Box<dyn std::error::Error>> {
        let wallet = Wallet::generate(self.words, self.passphrase.as_deref())?;

        let record = match network {
            Network::Ethereum | Network::Bsc => {
                coinforge_evm::Deriver::new(&wallet, network)?.derive()?
            }
            Network::Tron => coinforge_tron::Deriver::new(&wallet).derive()?,
            Network::Bitcoin => coinforge_btc::Deriver::new(&wallet).derive()?,
            Network::Solana => coinforge_sol::Deriver::new(&wallet).derive()?,
        };

        Ok(record)
    }
}

/// Display one wallet record.
#[rustfmt::skip]
fn print_record(record: &WalletRecord) {
    println!("  [{}]", record.network.name().cyan().bold());
    println!("  {}      {}", "Address".cyan(), record.address.green());
    println!("  {}  {}", "Private Key".cyan(), record.private_key.as_str());
    println!("  {}     {}", "Mnemonic".cyan(), record.mnemonic.as_str());
    println!();
}
