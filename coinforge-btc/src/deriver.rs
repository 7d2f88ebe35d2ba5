//! Bitcoin wallet derivation from a unified wallet.

use coinforge::bip32::ExtendedKey;
use coinforge::{DerivationPath, Network, Wallet, WalletRecord};

use crate::address::{p2wpkh_address, wif};
use crate::Error;

/// Derives Bitcoin native SegWit wallet records from a unified wallet
/// seed.
#[derive(Clone, Copy)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a Bitcoin deriver over `wallet`.
    #[inline]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the standard BIP-84 (`m/84'/0'/0'/0/0`) wallet record.
    pub fn derive(&self) -> Result<WalletRecord, Error> {
        self.derive_record(&Network::Bitcoin.standard_path())
    }

    /// Derive at a custom account and address index:
    /// `m/84'/0'/account'/0/address_index`.
    pub fn derive_at(&self, account: u32, address_index: u32) -> Result<WalletRecord, Error> {
        let path = DerivationPath::bip84(0, account, 0, address_index)?;
        self.derive_record(&path)
    }

    fn derive_record(&self, path: &DerivationPath) -> Result<WalletRecord, Error> {
        let extended = ExtendedKey::from_seed(self.wallet.seed().as_bytes())?.derive_path(path)?;
        let pubkey = extended.public_key_bytes()?;

        Ok(WalletRecord::new(
            Network::Bitcoin,
            p2wpkh_address(&pubkey)?,
            wif(&extended.private_key()),
            self.wallet.phrase_zeroizing(),
        ))
    }
}
