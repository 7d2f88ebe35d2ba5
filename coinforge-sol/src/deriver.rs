//! Solana wallet derivation from a unified wallet.

use alloc::vec;

use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use coinforge::hdpath::ChildIndex;
use coinforge::{slip10, DerivationPath, Network, Wallet, WalletRecord};

use crate::Error;

/// Derives Solana wallet records from a unified wallet seed.
#[derive(Clone, Copy)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a Solana deriver over `wallet`.
    #[inline]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the standard-path (`m/44'/501'/0'/0'`) wallet record.
    pub fn derive(&self) -> Result<WalletRecord, Error> {
        self.derive_record(&Network::Solana.standard_path())
    }

    /// Derive at a custom account and change index:
    /// `m/44'/501'/account'/change'`.
    pub fn derive_at(&self, account: u32, change: u32) -> Result<WalletRecord, Error> {
        let path = DerivationPath::new(vec![
            ChildIndex::hardened(44)?,
            ChildIndex::hardened(501)?,
            ChildIndex::hardened(account)?,
            ChildIndex::hardened(change)?,
        ]);
        self.derive_record(&path)
    }

    fn derive_record(&self, path: &DerivationPath) -> Result<WalletRecord, Error> {
        let seed = slip10::derive(self.wallet.seed().as_bytes(), path)?;

        let signing_key = SigningKey::from_bytes(&seed);
        let address = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
        let keypair = Zeroizing::new(signing_key.to_keypair_bytes());

        Ok(WalletRecord::new(
            Network::Solana,
            address,
            Zeroizing::new(bs58::encode(&keypair[..]).into_string()),
            self.wallet.phrase_zeroizing(),
        ))
    }
}
