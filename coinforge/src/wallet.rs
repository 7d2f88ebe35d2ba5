//! Unified wallet: a mnemonic with its derived seed.

use zeroize::Zeroizing;

use crate::error::Result;
use crate::mnemonic::{Mnemonic, Seed};

/// A mnemonic paired with the 64-byte seed it stretches to.
///
/// The same wallet can feed any chain's deriver; the seed is computed
/// once at construction. An optional BIP-39 passphrase folds into the
/// seed, so the same mnemonic with different passphrases yields unrelated
/// key material.
#[derive(Clone)]
pub struct Wallet {
    mnemonic: Mnemonic,
    seed: Seed,
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a wallet with a fresh random mnemonic.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid word count or if the secure random
    /// source fails.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self> {
        Ok(Self::from_mnemonic(
            Mnemonic::generate(word_count)?,
            passphrase,
        ))
    }

    /// Build a wallet from raw entropy bytes.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self> {
        Ok(Self::from_mnemonic(
            Mnemonic::from_entropy(entropy)?,
            passphrase,
        ))
    }

    /// Build a wallet from an existing phrase, validating its checksum.
    pub fn from_phrase(phrase: &str, passphrase: Option<&str>) -> Result<Self> {
        Ok(Self::from_mnemonic(
            Mnemonic::from_phrase(phrase)?,
            passphrase,
        ))
    }

    /// Build a wallet from an already-constructed mnemonic.
    pub fn from_mnemonic(mnemonic: Mnemonic, passphrase: Option<&str>) -> Self {
        let passphrase = passphrase.unwrap_or("");
        let seed = mnemonic.to_seed(passphrase);

        Self {
            mnemonic,
            seed,
            has_passphrase: !passphrase.is_empty(),
        }
    }

    /// The mnemonic phrase.
    ///
    /// Handle with care: it reconstructs every derived key.
    #[inline]
    pub fn phrase(&self) -> &str {
        self.mnemonic.phrase()
    }

    /// The mnemonic phrase wrapped for inclusion in a record.
    pub fn phrase_zeroizing(&self) -> Zeroizing<alloc::string::String> {
        Zeroizing::new(alloc::string::String::from(self.mnemonic.phrase()))
    }

    /// The 64-byte seed fed to the derivation engines.
    #[inline]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Whether a non-empty passphrase was folded into the seed.
    #[inline]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Number of words in the mnemonic.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.mnemonic.word_count()
    }
}
