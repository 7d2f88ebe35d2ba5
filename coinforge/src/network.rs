//! Supported networks, their curves, and their standard derivation paths.

use alloc::string::ToString;
use core::fmt;

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hdpath::{ChildIndex, DerivationPath};
use crate::mnemonic::Seed;
use crate::{bip32, slip10};

/// The closed set of derivation schemes: one per supported curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// BIP-32 over secp256k1.
    Secp256k1,
    /// SLIP-0010 over Ed25519, hardened-only.
    Ed25519,
}

impl Curve {
    /// Walk `path` over `seed` with this curve's derivation scheme,
    /// returning the final 32-byte private key.
    pub fn derive(self, seed: &Seed, path: &DerivationPath) -> Result<Zeroizing<[u8; 32]>> {
        match self {
            Self::Secp256k1 => bip32::derive(seed.as_bytes(), path),
            Self::Ed25519 => slip10::derive(seed.as_bytes(), path),
        }
    }
}

/// Networks this workspace derives wallets for.
///
/// TON is absent by design: it uses its own 24-word scheme rather than a
/// BIP-32/SLIP-0010 path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Tron, BIP-44 coin type 195.
    Tron,
    /// Ethereum, BIP-44 coin type 60.
    Ethereum,
    /// BNB Smart Chain; shares Ethereum's coin type.
    Bsc,
    /// Bitcoin native SegWit, BIP-84.
    Bitcoin,
    /// Solana, Ed25519 with an all-hardened four-level path.
    Solana,
}

impl Network {
    /// All supported networks, in generation order.
    pub const ALL: [Self; 5] = [
        Self::Tron,
        Self::Ethereum,
        Self::Bsc,
        Self::Bitcoin,
        Self::Solana,
    ];

    /// Display name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tron => "Tron",
            Self::Ethereum => "Ethereum",
            Self::Bsc => "BSC",
            Self::Bitcoin => "Bitcoin",
            Self::Solana => "Solana",
        }
    }

    /// The curve this network's keys live on.
    #[inline]
    pub const fn curve(self) -> Curve {
        match self {
            Self::Solana => Curve::Ed25519,
            _ => Curve::Secp256k1,
        }
    }

    /// BIP-44 registered coin type.
    #[inline]
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Tron => 195,
            Self::Ethereum | Self::Bsc => 60,
            Self::Bitcoin => 0,
            Self::Solana => 501,
        }
    }

    /// The standard account-0 derivation path for this network:
    ///
    /// | Network  | Path              |
    /// |----------|-------------------|
    /// | Tron     | m/44'/195'/0'/0/0 |
    /// | Ethereum | m/44'/60'/0'/0/0  |
    /// | BSC      | m/44'/60'/0'/0/0  |
    /// | Bitcoin  | m/84'/0'/0'/0/0   |
    /// | Solana   | m/44'/501'/0'/0'  |
    pub fn standard_path(self) -> DerivationPath {
        let indices = match self {
            Self::Bitcoin => alloc::vec![
                ChildIndex::Hardened(84),
                ChildIndex::Hardened(0),
                ChildIndex::Hardened(0),
                ChildIndex::Normal(0),
                ChildIndex::Normal(0),
            ],
            Self::Solana => alloc::vec![
                ChildIndex::Hardened(44),
                ChildIndex::Hardened(501),
                ChildIndex::Hardened(0),
                ChildIndex::Hardened(0),
            ],
            Self::Tron | Self::Ethereum | Self::Bsc => alloc::vec![
                ChildIndex::Hardened(44),
                ChildIndex::Hardened(self.coin_type()),
                ChildIndex::Hardened(0),
                ChildIndex::Normal(0),
                ChildIndex::Normal(0),
            ],
        };
        DerivationPath::new(indices)
    }

    /// Derive the standard-path private key for this network from `seed`.
    pub fn derive(self, seed: &Seed) -> Result<Zeroizing<[u8; 32]>> {
        self.curve().derive(seed, &self.standard_path())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tron" => Ok(Self::Tron),
            "ethereum" | "eth" => Ok(Self::Ethereum),
            "bsc" => Ok(Self::Bsc),
            "bitcoin" | "btc" => Ok(Self::Bitcoin),
            "solana" | "sol" => Ok(Self::Solana),
            other => Err(Error::UnknownNetwork(other.to_string())),
        }
    }
}
