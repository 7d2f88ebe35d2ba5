//! # Coinforge - Deterministic Multi-Curve Key Derivation
//!
//! Core library for deriving blockchain key material from a single random
//! seed phrase, following the standardized hierarchical derivation schemes:
//!
//! - **BIP-39**: entropy to checksummed mnemonic, mnemonic to 64-byte seed
//! - **BIP-32**: secp256k1 hierarchical derivation ("Bitcoin seed")
//! - **SLIP-0010**: Ed25519 hierarchical derivation ("ed25519 seed"),
//!   hardened-only
//!
//! Chain-specific address and key encodings live in the companion crates
//! (`coinforge-evm`, `coinforge-tron`, `coinforge-btc`, `coinforge-sol`);
//! this crate produces raw 32-byte key material and the building blocks
//! those crates encode.
//!
//! # Example
//!
//! ```
//! use coinforge::{Network, Wallet};
//!
//! let wallet = Wallet::generate(12, None)?;
//! let key = Network::Ethereum
//!     .curve()
//!     .derive(wallet.seed(), &Network::Ethereum.standard_path())?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), coinforge::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::cast_possible_truncation,
    clippy::similar_names,
    clippy::unreadable_literal
)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bip32;
#[cfg(feature = "alloc")]
pub mod encoding;
mod error;
pub mod hash;
pub mod hdpath;
#[cfg(feature = "alloc")]
mod mnemonic;
#[cfg(feature = "alloc")]
mod network;
#[cfg(feature = "alloc")]
mod record;
pub mod slip10;
#[cfg(feature = "alloc")]
mod wallet;

pub use error::{Error, Result};
pub use hdpath::ChildIndex;
#[cfg(feature = "alloc")]
pub use hdpath::DerivationPath;
#[cfg(feature = "alloc")]
pub use mnemonic::{Mnemonic, Seed};
#[cfg(feature = "alloc")]
pub use network::{Curve, Network};
#[cfg(feature = "alloc")]
pub use record::WalletRecord;
#[cfg(feature = "alloc")]
pub use wallet::Wallet;
