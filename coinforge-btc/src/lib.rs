//! Bitcoin native SegWit wallet derivation for coinforge.
//!
//! Follows BIP-84: path `m/84'/0'/0'/0/0`, P2WPKH (witness v0) addresses
//! with the `bc` human-readable part, and private keys in compressed-key
//! mainnet WIF.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod address;
#[cfg(feature = "alloc")]
mod deriver;
mod error;

#[cfg(feature = "alloc")]
pub use address::{p2wpkh_address, wif};
#[cfg(feature = "alloc")]
pub use deriver::Deriver;
pub use error::Error;

/// A convenient Result type alias for coinforge-btc operations.
pub type Result<T> = core::result::Result<T, Error>;
