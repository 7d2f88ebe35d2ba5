//! Tron wallet derivation for coinforge.
//!
//! Tron keys live on secp256k1 with path `m/44'/195'/0'/0/0`. The address
//! uses the same keccak256 construction as Ethereum but is rendered as
//! Base58Check with version byte `0x41`, so mainnet addresses start with
//! `T`. Private keys are plain hex, without a 0x prefix.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod address;
#[cfg(feature = "alloc")]
mod deriver;
mod error;

#[cfg(feature = "alloc")]
pub use address::{address_bytes, encode_address, ADDRESS_PREFIX};
#[cfg(feature = "alloc")]
pub use deriver::Deriver;
pub use error::Error;

/// A convenient Result type alias for coinforge-tron operations.
pub type Result<T> = core::result::Result<T, Error>;
