//! Solana wallet derivation for coinforge.
//!
//! Solana keys are Ed25519, derived along the all-hardened SLIP-0010 path
//! `m/44'/501'/account'/change'`. The address is the Base58-encoded
//! public key; the private key is the Base58 encoding of the 64-byte
//! keypair (seed followed by public key), the format Solana tooling
//! expects.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod deriver;
mod error;

#[cfg(feature = "alloc")]
pub use deriver::Deriver;
pub use error::Error;

/// A convenient Result type alias for coinforge-sol operations.
pub type Result<T> = core::result::Result<T, Error>;
