//! Ethereum and BSC wallet derivation for coinforge.
//!
//! Both networks share the secp256k1 curve and the `m/44'/60'` path;
//! they differ only in the network tag stamped on the resulting record.
//! Addresses are the last 20 bytes of keccak256 of the uncompressed
//! public key, rendered with the EIP-55 mixed-case checksum; private
//! keys are 0x-prefixed hex.
//!
//! # Usage
//!
//! ```
//! use coinforge::{Network, Wallet};
//! use coinforge_evm::Deriver;
//!
//! let wallet = Wallet::from_phrase(
//!     "abandon abandon abandon abandon abandon abandon \
//!      abandon abandon abandon abandon abandon about",
//!     None,
//! )
//! .unwrap();
//! let record = Deriver::new(&wallet, Network::Ethereum)
//!     .unwrap()
//!     .derive()
//!     .unwrap();
//! assert!(record.address.starts_with("0x"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod address;
#[cfg(feature = "alloc")]
mod deriver;
mod error;

#[cfg(feature = "alloc")]
pub use address::{address_bytes, checksum_address};
#[cfg(feature = "alloc")]
pub use deriver::Deriver;
pub use error::Error;

/// A convenient Result type alias for coinforge-evm operations.
pub type Result<T> = core::result::Result<T, Error>;
