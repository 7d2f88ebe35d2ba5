//! Error types for mnemonic handling and key derivation.

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;

/// A convenient Result type alias for coinforge operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during mnemonic handling and key derivation.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The secure random source failed or is unavailable.
    Entropy,
    /// Invalid word count for a mnemonic.
    InvalidWordCount(usize),
    /// Invalid entropy length for mnemonic encoding.
    InvalidEntropyLength(usize),
    /// A word is not in the BIP-39 English wordlist.
    #[cfg(feature = "alloc")]
    UnknownWord(String),
    /// The mnemonic checksum does not match its entropy.
    ChecksumMismatch,
    /// Seed length outside the 16..=64 byte range accepted by BIP-32.
    InvalidSeedLength,
    /// The master key derived from the seed is zero or not below the
    /// curve order.
    InvalidSeed,
    /// The child key at this index is invalid: IL is not below the curve
    /// order, or the resulting key is zero.
    InvalidChildKey {
        /// Raw child index, including the hardened bit if set.
        index: u32,
    },
    /// A SLIP-0010 Ed25519 path contained a non-hardened index.
    NonHardenedIndex {
        /// Raw index that was not hardened.
        index: u32,
    },
    /// Malformed derivation path.
    InvalidDerivationPath,
    /// Derivation exceeded the maximum BIP-32 depth of 255.
    MaxDepthExceeded,
    /// Key bytes do not form a valid private key for the curve.
    InvalidKeyBytes,
    /// Unknown network name.
    #[cfg(feature = "alloc")]
    UnknownNetwork(String),
    /// Invalid data for an address or key encoding.
    InvalidEncoding,
    /// Checksum mismatch in a Base58Check payload.
    InvalidChecksum,
    /// An HMAC or other crypto primitive could not be initialized.
    Crypto,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => write!(f, "secure random source unavailable"),
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::InvalidEntropyLength(n) => {
                write!(f, "invalid entropy length {n}, must be 16, 20, 24, 28, or 32 bytes")
            }
            #[cfg(feature = "alloc")]
            Self::UnknownWord(word) => {
                write!(f, "\"{word}\" is not a BIP-39 English word")
            }
            Self::ChecksumMismatch => write!(f, "mnemonic checksum mismatch"),
            Self::InvalidSeedLength => write!(f, "seed must be 16 to 64 bytes"),
            Self::InvalidSeed => write!(f, "seed produces an invalid master key"),
            Self::InvalidChildKey { index } => {
                write!(f, "invalid child key at index {index:#010x}")
            }
            Self::NonHardenedIndex { index } => {
                write!(f, "index {index} is not hardened; Ed25519 derivation requires hardened indices")
            }
            Self::InvalidDerivationPath => write!(f, "invalid derivation path"),
            Self::MaxDepthExceeded => write!(f, "maximum derivation depth of 255 exceeded"),
            Self::InvalidKeyBytes => write!(f, "bytes do not form a valid private key"),
            #[cfg(feature = "alloc")]
            Self::UnknownNetwork(name) => write!(f, "unknown network \"{name}\""),
            Self::InvalidEncoding => write!(f, "invalid encoding"),
            Self::InvalidChecksum => write!(f, "encoded payload checksum mismatch"),
            Self::Crypto => write!(f, "crypto primitive failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
