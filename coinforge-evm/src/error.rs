//! Error types for EVM wallet operations.

use core::fmt;

#[cfg(feature = "alloc")]
use coinforge::Network;

/// Errors that can occur while deriving an EVM wallet.
#[derive(Debug)]
pub enum Error {
    /// Key derivation failed.
    Derivation(coinforge::Error),
    /// The network is not an EVM network.
    #[cfg(feature = "alloc")]
    UnsupportedNetwork(Network),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation(e) => write!(f, "derivation error: {e}"),
            #[cfg(feature = "alloc")]
            Self::UnsupportedNetwork(network) => {
                write!(f, "{network} is not an EVM network")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Derivation(e) => Some(e),
            Self::UnsupportedNetwork(_) => None,
        }
    }
}

impl From<coinforge::Error> for Error {
    fn from(err: coinforge::Error) -> Self {
        Self::Derivation(err)
    }
}
