//! Error types for Tron wallet operations.

use core::fmt;

/// Errors that can occur while deriving a Tron wallet.
#[derive(Debug)]
pub enum Error {
    /// Key derivation failed.
    Derivation(coinforge::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation(e) => write!(f, "derivation error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Derivation(e) => Some(e),
        }
    }
}

impl From<coinforge::Error> for Error {
    fn from(err: coinforge::Error) -> Self {
        Self::Derivation(err)
    }
}
