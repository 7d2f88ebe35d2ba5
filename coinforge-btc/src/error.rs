//! Error types for Bitcoin wallet operations.

use core::fmt;

/// Errors that can occur while deriving a Bitcoin wallet.
#[derive(Debug)]
pub enum Error {
    /// Key derivation failed.
    Derivation(coinforge::Error),
    /// Address encoding failed.
    Encoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation(e) => write!(f, "derivation error: {e}"),
            Self::Encoding => write!(f, "address encoding failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Derivation(e) => Some(e),
            Self::Encoding => None,
        }
    }
}

impl From<coinforge::Error> for Error {
    fn from(err: coinforge::Error) -> Self {
        Self::Derivation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_derivation_errors_with_source() {
        let err = Error::from(coinforge::Error::InvalidSeed);
        assert!(matches!(err, Error::Derivation(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
