//! Derivation path types.
//!
//! A path is an ordered sequence of child indices, each either normal or
//! hardened, e.g. `m/44'/60'/0'/0/0`. Hardened indices are encoded on the
//! wire as `index + 0x8000_0000`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};

/// A single child index in a derivation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1.
    Normal(u32),
    /// Hardened index, displayed as `n'`, stored without the offset.
    Hardened(u32),
}

impl ChildIndex {
    /// Offset added to hardened indices in the wire encoding (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal child index, rejecting values with the hardened
    /// bit set.
    pub const fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index, rejecting values with the hardened
    /// bit already set.
    pub const fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Whether this index is hardened.
    pub const fn is_hardened(self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// The raw index value, without the hardened offset.
    pub const fn index(self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => i,
        }
    }

    /// The u32 used in HMAC data during derivation: the index with the
    /// hardened offset applied when hardened.
    pub const fn to_u32(self) -> u32 {
        match self {
            Self::Normal(i) => i,
            Self::Hardened(i) => i | Self::HARDENED_OFFSET,
        }
    }
}

impl From<u32> for ChildIndex {
    fn from(raw: u32) -> Self {
        if raw >= Self::HARDENED_OFFSET {
            Self::Hardened(raw & !Self::HARDENED_OFFSET)
        } else {
            Self::Normal(raw)
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl core::str::FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(stripped) = s
            .strip_suffix('\'')
            .or_else(|| s.strip_suffix('h'))
            .or_else(|| s.strip_suffix('H'))
        {
            let index: u32 = stripped.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::hardened(index)
        } else {
            let index: u32 = s.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::normal(index)
        }
    }
}

/// An ordered sequence of child indices walked from the master key.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

#[cfg(feature = "alloc")]
impl DerivationPath {
    /// Create a path from a sequence of child indices.
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// Parse a path string such as `m/44'/60'/0'/0/0` or `84h/0h/0h/0/0`.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self { indices: Vec::new() });
        }

        let path = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let mut indices = Vec::new();
        for component in path.split('/') {
            if component.is_empty() {
                return Err(Error::InvalidDerivationPath);
            }
            indices.push(component.parse()?);
        }

        Ok(Self { indices })
    }

    /// The child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Number of derivation levels.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Whether every index in the path is hardened. SLIP-0010 Ed25519
    /// derivation requires this.
    pub fn is_fully_hardened(&self) -> bool {
        self.indices.iter().all(|i| i.is_hardened())
    }

    /// BIP-44 path: `m/44'/coin_type'/account'/change/address_index`.
    pub fn bip44(coin_type: u32, account: u32, change: u32, address_index: u32) -> Result<Self> {
        Ok(Self {
            indices: alloc::vec![
                ChildIndex::hardened(44)?,
                ChildIndex::hardened(coin_type)?,
                ChildIndex::hardened(account)?,
                ChildIndex::normal(change)?,
                ChildIndex::normal(address_index)?,
            ],
        })
    }

    /// BIP-84 native SegWit path:
    /// `m/84'/coin_type'/account'/change/address_index`.
    pub fn bip84(coin_type: u32, account: u32, change: u32, address_index: u32) -> Result<Self> {
        Ok(Self {
            indices: alloc::vec![
                ChildIndex::hardened(84)?,
                ChildIndex::hardened(coin_type)?,
                ChildIndex::hardened(account)?,
                ChildIndex::normal(change)?,
                ChildIndex::normal(address_index)?,
            ],
        })
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "alloc")]
impl core::str::FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn child_index_wire_encoding() {
        assert_eq!(ChildIndex::Normal(0).to_u32(), 0);
        assert_eq!(ChildIndex::Hardened(0).to_u32(), 0x8000_0000);
        assert_eq!(ChildIndex::Hardened(44).to_u32(), 0x8000_002c);
    }

    #[test]
    fn child_index_from_raw() {
        assert_eq!(ChildIndex::from(0x8000_002c), ChildIndex::Hardened(44));
        assert_eq!(ChildIndex::from(5), ChildIndex::Normal(5));
    }

    #[test]
    fn constructors_reject_offset_values() {
        assert!(ChildIndex::normal(0x8000_0000).is_err());
        assert!(ChildIndex::hardened(0x8000_0000).is_err());
        assert!(ChildIndex::hardened(0x7fff_ffff).is_ok());
    }

    #[test]
    fn parse_and_display_round_trip() {
        let path = DerivationPath::parse("m/44'/60'/0'/0/0").unwrap();
        assert_eq!(path.depth(), 5);
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/0");
        assert_eq!(
            path.indices()[..3],
            [
                ChildIndex::Hardened(44),
                ChildIndex::Hardened(60),
                ChildIndex::Hardened(0)
            ]
        );
    }

    #[test]
    fn parse_accepts_h_suffix_and_missing_prefix() {
        let a = DerivationPath::parse("m/84'/0'/0'/0/0").unwrap();
        let b = DerivationPath::parse("84h/0h/0h/0/0").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DerivationPath::parse("m/44'/x/0").is_err());
        assert!(DerivationPath::parse("m//0").is_err());
    }

    #[test]
    fn bip44_builder_matches_parsed() {
        let built = DerivationPath::bip44(60, 0, 0, 0).unwrap();
        let parsed = DerivationPath::parse("m/44'/60'/0'/0/0").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn fully_hardened_detection() {
        assert!(DerivationPath::parse("m/44'/501'/0'/0'")
            .unwrap()
            .is_fully_hardened());
        assert!(!DerivationPath::bip44(60, 0, 0, 0).unwrap().is_fully_hardened());
    }
}
