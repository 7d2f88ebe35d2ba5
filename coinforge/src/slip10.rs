//! SLIP-0010 hierarchical derivation for Ed25519.
//!
//! The master key is HMAC-SHA512 of the seed with the ASCII key
//! `"ed25519 seed"`. Ed25519 has no public-key-based normal derivation, so
//! every child index must be hardened. A path containing a non-hardened
//! index is rejected outright: coercing the hardened bit on behalf of the
//! caller would mask malformed paths and silently move the derived key
//! space.
//!
//! Reference: <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};
use crate::hdpath::ChildIndex;
#[cfg(feature = "alloc")]
use crate::hdpath::DerivationPath;

type HmacSha512 = Hmac<Sha512>;

/// Domain-separation key for master key derivation, fixed by SLIP-0010.
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// A SLIP-0010 extended key for Ed25519: a 32-byte key (the seed of a
/// signing key, not an expanded scalar) and a 32-byte chain code.
///
/// No depth or fingerprint tracking: with hardened-only derivation there
/// is no extended public key to anchor them to.
#[derive(Clone)]
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl Zeroize for ExtendedKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
        self.chain_code.zeroize();
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ExtendedKey {
    /// Derive the master key and chain code from a seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::InvalidSeedLength);
        }

        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY).map_err(|_| Error::Crypto)?;
        mac.update(seed);
        let output = mac.finalize().into_bytes();

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);

        Ok(Self { key, chain_code })
    }

    /// Derive the child key at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonHardenedIndex`] if `index` is not hardened.
    /// The hardened bit is never applied implicitly.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self> {
        if !index.is_hardened() {
            return Err(Error::NonHardenedIndex {
                index: index.to_u32(),
            });
        }

        let raw_index = index.to_u32();

        let mut mac =
            HmacSha512::new_from_slice(&self.chain_code).map_err(|_| Error::Crypto)?;
        mac.update(&[0x00]);
        mac.update(&self.key);
        mac.update(&raw_index.to_be_bytes());
        let output = mac.finalize().into_bytes();

        // IL = 0 cannot occur for any realistic input, but a zero key
        // would be unusable; check anyway.
        if output[..32].iter().all(|&b| b == 0) {
            return Err(Error::InvalidChildKey { index: raw_index });
        }

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);

        Ok(Self { key, chain_code })
    }

    /// Walk `path` left to right from this key. Fails on the first
    /// non-hardened index without deriving anything further.
    #[cfg(feature = "alloc")]
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        let mut current = self.clone();
        for &index in path.indices() {
            current = current.derive_child(index)?;
        }
        Ok(current)
    }

    /// The 32-byte key, suitable as an Ed25519 signing-key seed.
    #[inline]
    pub fn private_key(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.key)
    }

    /// The 32-byte chain code.
    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

/// Walk `path` over `seed`, returning the final 32-byte key.
///
/// Every index in `path` must be hardened.
#[cfg(feature = "alloc")]
pub fn derive(seed: &[u8], path: &DerivationPath) -> Result<Zeroizing<[u8; 32]>> {
    Ok(ExtendedKey::from_seed(seed)?.derive_path(path)?.private_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // SLIP-0010 Ed25519 test vectors 1 and 2.
    const SEED_V1: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const SEED_V2: [u8; 64] = hex!(
        "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a2"
        "9f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542"
    );

    #[test]
    fn master_key_vector_1() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        assert_eq!(
            *master.private_key(),
            hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7")
        );
        assert_eq!(
            *master.chain_code(),
            hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb")
        );
    }

    #[test]
    fn master_key_vector_2() {
        let master = ExtendedKey::from_seed(&SEED_V2).unwrap();
        assert_eq!(
            *master.private_key(),
            hex!("171cb88b1b3c1db25add599712e36245d75bc65a1a5c9e18d76f9f2b1eab4012")
        );
        assert_eq!(
            *master.chain_code(),
            hex!("ef70a74db9c3a5af931b5fe73ed8e1a53464133654fd55e7a66f8570b8e33c3b")
        );
    }

    #[test]
    fn hardened_child_m_0h() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        let child = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        assert_eq!(
            *child.private_key(),
            hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
        );
        assert_eq!(
            *child.chain_code(),
            hex!("8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69")
        );
    }

    #[test]
    fn hardened_child_m_0h_vector_2() {
        let master = ExtendedKey::from_seed(&SEED_V2).unwrap();
        let child = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        assert_eq!(
            *child.private_key(),
            hex!("1559eb2bbec5790b0c65d8693e4d0875b1747f4970ae8b650486ed7470845635")
        );
        assert_eq!(
            *child.chain_code(),
            hex!("0b78a3226f915c082bf118f83618a618ab64fe44f93756e7a4ecf7547cbf4e4c")
        );
    }

    #[test]
    fn rejects_non_hardened_index() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        assert!(matches!(
            master.derive_child(ChildIndex::Normal(0)),
            Err(Error::NonHardenedIndex { index: 0 })
        ));
    }

    #[test]
    fn rejects_non_hardened_index_anywhere_in_path() {
        // Solana-style path with the change level left unhardened.
        let path = DerivationPath::parse("m/44'/501'/0'/0").unwrap();
        assert!(matches!(
            derive(&SEED_V1, &path),
            Err(Error::NonHardenedIndex { index: 0 })
        ));
    }

    #[test]
    fn solana_path_is_deterministic() {
        let path = DerivationPath::parse("m/44'/501'/0'/0'").unwrap();
        let a = derive(&SEED_V1, &path).unwrap();
        let b = derive(&SEED_V1, &path).unwrap();
        assert_eq!(*a, *b);
        assert_ne!(*a, [0u8; 32]);
    }

    #[test]
    fn sibling_indices_differ() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        let first = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        let second = master.derive_child(ChildIndex::Hardened(1)).unwrap();
        assert_ne!(*first.private_key(), *second.private_key());
    }
}
