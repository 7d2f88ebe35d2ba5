//! BIP-32 hierarchical derivation over secp256k1.
//!
//! The master key is HMAC-SHA512 of the seed with the ASCII key
//! `"Bitcoin seed"`; children are derived by HMAC-chaining the parent's
//! chain code over either `0x00 || parent_key || index` (hardened) or
//! `serP(parent_pubkey) || index` (normal), with the child key computed as
//! `(IL + parent_key) mod n`.
//!
//! Out-of-range intermediates are surfaced as errors rather than reduced
//! or skipped: silently changing the derived key space would break
//! interoperability with other wallet software.

use hmac::{Hmac, Mac};
use k256::elliptic_curve::ff::{Field, PrimeField};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{Scalar, SecretKey};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};
use crate::hash::hash160;
use crate::hdpath::ChildIndex;
#[cfg(feature = "alloc")]
use crate::hdpath::DerivationPath;

type HmacSha512 = Hmac<Sha512>;

/// Domain-separation key for master key derivation, fixed by BIP-32.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// A BIP-32 extended private key: a 32-byte scalar paired with a 32-byte
/// chain code, plus the tree position metadata the standard tracks.
///
/// Zeroized on drop. Parents are never mutated; every derivation step
/// produces a new value.
#[derive(Clone)]
pub struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_index: u32,
}

impl Zeroize for ExtendedKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
        self.chain_code.zeroize();
        self.depth = 0;
        self.parent_fingerprint.zeroize();
        self.child_index = 0;
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ExtendedKey {
    /// Derive the master extended key from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeedLength`] for seeds outside 16..=64
    /// bytes, and [`Error::InvalidSeed`] in the astronomically unlikely
    /// case that the HMAC output is zero or not below the curve order.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::InvalidSeedLength);
        }

        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY).map_err(|_| Error::Crypto)?;
        mac.update(seed);
        let output = mac.finalize().into_bytes();

        let scalar = parse_scalar(&output[..32]).ok_or(Error::InvalidSeed)?;
        if bool::from(scalar.is_zero()) {
            return Err(Error::InvalidSeed);
        }

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);

        Ok(Self {
            key,
            chain_code,
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_index: 0,
        })
    }

    /// Derive the child key at `index`.
    ///
    /// Hardened indices commit to the parent private key, normal indices
    /// to the serialized parent public key; the two branches are never
    /// interchangeable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChildKey`] if IL is not below the curve
    /// order or the child key would be zero. BIP-32 prescribes moving on
    /// to the next index in that case; this engine surfaces the error and
    /// leaves any retry policy to the caller.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self> {
        if self.depth == u8::MAX {
            return Err(Error::MaxDepthExceeded);
        }

        let raw_index = index.to_u32();

        let mut mac =
            HmacSha512::new_from_slice(&self.chain_code).map_err(|_| Error::Crypto)?;
        if index.is_hardened() {
            mac.update(&[0x00]);
            mac.update(&self.key);
        } else {
            mac.update(&self.public_key_bytes()?);
        }
        mac.update(&raw_index.to_be_bytes());
        let output = mac.finalize().into_bytes();

        // parse256(IL) must be below the curve order; from_repr rejects
        // anything out of range instead of reducing it.
        let il = parse_scalar(&output[..32])
            .ok_or(Error::InvalidChildKey { index: raw_index })?;
        let parent = parse_scalar(&self.key).ok_or(Error::InvalidKeyBytes)?;

        let child = il + parent;
        if bool::from(child.is_zero()) {
            return Err(Error::InvalidChildKey { index: raw_index });
        }

        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&hash160(&self.public_key_bytes()?)[..4]);

        let key: [u8; 32] = child.to_bytes().into();
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&output[32..]);

        Ok(Self {
            key,
            chain_code,
            depth: self.depth + 1,
            parent_fingerprint,
            child_index: raw_index,
        })
    }

    /// Walk `path` left to right from this key.
    ///
    /// The first failing step aborts the whole derivation; no partial key
    /// material is returned.
    #[cfg(feature = "alloc")]
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        let mut current = self.clone();
        for &index in path.indices() {
            current = current.derive_child(index)?;
        }
        Ok(current)
    }

    /// The 32-byte private key scalar.
    #[inline]
    pub fn private_key(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.key)
    }

    /// The 32-byte chain code.
    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Compressed SEC1 serialization of the corresponding public key.
    pub fn public_key_bytes(&self) -> Result<[u8; 33]> {
        let secret = SecretKey::from_slice(&self.key).map_err(|_| Error::InvalidKeyBytes)?;
        let point = secret.public_key().to_encoded_point(true);

        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        Ok(bytes)
    }

    /// Depth in the derivation tree, zero for the master key.
    #[inline]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// First four bytes of hash160 of the parent public key.
    #[inline]
    pub const fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    /// Raw index that produced this key, hardened bit included.
    #[inline]
    pub const fn child_index(&self) -> u32 {
        self.child_index
    }
}

/// Walk `path` over `seed`, returning the final 32-byte private key.
#[cfg(feature = "alloc")]
pub fn derive(seed: &[u8], path: &DerivationPath) -> Result<Zeroizing<[u8; 32]>> {
    Ok(ExtendedKey::from_seed(seed)?.derive_path(path)?.private_key())
}

/// Parse 32 big-endian bytes as a scalar, returning `None` when the value
/// is not below the curve order.
fn parse_scalar(bytes: &[u8]) -> Option<Scalar> {
    let repr = k256::FieldBytes::clone_from_slice(bytes);
    Option::from(Scalar::from_repr(repr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // BIP-32 test vector 1.
    const SEED_V1: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn master_key_vector_1() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        assert_eq!(
            *master.private_key(),
            hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35")
        );
        assert_eq!(
            *master.chain_code(),
            hex!("873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508")
        );
        assert_eq!(master.depth(), 0);
        assert_eq!(master.parent_fingerprint(), [0u8; 4]);
    }

    #[test]
    fn master_key_vector_2() {
        let seed = hex!(
            "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a2"
            "9f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542"
        );
        let master = ExtendedKey::from_seed(&seed).unwrap();
        assert_eq!(
            *master.private_key(),
            hex!("4b03d6fc340455b363f51020ad3ecca4f0850280cf436c70c727923f6db46c3e")
        );
        assert_eq!(
            *master.chain_code(),
            hex!("60499f801b896d83179a4374aeb7822aaeaceaa0db1f85ee3e904c4defbd9689")
        );
    }

    #[test]
    fn hardened_child_m_0h() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        let child = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        assert_eq!(
            *child.private_key(),
            hex!("edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea")
        );
        assert_eq!(
            *child.chain_code(),
            hex!("47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141")
        );
        assert_eq!(child.depth(), 1);
        assert_eq!(child.child_index(), 0x8000_0000);
    }

    #[test]
    fn normal_child_m_0h_1() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        let child = master
            .derive_child(ChildIndex::Hardened(0))
            .unwrap()
            .derive_child(ChildIndex::Normal(1))
            .unwrap();
        assert_eq!(
            *child.private_key(),
            hex!("3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368")
        );
    }

    #[test]
    fn full_chain_vector_1() {
        // m/0'/1/2'/2/1000000000 from the published vector: the primary
        // interoperability contract with other wallet software.
        let path = DerivationPath::parse("m/0'/1/2'/2/1000000000").unwrap();
        let key = derive(&SEED_V1, &path).unwrap();
        assert_eq!(
            *key,
            hex!("471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8")
        );
    }

    #[test]
    fn hardened_and_normal_branches_differ() {
        // Index 0 hardened and index 0 normal must take different HMAC
        // branches and therefore produce different keys.
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        let hardened = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        let normal = master.derive_child(ChildIndex::Normal(0)).unwrap();
        assert_ne!(*hardened.private_key(), *normal.private_key());
        assert_ne!(*hardened.chain_code(), *normal.chain_code());
    }

    #[test]
    fn derivation_is_deterministic() {
        let path = DerivationPath::parse("m/44'/60'/0'/0/0").unwrap();
        let a = derive(&SEED_V1, &path).unwrap();
        let b = derive(&SEED_V1, &path).unwrap();
        assert_eq!(*a, *b);
    }

    #[test]
    fn rejects_short_seed() {
        assert!(matches!(
            ExtendedKey::from_seed(&[0u8; 8]),
            Err(Error::InvalidSeedLength)
        ));
    }

    #[test]
    fn fingerprint_tracks_parent() {
        let master = ExtendedKey::from_seed(&SEED_V1).unwrap();
        let parent_hash = hash160(&master.public_key_bytes().unwrap());
        let child = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        assert_eq!(child.parent_fingerprint()[..], parent_hash[..4]);
    }
}
