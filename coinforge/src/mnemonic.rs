//! BIP-39 mnemonic encoding and seed derivation.
//!
//! Entropy is extended with a SHA-256 checksum (`entropy_bits / 32` bits),
//! split into 11-bit groups, and each group mapped to a word from the
//! 2048-word English dictionary. The seed is stretched from the phrase via
//! PBKDF2-HMAC-SHA512 with 2048 iterations and salt `"mnemonic" || passphrase`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use bip39::Language;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::hash::sha256;

/// PBKDF2 iteration count fixed by BIP-39.
const PBKDF2_ROUNDS: u32 = 2048;

/// A 64-byte seed derived from a mnemonic phrase, the root input to both
/// BIP-32 and SLIP-0010 derivation.
#[derive(Clone)]
pub struct Seed(Zeroizing<[u8; 64]>);

impl Seed {
    /// The raw seed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl From<[u8; 64]> for Seed {
    fn from(bytes: [u8; 64]) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &*self.0
    }
}

/// A checksummed BIP-39 mnemonic phrase.
///
/// Immutable once created; the phrase is zeroized on drop.
#[derive(Clone, Debug)]
pub struct Mnemonic {
    phrase: Zeroizing<String>,
    word_count: usize,
}

impl Mnemonic {
    /// Generate a fresh mnemonic from the system's secure random source.
    ///
    /// `word_count` must be 12, 15, 18, 21, or 24. Twelve words encode
    /// 128 bits of entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random source fails.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize) -> Result<Self> {
        use rand_core::RngCore;

        let entropy_len = entropy_len(word_count)?;
        let mut entropy = Zeroizing::new([0u8; 32]);
        rand_core::OsRng
            .try_fill_bytes(&mut entropy[..entropy_len])
            .map_err(|_| Error::Entropy)?;

        Self::from_entropy(&entropy[..entropy_len])
    }

    /// Encode raw entropy (16, 20, 24, 28, or 32 bytes) as a mnemonic.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        if !matches!(entropy.len(), 16 | 20 | 24 | 28 | 32) {
            return Err(Error::InvalidEntropyLength(entropy.len()));
        }

        // Entropy followed by the checksum byte; at most 8 checksum bits
        // are ever used.
        let mut data = Zeroizing::new([0u8; 33]);
        data[..entropy.len()].copy_from_slice(entropy);
        data[entropy.len()] = sha256(entropy)[0];

        let word_count = entropy.len() * 3 / 4;
        let word_list = Language::English.word_list();

        let mut phrase = Zeroizing::new(String::new());
        for group in 0..word_count {
            if group > 0 {
                phrase.push(' ');
            }
            phrase.push_str(word_list[index_at(&data[..], group * 11) as usize]);
        }

        Ok(Self { phrase, word_count })
    }

    /// Parse an existing phrase, validating both wordlist membership and
    /// the embedded checksum.
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if !matches!(words.len(), 12 | 15 | 18 | 21 | 24) {
            return Err(Error::InvalidWordCount(words.len()));
        }

        let word_list = Language::English.word_list();
        let mut data = Zeroizing::new([0u8; 33]);

        for (position, word) in words.iter().enumerate() {
            let index = word_list
                .binary_search(word)
                .map_err(|_| Error::UnknownWord((*word).to_string()))? as u16;

            for bit in 0..11 {
                if index & (1 << (10 - bit)) != 0 {
                    let pos = position * 11 + bit;
                    data[pos / 8] |= 1 << (7 - pos % 8);
                }
            }
        }

        let entropy_len = words.len() * 4 / 3;
        let checksum_bits = entropy_len / 4;
        let mask = 0xffu8 << (8 - checksum_bits);
        let expected = sha256(&data[..entropy_len])[0];

        if (expected ^ data[entropy_len]) & mask != 0 {
            return Err(Error::ChecksumMismatch);
        }

        Ok(Self {
            phrase: Zeroizing::new(words.join(" ")),
            word_count: words.len(),
        })
    }

    /// The space-joined phrase.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of words in the phrase.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Stretch the phrase into a 64-byte seed with PBKDF2-HMAC-SHA512.
    ///
    /// Deterministic: the same phrase and passphrase always produce the
    /// same seed. An empty passphrase is the common case.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let mut salt = Zeroizing::new(String::with_capacity(8 + passphrase.len()));
        salt.push_str("mnemonic");
        salt.push_str(passphrase);

        let mut seed = [0u8; 64];
        pbkdf2::pbkdf2_hmac::<Sha512>(
            self.phrase.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut seed,
        );
        Seed::from(seed)
    }
}

/// Entropy length in bytes for a given word count.
#[cfg(feature = "rand")]
fn entropy_len(word_count: usize) -> Result<usize> {
    match word_count {
        12 | 15 | 18 | 21 | 24 => Ok(word_count * 4 / 3),
        _ => Err(Error::InvalidWordCount(word_count)),
    }
}

/// Read the 11-bit group starting at `start` (bit offset, MSB-first).
fn index_at(data: &[u8], start: usize) -> u16 {
    let mut value = 0u16;
    for bit in start..start + 11 {
        value <<= 1;
        if data[bit / 8] & (1 << (7 - bit % 8)) != 0 {
            value |= 1;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const ZERO_ENTROPY_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon about";

    #[test]
    fn zero_entropy_encodes_reference_phrase() {
        let mnemonic = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
        assert_eq!(mnemonic.phrase(), ZERO_ENTROPY_PHRASE);
        assert_eq!(mnemonic.word_count(), 12);
    }

    #[test]
    fn max_entropy_encodes_reference_phrase() {
        // BIP-39 vector: 16 bytes of 0xff.
        let mnemonic = Mnemonic::from_entropy(&[0xffu8; 16]).unwrap();
        assert_eq!(
            mnemonic.phrase(),
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong"
        );
    }

    #[test]
    fn twenty_four_word_encoding() {
        let mnemonic = Mnemonic::from_entropy(&[0u8; 32]).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
        assert!(mnemonic.phrase().ends_with(" art"));
    }

    #[test]
    fn rejects_bad_entropy_length() {
        assert!(matches!(
            Mnemonic::from_entropy(&[0u8; 17]),
            Err(Error::InvalidEntropyLength(17))
        ));
    }

    #[test]
    fn seed_matches_trezor_vector() {
        let mnemonic = Mnemonic::from_phrase(ZERO_ENTROPY_PHRASE).unwrap();
        let seed = mnemonic.to_seed("TREZOR");
        assert_eq!(
            seed.as_bytes()[..],
            hex!(
                "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553"
                "1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
            )[..]
        );
    }

    #[test]
    fn seed_with_empty_passphrase() {
        let mnemonic = Mnemonic::from_phrase(ZERO_ENTROPY_PHRASE).unwrap();
        let seed = mnemonic.to_seed("");
        assert_eq!(
            seed.as_bytes()[..],
            hex!(
                "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1"
                "9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
            )[..]
        );
    }

    #[test]
    fn seed_is_stable_across_calls() {
        let mnemonic = Mnemonic::from_phrase(ZERO_ENTROPY_PHRASE).unwrap();
        assert_eq!(
            mnemonic.to_seed("").as_bytes(),
            mnemonic.to_seed("").as_bytes()
        );
    }

    #[test]
    fn checksum_validation_rejects_tampered_phrase() {
        let tampered = "abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            Mnemonic::from_phrase(tampered),
            Err(Error::ChecksumMismatch)
        ));
    }

    #[test]
    fn rejects_unknown_word() {
        let phrase = "abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon abandon abandon zzzz";
        assert!(matches!(
            Mnemonic::from_phrase(phrase),
            Err(Error::UnknownWord(_))
        ));
    }

    #[test]
    fn rejects_bad_word_count() {
        assert!(matches!(
            Mnemonic::from_phrase("abandon abandon abandon"),
            Err(Error::InvalidWordCount(3))
        ));
    }

    #[test]
    fn entropy_round_trip() {
        let entropy = hex!("77c2b00716cec7213839159e404db50d");
        let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
        let reparsed = Mnemonic::from_phrase(mnemonic.phrase()).unwrap();
        assert_eq!(mnemonic.phrase(), reparsed.phrase());
    }

    #[cfg(feature = "rand")]
    #[test]
    fn generated_mnemonics_are_distinct() {
        use alloc::collections::BTreeSet;

        let mut seen = BTreeSet::new();
        for _ in 0..1000 {
            let mnemonic = Mnemonic::generate(12).unwrap();
            assert!(seen.insert(mnemonic.phrase().to_string()));
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn generate_rejects_bad_word_count() {
        assert!(matches!(
            Mnemonic::generate(13),
            Err(Error::InvalidWordCount(13))
        ));
    }
}
