//! Bitcoin address and key encodings.

use alloc::string::String;

use coinforge::encoding::{base58check_encode, segwit_encode};
use coinforge::hash::hash160;
use zeroize::Zeroizing;

use crate::Error;

/// Mainnet WIF version byte.
const WIF_VERSION: u8 = 0x80;
/// Trailing byte marking a WIF key as paired with a compressed pubkey.
const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// Mainnet P2WPKH (witness v0) address for a compressed public key:
/// `bech32("bc", 0, hash160(pubkey))`.
pub fn p2wpkh_address(compressed_pubkey: &[u8; 33]) -> Result<String, Error> {
    let program = hash160(compressed_pubkey);
    segwit_encode("bc", 0, &program).map_err(|_| Error::Encoding)
}

/// Mainnet WIF encoding of a private key, flagged compressed.
pub fn wif(private_key: &[u8; 32]) -> Zeroizing<String> {
    let mut payload = Zeroizing::new([0u8; 33]);
    payload[..32].copy_from_slice(private_key);
    payload[32] = WIF_COMPRESSED_FLAG;

    Zeroizing::new(base58check_encode(&[WIF_VERSION], &payload[..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn p2wpkh_reference_address() {
        // Compressed generator point; the BIP-173 reference address.
        let pubkey =
            hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        assert_eq!(
            p2wpkh_address(&pubkey).unwrap(),
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"
        );
    }

    #[test]
    fn wif_of_key_one() {
        let mut key = [0u8; 32];
        key[31] = 1;
        assert_eq!(
            *wif(&key),
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
    }
}
