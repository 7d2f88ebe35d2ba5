//! Tron address computation.

use alloc::string::String;

use coinforge::encoding::base58check_encode;
use coinforge::hash::keccak256;

/// Version byte prepended to the raw address before Base58Check encoding.
/// Mainnet addresses therefore start with `T`.
pub const ADDRESS_PREFIX: u8 = 0x41;

/// The raw 20-byte address: the last 20 bytes of keccak256 of the
/// uncompressed public key without its 0x04 prefix byte. Identical to the
/// Ethereum construction; only the textual encoding differs.
pub fn address_bytes(uncompressed_pubkey: &[u8; 65]) -> [u8; 20] {
    let digest = keccak256(&uncompressed_pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

/// Base58Check-encoded mainnet address for an uncompressed public key.
pub fn encode_address(uncompressed_pubkey: &[u8; 65]) -> String {
    base58check_encode(&[ADDRESS_PREFIX], &address_bytes(uncompressed_pubkey))
}
