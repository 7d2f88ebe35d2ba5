//! Ethereum-style address computation.

use alloc::string::String;

use coinforge::encoding::eip55_checksum;
use coinforge::hash::keccak256;

/// The raw 20-byte address: the last 20 bytes of keccak256 of the
/// uncompressed public key without its 0x04 prefix byte.
pub fn address_bytes(uncompressed_pubkey: &[u8; 65]) -> [u8; 20] {
    let digest = keccak256(&uncompressed_pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

/// EIP-55 checksummed address string for an uncompressed public key.
pub fn checksum_address(uncompressed_pubkey: &[u8; 65]) -> String {
    eip55_checksum(&address_bytes(uncompressed_pubkey))
}
