//! Address and key encodings: Base58Check, Bech32 SegWit, EIP-55.
//!
//! These are the textual encodings the chain crates apply to derived key
//! material; the derivation engine itself never produces strings.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::hash::{double_sha256, keccak256};

/// Encode `version || payload` as Base58Check (double-SHA-256 checksum).
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, returning `(version, payload)`.
///
/// The version is assumed to be a single byte, as in Bitcoin- and
/// Tron-style addresses.
pub fn base58check_decode(encoded: &str) -> Result<(Vec<u8>, Vec<u8>)> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| Error::InvalidEncoding)?;

    if data.len() < 5 {
        return Err(Error::InvalidEncoding);
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    let computed = double_sha256(payload);
    if checksum != &computed[..4] {
        return Err(Error::InvalidChecksum);
    }

    Ok((payload[..1].to_vec(), payload[1..].to_vec()))
}

/// Encode a SegWit address (Bech32 for witness v0, Bech32m for v1+).
pub fn segwit_encode(hrp: &str, version: u8, program: &[u8]) -> Result<String> {
    use bech32::Hrp;

    let hrp = Hrp::parse(hrp).map_err(|_| Error::InvalidEncoding)?;
    let version = bech32::Fe32::try_from(version).map_err(|_| Error::InvalidEncoding)?;

    bech32::segwit::encode(hrp, version, program).map_err(|_| Error::InvalidEncoding)
}

/// EIP-55 mixed-case checksum encoding of a 20-byte Ethereum address.
pub fn eip55_checksum(address: &[u8; 20]) -> String {
    let hex_addr = hex::encode(address);
    let digest = keccak256(hex_addr.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");

    for (i, c) in hex_addr.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }

    out
}
