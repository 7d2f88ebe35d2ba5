//! The uniform result record a wallet generation produces.

use alloc::string::String;

use zeroize::Zeroizing;

use crate::network::Network;

/// One generated wallet: the network, its encoded address and private
/// key, and the mnemonic that produced it.
///
/// Pure aggregation with no failure modes of its own; the address and key
/// strings are produced by the chain-specific encoders. Immutable once
/// assembled. Secret fields are zeroized on drop.
#[derive(Debug)]
pub struct WalletRecord {
    /// Which network this wallet belongs to.
    pub network: Network,
    /// Chain-native address string.
    pub address: String,
    /// Canonical textual encoding of the private key (hex, WIF, or
    /// Base58, depending on the network).
    pub private_key: Zeroizing<String>,
    /// The originating mnemonic phrase.
    pub mnemonic: Zeroizing<String>,
}

impl WalletRecord {
    /// Assemble a record from its parts.
    pub fn new(
        network: Network,
        address: String,
        private_key: Zeroizing<String>,
        mnemonic: Zeroizing<String>,
    ) -> Self {
        Self {
            network,
            address,
            private_key,
            mnemonic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn record_preserves_fields() {
        let record = WalletRecord::new(
            Network::Ethereum,
            "0xabc".to_string(),
            Zeroizing::new("0x01".to_string()),
            Zeroizing::new("abandon about".to_string()),
        );
        assert_eq!(record.network, Network::Ethereum);
        assert_eq!(record.address, "0xabc");
        assert_eq!(*record.private_key, "0x01");
        assert_eq!(*record.mnemonic, "abandon about");
    }
}
