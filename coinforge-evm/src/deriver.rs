//! EVM wallet derivation from a unified wallet.

use alloc::string::String;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use zeroize::Zeroizing;

use coinforge::{bip32, DerivationPath, Network, Wallet, WalletRecord};

use crate::address::checksum_address;
use crate::Error;

/// Derives Ethereum or BSC wallet records from a unified wallet seed.
#[derive(Clone, Copy)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
    network: Network,
}

impl<'a> Deriver<'a> {
    /// Create a deriver for `network`, which must be [`Network::Ethereum`]
    /// or [`Network::Bsc`].
    pub fn new(wallet: &'a Wallet, network: Network) -> Result<Self, Error> {
        if !matches!(network, Network::Ethereum | Network::Bsc) {
            return Err(Error::UnsupportedNetwork(network));
        }
        Ok(Self { wallet, network })
    }

    /// Derive the standard-path (account 0, index 0) wallet record.
    pub fn derive(&self) -> Result<WalletRecord, Error> {
        self.derive_record(&self.network.standard_path())
    }

    /// Derive at a custom account and address index:
    /// `m/44'/60'/account'/0/address_index`.
    pub fn derive_at(&self, account: u32, address_index: u32) -> Result<WalletRecord, Error> {
        let path = DerivationPath::bip44(self.network.coin_type(), account, 0, address_index)?;
        self.derive_record(&path)
    }

    fn derive_record(&self, path: &DerivationPath) -> Result<WalletRecord, Error> {
        let key = bip32::derive(self.wallet.seed().as_bytes(), path)?;
        let address = checksum_address(&uncompressed_pubkey(&key)?);

        let mut encoded = String::with_capacity(66);
        encoded.push_str("0x");
        encoded.push_str(&hex::encode(&*key));

        Ok(WalletRecord::new(
            self.network,
            address,
            Zeroizing::new(encoded),
            self.wallet.phrase_zeroizing(),
        ))
    }

    /// The network this deriver targets.
    #[inline]
    pub const fn network(&self) -> Network {
        self.network
    }
}

/// Uncompressed SEC1 public key for a 32-byte private key.
fn uncompressed_pubkey(key: &[u8; 32]) -> Result<[u8; 65], Error> {
    let secret = SecretKey::from_slice(key).map_err(|_| coinforge::Error::InvalidKeyBytes)?;
    let point = secret.public_key().to_encoded_point(false);

    let mut bytes = [0u8; 65];
    bytes.copy_from_slice(point.as_bytes());
    Ok(bytes)
}
