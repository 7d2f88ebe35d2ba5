//! Tron wallet derivation from a unified wallet.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use zeroize::Zeroizing;

use coinforge::{bip32, DerivationPath, Network, Wallet, WalletRecord};

use crate::address::encode_address;
use crate::Error;

/// Derives Tron wallet records from a unified wallet seed.
#[derive(Clone, Copy)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a Tron deriver over `wallet`.
    #[inline]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the standard-path (`m/44'/195'/0'/0/0`) wallet record.
    pub fn derive(&self) -> Result<WalletRecord, Error> {
        self.derive_record(&Network::Tron.standard_path())
    }

    /// Derive at a custom account and address index:
    /// `m/44'/195'/account'/0/address_index`.
    pub fn derive_at(&self, account: u32, address_index: u32) -> Result<WalletRecord, Error> {
        let path = DerivationPath::bip44(Network::Tron.coin_type(), account, 0, address_index)?;
        self.derive_record(&path)
    }

    fn derive_record(&self, path: &DerivationPath) -> Result<WalletRecord, Error> {
        let key = bip32::derive(self.wallet.seed().as_bytes(), path)?;

        let secret =
            SecretKey::from_slice(&*key).map_err(|_| coinforge::Error::InvalidKeyBytes)?;
        let point = secret.public_key().to_encoded_point(false);
        let mut pubkey = [0u8; 65];
        pubkey.copy_from_slice(point.as_bytes());

        Ok(WalletRecord::new(
            Network::Tron,
            encode_address(&pubkey),
            Zeroizing::new(hex::encode(&*key)),
            self.wallet.phrase_zeroizing(),
        ))
    }
}
