/*
[INPUT]:  Challenge text and wallet private key
[OUTPUT]: Hex signature string for the challenge exchange
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::signer::{parse_private_key, sign_message, signature_to_string};
use crate::http::Result;

/// Trait for wallet signing operations
///
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Get the wallet address
    fn address(&self) -> Address;

    /// Sign a message as an Ethereum personal message
    ///
    /// Returns `0x`-prefixed lowercase hex of the 65-byte signature.
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// Signer backed by an in-memory secp256k1 key
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: Address,
}

impl EvmWalletSigner {
    /// Create a new signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let signer = parse_private_key(private_key_hex)?;
        let address = signer.address();
        Ok(Self { signer, address })
    }
}

impl std::fmt::Debug for EvmWalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWalletSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletSigner for EvmWalletSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        let signature = sign_message(message, &self.signer)?;
        Ok(signature_to_string(&signature))
    }
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: Address,
    signature: String,
}

impl MockWalletSigner {
    /// Create a new mock signer with predetermined signature
    pub fn new(address: Address, signature: &str) -> Self {
        Self {
            address,
            signature: signature.to_string(),
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        Ok(self.signature.clone())
    }
}
