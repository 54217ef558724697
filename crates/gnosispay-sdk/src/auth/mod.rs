/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Session tokens, signed challenges, and auth errors
[POS]:    Auth layer - handles Gnosis Pay SIWE authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod jwt;
pub mod manager;
pub mod signer;
pub mod siwe;
pub mod wallet;

pub use jwt::{is_token_live, token_expiry, JwtManager};
pub use manager::AuthManager;
pub use signer::{
    hash_message, parse_private_key, sign_bytes, sign_message, sign_raw_bytes,
    signature_to_string, SIGNATURE_LENGTH,
};
pub use siwe::{build_challenge, parse_address, SiweMessage};
pub use wallet::{EvmWalletSigner, MockWalletSigner, WalletSigner};
