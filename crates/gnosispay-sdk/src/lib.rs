/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Gnosis Pay SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthManager,
    EvmWalletSigner,
    JwtManager,
    MockWalletSigner,
    SiweMessage,
    WalletSigner,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    GnosisPayClient,
    GnosisPayError,
    Result,
    SiweParams,
    GNOSIS_CHAIN_ID,
};

// Re-export all types
pub use types::*;
