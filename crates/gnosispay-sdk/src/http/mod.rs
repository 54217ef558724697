/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod cards;
pub mod client;
pub mod error;
pub mod iban;
pub mod kyc;
pub mod user;

pub use error::{GnosisPayError, Result};

pub use client::{ClientConfig, GnosisPayClient, SiweParams, GNOSIS_CHAIN_ID};
