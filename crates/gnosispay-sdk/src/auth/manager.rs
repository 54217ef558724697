/*
[INPUT]:  Wallet signer and HTTP client
[OUTPUT]: Authenticated credentials (session token)
[POS]:    Auth layer - orchestrates complete authentication flow
[UPDATE]: When auth endpoints or flow steps change
*/

use alloy_primitives::Address;
use reqwest::Method;
use tracing::{debug, info};

use crate::http::{GnosisPayClient, GnosisPayError, Result};
use crate::types::{ChallengeRequest, ChallengeResponse, SignUpRequest, SignUpResponse};

use super::siwe::{parse_address, SiweMessage};
use super::{EvmWalletSigner, JwtManager, WalletSigner};

const NONCE_ENDPOINT: &str = "/api/v1/auth/nonce";
const CHALLENGE_ENDPOINT: &str = "/api/v1/auth/challenge";
const SIGNUP_ENDPOINT: &str = "/api/v1/auth/signup";

/// Manages the complete authentication flow
///
/// The session token is stored in the client's [`JwtManager`], so every
/// request made through the client (or its clones) picks it up.
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: GnosisPayClient,
}

impl AuthManager {
    pub fn new(client: GnosisPayClient) -> Self {
        Self { client }
    }

    /// The client whose session this manager maintains
    pub fn client(&self) -> &GnosisPayClient {
        &self.client
    }

    pub fn jwt_manager(&self) -> &JwtManager {
        self.client.jwt_manager()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    /// Drop the current session token
    pub fn logout(&self) {
        self.client.jwt_manager().clear();
        info!("session token cleared");
    }

    /// Step 1: Fetch a single-use nonce
    ///
    /// GET /api/v1/auth/nonce (plain-text body)
    pub async fn get_nonce(&self) -> Result<String> {
        let builder = self.client.request(Method::GET, NONCE_ENDPOINT)?;
        let body = self.client.send_text(builder).await?;

        let nonce = body.trim();
        if nonce.is_empty() {
            return Err(GnosisPayError::InvalidResponse(
                "nonce endpoint returned an empty body".to_string(),
            ));
        }
        Ok(nonce.to_string())
    }

    /// Step 2: Fetch a nonce and build the challenge for `address`
    pub async fn get_siwe_message(&self, address: Address) -> Result<SiweMessage> {
        let params = self.client.siwe_params();
        if params.domain.is_empty() || params.uri.is_empty() {
            return Err(GnosisPayError::Config(
                "SIWE application URI not set; configure it with with_siwe_params".to_string(),
            ));
        }

        let nonce = self.get_nonce().await?;
        debug!(%address, "building SIWE challenge");

        let message = SiweMessage::new(
            params.domain.as_str(),
            address,
            params.uri.as_str(),
            nonce,
            params.chain_id,
        )?;
        match &params.statement {
            Some(statement) => message.with_statement(statement.as_str()),
            None => Ok(message),
        }
    }

    /// Step 3: Exchange a signed challenge for a session token
    ///
    /// POST /api/v1/auth/challenge
    pub async fn get_auth_token(&self, message: &str, signature: &str) -> Result<String> {
        let body = ChallengeRequest {
            message: message.to_string(),
            signature: signature.to_string(),
        };

        let builder = self
            .client
            .request(Method::POST, CHALLENGE_ENDPOINT)?
            .json(&body);
        let response: ChallengeResponse = self.client.send_json(builder).await?;

        self.store_token(&response.token)?;
        Ok(response.token)
    }

    /// Complete authentication flow
    ///
    /// 1. Fetch nonce
    /// 2. Build SIWE challenge
    /// 3. Sign challenge with wallet
    /// 4. Exchange signature for a token
    /// 5. Store token
    ///
    /// Nothing is retried. A failed attempt must be restarted from step 1
    /// since nonces are single-use.
    pub async fn authenticate(&self, wallet: &dyn WalletSigner) -> Result<String> {
        let address = wallet.address();
        info!(%address, "authenticating");

        let message = self.get_siwe_message(address).await?.to_string();
        let signature = wallet.sign_message(&message).await?;
        let token = self.get_auth_token(&message, &signature).await?;

        info!(%address, "authenticated");
        Ok(token)
    }

    /// Authenticate using a private key, while verifying the address.
    ///
    /// The address check runs before any network call.
    pub async fn authenticate_with_private_key(
        &self,
        address: &str,
        private_key: &str,
    ) -> Result<String> {
        let wallet = EvmWalletSigner::new(private_key)?;
        verify_wallet_address(address, wallet.address())?;
        self.authenticate(&wallet).await
    }

    /// Register by email; stores the returned token
    ///
    /// POST /api/v1/auth/signup
    pub async fn sign_up(&self, email: &str) -> Result<SignUpResponse> {
        let email = email.trim();
        if email.is_empty() {
            return Err(GnosisPayError::Validation(
                "email cannot be empty".to_string(),
            ));
        }

        let body = SignUpRequest {
            auth_email: email.to_string(),
        };
        let builder = self.client.request(Method::POST, SIGNUP_ENDPOINT)?.json(&body);
        let response: SignUpResponse = self.client.send_json(builder).await?;

        self.store_token(&response.token)?;
        info!(user_id = %response.id, "signed up");
        Ok(response)
    }

    fn store_token(&self, token: &str) -> Result<()> {
        if token.trim().is_empty() {
            return Err(GnosisPayError::InvalidResponse(
                "server returned an empty session token".to_string(),
            ));
        }
        self.client.jwt_manager().set_token(token.to_string());
        Ok(())
    }
}

fn verify_wallet_address(expected: &str, derived: Address) -> Result<()> {
    let matches = parse_address(expected).is_ok_and(|expected| expected == derived);
    if matches {
        Ok(())
    } else {
        Err(GnosisPayError::Validation(format!(
            "Wallet address mismatch: provided {expected}, derived {derived}"
        )))
    }
}
