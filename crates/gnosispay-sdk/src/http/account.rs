/*
[INPUT]:  Session token and EOA identifiers
[OUTPUT]: Safe balances, Safe configuration, delayed transactions and sign-in EOAs
[POS]:    HTTP layer - account endpoints (require session token)
[UPDATE]: When account management endpoints change
*/

// ### Account Endpoints

use reqwest::Method;

use crate::auth::parse_address;
use crate::http::client::path_segment;
use crate::http::{GnosisPayClient, Result};
use crate::types::{
    AccountBalances, CreateEoaRequest, DataEnvelope, DelayTransaction, EoaAccount,
    EoaAccountsData, SafeConfig,
};

impl GnosisPayClient {
    /// GET /api/v1/account-balances
    pub async fn get_account_balances(&self) -> Result<AccountBalances> {
        let builder = self.request(Method::GET, "/api/v1/account-balances")?;
        self.send_json(builder).await
    }

    /// GET /api/v1/safe-config
    pub async fn get_safe_config(&self) -> Result<SafeConfig> {
        let builder = self.request(Method::GET, "/api/v1/safe-config")?;
        self.send_json(builder).await
    }

    /// Transactions queued in the Safe's delay module
    ///
    /// GET /api/v1/delay-relay
    pub async fn list_delayed_transactions(&self) -> Result<Vec<DelayTransaction>> {
        let builder = self.request(Method::GET, "/api/v1/delay-relay")?;
        self.send_json(builder).await
    }

    /// EOAs allowed to sign in to this account
    ///
    /// GET /api/v1/eoa-accounts
    pub async fn list_eoa_accounts(&self) -> Result<Vec<EoaAccount>> {
        let builder = self.request(Method::GET, "/api/v1/eoa-accounts")?;
        let envelope: DataEnvelope<EoaAccountsData> = self.send_json(builder).await?;
        Ok(envelope.data.eoa_accounts)
    }

    /// POST /api/v1/eoa-accounts
    pub async fn create_eoa_account(&self, address: &str) -> Result<EoaAccount> {
        let address = parse_address(address)?;
        let body = CreateEoaRequest {
            address: address.to_checksum(None),
        };

        let builder = self.request(Method::POST, "/api/v1/eoa-accounts")?.json(&body);
        self.send_json(builder).await
    }

    /// DELETE /api/v1/eoa-accounts/{eoa_id}
    pub async fn delete_eoa_account(&self, eoa_id: &str) -> Result<()> {
        let eoa_id = path_segment("EOA account id", eoa_id)?;

        let builder =
            self.request_segments(Method::DELETE, &["api", "v1", "eoa-accounts", eoa_id])?;
        self.send_empty(builder).await
    }
}
