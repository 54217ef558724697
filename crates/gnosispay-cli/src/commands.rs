/*
[INPUT]:  Parsed subcommand and resolved configuration
[OUTPUT]: JSON documents describing API resources or session state
[POS]:    Command layer - maps subcommands onto SDK calls
[UPDATE]: When adding subcommands or changing session reuse rules
*/

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use gnosispay_sdk::{AuthManager, ClientConfig, GnosisPayClient, TransactionFilters};

use crate::config::CliConfig;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in with the configured wallet and print the session token
    Login,
    /// Register by email and print the new user id and token
    Signup {
        #[arg(long)]
        email: String,
    },
    /// Show whether the configured session token is still live
    Status,
    #[command(flatten)]
    Resource(ResourceCommand),
}

/// Commands that read an API resource and need a live session
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ResourceCommand {
    /// Print the user profile
    User,
    /// List cards
    Cards,
    /// Print the status of one card
    CardStatus {
        #[arg(long)]
        id: String,
    },
    /// List card transactions
    Transactions(TransactionArgs),
    /// Print Safe balances
    Balances,
    /// Print the Safe configuration
    SafeConfig,
    /// Print IBAN details and orders
    Iban,
    /// Print the KYC integration link
    Kyc,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionArgs {
    /// Comma-separated card tokens
    #[arg(long)]
    pub card_tokens: Option<String>,
    #[arg(long)]
    pub before: Option<String>,
    #[arg(long)]
    pub after: Option<String>,
    #[arg(long)]
    pub billing_currency: Option<String>,
    #[arg(long)]
    pub transaction_currency: Option<String>,
    #[arg(long)]
    pub mcc: Option<String>,
}

impl From<TransactionArgs> for TransactionFilters {
    fn from(args: TransactionArgs) -> Self {
        Self {
            card_tokens: args.card_tokens,
            before: args.before,
            after: args.after,
            billing_currency: args.billing_currency,
            transaction_currency: args.transaction_currency,
            mcc: args.mcc,
        }
    }
}

/// Build an SDK client from configuration
pub fn build_client(config: &CliConfig) -> Result<GnosisPayClient> {
    let client = match &config.base_url {
        Some(base_url) => GnosisPayClient::with_config_and_base_url(ClientConfig::default(), base_url),
        None => GnosisPayClient::with_config(ClientConfig::default()),
    }
    .context("create API client")?;

    let mut client = client
        .with_siwe_params(&config.app_uri)
        .context("configure SIWE application URI")?;
    if let Some(chain_id) = config.chain_id {
        client = client.with_chain_id(chain_id);
    }
    if let Some(statement) = &config.statement {
        client = client.with_statement(statement.as_str());
    }
    if let Some(token) = &config.auth_token {
        client = client.with_auth_token(token.as_str());
    }
    Ok(client)
}

/// Reuse a live session token, otherwise sign in with the configured key
pub async fn ensure_session(auth: &AuthManager, config: &CliConfig) -> Result<()> {
    if auth.is_authenticated() {
        debug!("reusing live session token");
        return Ok(());
    }
    if config.auth_token.is_some() {
        warn!("configured session token is expired or unreadable; signing in again");
    }
    sign_in(auth, config).await.map(|_| ())
}

async fn sign_in(auth: &AuthManager, config: &CliConfig) -> Result<String> {
    let (address, private_key) = config.credentials()?;
    let token = auth
        .authenticate_with_private_key(address, private_key)
        .await
        .context("sign in with wallet")?;
    info!(address, "signed in");
    Ok(token)
}

/// Run one command and return its printable result
pub async fn execute(command: Command, config: &CliConfig) -> Result<Value> {
    let auth = AuthManager::new(build_client(config)?);

    match command {
        Command::Login => {
            let token = sign_in(&auth, config).await?;
            Ok(json!({
                "token": token,
                "expiresAt": auth.jwt_manager().expires_at(),
            }))
        }
        Command::Signup { email } => {
            let response = auth.sign_up(&email).await.context("sign up")?;
            Ok(serde_json::to_value(response)?)
        }
        Command::Status => Ok(json!({
            "authenticated": auth.is_authenticated(),
            "expiresAt": auth.jwt_manager().expires_at(),
        })),
        Command::Resource(resource) => {
            ensure_session(&auth, config).await?;
            fetch_resource(auth.client(), resource).await
        }
    }
}

async fn fetch_resource(client: &GnosisPayClient, command: ResourceCommand) -> Result<Value> {
    let value = match command {
        ResourceCommand::User => {
            serde_json::to_value(client.get_user().await.context("get user")?)?
        }
        ResourceCommand::Cards => {
            serde_json::to_value(client.list_cards().await.context("list cards")?)?
        }
        ResourceCommand::CardStatus { id } => serde_json::to_value(
            client
                .get_card_status(&id)
                .await
                .with_context(|| format!("get status of card {id}"))?,
        )?,
        ResourceCommand::Transactions(args) => {
            let filters = TransactionFilters::from(args);
            serde_json::to_value(
                client
                    .list_transactions(&filters)
                    .await
                    .context("list transactions")?,
            )?
        }
        ResourceCommand::Balances => serde_json::to_value(
            client
                .get_account_balances()
                .await
                .context("get account balances")?,
        )?,
        ResourceCommand::SafeConfig => {
            serde_json::to_value(client.get_safe_config().await.context("get safe config")?)?
        }
        ResourceCommand::Iban => {
            let details = client.get_iban_details().await.context("get IBAN details")?;
            let orders = client.list_iban_orders().await.context("list IBAN orders")?;
            json!({ "details": details, "orders": orders })
        }
        ResourceCommand::Kyc => serde_json::to_value(
            client
                .get_kyc_integration()
                .await
                .context("get KYC integration")?,
        )?,
    };
    Ok(value)
}
