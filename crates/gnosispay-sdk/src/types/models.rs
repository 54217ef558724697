/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust model structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::KycStatus;

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub sign_in_wallets: Vec<EoaAccount>,
    #[serde(default)]
    pub safe_wallets: Vec<SafeAccount>,
    #[serde(default)]
    pub kyc_status: Option<KycStatus>,
    #[serde(default)]
    pub available_features: Option<UserAvailableFeatures>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub banking_details: Option<BankingDetails>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAvailableFeatures {
    #[serde(default)]
    pub monerium_iban: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReferrals {
    #[serde(default)]
    pub is_og_token_holder: bool,
    pub pending_referrals: i32,
    pub completed_referrals: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReferralCode {
    pub user_id: String,
    pub referrer_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub last_four_digits: String,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStatus {
    #[serde(default)]
    pub activated_at: Option<String>,
    /// Numeric card state; the API may send it as `1000` or `1000.0`
    pub status_code: f64,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub is_stolen: bool,
    #[serde(default)]
    pub is_lost: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub is_void: bool,
}

impl CardStatus {
    /// A card can be used for payments only when none of the blocking flags is set
    pub fn is_usable(&self) -> bool {
        !(self.is_frozen || self.is_stolen || self.is_lost || self.is_blocked || self.is_void)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub numeric: Option<String>,
    #[serde(default)]
    pub alpha2: Option<String>,
    #[serde(default)]
    pub alpha3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub decimals: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// On-chain transaction attached to a card event
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// A card payment, refund or reversal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEvent {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cleared_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub is_pending: bool,
    #[serde(default)]
    pub mcc: Option<String>,
    #[serde(default)]
    pub merchant: Option<Merchant>,
    #[serde(default)]
    pub billing_amount: Option<String>,
    #[serde(default)]
    pub billing_currency: Option<Currency>,
    #[serde(default)]
    pub transaction_amount: Option<String>,
    #[serde(default)]
    pub transaction_currency: Option<Currency>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Externally owned account allowed to sign in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EoaAccount {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAccount {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub salt: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub monerium_iban: Option<String>,
    #[serde(default)]
    pub monerium_bic: Option<String>,
    #[serde(default)]
    pub monerium_iban_status: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanDetails {
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub bic: Option<String>,
    #[serde(default)]
    pub iban_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IbanCounterpartDetails {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IbanCounterpartIdentifier {
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IbanOrderCounterpart {
    #[serde(default)]
    pub details: IbanCounterpartDetails,
    #[serde(default)]
    pub identifier: IbanCounterpartIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanOrderMetadata {
    pub placed_at: String,
}

/// A Monerium IBAN transfer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IbanOrder {
    pub id: String,
    pub kind: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub address: String,
    #[serde(default)]
    pub counterpart: Option<IbanOrderCounterpart>,
    #[serde(default)]
    pub memo: Option<String>,
    pub state: String,
    #[serde(default)]
    pub meta: Option<IbanOrderMetadata>,
}

/// Safe account balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalances {
    /// Spendable plus pending
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub spendable: Decimal,
    /// Amount under review before it becomes spendable
    #[serde(with = "rust_decimal::serde::str")]
    pub pending: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycIntegration {
    #[serde(rename = "type")]
    pub kind: String,
    /// URL to open to continue the KYC flow
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycQuestion {
    pub question: String,
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayTransaction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub safe_address: Option<String>,
    #[serde(default)]
    pub transaction_data: Option<String>,
    #[serde(default)]
    pub enqueue_task_id: Option<String>,
    #[serde(default)]
    pub dispatch_task_id: Option<String>,
    #[serde(default)]
    pub ready_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub operation_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeConfig {
    #[serde(default)]
    pub has_no_approvals: bool,
    #[serde(default)]
    pub is_deployed: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub fiat_symbol: Option<String>,
}
