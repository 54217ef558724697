/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::EoaAccount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub id: String,
    pub token: String,
}

/// Error body returned with 4xx/5xx responses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

impl ApiErrorBody {
    /// True when the body carries at least one of the documented fields
    pub fn is_populated(&self) -> bool {
        self.message.is_some() || self.error.is_some() || self.code.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiGenericResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycImportPartnerApplicantResponse {
    pub token: String,
    #[serde(rename = "forClientId")]
    pub for_client_id: String,
}

/// `{"data": ...}` wrapper used by the IBAN and EOA endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EoaAccountsData {
    #[serde(rename = "eoaAccounts", default)]
    pub eoa_accounts: Vec<EoaAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_body_populated() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"bad nonce","error":"invalid","code":1}"#).unwrap();
        assert!(body.is_populated());
        assert_eq!(body.code, Some(1));

        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_populated());
    }
}
