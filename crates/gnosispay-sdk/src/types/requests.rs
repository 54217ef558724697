/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Signed SIWE challenge submitted for a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub message: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    #[serde(rename = "authEmail")]
    pub auth_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycPhoneVerification {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycPhoneVerificationCheck {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycImportPartnerApplicant {
    #[serde(rename = "forClientId")]
    pub for_client_id: String,
    #[serde(rename = "ttlInSecs")]
    pub ttl_in_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEoaRequest {
    pub address: String,
}

/// Optional filters for the card transactions listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_tokens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
}

impl TransactionFilters {
    /// Query pairs for every non-empty filter, in wire order
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("cardTokens", &self.card_tokens),
            ("before", &self.before),
            ("after", &self.after),
            ("billingCurrency", &self.billing_currency),
            ("transactionCurrency", &self.transaction_currency),
            ("mcc", &self.mcc),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|value| !value.is_empty())
                .map(|value| (key, value))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_wire_name() {
        let body = serde_json::to_value(SignUpRequest {
            auth_email: "alice@example.com".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"authEmail": "alice@example.com"}));
    }

    #[test]
    fn test_transaction_filters_skip_empty() {
        let filters = TransactionFilters {
            before: Some("2024-02-01".to_string()),
            mcc: Some(String::new()),
            billing_currency: Some("EUR".to_string()),
            ..Default::default()
        };

        assert_eq!(
            filters.query_pairs(),
            vec![("before", "2024-02-01"), ("billingCurrency", "EUR")]
        );
        assert!(TransactionFilters::default().query_pairs().is_empty());
    }
}
