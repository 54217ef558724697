/*
[INPUT]:  Server nonce and identity parameters (domain, address, URI, chain id)
[OUTPUT]: Canonical Sign-In with Ethereum (ERC-4361) challenge text
[POS]:    Auth layer - challenge construction
[UPDATE]: When the SIWE text layout or validation rules change
*/

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use crate::http::{GnosisPayError, Result};

const HEADER_SUFFIX: &str = " wants you to sign in with your Ethereum account:";
const SIWE_VERSION: &str = "1";

/// A Sign-In with Ethereum challenge.
///
/// The rendered text (via [`fmt::Display`]) is what gets signed, and the
/// server rebuilds the same bytes from its own copy of the fields. Field
/// order and timestamp precision are therefore fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiweMessage {
    pub domain: String,
    pub address: Address,
    pub statement: Option<String>,
    pub uri: String,
    pub version: String,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
    pub request_id: Option<String>,
    pub resources: Vec<String>,
}

impl SiweMessage {
    /// Create a challenge issued now, without statement or optional fields
    pub fn new(
        domain: impl Into<String>,
        address: Address,
        uri: impl Into<String>,
        nonce: impl Into<String>,
        chain_id: u64,
    ) -> Result<Self> {
        let domain = domain.into();
        let uri = uri.into();
        let nonce = nonce.into();

        if domain.trim().is_empty() {
            return Err(GnosisPayError::Validation(
                "SIWE domain cannot be empty".to_string(),
            ));
        }
        validate_nonce(&nonce)?;
        Url::parse(&uri).map_err(|e| {
            GnosisPayError::Validation(format!("SIWE URI must be absolute ({uri}): {e}"))
        })?;

        Ok(Self {
            domain,
            address,
            statement: None,
            uri,
            version: SIWE_VERSION.to_string(),
            chain_id,
            nonce,
            issued_at: Utc::now(),
            expiration_time: None,
            not_before: None,
            request_id: None,
            resources: Vec::new(),
        })
    }

    /// Attach a single-line human-readable statement
    pub fn with_statement(mut self, statement: impl Into<String>) -> Result<Self> {
        let statement = statement.into();
        if statement.contains(['\n', '\r']) {
            return Err(GnosisPayError::Validation(
                "SIWE statement must be a single line".to_string(),
            ));
        }
        self.statement = Some(statement);
        Ok(self)
    }

    pub fn with_issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = issued_at;
        self
    }

    pub fn with_expiration_time(mut self, expiration_time: DateTime<Utc>) -> Self {
        self.expiration_time = Some(expiration_time);
        self
    }

    pub fn with_not_before(mut self, not_before: DateTime<Utc>) -> Self {
        self.not_before = Some(not_before);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for SiweMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{HEADER_SUFFIX}", self.domain)?;
        writeln!(f, "{}", self.address.to_checksum(None))?;
        writeln!(f)?;
        if let Some(statement) = &self.statement {
            writeln!(f, "{statement}")?;
        }
        writeln!(f)?;

        writeln!(f, "URI: {}", self.uri)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Chain ID: {}", self.chain_id)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        write!(f, "Issued At: {}", format_timestamp(&self.issued_at))?;

        if let Some(expiration_time) = &self.expiration_time {
            write!(f, "\nExpiration Time: {}", format_timestamp(expiration_time))?;
        }
        if let Some(not_before) = &self.not_before {
            write!(f, "\nNot Before: {}", format_timestamp(not_before))?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, "\nRequest ID: {request_id}")?;
        }
        if !self.resources.is_empty() {
            write!(f, "\nResources:")?;
            for resource in &self.resources {
                write!(f, "\n- {resource}")?;
            }
        }
        Ok(())
    }
}

/// Build a challenge issued now for the given identity and nonce
pub fn build_challenge(
    domain: &str,
    address: &str,
    uri: &str,
    nonce: &str,
    chain_id: u64,
) -> Result<SiweMessage> {
    SiweMessage::new(domain, parse_address(address)?, uri, nonce, chain_id)
}

/// Parse a hex Ethereum address; checksum casing is not enforced
pub fn parse_address(address: &str) -> Result<Address> {
    Address::from_str(address.trim())
        .map_err(|e| GnosisPayError::Validation(format!("Invalid Ethereum address {address}: {e}")))
}

fn validate_nonce(nonce: &str) -> Result<()> {
    if nonce.is_empty() {
        return Err(GnosisPayError::Validation(
            "SIWE nonce cannot be empty".to_string(),
        ));
    }
    if nonce.chars().any(char::is_whitespace) {
        return Err(GnosisPayError::Validation(
            "SIWE nonce must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    fn base_message() -> SiweMessage {
        build_challenge("example.com", ADDRESS, "https://example.com/login", "abc123", 100)
            .unwrap()
            .with_issued_at(fixed_time())
    }

    #[test]
    fn test_render_without_statement() {
        let expected = "example.com wants you to sign in with your Ethereum account:\n\
                        0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n\
                        \n\
                        \n\
                        URI: https://example.com/login\n\
                        Version: 1\n\
                        Chain ID: 100\n\
                        Nonce: abc123\n\
                        Issued At: 2024-05-01T12:30:00Z";
        assert_eq!(base_message().to_string(), expected);
    }

    #[test]
    fn test_render_with_statement() {
        let message = base_message()
            .with_statement("Sign in to Gnosis Pay")
            .unwrap();

        let expected = "example.com wants you to sign in with your Ethereum account:\n\
                        0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n\
                        \n\
                        Sign in to Gnosis Pay\n\
                        \n\
                        URI: https://example.com/login\n\
                        Version: 1\n\
                        Chain ID: 100\n\
                        Nonce: abc123\n\
                        Issued At: 2024-05-01T12:30:00Z";
        assert_eq!(message.to_string(), expected);
    }

    #[test]
    fn test_render_optional_fields_in_order() {
        let message = base_message()
            .with_expiration_time(fixed_time() + chrono::Duration::minutes(10))
            .with_not_before(fixed_time())
            .with_request_id("req-7")
            .with_resources(["ipfs://bafy", "https://example.com/terms"]);

        let rendered = message.to_string();
        assert!(rendered.ends_with(
            "Issued At: 2024-05-01T12:30:00Z\n\
             Expiration Time: 2024-05-01T12:40:00Z\n\
             Not Before: 2024-05-01T12:30:00Z\n\
             Request ID: req-7\n\
             Resources:\n\
             - ipfs://bafy\n\
             - https://example.com/terms"
        ));
    }

    #[test]
    fn test_address_rendered_checksummed() {
        let message = build_challenge(
            "example.com",
            &ADDRESS.to_lowercase(),
            "https://example.com",
            "abc123",
            100,
        )
        .unwrap();
        assert!(message.to_string().contains(ADDRESS));
    }

    #[test]
    fn test_issued_at_drops_subseconds() {
        let with_millis = fixed_time() + chrono::Duration::milliseconds(789);
        let rendered = base_message().with_issued_at(with_millis).to_string();
        assert!(rendered.ends_with("Issued At: 2024-05-01T12:30:00Z"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(base_message().to_string(), base_message().to_string());
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let uri = "https://example.com";
        let cases = [
            build_challenge("", ADDRESS, uri, "abc123", 100),
            build_challenge("example.com", ADDRESS, uri, "", 100),
            build_challenge("example.com", ADDRESS, uri, "abc 123", 100),
            build_challenge("example.com", ADDRESS, "/relative/path", "abc123", 100),
            build_challenge("example.com", "0x1234", uri, "abc123", 100),
        ];
        for result in cases {
            assert!(matches!(result, Err(GnosisPayError::Validation(_))));
        }
    }

    #[test]
    fn test_rejects_multiline_statement() {
        let err = base_message().with_statement("line one\nline two").unwrap_err();
        assert!(matches!(err, GnosisPayError::Validation(_)));

        let err = base_message().with_statement("line one\rline two").unwrap_err();
        assert!(matches!(err, GnosisPayError::Validation(_)));
    }
}
