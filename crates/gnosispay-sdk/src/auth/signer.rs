/*
[INPUT]:  Message bytes and secp256k1 private key
[OUTPUT]: 65-byte Ethereum signatures (r || s || v, v in {27, 28}) and hex rendering
[POS]:    Auth layer - EIP-191 personal-message signing primitives
[UPDATE]: When changing hashing convention or signature encoding
*/

use std::str::FromStr;

use alloy_primitives::{keccak256, Signature, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

use crate::http::{GnosisPayError, Result};

/// Length of an Ethereum `r || s || v` signature
pub const SIGNATURE_LENGTH: usize = 65;

const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// secp256k1 signs 32-byte digests only
const DIGEST_LENGTH: usize = 32;

/// Offset added to the raw recovery id to match Ethereum's `v` convention
const RECOVERY_ID_OFFSET: u8 = 27;

/// Parse a hex-encoded secp256k1 private key (with or without `0x`)
pub fn parse_private_key(private_key_hex: &str) -> Result<PrivateKeySigner> {
    let private_key_hex = private_key_hex.trim();
    let private_key_hex = private_key_hex
        .strip_prefix("0x")
        .or_else(|| private_key_hex.strip_prefix("0X"))
        .unwrap_or(private_key_hex);

    PrivateKeySigner::from_str(private_key_hex)
        .map_err(|e| GnosisPayError::Signing(format!("Invalid private key: {e}")))
}

/// EIP-191 personal-message hash:
/// `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`
pub fn hash_message(message: &[u8]) -> B256 {
    let prefix = format!("{PERSONAL_MESSAGE_PREFIX}{}", message.len());
    let mut payload = Vec::with_capacity(prefix.len() + message.len());
    payload.extend_from_slice(prefix.as_bytes());
    payload.extend_from_slice(message);
    keccak256(payload)
}

/// Sign UTF-8 text as an Ethereum personal message
pub fn sign_message(message: &str, key: &PrivateKeySigner) -> Result<[u8; SIGNATURE_LENGTH]> {
    sign_bytes(message.as_bytes(), key)
}

/// Sign arbitrary bytes as an Ethereum personal message
pub fn sign_bytes(message: &[u8], key: &PrivateKeySigner) -> Result<[u8; SIGNATURE_LENGTH]> {
    sign_digest(&hash_message(message), key)
}

/// Sign a caller-prepared 32-byte digest without the personal-message prefix
pub fn sign_raw_bytes(digest: &[u8], key: &PrivateKeySigner) -> Result<[u8; SIGNATURE_LENGTH]> {
    if digest.len() != DIGEST_LENGTH {
        return Err(GnosisPayError::Signing(format!(
            "raw digest must be {DIGEST_LENGTH} bytes, got {}",
            digest.len()
        )));
    }
    sign_digest(&B256::from_slice(digest), key)
}

/// Render a signature as `0x`-prefixed lowercase hex
pub fn signature_to_string(signature: &[u8]) -> String {
    format!("0x{}", hex::encode(signature))
}

fn sign_digest(digest: &B256, key: &PrivateKeySigner) -> Result<[u8; SIGNATURE_LENGTH]> {
    let signature = key
        .sign_hash_sync(digest)
        .map_err(|e| GnosisPayError::Signing(format!("Failed to sign digest: {e}")))?;
    Ok(encode_signature(&signature))
}

fn encode_signature(signature: &Signature) -> [u8; SIGNATURE_LENGTH] {
    let mut bytes = [0u8; SIGNATURE_LENGTH];
    bytes[..32].copy_from_slice(&signature.r().to_be_bytes::<32>());
    bytes[32..64].copy_from_slice(&signature.s().to_be_bytes::<32>());
    bytes[64] = signature.v() as u8 + RECOVERY_ID_OFFSET;
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::eip191_hash_message;

    // Well-known development key (anvil/hardhat account #0)
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn test_key() -> PrivateKeySigner {
        parse_private_key(TEST_PRIVATE_KEY).unwrap()
    }

    #[test]
    fn test_parse_private_key_with_and_without_prefix() {
        let with_prefix = parse_private_key(TEST_PRIVATE_KEY).unwrap();
        let without_prefix = parse_private_key(&TEST_PRIVATE_KEY[2..]).unwrap();

        assert_eq!(with_prefix.address(), without_prefix.address());
        assert_eq!(with_prefix.address().to_checksum(None), TEST_ADDRESS);
    }

    #[test]
    fn test_parse_invalid_private_key() {
        assert!(matches!(
            parse_private_key("0xnothex"),
            Err(GnosisPayError::Signing(_))
        ));
        assert!(matches!(
            parse_private_key(&"00".repeat(32)),
            Err(GnosisPayError::Signing(_))
        ));
    }

    #[test]
    fn test_hash_message_matches_eip191() {
        let message = b"hello world";
        assert_eq!(hash_message(message), eip191_hash_message(message));
        assert_eq!(hash_message(b""), eip191_hash_message(b""));
    }

    #[test]
    fn test_hash_prefix_uses_message_length() {
        // Length is the decimal byte count of the message, not of the hash.
        let message = "héllo";
        let mut expected = b"\x19Ethereum Signed Message:\n6".to_vec();
        expected.extend_from_slice(message.as_bytes());
        assert_eq!(hash_message(message.as_bytes()), keccak256(expected));
    }

    #[test]
    fn test_recovery_byte_normalized() {
        let key = test_key();
        for message in ["", "a", "hello", "sign in with ethereum"] {
            let signature = sign_message(message, &key).unwrap();
            assert!(matches!(signature[64], 27 | 28), "v = {}", signature[64]);
        }
    }

    #[test]
    fn test_signature_recovers_signer_address() {
        let key = test_key();
        let message = "example.com wants you to sign in";
        let signature = sign_message(message, &key).unwrap();

        let parsed = Signature::from_raw(&signature).unwrap();
        let recovered = parsed
            .recover_address_from_prehash(&hash_message(message.as_bytes()))
            .unwrap();
        assert_eq!(recovered, key.address());
    }

    #[test]
    fn test_matches_alloy_personal_sign() {
        let key = test_key();
        let message = b"personal message";
        let ours = sign_bytes(message, &key).unwrap();
        let theirs = key.sign_message_sync(message).unwrap();

        assert_eq!(ours, theirs.as_bytes());
    }

    #[test]
    fn test_raw_signing_differs_from_personal_signing() {
        let key = test_key();
        let payload = [7u8; 32];

        let raw = sign_raw_bytes(&payload, &key).unwrap();
        let personal = sign_bytes(&payload, &key).unwrap();

        assert_ne!(raw, personal);
        assert!(matches!(raw[64], 27 | 28));

        let recovered = Signature::from_raw(&raw)
            .unwrap()
            .recover_address_from_prehash(&B256::from(payload))
            .unwrap();
        assert_eq!(recovered, key.address());
    }

    #[test]
    fn test_raw_signing_rejects_non_digest_length() {
        let key = test_key();
        let err = sign_raw_bytes(b"too short", &key).unwrap_err();
        assert!(matches!(err, GnosisPayError::Signing(_)));
    }

    #[test]
    fn test_signature_to_string_round_trip() {
        let key = test_key();
        let signature = sign_message("round trip", &key).unwrap();
        let rendered = signature_to_string(&signature);

        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.len(), 2 + SIGNATURE_LENGTH * 2);
        assert_eq!(rendered, rendered.to_lowercase());

        let decoded = hex::decode(rendered.strip_prefix("0x").unwrap()).unwrap();
        assert_eq!(decoded, signature);
    }
}
