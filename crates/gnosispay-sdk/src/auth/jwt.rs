/*
[INPUT]:  Session tokens (JWT) issued by the API
[OUTPUT]: Token retrieval and point-in-time liveness status
[POS]:    Auth layer - session token store and expiry inspection
[UPDATE]: When changing storage strategy or claim inspection rules
*/

use std::sync::{Arc, PoisonError, RwLock};

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::http::{GnosisPayError, Result};

/// Session token slot shared by a client and its auth manager.
///
/// Holds at most one token; a newer token overwrites the older one
/// (last write wins).
#[derive(Debug, Clone, Default)]
pub struct JwtManager {
    token: Arc<RwLock<Option<String>>>,
}

impl JwtManager {
    /// Create a new empty JWT manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new token, replacing any previous one
    pub fn set_token(&self, token: String) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token);
    }

    /// Get the current token if a non-empty one is held
    pub fn get_token(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().filter(|token| !token.is_empty()).cloned()
    }

    /// Clear the stored token
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Expiry of the held token, if it has a readable `exp` claim
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.get_token()
            .and_then(|token| token_expiry(&token).ok())
    }

    /// Whether a token is held and its `exp` claim lies in the future.
    ///
    /// The claims are read without checking the token signature. This only
    /// tells whether the client itself considers the token stale; it is not
    /// an authorization check. Missing, malformed or expiry-less tokens count
    /// as not authenticated.
    pub fn is_authenticated(&self) -> bool {
        match self.get_token() {
            Some(token) => is_token_live(&token, Utc::now()),
            None => false,
        }
    }

    /// Inverse of [`JwtManager::is_authenticated`]
    pub fn is_expired(&self) -> bool {
        !self.is_authenticated()
    }
}

/// True when `token`'s expiry is strictly after `now`
pub fn is_token_live(token: &str, now: DateTime<Utc>) -> bool {
    token_expiry(token).is_ok_and(|expires_at| expires_at > now)
}

/// Read the `exp` claim of a JWT without verifying its signature
pub fn token_expiry(token: &str) -> Result<DateTime<Utc>> {
    let claims = decode_unverified_claims(token)?;
    let exp = claims
        .get("exp")
        .ok_or_else(|| invalid_token("no expiration claim found"))?;

    let seconds = match (exp.as_i64(), exp.as_f64()) {
        (Some(seconds), _) => seconds,
        (None, Some(seconds)) if seconds.is_finite() => seconds.trunc() as i64,
        _ => return Err(invalid_token("expiration claim is not a number")),
    };

    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| invalid_token("expiration claim out of range"))
}

fn decode_unverified_claims(token: &str) -> Result<serde_json::Map<String, Value>> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(invalid_token("token contains an invalid number of segments"));
    }

    // Header must be a JSON object even though its algorithm is never used.
    decode_segment(segments[0], "header")?;
    decode_segment(segments[1], "claims")
}

fn decode_segment(segment: &str, name: &str) -> Result<serde_json::Map<String, Value>> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .map_err(|e| invalid_token(&format!("invalid {name} base64: {e}")))?;

    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_token(&format!("{name} is not a JSON object"))),
    }
}

fn invalid_token(reason: &str) -> GnosisPayError {
    GnosisPayError::InvalidResponse(format!("invalid session token: {reason}"))
}
