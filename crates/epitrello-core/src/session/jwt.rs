//! JWT Payload Decoding
//!
//! Reads the claims of a token for display only. The signature is not checked;
//! `/me` remains the authoritative verification.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JwtError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
}

/// Claims issued by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    pub user_id: i64,
    #[serde(default)]
    pub email: Option<String>,
    /// Expiry as a unix timestamp in seconds
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }
}

/// Decode the payload segment of `token`
pub fn decode_claims(token: &str) -> Result<TokenClaims, JwtError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| JwtError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| JwtError::Payload(e.to_string()))
}
