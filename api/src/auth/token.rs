//! # Bearer tokens
//!
//! Stateless HS256 JWTs carrying `{sub: owner id, iat, exp}`. Verification
//! trusts the signature alone — no database lookup, no server-side session
//! row, no revocation. The signing secret is process-wide state loaded once
//! at startup from configuration; it is never embedded in source.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed token lifetime. There is no refresh endpoint; clients log in again.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owner id, as a UUID string.
    pub sub: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// Signing and verification keys derived from the process-wide secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenKeys([redacted])")
    }
}

/// Why a token was rejected. `Expired` is distinguished from every other
/// failure (tampered signature, garbage payload, non-UUID subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Issue a token for `user_id`, expiring [`TOKEN_TTL_DAYS`] from now.
pub fn issue(keys: &TokenKeys, user_id: Uuid) -> Result<String, TokenError> {
    issue_at(keys, user_id, Utc::now())
}

/// Deterministic form of [`issue`]: the issuance instant is a parameter.
pub fn issue_at(
    keys: &TokenKeys,
    user_id: Uuid,
    issued_at: DateTime<Utc>,
) -> Result<String, TokenError> {
    let iat = issued_at.timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp: iat + Duration::days(TOKEN_TTL_DAYS).num_seconds(),
    };
    encode(&Header::default(), &claims, &keys.encoding).map_err(|_| TokenError::Invalid)
}

/// Verify a token and return the owner id it was issued to.
pub fn verify(keys: &TokenKeys, token: &str) -> Result<Uuid, TokenError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &keys.decoding, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    })?;
    Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"unit-test-secret")
    }

    #[test]
    fn issue_then_verify_resolves_the_same_owner() {
        let keys = keys();
        let owner = Uuid::new_v4();
        let token = issue(&keys, owner).unwrap();
        assert_eq!(verify(&keys, &token).unwrap(), owner);
    }

    #[test]
    fn expired_token_is_distinct_from_tampered() {
        let keys = keys();
        let owner = Uuid::new_v4();

        let stale = issue_at(&keys, owner, Utc::now() - Duration::days(TOKEN_TTL_DAYS + 1)).unwrap();
        assert_eq!(verify(&keys, &stale), Err(TokenError::Expired));

        let other_keys = TokenKeys::new(b"a-different-secret");
        let forged = issue(&other_keys, owner).unwrap();
        assert_eq!(verify(&keys, &forged), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(verify(&keys(), "not.a.token"), Err(TokenError::Invalid));
        assert_eq!(verify(&keys(), ""), Err(TokenError::Invalid));
    }

    #[test]
    fn token_is_valid_for_seven_days() {
        let keys = keys();
        let owner = Uuid::new_v4();
        // Minted six days ago: still inside the window.
        let token = issue_at(&keys, owner, Utc::now() - Duration::days(TOKEN_TTL_DAYS - 1)).unwrap();
        assert_eq!(verify(&keys, &token).unwrap(), owner);
    }
}
