//! Bearer token verification.
//!
//! Tokens are HS256-signed by the managed auth backend and carry the signed-in user's email.
//! Verifying a token only proves who the caller is; whether they may act as a league owner
//! is decided by the owner service.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::server::error::auth::AuthError;

/// Claims read from a verified bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct BearerClaims {
    /// Email of the signed-in user
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Verifies bearer tokens against the shared HS256 secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens are issued for the whole site rather than a specific audience
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies the signature and expiry of `token` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(BearerClaims)` - Token is valid
    /// - `Err(AuthError::InvalidCredential)` - Bad signature, expired, or missing claims
    pub fn verify(&self, token: &str) -> Result<BearerClaims, AuthError> {
        let data = decode::<BearerClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use almanac_test_utils::prelude::*;

    use super::{extract_bearer, TokenVerifier};
    use crate::server::error::auth::AuthError;

    /// Expect the email claim of a valid token
    #[test]
    fn verifies_valid_token() -> Result<(), TestError> {
        let token = issue_test_token("coach@example.com")?;

        let verifier = TokenVerifier::new(TEST_JWT_SECRET);
        let claims = verifier.verify(&token);

        assert!(matches!(claims, Ok(c) if c.email == "coach@example.com"));

        Ok(())
    }

    /// Expect InvalidCredential for an expired token
    #[test]
    fn rejects_expired_token() -> Result<(), TestError> {
        let token = issue_expired_test_token("coach@example.com")?;

        let verifier = TokenVerifier::new(TEST_JWT_SECRET);
        let result = verifier.verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));

        Ok(())
    }

    /// Expect InvalidCredential for a token signed with another secret
    #[test]
    fn rejects_token_with_wrong_secret() -> Result<(), TestError> {
        let token = issue_test_token("coach@example.com")?;

        let verifier = TokenVerifier::new("a-completely-different-secret-value-0000");
        let result = verifier.verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));

        Ok(())
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_bearer("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Basic abc"), None);
    }
}
