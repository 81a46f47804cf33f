//! Signed, expiring token codec.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::clock::Clock;
use crate::domain::entities::token::{
    Claims, Identity, SignedToken, TokenKind, VerificationOutcome,
};
use crate::errors::TokenError;

/// Encodes and decodes signed, expiring tokens (HS256).
///
/// Stateless and side-effect free; safe to share across threads. Expiry is
/// judged against the injected [`Clock`], not jsonwebtoken's wall-clock
/// check — signature validation runs with `validate_exp` off so that an
/// expired token still yields its claims for the renewal path.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Build a codec over the process-wide signing secret.
    ///
    /// An empty secret is fatal misconfiguration, reported once at
    /// construction and never retried.
    pub fn new(secret: &str, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        })
    }

    /// Sign claims for `identity` expiring `ttl` from now.
    pub fn sign(
        &self,
        identity: &Identity,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<SignedToken, TokenError> {
        let claims = Claims::new(identity, kind, self.clock.now(), ttl);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(SignedToken { token, claims })
    }

    /// Recompute the signature and check expiry.
    ///
    /// Total function: malformed input and signature mismatches come back
    /// as [`VerificationOutcome::Invalid`], never as an error.
    pub fn verify(&self, token: &str) -> VerificationOutcome {
        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(_) => return VerificationOutcome::Invalid,
        };

        if self.clock.now().timestamp() >= claims.exp {
            VerificationOutcome::Expired(claims)
        } else {
            VerificationOutcome::Valid(claims)
        }
    }
}
