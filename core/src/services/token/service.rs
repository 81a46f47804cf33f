//! Token lifecycle service.

use std::sync::Arc;

use chrono::Duration;

use sf_shared::config::JwtConfig;

use crate::clock::Clock;
use crate::domain::entities::token::{
    Identity, SignedToken, TokenKind, TokenPair, VerificationOutcome,
};
use crate::errors::TokenError;

/// Issues access/refresh token pairs and verifies tokens.
///
/// Thin policy layer over [`super::TokenCodec`]: the codec knows how to
/// sign and check, this service fixes the TTL per token kind. The access
/// TTL is deliberately much shorter than the refresh TTL — a stolen access
/// token has a short blast radius, and the long-lived refresh token is
/// only ever read by the renewal path.
///
/// This is the single source of truth for verification; no other component
/// re-implements expiry logic.
pub struct TokenService {
    codec: super::TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Build the service from configuration.
    ///
    /// Fails only on signing-secret misconfiguration, which callers should
    /// treat as fatal at startup.
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        Ok(Self {
            codec: super::TokenCodec::new(&config.secret, clock)?,
            access_ttl: Duration::seconds(config.access_token_expiry),
            refresh_ttl: Duration::seconds(config.refresh_token_expiry),
        })
    }

    /// Mint a short-lived access token for `identity`.
    pub fn issue_access_token(&self, identity: &Identity) -> Result<SignedToken, TokenError> {
        self.codec.sign(identity, TokenKind::Access, self.access_ttl)
    }

    /// Mint a long-lived refresh token for `identity`.
    pub fn issue_refresh_token(&self, identity: &Identity) -> Result<SignedToken, TokenError> {
        self.codec.sign(identity, TokenKind::Refresh, self.refresh_ttl)
    }

    /// Mint the access/refresh pair handed out at login.
    pub fn issue_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        let access = self.issue_access_token(identity)?;
        let refresh = self.issue_refresh_token(identity)?;

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
            access_expires_in: self.access_ttl.num_seconds(),
            refresh_expires_in: self.refresh_ttl.num_seconds(),
        })
    }

    /// Verify any token issued by this service.
    ///
    /// Expiry is a normal outcome here, not an error; the three-way
    /// [`VerificationOutcome`] is what the request gate branches on.
    pub fn verify(&self, token: &str) -> VerificationOutcome {
        self.codec.verify(token)
    }

    /// Refresh-token lifetime in seconds, for cookie Max-Age.
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl.num_seconds()
    }
}
