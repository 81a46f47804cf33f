//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// The identity a token vouches for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account id
    pub user_id: Uuid,

    /// Login email at issuance time
    pub email: String,

    /// Role at issuance time
    pub role: UserRole,
}

/// The two token kinds the scheme issues.
///
/// Baked into the claims so the gate can refuse a long-lived refresh
/// token presented where an access token belongs, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Login email
    pub email: String,

    /// Role granted to the subject
    pub role: UserRole,

    /// Which kind of token these claims were signed into
    pub kind: TokenKind,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for the given identity, expiring `ttl` after `now`
    pub fn new(identity: &Identity, kind: TokenKind, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: identity.user_id.to_string(),
            email: identity.email.clone(),
            role: identity.role,
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Recovers the identity embedded in the claims
    ///
    /// Fails only when the subject is not a UUID, which can't happen for
    /// tokens this system signed; callers treat it as an invalid token.
    pub fn identity(&self) -> Result<Identity, uuid::Error> {
        Ok(Identity {
            user_id: Uuid::parse_str(&self.sub)?,
            email: self.email.clone(),
            role: self.role,
        })
    }
}

/// A signed token string together with the claims baked into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    /// The encoded, signed token
    pub token: String,

    /// The claims that were signed
    pub claims: Claims,
}

/// Result of verifying a token.
///
/// A deliberate three-way split rather than a boolean: `Expired` triggers
/// the renewal path and still carries the claims the renewal needs, while
/// `Invalid` (bad signature, garbage input) is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Good signature, not yet expired
    Valid(Claims),
    /// Good signature, past expiry; claims remain readable
    Expired(Claims),
    /// Signature mismatch or structurally invalid token
    Invalid,
}

impl VerificationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Access/refresh token pair returned on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived JWT authorizing individual requests
    pub access_token: String,

    /// Long-lived JWT used solely to mint new access tokens
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}
