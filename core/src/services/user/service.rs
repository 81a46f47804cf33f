//! User service: registration, login, profile management.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::hasher::PasswordHasher;

/// Fields a user may change on their own profile.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Account registration and authentication.
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: Arc<U>, hasher: Arc<dyn PasswordHasher>, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new account.
    ///
    /// The email must be unused; the plain password is hashed before it
    /// ever reaches the repository.
    pub async fn register(&self, email: &str, password: &str, role: UserRole) -> DomainResult<User> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::bad_request("user already exists"));
        }

        let digest = self.hasher.hash(password)?;
        let user = self.users.create(User::new(email, digest, role)).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate and mint the access/refresh token pair.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<(User, TokenPair)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound { resource: "user" })?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(DomainError::bad_request("password does not match"));
        }

        let pair = self.tokens.issue_pair(&user.identity())?;
        Ok((user, pair))
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { resource: "user" })
    }

    /// Apply a profile patch.
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> DomainResult<User> {
        let mut user = self.get_user(id).await?;

        if let Some(email) = patch.email {
            if email != user.email && self.users.find_by_email(&email).await?.is_some() {
                return Err(DomainError::bad_request("email already in use"));
            }
            user.set_email(email);
        }
        if let Some(password) = patch.password {
            user.set_password_hash(self.hasher.hash(&password)?);
        }

        Ok(self.users.update(user).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use sf_shared::config::JwtConfig;

    use crate::clock::{Clock, ManualClock};
    use crate::repositories::MockUserRepository;
    use crate::services::user::PlainTextHasher;

    use super::*;

    fn service() -> UserService<MockUserRepository> {
        let clock = Arc::new(ManualClock::starting_at(Utc::now()));
        let tokens =
            Arc::new(TokenService::new(&JwtConfig::new("test-secret"), clock as Arc<dyn Clock>).unwrap());
        UserService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(PlainTextHasher),
            tokens,
        )
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let service = service();
        service
            .register("jane@example.com", "pw", UserRole::User)
            .await
            .unwrap();

        let result = service.register("jane@example.com", "pw2", UserRole::User).await;

        assert!(matches!(result, Err(DomainError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_register_stores_digest_not_password() {
        let service = service();
        let user = service
            .register("jane@example.com", "hunter2", UserRole::User)
            .await
            .unwrap();

        // PlainTextHasher keeps the digest readable for the assertion.
        assert_eq!(user.password_hash, "hunter2");
    }

    #[tokio::test]
    async fn test_login_issues_token_pair() {
        let service = service();
        service
            .register("jane@example.com", "hunter2", UserRole::User)
            .await
            .unwrap();

        let (user, pair) = service.login("jane@example.com", "hunter2").await.unwrap();

        assert_eq!(user.email, "jane@example.com");
        assert!(!pair.access_token.is_empty());
        assert!(pair.access_expires_in < pair.refresh_expires_in);
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_not_found() {
        let service = service();
        let result = service.login("ghost@example.com", "pw").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_bad_request() {
        let service = service();
        service
            .register("jane@example.com", "hunter2", UserRole::User)
            .await
            .unwrap();

        let result = service.login("jane@example.com", "wrong").await;

        assert!(matches!(result, Err(DomainError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_update_user_rehashes_password() {
        let service = service();
        let user = service
            .register("jane@example.com", "old", UserRole::User)
            .await
            .unwrap();

        let updated = service
            .update_user(
                user.id,
                UserPatch {
                    email: None,
                    password: Some("new".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.password_hash, "new");
    }

    #[tokio::test]
    async fn test_update_user_rejects_taken_email() {
        let service = service();
        service
            .register("taken@example.com", "pw", UserRole::User)
            .await
            .unwrap();
        let user = service
            .register("jane@example.com", "pw", UserRole::User)
            .await
            .unwrap();

        let result = service
            .update_user(
                user.id,
                UserPatch {
                    email: Some("taken@example.com".to_string()),
                    password: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::BadRequest { .. })));
    }
}
