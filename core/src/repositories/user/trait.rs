//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::RepositoryError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// Returns `RepositoryError::Duplicate` when the email is already taken.
    async fn create(&self, user: User) -> Result<User, RepositoryError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Find a user by login email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Replace a stored user
    ///
    /// Returns `RepositoryError::NotFound` when no user with the same id
    /// exists.
    async fn update(&self, user: User) -> Result<User, RepositoryError>;
}
