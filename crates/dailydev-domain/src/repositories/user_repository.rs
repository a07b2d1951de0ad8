//! User Repository Interface

use crate::entities::{NewUser, User};
use crate::error::Result;
use crate::value_objects::EmailAddress;
use async_trait::async_trait;

/// Repository: User Accounts
///
/// # Example
///
/// ```ignore
/// use dailydev_domain::repositories::UserRepository;
///
/// let user = repo.insert(new_user).await?;
/// let same = repo.find_by_id(&user.id).await?;
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned id
    ///
    /// Fails with `Error::Conflict` when the email is already registered.
    async fn insert(&self, user: NewUser) -> Result<User>;

    /// Look up a user by canonical email
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    /// Look up a user by id
    ///
    /// Ids that are not valid for the store resolve to `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;
}
