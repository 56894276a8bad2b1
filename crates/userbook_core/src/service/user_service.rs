//! User use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for registering and managing users.
//! - Delegate persistence to an injected repository.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Log lines carry ids and counts only, never field contents.

use crate::model::user::{StoredUser, User, UserId};
use crate::repo::user_repo::{RepoResult, UserListQuery, UserRepository};
use log::{debug, warn};

/// Use-case service wrapper for user operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds a user from raw field values and persists it.
    ///
    /// # Contract
    /// - Values are stored verbatim.
    /// - Length violations surface as `RepoError::Validation`.
    pub fn register_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> RepoResult<UserId> {
        self.create_user(&User::new(name, email, address))
    }

    pub fn create_user(&self, user: &User) -> RepoResult<UserId> {
        let result = self.repo.create_user(user);
        log_outcome("user_create", result.as_ref().ok().copied(), result)
    }

    /// Replaces all fields of an existing user.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_user(&self, id: UserId, user: &User) -> RepoResult<()> {
        log_outcome("user_update", Some(id), self.repo.update_user(id, user))
    }

    pub fn get_user(&self, id: UserId) -> RepoResult<Option<StoredUser>> {
        self.repo.get_user(id)
    }

    pub fn find_by_email(&self, email: &str) -> RepoResult<Vec<StoredUser>> {
        self.repo.find_by_email(email)
    }

    pub fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<StoredUser>> {
        self.repo.list_users(query)
    }

    /// Permanently removes a user by id.
    pub fn delete_user(&self, id: UserId) -> RepoResult<()> {
        log_outcome("user_delete", Some(id), self.repo.delete_user(id))
    }

    pub fn count_users(&self) -> RepoResult<u64> {
        self.repo.count_users()
    }
}

/// Logs the outcome of a write: `debug` on success, `warn` on failure.
fn log_outcome<T>(event: &str, id: Option<UserId>, result: RepoResult<T>) -> RepoResult<T> {
    let id = id.map_or_else(|| "none".to_string(), |id| id.to_string());
    match &result {
        Ok(_) => debug!("event={event} module=service status=ok user_id={id}"),
        Err(err) => warn!("event={event} module=service status=error user_id={id} error={err}"),
    }
    result
}
