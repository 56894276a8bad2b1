//! Core domain logic for the user book.
//! The `User` record is a plain value; persistence is an injected repository.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{
    FieldSpec, StoredUser, User, UserId, UserValidationError, ADDRESS_MAX_CHARS,
    EMAIL_MAX_CHARS, NAME_MAX_CHARS,
};
pub use repo::user_repo::{
    RepoError, RepoResult, SqliteUserRepository, UserListQuery, UserRepository,
};
pub use service::user_service::UserService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
