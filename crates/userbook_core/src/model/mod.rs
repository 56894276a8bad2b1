//! Domain model for registered users.
//!
//! # Responsibility
//! - Define the plain `User` record and its field metadata.
//! - Keep persistence concerns out of the record shape.
//!
//! # Invariants
//! - Records carry no storage identity; ids live in `StoredUser`.
//! - Field limits are metadata here and are enforced at the storage boundary.

pub mod user;
