//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, and repository functions
//! for every dArchiva table the demo tooling touches.  The schema itself is
//! owned by the product — this crate issues statements against it and never
//! defines or migrates it.  No business logic lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::DbError;
pub use pool::DbPool;
