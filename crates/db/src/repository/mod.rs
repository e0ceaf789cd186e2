//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No business logic, no domain types — pure SQL.  Queries use sqlx's
//! runtime API: the schema lives in the product deployment, not in this
//! repository, so there is nothing for compile-time checking to check
//! against.

pub mod departments;
pub mod document_types;
pub mod folders;
pub mod users;
pub mod workflows;
