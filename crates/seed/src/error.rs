//! Seed-level error types.

use thiserror::Error;

/// Errors produced while seeding demo data or workflows.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The initial admin account is missing; nothing can be attributed.
    #[error("admin user not found — install the product and create the admin account first")]
    AdminNotFound,

    /// A workflow step references a user or department that does not exist.
    #[error("{kind} '{name}' not found — run the demo data seeder first")]
    MissingReference { kind: &'static str, name: String },

    /// A fixture workflow failed step-chain validation.
    #[error("invalid workflow definition: {0}")]
    InvalidChain(#[from] ChainError),

    /// Hashing the demo password failed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}

/// Violations found by step-chain validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// A workflow must carry at least one step.
    #[error("workflow '{0}' has no steps")]
    Empty(String),

    /// Step orders must run 1, 2, 3, … with no gaps.
    #[error("workflow '{workflow}': expected step order {expected}, found {found}")]
    OrderGap {
        workflow: String,
        expected: i32,
        found: i32,
    },

    /// Two steps in one workflow share a name.
    #[error("workflow '{workflow}': duplicate step name '{step}'")]
    DuplicateStepName { workflow: String, step: String },

    /// Approval and task steps need someone to act on them.
    #[error("workflow '{workflow}': step '{step}' has no assignee")]
    MissingAssignee { workflow: String, step: String },

    /// Action steps are defined by their action.
    #[error("workflow '{workflow}': action step '{step}' has no action type")]
    MissingAction { workflow: String, step: String },

    /// Deadlines are durations; zero or negative hours make no sense.
    #[error("workflow '{workflow}': step '{step}' has non-positive deadline of {hours}h")]
    InvalidDeadline {
        workflow: String,
        step: String,
        hours: i32,
    },
}
