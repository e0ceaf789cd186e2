//! Row structs that map onto dArchiva tables.
//!
//! These are *persistence* models — they carry no domain behaviour and only
//! the columns the demo seeders read back.  Domain types live in the `seed`
//! crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row.  The password hash is deliberately never selected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Column values for a new user insert.
///
/// Flag columns are fixed for demo accounts (active, non-staff,
/// non-superuser); timestamps are set server-side with `NOW()`.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub tenant_id: Uuid,
}

// ---------------------------------------------------------------------------
// special_folders
// ---------------------------------------------------------------------------

/// The two per-user folders the product expects every account to own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialFolderKind {
    Home,
    Inbox,
}

impl SpecialFolderKind {
    /// Title of the hidden folder node backing this entry.
    pub fn node_title(self) -> &'static str {
        match self {
            Self::Home => ".home",
            Self::Inbox => ".inbox",
        }
    }
}

impl std::fmt::Display for SpecialFolderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Inbox => write!(f, "inbox"),
        }
    }
}

impl std::str::FromStr for SpecialFolderKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "inbox" => Ok(Self::Inbox),
            other => Err(format!("unknown special folder kind: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// departments
// ---------------------------------------------------------------------------

/// A persisted department row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentRow {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// document_types
// ---------------------------------------------------------------------------

/// A persisted document type row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentTypeRow {
    pub id: Uuid,
    pub name: String,
}

// ---------------------------------------------------------------------------
// workflows
// ---------------------------------------------------------------------------

/// A persisted workflow definition row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkflowRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub is_active: bool,
}

/// Column values for a new workflow insert.
#[derive(Debug, Clone)]
pub struct NewWorkflow<'a> {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub trigger_type: &'a str,
    pub trigger_conditions: serde_json::Value,
    pub created_by: Uuid,
}

/// Column values for a new workflow step insert.
///
/// `step_type`, `assignee_type` and `action_type` arrive as the text the
/// schema stores; the `seed` crate owns the vocabulary enums.
#[derive(Debug, Clone)]
pub struct NewWorkflowStep<'a> {
    pub id: Uuid,
    pub workflow_id: Uuid,
    pub name: &'a str,
    pub step_type: &'a str,
    pub step_order: i32,
    pub assignee_type: Option<&'a str>,
    pub assignee_id: Option<Uuid>,
    pub action_type: Option<&'a str>,
    pub action_config: Option<serde_json::Value>,
    pub deadline_hours: Option<i32>,
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn special_folder_kind_round_trips_through_text() {
        for kind in [SpecialFolderKind::Home, SpecialFolderKind::Inbox] {
            let text = kind.to_string();
            assert_eq!(SpecialFolderKind::from_str(&text), Ok(kind));
        }
    }

    #[test]
    fn special_folder_nodes_are_hidden() {
        assert_eq!(SpecialFolderKind::Home.node_title(), ".home");
        assert_eq!(SpecialFolderKind::Inbox.node_title(), ".inbox");
    }

    #[test]
    fn unknown_special_folder_kind_is_rejected() {
        assert!(SpecialFolderKind::from_str("trash").is_err());
    }
}
