//! Domain model for seeded approval workflows.
//!
//! These types are the in-memory source of truth for what a demo workflow
//! looks like.  They serialise down to the text/JSONB columns of the
//! `workflows` and `workflow_steps` tables; the product's workflow engine
//! interprets them at runtime.

use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// WorkflowTrigger
// ---------------------------------------------------------------------------

/// How the product starts a workflow for a document.
///
/// The demo only uses document-type triggers, but the kind/conditions split
/// mirrors the `trigger_type` + `trigger_conditions` columns so more trigger
/// kinds can be added without touching the seeder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowTrigger {
    /// Fires when a document of the named type is filed.
    DocumentType { name: String },
}

impl WorkflowTrigger {
    pub fn document_type(name: impl Into<String>) -> Self {
        Self::DocumentType { name: name.into() }
    }

    /// Value of the `trigger_type` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DocumentType { .. } => "document_type",
        }
    }

    /// Value of the `trigger_conditions` JSONB column.
    pub fn conditions(&self) -> Value {
        match self {
            Self::DocumentType { name } => json!({ "document_type": name }),
        }
    }
}

// ---------------------------------------------------------------------------
// Step vocabulary
// ---------------------------------------------------------------------------

/// What kind of stage a step is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepType {
    /// Someone reviews and approves or rejects.
    Approval,
    /// Someone completes a piece of work.
    Task,
    /// The engine acts on its own (e.g. filing the document).
    Action,
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approval => write!(f, "approval"),
            Self::Task => write!(f, "task"),
            Self::Action => write!(f, "action"),
        }
    }
}

impl std::str::FromStr for StepType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approval" => Ok(Self::Approval),
            "task" => Ok(Self::Task),
            "action" => Ok(Self::Action),
            other => Err(format!("unknown step type: {other}")),
        }
    }
}

/// What the assignee (or the engine) is asked to do at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    ApproveReject,
    Review,
    MoveToFolder,
    CompleteTask,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApproveReject => write!(f, "approve_reject"),
            Self::Review => write!(f, "review"),
            Self::MoveToFolder => write!(f, "move_to_folder"),
            Self::CompleteTask => write!(f, "complete_task"),
        }
    }
}

impl std::str::FromStr for ActionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve_reject" => Ok(Self::ApproveReject),
            "review" => Ok(Self::Review),
            "move_to_folder" => Ok(Self::MoveToFolder),
            "complete_task" => Ok(Self::CompleteTask),
            other => Err(format!("unknown action type: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// AssigneeRef
// ---------------------------------------------------------------------------

/// Who a step is assigned to, referenced symbolically.
///
/// Fixtures name departments and usernames; the seeder resolves them to row
/// ids at run time so the fixtures stay independent of any database state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeRef {
    User(String),
    Department(String),
}

impl AssigneeRef {
    pub fn user(username: impl Into<String>) -> Self {
        Self::User(username.into())
    }

    pub fn department(name: impl Into<String>) -> Self {
        Self::Department(name.into())
    }

    /// Value of the `assignee_type` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Department(_) => "department",
        }
    }

    /// The symbolic key (username or department name).
    pub fn key(&self) -> &str {
        match self {
            Self::User(key) | Self::Department(key) => key,
        }
    }
}

// ---------------------------------------------------------------------------
// StepSpec
// ---------------------------------------------------------------------------

/// One stage of an approval chain.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub name: String,
    pub step_type: StepType,
    /// 1-based position in the chain.
    pub step_order: i32,
    pub assignee: Option<AssigneeRef>,
    pub action_type: Option<ActionType>,
    pub action_config: Option<Value>,
    pub deadline_hours: Option<i32>,
}

impl StepSpec {
    /// An approval step: a user or department approves within a deadline.
    pub fn approval(
        name: impl Into<String>,
        step_order: i32,
        assignee: AssigneeRef,
        action_type: ActionType,
        deadline_hours: i32,
    ) -> Self {
        Self {
            name: name.into(),
            step_type: StepType::Approval,
            step_order,
            assignee: Some(assignee),
            action_type: Some(action_type),
            action_config: None,
            deadline_hours: Some(deadline_hours),
        }
    }

    /// A task step: a user completes described work, no deadline.
    pub fn task(
        name: impl Into<String>,
        step_order: i32,
        assignee: AssigneeRef,
        action_config: Value,
    ) -> Self {
        Self {
            name: name.into(),
            step_type: StepType::Task,
            step_order,
            assignee: Some(assignee),
            action_type: Some(ActionType::CompleteTask),
            action_config: Some(action_config),
            deadline_hours: None,
        }
    }

    /// An automatic action step performed by the engine itself.
    pub fn action(
        name: impl Into<String>,
        step_order: i32,
        action_type: ActionType,
        action_config: Value,
    ) -> Self {
        Self {
            name: name.into(),
            step_type: StepType::Action,
            step_order,
            assignee: None,
            action_type: Some(action_type),
            action_config: Some(action_config),
            deadline_hours: None,
        }
    }
}

// ---------------------------------------------------------------------------
// WorkflowSpec
// ---------------------------------------------------------------------------

/// A complete workflow definition ready to be validated and persisted.
#[derive(Debug, Clone)]
pub struct WorkflowSpec {
    pub name: String,
    pub description: String,
    pub category: String,
    pub trigger: WorkflowTrigger,
    pub steps: Vec<StepSpec>,
}

impl WorkflowSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        trigger: WorkflowTrigger,
        steps: Vec<StepSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            trigger,
            steps,
        }
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn step_type_round_trips_through_text() {
        for ty in [StepType::Approval, StepType::Task, StepType::Action] {
            assert_eq!(StepType::from_str(&ty.to_string()), Ok(ty));
        }
    }

    #[test]
    fn action_type_round_trips_through_text() {
        for ty in [
            ActionType::ApproveReject,
            ActionType::Review,
            ActionType::MoveToFolder,
            ActionType::CompleteTask,
        ] {
            assert_eq!(ActionType::from_str(&ty.to_string()), Ok(ty));
        }
    }

    #[test]
    fn unknown_vocabulary_is_rejected() {
        assert!(StepType::from_str("escalation").is_err());
        assert!(ActionType::from_str("sign").is_err());
    }

    #[test]
    fn document_type_trigger_columns() {
        let trigger = WorkflowTrigger::document_type("Invoice");
        assert_eq!(trigger.kind(), "document_type");
        assert_eq!(
            trigger.conditions(),
            serde_json::json!({ "document_type": "Invoice" })
        );
    }

    #[test]
    fn assignee_ref_kind_and_key() {
        let user = AssigneeRef::user("manager");
        assert_eq!(user.kind(), "user");
        assert_eq!(user.key(), "manager");

        let dept = AssigneeRef::department("Finance");
        assert_eq!(dept.kind(), "department");
        assert_eq!(dept.key(), "Finance");
    }
}
