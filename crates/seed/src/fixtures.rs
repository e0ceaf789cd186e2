//! Literal demo fixture data.
//!
//! Everything the demo environment contains is defined here, in one place,
//! so a fixture change never touches the seeding logic.

use serde_json::json;
use uuid::Uuid;

use crate::model::{ActionType, AssigneeRef, StepSpec, WorkflowSpec, WorkflowTrigger};

/// Tenant every demo row belongs to.
pub const DEMO_TENANT_ID: Uuid = uuid::uuid!("00000000-0000-0000-0000-000000000001");

/// Password shared by all demo accounts (hashed before storage).
pub const DEFAULT_PASSWORD: &str = "Demo1234!";

/// Username of the pre-existing admin account all rows are attributed to.
pub const ADMIN_USERNAME: &str = "admin";

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

pub struct DemoDepartment {
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

pub const DEMO_DEPARTMENTS: [DemoDepartment; 3] = [
    DemoDepartment {
        name: "Finance",
        code: "FIN",
        description: "Financial operations and accounting",
    },
    DemoDepartment {
        name: "Legal",
        code: "LEG",
        description: "Legal affairs and compliance",
    },
    DemoDepartment {
        name: "Human Resources",
        code: "HR",
        description: "Employee management",
    },
];

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub struct DemoUser {
    pub username: &'static str,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    /// Department name, or `None` for cross-department accounts.
    pub department: Option<&'static str>,
}

impl DemoUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub const DEMO_USERS: [DemoUser; 4] = [
    DemoUser {
        username: "finance_user",
        email: "wanjiku@demo.local",
        first_name: "Wanjiku",
        last_name: "Kamau",
        department: Some("Finance"),
    },
    DemoUser {
        username: "legal_user",
        email: "ochieng@demo.local",
        first_name: "Ochieng",
        last_name: "Otieno",
        department: Some("Legal"),
    },
    DemoUser {
        username: "hr_user",
        email: "akinyi@demo.local",
        first_name: "Akinyi",
        last_name: "Odhiambo",
        department: Some("Human Resources"),
    },
    DemoUser {
        username: "manager",
        email: "mwangi@demo.local",
        first_name: "Mwangi",
        last_name: "Njoroge",
        department: None,
    },
];

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

pub const DEMO_DOCUMENT_TYPES: [&str; 6] = [
    "Invoice",
    "Contract",
    "Employment Record",
    "Policy Document",
    "Memo",
    "Report",
];

// ---------------------------------------------------------------------------
// Workflows
// ---------------------------------------------------------------------------

/// The three demo approval workflows.
pub fn demo_workflows() -> Vec<WorkflowSpec> {
    vec![
        WorkflowSpec::new(
            "Invoice Approval",
            "Route invoices for approval based on amount",
            "Finance",
            WorkflowTrigger::document_type("Invoice"),
            vec![
                StepSpec::approval(
                    "Finance Review",
                    1,
                    AssigneeRef::department("Finance"),
                    ActionType::ApproveReject,
                    24,
                ),
                StepSpec::approval(
                    "Manager Approval",
                    2,
                    AssigneeRef::user("manager"),
                    ActionType::ApproveReject,
                    48,
                ),
                StepSpec::action(
                    "Archive",
                    3,
                    ActionType::MoveToFolder,
                    json!({ "folder": "Finance/Approved" }),
                ),
            ],
        ),
        WorkflowSpec::new(
            "Contract Review",
            "Legal review process for contracts",
            "Legal",
            WorkflowTrigger::document_type("Contract"),
            vec![
                StepSpec::approval(
                    "Legal Review",
                    1,
                    AssigneeRef::department("Legal"),
                    ActionType::Review,
                    72,
                ),
                StepSpec::approval(
                    "Compliance Check",
                    2,
                    AssigneeRef::user("legal_user"),
                    ActionType::ApproveReject,
                    48,
                ),
                StepSpec::approval(
                    "Final Approval",
                    3,
                    AssigneeRef::user("manager"),
                    ActionType::ApproveReject,
                    24,
                ),
                StepSpec::action(
                    "Archive",
                    4,
                    ActionType::MoveToFolder,
                    json!({ "folder": "Legal/Contracts" }),
                ),
            ],
        ),
        WorkflowSpec::new(
            "Employee Document Processing",
            "Process HR documents for new employees",
            "HR",
            WorkflowTrigger::document_type("Employment Record"),
            vec![
                StepSpec::approval(
                    "HR Review",
                    1,
                    AssigneeRef::department("Human Resources"),
                    ActionType::Review,
                    24,
                ),
                StepSpec::task(
                    "Data Entry",
                    2,
                    AssigneeRef::user("hr_user"),
                    json!({ "task": "Enter employee details into HRIS" }),
                ),
                StepSpec::action(
                    "Archive",
                    3,
                    ActionType::MoveToFolder,
                    json!({ "folder": "HR/Employee Files" }),
                ),
            ],
        ),
    ]
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::validate_chain;
    use crate::model::StepType;

    #[test]
    fn every_demo_workflow_validates() {
        for wf in demo_workflows() {
            validate_chain(&wf).unwrap_or_else(|e| panic!("{}: {e}", wf.name));
        }
    }

    #[test]
    fn demo_workflow_shapes() {
        let workflows = demo_workflows();
        assert_eq!(workflows.len(), 3);

        let steps: Vec<usize> = workflows.iter().map(|w| w.steps.len()).collect();
        assert_eq!(steps, vec![3, 4, 3]);

        // Every chain ends with an automatic archive step.
        for wf in &workflows {
            let last = wf.steps.last().unwrap();
            assert_eq!(last.name, "Archive");
            assert_eq!(last.step_type, StepType::Action);
            assert_eq!(last.action_type, Some(ActionType::MoveToFolder));
        }
    }

    #[test]
    fn workflow_assignees_reference_known_fixtures() {
        let usernames: Vec<&str> = DEMO_USERS.iter().map(|u| u.username).collect();
        let departments: Vec<&str> = DEMO_DEPARTMENTS.iter().map(|d| d.name).collect();

        for wf in demo_workflows() {
            for step in &wf.steps {
                match &step.assignee {
                    Some(AssigneeRef::User(name)) => {
                        assert!(usernames.contains(&name.as_str()), "unknown user {name}")
                    }
                    Some(AssigneeRef::Department(name)) => assert!(
                        departments.contains(&name.as_str()),
                        "unknown department {name}"
                    ),
                    None => {}
                }
            }
        }
    }

    #[test]
    fn every_demo_user_department_exists() {
        let departments: Vec<&str> = DEMO_DEPARTMENTS.iter().map(|d| d.name).collect();
        for user in &DEMO_USERS {
            if let Some(dept) = user.department {
                assert!(departments.contains(&dept), "unknown department {dept}");
            }
        }
    }
}
