//! Step-chain validation — run this before persisting a workflow.
//!
//! Rules enforced:
//! 1. A workflow carries at least one step.
//! 2. Step orders run 1, 2, 3, … in definition order with no gaps.
//! 3. Step names are unique within the workflow.
//! 4. Approval and task steps name an assignee.
//! 5. Action steps name an action type.
//! 6. Deadlines, when present, are positive.

use std::collections::HashSet;

use crate::error::ChainError;
use crate::model::{StepType, WorkflowSpec};

/// Validate a workflow's step chain.
///
/// # Errors
/// Returns the first [`ChainError`] found, in rule order.
pub fn validate_chain(workflow: &WorkflowSpec) -> Result<(), ChainError> {
    if workflow.steps.is_empty() {
        return Err(ChainError::Empty(workflow.name.clone()));
    }

    let mut seen_names: HashSet<&str> = HashSet::new();

    for (index, step) in workflow.steps.iter().enumerate() {
        let expected = index as i32 + 1;
        if step.step_order != expected {
            return Err(ChainError::OrderGap {
                workflow: workflow.name.clone(),
                expected,
                found: step.step_order,
            });
        }

        if !seen_names.insert(step.name.as_str()) {
            return Err(ChainError::DuplicateStepName {
                workflow: workflow.name.clone(),
                step: step.name.clone(),
            });
        }

        match step.step_type {
            StepType::Approval | StepType::Task => {
                if step.assignee.is_none() {
                    return Err(ChainError::MissingAssignee {
                        workflow: workflow.name.clone(),
                        step: step.name.clone(),
                    });
                }
            }
            StepType::Action => {
                if step.action_type.is_none() {
                    return Err(ChainError::MissingAction {
                        workflow: workflow.name.clone(),
                        step: step.name.clone(),
                    });
                }
            }
        }

        if let Some(hours) = step.deadline_hours {
            if hours <= 0 {
                return Err(ChainError::InvalidDeadline {
                    workflow: workflow.name.clone(),
                    step: step.name.clone(),
                    hours,
                });
            }
        }
    }

    Ok(())
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActionType, AssigneeRef, StepSpec, WorkflowTrigger};
    use serde_json::json;

    fn approval(name: &str, order: i32) -> StepSpec {
        StepSpec::approval(
            name,
            order,
            AssigneeRef::department("Finance"),
            ActionType::ApproveReject,
            24,
        )
    }

    fn make_workflow(steps: Vec<StepSpec>) -> WorkflowSpec {
        WorkflowSpec::new(
            "test",
            "test workflow",
            "Finance",
            WorkflowTrigger::document_type("Invoice"),
            steps,
        )
    }

    #[test]
    fn valid_chain_passes() {
        let wf = make_workflow(vec![
            approval("Review", 1),
            approval("Sign-off", 2),
            StepSpec::action(
                "Archive",
                3,
                ActionType::MoveToFolder,
                json!({ "folder": "Finance/Approved" }),
            ),
        ]);
        assert!(validate_chain(&wf).is_ok());
    }

    #[test]
    fn empty_chain_is_rejected() {
        let wf = make_workflow(vec![]);
        assert_eq!(validate_chain(&wf), Err(ChainError::Empty("test".into())));
    }

    #[test]
    fn order_gap_is_detected() {
        // 1 → 3: order 2 is missing.
        let wf = make_workflow(vec![approval("Review", 1), approval("Sign-off", 3)]);
        assert_eq!(
            validate_chain(&wf),
            Err(ChainError::OrderGap {
                workflow: "test".into(),
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn chain_must_start_at_one() {
        let wf = make_workflow(vec![approval("Review", 2)]);
        assert!(matches!(
            validate_chain(&wf),
            Err(ChainError::OrderGap { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn duplicate_step_name_is_rejected() {
        let wf = make_workflow(vec![approval("Review", 1), approval("Review", 2)]);
        assert_eq!(
            validate_chain(&wf),
            Err(ChainError::DuplicateStepName {
                workflow: "test".into(),
                step: "Review".into(),
            })
        );
    }

    #[test]
    fn approval_without_assignee_is_rejected() {
        let mut step = approval("Review", 1);
        step.assignee = None;
        let wf = make_workflow(vec![step]);
        assert!(matches!(
            validate_chain(&wf),
            Err(ChainError::MissingAssignee { .. })
        ));
    }

    #[test]
    fn task_without_assignee_is_rejected() {
        let mut step = StepSpec::task(
            "Data Entry",
            1,
            AssigneeRef::user("hr_user"),
            json!({ "task": "enter details" }),
        );
        step.assignee = None;
        let wf = make_workflow(vec![step]);
        assert!(matches!(
            validate_chain(&wf),
            Err(ChainError::MissingAssignee { .. })
        ));
    }

    #[test]
    fn action_without_action_type_is_rejected() {
        let mut step = StepSpec::action(
            "Archive",
            1,
            ActionType::MoveToFolder,
            json!({ "folder": "x" }),
        );
        step.action_type = None;
        let wf = make_workflow(vec![step]);
        assert!(matches!(
            validate_chain(&wf),
            Err(ChainError::MissingAction { .. })
        ));
    }

    #[test]
    fn non_positive_deadline_is_rejected() {
        let mut step = approval("Review", 1);
        step.deadline_hours = Some(0);
        let wf = make_workflow(vec![step]);
        assert_eq!(
            validate_chain(&wf),
            Err(ChainError::InvalidDeadline {
                workflow: "test".into(),
                step: "Review".into(),
                hours: 0,
            })
        );
    }
}
