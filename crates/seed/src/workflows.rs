//! Workflow seeding — the three demo approval chains.
//!
//! Workflows are existence-checked by name within the demo tenant; step
//! chains are validated, then cleared and rewritten on every run so the
//! stored steps always match the current fixtures.

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use db::models::{NewWorkflow, NewWorkflowStep};
use db::repository::{departments, users, workflows};
use db::DbPool;

use crate::chain::validate_chain;
use crate::demo_data::SeedOutcome;
use crate::error::SeedError;
use crate::fixtures::{self, ADMIN_USERNAME, DEMO_DEPARTMENTS, DEMO_TENANT_ID, DEMO_USERS};
use crate::model::{AssigneeRef, WorkflowSpec};

// ---------------------------------------------------------------------------
// Reference resolution
// ---------------------------------------------------------------------------

/// Row ids the workflow fixtures refer to symbolically.
#[derive(Debug)]
struct References {
    admin: Uuid,
    departments: HashMap<String, Uuid>,
    users: HashMap<String, Uuid>,
}

impl References {
    fn resolve_assignee(&self, assignee: &AssigneeRef) -> Result<Uuid, SeedError> {
        let (map, kind) = match assignee {
            AssigneeRef::User(_) => (&self.users, "user"),
            AssigneeRef::Department(_) => (&self.departments, "department"),
        };
        map.get(assignee.key()).copied().ok_or_else(|| {
            SeedError::MissingReference {
                kind,
                name: assignee.key().to_string(),
            }
        })
    }
}

/// Look up every user and department the fixtures mention.
///
/// Missing rows are a hard error rather than a NULL assignee — a workflow
/// with a dangling approval step would stall the first document routed
/// through it.
async fn resolve_references(pool: &DbPool) -> Result<References, SeedError> {
    let admin = users::find_by_username(pool, ADMIN_USERNAME)
        .await?
        .ok_or(SeedError::AdminNotFound)?;

    let mut dept_ids = HashMap::new();
    for dept in &DEMO_DEPARTMENTS {
        if let Some(row) = departments::find_by_name(pool, dept.name).await? {
            dept_ids.insert(dept.name.to_string(), row.id);
        }
    }

    let mut user_ids = HashMap::new();
    for user in &DEMO_USERS {
        if let Some(row) = users::find_by_username(pool, user.username).await? {
            user_ids.insert(user.username.to_string(), row.id);
        }
    }

    Ok(References {
        admin: admin.id,
        departments: dept_ids,
        users: user_ids,
    })
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// One seeded workflow, for report rendering.
#[derive(Debug)]
pub struct WorkflowSeedEntry {
    pub name: String,
    pub outcome: SeedOutcome,
    pub steps: usize,
}

/// What a workflow seeding run did.
#[derive(Debug)]
pub struct WorkflowSeedReport {
    pub workflows: Vec<WorkflowSeedEntry>,
}

/// Seed the three demo approval workflows.
pub async fn seed_demo_workflows(pool: &DbPool) -> Result<WorkflowSeedReport, SeedError> {
    let refs = resolve_references(pool).await?;

    let mut report = WorkflowSeedReport {
        workflows: Vec::new(),
    };

    for spec in fixtures::demo_workflows() {
        validate_chain(&spec)?;
        let entry = seed_workflow(pool, &refs, &spec).await?;
        report.workflows.push(entry);
    }

    Ok(report)
}

async fn seed_workflow(
    pool: &DbPool,
    refs: &References,
    spec: &WorkflowSpec,
) -> Result<WorkflowSeedEntry, SeedError> {
    let (workflow_id, outcome) =
        match workflows::find_by_name(pool, &spec.name, DEMO_TENANT_ID).await? {
            Some(existing) => (existing.id, SeedOutcome::Existing),
            None => {
                let id = Uuid::new_v4();
                workflows::insert(
                    pool,
                    &NewWorkflow {
                        id,
                        tenant_id: DEMO_TENANT_ID,
                        name: &spec.name,
                        description: &spec.description,
                        category: &spec.category,
                        trigger_type: spec.trigger.kind(),
                        trigger_conditions: spec.trigger.conditions(),
                        created_by: refs.admin,
                    },
                )
                .await?;
                (id, SeedOutcome::Created)
            }
        };

    // Rewrite the step chain wholesale, even for a pre-existing workflow.
    let removed = workflows::delete_steps(pool, workflow_id).await?;
    if removed > 0 {
        info!("workflow '{}': replaced {removed} existing steps", spec.name);
    }

    for step in &spec.steps {
        let assignee_id = step
            .assignee
            .as_ref()
            .map(|a| refs.resolve_assignee(a))
            .transpose()?;
        let step_type = step.step_type.to_string();
        let action_type = step.action_type.map(|a| a.to_string());

        workflows::insert_step(
            pool,
            &NewWorkflowStep {
                id: Uuid::new_v4(),
                workflow_id,
                name: &step.name,
                step_type: &step_type,
                step_order: step.step_order,
                assignee_type: step.assignee.as_ref().map(|a| a.kind()),
                assignee_id,
                action_type: action_type.as_deref(),
                action_config: step.action_config.clone(),
                deadline_hours: step.deadline_hours,
            },
        )
        .await?;
    }

    info!("workflow '{}': {} steps written", spec.name, spec.steps.len());

    Ok(WorkflowSeedEntry {
        name: spec.name.clone(),
        outcome,
        steps: spec.steps.len(),
    })
}
