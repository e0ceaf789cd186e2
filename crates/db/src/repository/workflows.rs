//! Workflow and workflow-step repository functions.
//!
//! The workflow *engine* interpreting these rows lives in the product; the
//! demo tooling only writes definitions.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewWorkflow, NewWorkflowStep, WorkflowRow};
use crate::DbError;

/// Fetch a workflow by name within a tenant.
pub async fn find_by_name(
    pool: &PgPool,
    name: &str,
    tenant_id: Uuid,
) -> Result<Option<WorkflowRow>, DbError> {
    let row = sqlx::query_as::<_, WorkflowRow>(
        r#"
        SELECT id, tenant_id, name, category, is_active
        FROM workflows
        WHERE name = $1 AND tenant_id = $2
        "#,
    )
    .bind(name)
    .bind(tenant_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new active workflow definition.
pub async fn insert(pool: &PgPool, workflow: &NewWorkflow<'_>) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO workflows (id, tenant_id, name, description, category, trigger_type, trigger_conditions, is_active, created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, true, $8)
        "#,
    )
    .bind(workflow.id)
    .bind(workflow.tenant_id)
    .bind(workflow.name)
    .bind(workflow.description)
    .bind(workflow.category)
    .bind(workflow.trigger_type)
    .bind(&workflow.trigger_conditions)
    .bind(workflow.created_by)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete every step of a workflow.  Returns the number of rows removed.
///
/// The seeder rewrites step chains wholesale on every run, so stale steps
/// from an earlier fixture version never linger.
pub async fn delete_steps(pool: &PgPool, workflow_id: Uuid) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM workflow_steps WHERE workflow_id = $1")
        .bind(workflow_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Insert a single workflow step.
pub async fn insert_step(pool: &PgPool, step: &NewWorkflowStep<'_>) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO workflow_steps (id, workflow_id, name, step_type, step_order,
            assignee_type, assignee_id, action_type, action_config, deadline_hours)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(step.id)
    .bind(step.workflow_id)
    .bind(step.name)
    .bind(step.step_type)
    .bind(step.step_order)
    .bind(step.assignee_type)
    .bind(step.assignee_id)
    .bind(step.action_type)
    .bind(&step.action_config)
    .bind(step.deadline_hours)
    .execute(pool)
    .await?;

    Ok(())
}
