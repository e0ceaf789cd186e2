//! Demo data seeding — departments, users, document types.
//!
//! Mirrors what a human administrator would click together for a
//! demonstration: three departments, four accounts with their home/inbox
//! folders, and the document types the sample PDFs are filed under.  Every
//! entity is existence-checked, so re-running is always safe.

use std::collections::HashMap;

use tracing::{info, warn};
use uuid::Uuid;

use db::models::{NewUser, SpecialFolderKind};
use db::repository::{departments, document_types, folders, users};
use db::DbPool;

use crate::error::SeedError;
use crate::fixtures::{
    DemoUser, ADMIN_USERNAME, DEFAULT_PASSWORD, DEMO_DEPARTMENTS, DEMO_DOCUMENT_TYPES, DEMO_TENANT_ID,
    DEMO_USERS,
};
use crate::password::hash_password;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Whether a fixture row was inserted or already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    Existing,
}

/// One seeded entity, for report rendering.
#[derive(Debug, Clone)]
pub struct SeedEntry {
    pub label: String,
    pub outcome: SeedOutcome,
}

impl SeedEntry {
    fn new(label: impl Into<String>, outcome: SeedOutcome) -> Self {
        Self {
            label: label.into(),
            outcome,
        }
    }
}

/// What a demo-data seeding run did, phase by phase.
#[derive(Debug)]
pub struct DemoDataReport {
    pub departments: Vec<SeedEntry>,
    pub users: Vec<SeedEntry>,
    /// `(username, department)` pairs that were assigned.
    pub assignments: Vec<(String, String)>,
    pub document_types: Vec<SeedEntry>,
}

impl DemoDataReport {
    /// Total rows newly created across all phases (assignments excluded —
    /// `ON CONFLICT DO NOTHING` hides whether they were new).
    pub fn created(&self) -> usize {
        [&self.departments, &self.users, &self.document_types]
            .iter()
            .flat_map(|entries| entries.iter())
            .filter(|e| e.outcome == SeedOutcome::Created)
            .count()
    }
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Seed the full demo data set.
///
/// The users special-folder trigger is disabled for the duration of the run
/// (the seeder provisions folders itself) and re-enabled afterwards even if
/// seeding fails partway.
pub async fn seed_demo_data(pool: &DbPool) -> Result<DemoDataReport, SeedError> {
    let admin = users::find_by_username(pool, ADMIN_USERNAME)
        .await?
        .ok_or(SeedError::AdminNotFound)?;
    info!("Seeding demo data as admin {}", admin.id);

    users::set_special_folder_trigger(pool, false).await?;

    let outcome = seed_all(pool, admin.id).await;

    if let Err(e) = users::set_special_folder_trigger(pool, true).await {
        // Losing the trigger is worse than a partial seed; surface it loudly.
        warn!("failed to re-enable special-folder trigger: {e}");
        outcome?;
        return Err(e.into());
    }

    outcome
}

async fn seed_all(pool: &DbPool, admin_id: Uuid) -> Result<DemoDataReport, SeedError> {
    let mut report = DemoDataReport {
        departments: Vec::new(),
        users: Vec::new(),
        assignments: Vec::new(),
        document_types: Vec::new(),
    };

    // 1. Departments
    let mut dept_ids: HashMap<&str, Uuid> = HashMap::new();
    for dept in &DEMO_DEPARTMENTS {
        match departments::find_by_name(pool, dept.name).await? {
            Some(existing) => {
                dept_ids.insert(dept.name, existing.id);
                report
                    .departments
                    .push(SeedEntry::new(dept.name, SeedOutcome::Existing));
            }
            None => {
                let id = Uuid::new_v4();
                departments::insert(pool, id, dept.name, dept.code, dept.description, admin_id)
                    .await?;
                dept_ids.insert(dept.name, id);
                report
                    .departments
                    .push(SeedEntry::new(dept.name, SeedOutcome::Created));
            }
        }
    }

    // 2. Users with their home/inbox folders
    let password_hash = hash_password(DEFAULT_PASSWORD)?;
    let mut user_ids: HashMap<&str, Uuid> = HashMap::new();
    for user in &DEMO_USERS {
        match users::find_by_username(pool, user.username).await? {
            Some(existing) => {
                user_ids.insert(user.username, existing.id);
                report
                    .users
                    .push(SeedEntry::new(user.full_name(), SeedOutcome::Existing));
            }
            None => {
                let id = create_user_with_folders(pool, admin_id, user, &password_hash).await?;
                user_ids.insert(user.username, id);
                report
                    .users
                    .push(SeedEntry::new(user.full_name(), SeedOutcome::Created));
            }
        }
    }

    // 3. Department assignments
    for user in &DEMO_USERS {
        if let Some(dept) = user.department {
            departments::assign_user(pool, user_ids[user.username], dept_ids[dept], admin_id)
                .await?;
            report
                .assignments
                .push((user.username.to_string(), dept.to_string()));
        }
    }

    // 4. Document types
    for name in DEMO_DOCUMENT_TYPES {
        match document_types::find_by_name(pool, name).await? {
            Some(_) => report
                .document_types
                .push(SeedEntry::new(name, SeedOutcome::Existing)),
            None => {
                document_types::insert(pool, Uuid::new_v4(), name, admin_id).await?;
                report
                    .document_types
                    .push(SeedEntry::new(name, SeedOutcome::Created));
            }
        }
    }

    info!("Demo data seeding complete ({} rows created)", report.created());
    Ok(report)
}

/// Create a user along with the home and inbox folders the product expects.
///
/// Folder rows go in first — the special-folder trigger is disabled, so
/// nothing else will provision them.
async fn create_user_with_folders(
    pool: &DbPool,
    admin_id: Uuid,
    user: &DemoUser,
    password_hash: &str,
) -> Result<Uuid, SeedError> {
    let user_id = Uuid::new_v4();
    let home_folder_id = Uuid::new_v4();
    let inbox_folder_id = Uuid::new_v4();

    folders::insert_folder(
        pool,
        home_folder_id,
        SpecialFolderKind::Home.node_title(),
        None,
        admin_id,
    )
    .await?;

    folders::insert_folder(
        pool,
        inbox_folder_id,
        SpecialFolderKind::Inbox.node_title(),
        Some(home_folder_id),
        admin_id,
    )
    .await?;

    users::insert(
        pool,
        &NewUser {
            id: user_id,
            username: user.username,
            email: user.email,
            password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            tenant_id: DEMO_TENANT_ID,
        },
    )
    .await?;

    folders::insert_special_folder(pool, user_id, SpecialFolderKind::Home, home_folder_id).await?;
    folders::insert_special_folder(pool, user_id, SpecialFolderKind::Inbox, inbox_folder_id)
        .await?;

    Ok(user_id)
}
