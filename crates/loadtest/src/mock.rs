//! `MockScannerApi` — a test double for `ScannerApi`.
//!
//! Useful in unit and integration tests where a running scanner pipeline is
//! either unavailable or irrelevant.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{CreateJobRequest, JobStatus, ScanJob, ScannerApi};
use crate::error::ClientError;

/// A mock scanner API that records every call it receives and plays back a
/// programmer-specified status script.
pub struct MockScannerApi {
    /// Reject job creation with a 503 instead of accepting it.
    reject_create: bool,
    /// Statuses returned by successive polls of one job; the final entry
    /// repeats once the script runs out.
    script: Vec<JobStatus>,
    /// All creation requests seen (in call order).
    created: Mutex<Vec<CreateJobRequest>>,
    /// Poll counts per job id.
    polls: Mutex<HashMap<String, usize>>,
    next_id: Mutex<u64>,
}

impl MockScannerApi {
    fn with_script(reject_create: bool, script: Vec<JobStatus>) -> Self {
        Self {
            reject_create,
            script,
            created: Mutex::new(Vec::new()),
            polls: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
        }
    }

    /// Every job walks the given status sequence, one entry per poll.
    pub fn scripted(script: Vec<JobStatus>) -> Self {
        Self::with_script(false, script)
    }

    /// Every job completes on the first poll.
    pub fn completing() -> Self {
        Self::scripted(vec![JobStatus::Completed])
    }

    /// Every job reports a terminal failure on the first poll.
    pub fn failing() -> Self {
        Self::scripted(vec![JobStatus::Failed])
    }

    /// Every job stays queued forever.
    pub fn never_finishing() -> Self {
        Self::scripted(vec![JobStatus::Queued])
    }

    /// Job creation itself is rejected.
    pub fn rejecting_create() -> Self {
        Self::with_script(true, vec![])
    }

    /// Number of creation requests this mock has accepted or rejected.
    pub fn create_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    /// Number of status polls recorded for `job_id`.
    pub fn poll_count(&self, job_id: &str) -> usize {
        self.polls.lock().unwrap().get(job_id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl ScannerApi for MockScannerApi {
    async fn create_job(&self, request: &CreateJobRequest) -> Result<ScanJob, ClientError> {
        self.created.lock().unwrap().push(request.clone());

        if self.reject_create {
            return Err(ClientError::UnexpectedStatus {
                status: 503,
                body: "scanner offline".into(),
            });
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        Ok(ScanJob {
            id: format!("job-{next_id}"),
            status: JobStatus::Queued,
        })
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ClientError> {
        let mut polls = self.polls.lock().unwrap();
        let index = polls.entry(job_id.to_string()).or_insert(0);
        let status = self
            .script
            .get(*index)
            .or(self.script.last())
            .copied()
            .unwrap_or(JobStatus::Unknown);
        *index += 1;
        Ok(status)
    }
}
