//! The load-test harness.
//!
//! Schedules `concurrency × jobs_per_worker` simulated scan jobs as
//! cooperative tasks in one process, joined with `join_all` — tasks only
//! suspend at network I/O and the poll sleep, and share no mutable state.
//! Each job is created, then polled on a fixed interval up to a fixed
//! budget; a job that exhausts the budget is abandoned in place (the
//! server-side job is not cancelled).

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::{CreateJobRequest, JobStatus, ScanOptions, ScannerApi};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for a load-test run.
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    /// Scanner the jobs are attributed to.
    pub scanner_id: String,
    /// Number of concurrent workers.
    pub concurrency: u32,
    /// Jobs each worker submits.
    pub jobs_per_worker: u32,
    /// Fixed delay between status polls.
    pub poll_interval: Duration,
    /// Poll budget per job before it is declared timed out.
    pub max_polls: u32,
    /// Scan resolution submitted with every job.
    pub resolution: u32,
    /// Scan color mode submitted with every job.
    pub color_mode: String,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            scanner_id: "test-scanner-id".into(),
            concurrency: 10,
            jobs_per_worker: 1,
            poll_interval: Duration::from_secs(1),
            max_polls: 30,
            resolution: 300,
            color_mode: "color".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Terminal outcome of one simulated job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The job reached `completed`.
    Completed { elapsed: Duration },
    /// The create request was rejected or failed in transport.
    Rejected { reason: String },
    /// The job reached `failed`.
    Failed,
    /// A status poll failed in transport.
    PollError { reason: String },
    /// The poll budget ran out before a terminal status.
    TimedOut,
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// One labelled job result.
#[derive(Debug, Clone)]
pub struct JobResult {
    /// `W{worker}-J{job}` label, matching the submission order.
    pub label: String,
    pub outcome: JobOutcome,
}

/// Results of a whole load-test run.
#[derive(Debug)]
pub struct LoadTestReport {
    pub results: Vec<JobResult>,
}

impl LoadTestReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

/// Run the full load test and gather every job's outcome.
///
/// One job failing — even at creation — never aborts the others; the report
/// simply records it.
pub async fn run_load_test(api: Arc<dyn ScannerApi>, config: &LoadTestConfig) -> LoadTestReport {
    let mut tasks = Vec::new();

    for worker in 0..config.concurrency {
        for job in 0..config.jobs_per_worker {
            let api = Arc::clone(&api);
            let config = config.clone();
            let label = format!("W{worker}-J{job}");
            tasks.push(async move {
                let outcome = simulate_scan_job(api.as_ref(), &label, &config).await;
                JobResult { label, outcome }
            });
        }
    }

    let results = join_all(tasks).await;
    info!(
        "load test finished: {}/{} jobs completed",
        results.iter().filter(|r| r.outcome.is_success()).count(),
        results.len()
    );

    LoadTestReport { results }
}

/// Create one scan job and poll it to a terminal outcome.
async fn simulate_scan_job(
    api: &dyn ScannerApi,
    label: &str,
    config: &LoadTestConfig,
) -> JobOutcome {
    let started = Instant::now();

    let request = CreateJobRequest {
        scanner_id: config.scanner_id.clone(),
        options: ScanOptions {
            resolution: config.resolution,
            color_mode: config.color_mode.clone(),
        },
        destination_folder_id: Uuid::new_v4(),
    };

    let job = match api.create_job(&request).await {
        Ok(job) => job,
        Err(e) => {
            warn!("job {label} failed to create: {e}");
            return JobOutcome::Rejected {
                reason: e.to_string(),
            };
        }
    };

    for _ in 0..config.max_polls {
        match api.job_status(&job.id).await {
            Ok(JobStatus::Completed) => {
                let elapsed = started.elapsed();
                info!("job {label} completed in {:.2}s", elapsed.as_secs_f64());
                return JobOutcome::Completed { elapsed };
            }
            Ok(JobStatus::Failed) => {
                warn!("job {label} failed");
                return JobOutcome::Failed;
            }
            // queued/running/unknown: still in flight.
            Ok(_) => {}
            Err(e) => {
                warn!("job {label} poll error: {e}");
                return JobOutcome::PollError {
                    reason: e.to_string(),
                };
            }
        }
        tokio::time::sleep(config.poll_interval).await;
    }

    warn!("job {label} timed out");
    JobOutcome::TimedOut
}

// ============================================================
// Harness tests against the mock API (paused tokio time, so the
// poll sleeps cost nothing)
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockScannerApi;

    fn test_config() -> LoadTestConfig {
        LoadTestConfig {
            concurrency: 4,
            jobs_per_worker: 2,
            ..LoadTestConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn all_jobs_completing_counts_every_success() {
        let api = Arc::new(MockScannerApi::completing());
        let report = run_load_test(api.clone(), &test_config()).await;

        assert_eq!(report.total(), 8);
        assert_eq!(report.succeeded(), 8);
        assert_eq!(api.create_count(), 8);
        assert!(report
            .results
            .iter()
            .all(|r| matches!(r.outcome, JobOutcome::Completed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn job_labels_cover_every_worker_and_job() {
        let api = Arc::new(MockScannerApi::completing());
        let report = run_load_test(api, &test_config()).await;

        let mut labels: Vec<&str> = report.results.iter().map(|r| r.label.as_str()).collect();
        labels.sort_unstable();
        assert_eq!(
            labels,
            vec!["W0-J0", "W0-J1", "W1-J0", "W1-J1", "W2-J0", "W2-J1", "W3-J0", "W3-J1"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_creation_fails_only_that_job() {
        let api = Arc::new(MockScannerApi::rejecting_create());
        let report = run_load_test(api.clone(), &test_config()).await;

        assert_eq!(report.succeeded(), 0);
        assert_eq!(api.create_count(), 8);
        assert!(report
            .results
            .iter()
            .all(|r| matches!(r.outcome, JobOutcome::Rejected { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn job_completes_after_queued_and_running_polls() {
        let api = Arc::new(MockScannerApi::scripted(vec![
            JobStatus::Queued,
            JobStatus::Running,
            JobStatus::Completed,
        ]));
        let config = LoadTestConfig {
            concurrency: 1,
            jobs_per_worker: 1,
            ..LoadTestConfig::default()
        };

        let report = run_load_test(api.clone(), &config).await;
        assert_eq!(report.succeeded(), 1);
        assert_eq!(api.poll_count("job-1"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_failure_is_not_a_success() {
        let api = Arc::new(MockScannerApi::failing());
        let config = LoadTestConfig {
            concurrency: 2,
            jobs_per_worker: 1,
            ..LoadTestConfig::default()
        };

        let report = run_load_test(api, &config).await;
        assert_eq!(report.succeeded(), 0);
        assert!(report
            .results
            .iter()
            .all(|r| r.outcome == JobOutcome::Failed));
    }

    #[tokio::test(start_paused = true)]
    async fn poll_budget_exhaustion_times_the_job_out() {
        let api = Arc::new(MockScannerApi::never_finishing());
        let config = LoadTestConfig {
            concurrency: 1,
            jobs_per_worker: 1,
            max_polls: 5,
            ..LoadTestConfig::default()
        };

        let report = run_load_test(api.clone(), &config).await;
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.results[0].outcome, JobOutcome::TimedOut);
        assert_eq!(api.poll_count("job-1"), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_status_keeps_polling_instead_of_failing() {
        let api = Arc::new(MockScannerApi::scripted(vec![
            JobStatus::Unknown,
            JobStatus::Completed,
        ]));
        let config = LoadTestConfig {
            concurrency: 1,
            jobs_per_worker: 1,
            ..LoadTestConfig::default()
        };

        let report = run_load_test(api, &config).await;
        assert_eq!(report.succeeded(), 1);
    }
}
