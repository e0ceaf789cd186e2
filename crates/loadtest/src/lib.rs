//! `loadtest` crate — load harness for the scanner ingestion API.
//!
//! Drives many concurrent simulated scan jobs against a running dArchiva
//! instance: create a job, poll it to a terminal status, and tally the
//! outcomes.  The HTTP surface sits behind the [`ScannerApi`] trait so the
//! harness can be exercised against [`mock::MockScannerApi`] without a
//! server.

pub mod client;
pub mod error;
pub mod harness;
pub mod mock;

pub use client::{CreateJobRequest, HttpScannerApi, JobStatus, ScanJob, ScannerApi};
pub use error::ClientError;
pub use harness::{run_load_test, JobOutcome, LoadTestConfig, LoadTestReport};
