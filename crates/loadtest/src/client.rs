//! The `ScannerApi` trait and its HTTP implementation.
//!
//! Wire shapes follow the scanner ingestion endpoints:
//!   POST {base}/scanners/jobs      — create a job (201 + job body)
//!   GET  {base}/scanners/jobs/{id} — current job state
//! Authentication is a static `X-Scanner-API-Key` header.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ClientError;

pub const API_KEY_HEADER: &str = "X-Scanner-API-Key";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Scan options submitted with a job.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOptions {
    pub resolution: u32,
    pub color_mode: String,
}

/// Body of the job creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateJobRequest {
    pub scanner_id: String,
    pub options: ScanOptions,
    pub destination_folder_id: Uuid,
}

/// Lifecycle states reported by the job endpoint.
///
/// The ingestion pipeline may grow states; anything unrecognised decodes to
/// `Unknown` and keeps the poll loop going instead of failing the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A scan job as returned by the API.  Extra response fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanJob {
    pub id: String,
    pub status: JobStatus,
}

// ---------------------------------------------------------------------------
// ScannerApi
// ---------------------------------------------------------------------------

/// The scanner-jobs API surface the harness depends on.
#[async_trait]
pub trait ScannerApi: Send + Sync {
    /// Submit a new scan job.
    async fn create_job(&self, request: &CreateJobRequest) -> Result<ScanJob, ClientError>;

    /// Fetch the current status of a job.
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ClientError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// `ScannerApi` over reqwest with a pooled client and a default API key
/// header shared by every request.
pub struct HttpScannerApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScannerApi {
    /// Build a client for `base_url` (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ScannerApi for HttpScannerApi {
    async fn create_job(&self, request: &CreateJobRequest) -> Result<ScanJob, ClientError> {
        let response = self
            .client
            .post(format!("{}/scanners/jobs", self.base_url))
            .json(request)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json::<ScanJob>().await?)
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ClientError> {
        let job = self
            .client
            .get(format!("{}/scanners/jobs/{job_id}", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<ScanJob>()
            .await?;

        Ok(job.status)
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_serialises_to_the_wire_shape() {
        let folder = Uuid::new_v4();
        let request = CreateJobRequest {
            scanner_id: "test-scanner-id".into(),
            options: ScanOptions {
                resolution: 300,
                color_mode: "color".into(),
            },
            destination_folder_id: folder,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "scanner_id": "test-scanner-id",
                "options": { "resolution": 300, "color_mode": "color" },
                "destination_folder_id": folder.to_string(),
            })
        );
    }

    #[test]
    fn job_status_decodes_known_states() {
        for (text, expected) in [
            ("queued", JobStatus::Queued),
            ("running", JobStatus::Running),
            ("completed", JobStatus::Completed),
            ("failed", JobStatus::Failed),
        ] {
            let status: JobStatus = serde_json::from_value(json!(text)).unwrap();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn unknown_job_status_is_tolerated() {
        let status: JobStatus = serde_json::from_value(json!("archived")).unwrap();
        assert_eq!(status, JobStatus::Unknown);
    }

    #[test]
    fn job_body_ignores_extra_fields() {
        let job: ScanJob = serde_json::from_value(json!({
            "id": "abc-123",
            "status": "queued",
            "scanner_id": "s1",
            "created_at": "2026-01-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(job.id, "abc-123");
        assert_eq!(job.status, JobStatus::Queued);
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let api = HttpScannerApi::new("http://localhost:8000/api/v1/", "key").unwrap();
        assert_eq!(api.base_url, "http://localhost:8000/api/v1");
    }
}
