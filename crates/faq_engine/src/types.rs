use faq_core::{FormInput, JobId, JobSnapshot, JobStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest<'a> {
    pub url: &'a str,
    pub platform: &'a str,
    pub language: &'a str,
    pub faq_count: u32,
}

impl<'a> From<&'a FormInput> for GenerateRequest<'a> {
    fn from(input: &'a FormInput) -> Self {
        Self {
            url: &input.url,
            platform: &input.platform,
            language: &input.language,
            faq_count: input.faq_count,
        }
    }
}

/// Success body of `POST /generate`; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub job_id: String,
}

/// Body of `GET /status/{job_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn into_snapshot(self, job_id: JobId) -> JobSnapshot {
        JobSnapshot {
            job_id,
            status: JobStatus::parse(&self.status),
            progress: self.progress.unwrap_or(0),
            message: self.message.unwrap_or_default(),
            error: self.error,
        }
    }
}

/// Error body the server sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("server responded with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid job id: {0:?}")]
    InvalidJobId(String),
}

impl ApiError {
    /// Text for the page's error region.
    ///
    /// A rejection only yields the server's own message, so the controller
    /// can substitute its generic fallback when there is none.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}
