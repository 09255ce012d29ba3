use std::time::Duration;

use faq_core::{FormInput, JobId, JobSnapshot};
use faq_logging::faq_debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::types::ErrorBody;
use crate::{ApiError, GenerateRequest, GenerateResponse, StatusResponse};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Origin and optional path prefix of the service.
    ///
    /// API endpoints keep the prefix (`/tools/` gives `/tools/generate`), while
    /// the site-absolute result path `/result/{id}` resolves against the origin
    /// only, as a browser would.
    pub base_url: Url,
    pub connect_timeout: Duration,
    /// Whole-request limit; `None` lets a hanging request wait forever.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:5000/").expect("static base url"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The server's job endpoints, as seen by the controller.
#[async_trait::async_trait]
pub trait JobApi: Send + Sync {
    async fn create_job(&self, input: &FormInput) -> Result<JobId, ApiError>;

    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot, ApiError>;

    /// Turns a site-relative path into the location to navigate to.
    fn resolve(&self, path: &str) -> String {
        path.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestJobApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestJobApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        if settings.base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(settings.base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.settings.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl JobApi for ReqwestJobApi {
    async fn create_job(&self, input: &FormInput) -> Result<JobId, ApiError> {
        let url = self.endpoint(&["generate"])?;
        let body = serde_json::to_vec(&GenerateRequest::from(input))
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        faq_debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let parsed: GenerateResponse = read_json(response).await?;
        let job_id = parsed.job_id.trim().to_string();
        if job_id.is_empty() {
            return Err(ApiError::Decode("response carried an empty job_id".into()));
        }
        Ok(job_id)
    }

    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot, ApiError> {
        if job_id.is_empty() {
            return Err(ApiError::InvalidJobId(job_id.to_string()));
        }
        let url = self.endpoint(&["status", job_id])?;
        faq_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let parsed: StatusResponse = read_json(response).await?;
        Ok(parsed.into_snapshot(job_id.to_string()))
    }

    fn resolve(&self, path: &str) -> String {
        match self.settings.base_url.join(path) {
            Ok(url) => url.to_string(),
            Err(_) => path.to_string(),
        }
    }
}

/// Reads the body and decodes it, turning non-2xx statuses into `Rejected`.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty());
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
