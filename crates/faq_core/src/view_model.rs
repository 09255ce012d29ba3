use crate::{JobId, Phase};

/// Everything the page shows, derived from [`crate::AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub phase: Phase,
    pub job_id: Option<JobId>,
    pub progress_percent: u8,
    pub status_text: String,
    pub busy_visible: bool,
    pub busy_label: String,
    pub submit_enabled: bool,
    /// Error region text; the region is hidden when `None`.
    pub error: Option<String>,
    pub dirty: bool,
}

/// Path of the result view for a finished job.
pub fn result_path(job_id: &str) -> String {
    format!("/result/{job_id}")
}
