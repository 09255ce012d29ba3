pub type JobId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    /// Any status string the server reports that is not listed above.
    Other(String),
}

impl JobStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => JobStatus::Pending,
            "running" => JobStatus::Running,
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            other => JobStatus::Other(other.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Read-only view of a server job, as returned by one status poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSnapshot {
    pub job_id: JobId,
    pub status: JobStatus,
    pub progress: i64,
    pub message: String,
    pub error: Option<String>,
}

impl JobSnapshot {
    /// Reported progress clamped into 0..=100.
    pub fn percent(&self) -> u8 {
        self.progress.clamp(0, 100) as u8
    }
}
