use std::time::Duration;

use crate::view_model::UiState;
use crate::{ControllerConfig, JobId, JobSnapshot};

const STARTING_MESSAGE: &str = "Starting FAQ generation...";
const COMPLETED_MESSAGE: &str = "FAQ generation complete! Redirecting...";
const BUSY_SUBMITTING: &str = "Submitting...";
const BUSY_PROCESSING: &str = "Processing...";
const BUSY_REDIRECTING: &str = "Redirecting...";

/// Client-perceived lifecycle of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Polling,
    Redirecting,
    Errored,
}

impl Phase {
    /// Only an idle or errored form has its submit control enabled.
    pub fn accepts_submit(self) -> bool {
        matches!(self, Phase::Idle | Phase::Errored)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: ControllerConfig,
    phase: Phase,
    job_id: Option<JobId>,
    progress: u8,
    status_text: String,
    busy_label: Option<&'static str>,
    error: Option<String>,
    last_poll_delay: Option<Duration>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> UiState {
        UiState {
            phase: self.phase,
            job_id: self.job_id.clone(),
            progress_percent: self.progress,
            status_text: self.status_text.clone(),
            busy_visible: self.busy_label.is_some(),
            busy_label: self.busy_label.unwrap_or_default().to_string(),
            submit_enabled: self.phase.accepts_submit(),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_polling(&self, job_id: &str) -> bool {
        self.phase == Phase::Polling && self.job_id.as_deref() == Some(job_id)
    }

    pub(crate) fn begin_submit(&mut self) {
        self.phase = Phase::Submitting;
        self.job_id = None;
        self.progress = 0;
        self.status_text = STARTING_MESSAGE.to_string();
        self.busy_label = Some(BUSY_SUBMITTING);
        self.error = None;
        self.last_poll_delay = None;
        self.mark_dirty();
    }

    pub(crate) fn start_polling(&mut self, job_id: JobId) {
        self.phase = Phase::Polling;
        self.job_id = Some(job_id);
        self.mark_dirty();
    }

    /// Records an in-flight snapshot and returns the delay before the next poll.
    ///
    /// The delay never shrinks within one job, even if reported progress does.
    pub(crate) fn apply_progress(&mut self, snapshot: &JobSnapshot) -> Duration {
        self.progress = snapshot.percent();
        self.status_text = snapshot.message.clone();
        self.busy_label = Some(BUSY_PROCESSING);

        let mut delay = self.config.poll.delay_for(self.progress);
        if let Some(previous) = self.last_poll_delay {
            delay = delay.max(previous);
        }
        self.last_poll_delay = Some(delay);
        self.mark_dirty();
        delay
    }

    pub(crate) fn complete(&mut self) {
        self.phase = Phase::Redirecting;
        self.progress = 100;
        self.status_text = COMPLETED_MESSAGE.to_string();
        self.busy_label = Some(BUSY_REDIRECTING);
        self.mark_dirty();
    }

    /// Refuses a submission before any request; forgets the previous job.
    pub(crate) fn reject_input(&mut self, message: String) {
        self.job_id = None;
        self.progress = 0;
        self.status_text.clear();
        self.last_poll_delay = None;
        self.fail(message);
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Errored;
        self.busy_label = None;
        self.error = Some(message);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
