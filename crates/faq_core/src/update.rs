use std::time::Duration;

use crate::view_model::result_path;
use crate::{validate_url, AppState, Effect, FormInput, JobStatus, Msg, Phase};

/// Shown when job creation fails without a usable message.
pub const SUBMIT_FAILED: &str = "Failed to start generation";
/// Shown when a job fails or polling breaks without a usable message.
pub const GENERATION_FAILED: &str = "Generation failed";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Submitted(input) => {
            if !state.phase().accepts_submit() {
                return (state, Vec::new());
            }
            match validate_url(&input.url) {
                Err(err) => {
                    state.reject_input(err.to_string());
                    Vec::new()
                }
                Ok(_) => {
                    state.begin_submit();
                    let input = FormInput {
                        url: input.url.trim().to_string(),
                        ..input
                    };
                    vec![Effect::CreateJob { input }]
                }
            }
        }
        Msg::JobCreated { job_id } => {
            if state.phase() != Phase::Submitting {
                return (state, Vec::new());
            }
            state.start_polling(job_id.clone());
            vec![Effect::SchedulePoll {
                job_id,
                delay: Duration::ZERO,
            }]
        }
        Msg::SubmitFailed { error } => {
            if state.phase() != Phase::Submitting {
                return (state, Vec::new());
            }
            state.fail(message_or(error, SUBMIT_FAILED));
            Vec::new()
        }
        Msg::StatusReceived(snapshot) => {
            if !state.is_polling(&snapshot.job_id) {
                return (state, Vec::new());
            }
            match snapshot.status {
                JobStatus::Completed => {
                    state.complete();
                    let path = result_path(&snapshot.job_id);
                    vec![Effect::Navigate {
                        job_id: snapshot.job_id,
                        path,
                        delay: state.config().redirect_delay,
                    }]
                }
                JobStatus::Failed => {
                    state.fail(message_or(snapshot.error, GENERATION_FAILED));
                    Vec::new()
                }
                JobStatus::Pending | JobStatus::Running | JobStatus::Other(_) => {
                    let delay = state.apply_progress(&snapshot);
                    vec![Effect::SchedulePoll {
                        job_id: snapshot.job_id,
                        delay,
                    }]
                }
            }
        }
        Msg::PollFailed { job_id, error } => {
            if !state.is_polling(&job_id) {
                return (state, Vec::new());
            }
            state.fail(message_or(error, GENERATION_FAILED));
            Vec::new()
        }
    };

    (state, effects)
}

fn message_or(error: Option<String>, fallback: &str) -> String {
    error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
