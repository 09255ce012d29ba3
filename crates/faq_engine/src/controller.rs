use std::collections::VecDeque;

use faq_core::{
    update, AppState, ControllerConfig, Effect, FormInput, JobId, Msg, GENERATION_FAILED,
};
use faq_logging::{faq_debug, faq_info, faq_warn};

use crate::{JobApi, PageSink};

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The job completed and the page navigated to its result view.
    Redirected { job_id: JobId, location: String },
    /// Validation, submission or polling failed; the form is editable again.
    Errored {
        job_id: Option<JobId>,
        message: String,
    },
    /// The form was not accepting submissions.
    Ignored,
}

/// Drives [`faq_core::update`] by performing its effects one at a time.
///
/// Effects run sequentially on the calling task, so there is never more than
/// one request or timer outstanding.
pub struct Controller<A, P> {
    api: A,
    page: P,
    state: AppState,
}

impl<A: JobApi, P: PageSink> Controller<A, P> {
    pub fn new(api: A, page: P, config: ControllerConfig) -> Self {
        Self {
            api,
            page,
            state: AppState::with_config(config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Submits the form and runs until the job redirects or errors.
    pub async fn submit(&mut self, input: FormInput) -> Outcome {
        let mut pending: VecDeque<Effect> = self.dispatch(Msg::Submitted(input)).into();
        if pending.is_empty() && !self.state.phase().accepts_submit() {
            return Outcome::Ignored;
        }

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::CreateJob { input } => {
                    faq_info!(
                        "CreateJob url={} platform={} language={} faq_count={}",
                        input.url,
                        input.platform,
                        input.language,
                        input.faq_count
                    );
                    let msg = match self.api.create_job(&input).await {
                        Ok(job_id) => {
                            faq_info!("Job created job_id={}", job_id);
                            Msg::JobCreated { job_id }
                        }
                        Err(err) => {
                            faq_warn!("Job creation failed: {}", err);
                            Msg::SubmitFailed {
                                error: err.user_message(),
                            }
                        }
                    };
                    pending.extend(self.dispatch(msg));
                }
                Effect::SchedulePoll { job_id, delay } => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    let msg = match self.api.job_status(&job_id).await {
                        Ok(mut snapshot) => {
                            // The snapshot answers the job we asked about, whatever the API echoed.
                            snapshot.job_id = job_id.clone();
                            faq_debug!(
                                "Status job_id={} status={:?} progress={}",
                                job_id,
                                snapshot.status,
                                snapshot.progress
                            );
                            Msg::StatusReceived(snapshot)
                        }
                        Err(err) => {
                            faq_warn!("Polling job {} failed: {}", job_id, err);
                            Msg::PollFailed {
                                job_id,
                                error: err.user_message(),
                            }
                        }
                    };
                    pending.extend(self.dispatch(msg));
                }
                Effect::Navigate {
                    job_id,
                    path,
                    delay,
                } => {
                    tokio::time::sleep(delay).await;
                    let location = self.api.resolve(&path);
                    faq_info!("Job {} completed, navigating to {}", job_id, location);
                    self.page.navigate(&location);
                    return Outcome::Redirected { job_id, location };
                }
            }
        }

        let message = self.state.error().unwrap_or(GENERATION_FAILED).to_string();
        faq_warn!("Submission ended with error: {}", message);
        Outcome::Errored {
            job_id: self.state.job_id().map(ToOwned::to_owned),
            message,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        if state.consume_dirty() {
            self.page.render(&view);
        }
        self.state = state;
        effects
    }
}
