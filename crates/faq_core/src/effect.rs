use std::time::Duration;

use crate::{FormInput, JobId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the serialized form to the job-creation endpoint.
    CreateJob { input: FormInput },
    /// Fetch the job status once `delay` has elapsed.
    SchedulePoll { job_id: JobId, delay: Duration },
    /// Load the result view once `delay` has elapsed.
    Navigate {
        job_id: JobId,
        path: String,
        delay: Duration,
    },
}
