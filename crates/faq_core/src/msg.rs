#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the form with the current field values.
    Submitted(crate::FormInput),
    /// Server accepted the job-creation request.
    JobCreated { job_id: crate::JobId },
    /// Job creation was rejected or the request never completed.
    /// `error` carries the server or transport message when one exists.
    SubmitFailed { error: Option<String> },
    /// A status poll returned a snapshot.
    StatusReceived(crate::JobSnapshot),
    /// A status poll could not be completed or decoded.
    PollFailed {
        job_id: crate::JobId,
        error: Option<String>,
    },
}
