//! FAQ form controller core: pure state machine and view-model helpers.
mod effect;
mod form;
mod job;
mod msg;
mod poll;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::{validate_url, FormInput, ValidationError};
pub use job::{JobId, JobSnapshot, JobStatus};
pub use msg::Msg;
pub use poll::{ControllerConfig, PollPolicy};
pub use state::{AppState, Phase};
pub use update::{update, GENERATION_FAILED, SUBMIT_FAILED};
pub use view_model::{result_path, UiState};
