//! FAQ controller engine: job API client and effect execution.
mod api;
mod controller;
mod page;
mod types;

pub use api::{ClientSettings, JobApi, ReqwestJobApi};
pub use controller::{Controller, Outcome};
pub use page::PageSink;
pub use types::{ApiError, GenerateRequest, GenerateResponse, StatusResponse};
