// Re-export the API module components
pub use self::{
    client::{ApiClient, API_KEY_HEADER},
    errors::ApiClientError,
    models::Task,
    polling::{poll_task_status, POLL_INTERVAL},
    types::TaskStatus,
};

// Module declarations
mod client;
mod errors;
mod models;
mod polling;
mod types;
