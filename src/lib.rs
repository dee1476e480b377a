//! # CheckNumber Bulk Verification Client
//!
//! A Rust client for the CheckNumber bulk account verification API.
//! Uploading an input file creates an asynchronous verification task on
//! the remote service; the task is then observed through a status
//! endpoint until it reaches a terminal state.
//!
//! ## Features
//!
//! - **Task Submission**: Upload an input file as multipart form data
//! - **Status Polling**: Watch a task until it is exported or has failed
//! - **Result Download**: Fetch the exported result file once available
//! - **Type Safety**: Strong typing for task status and API credentials
//! - **Error Handling**: Error types with actionable suggestions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use checknumber_verifier::{api::ApiClient, api_key::ApiKey};
//! use url::Url;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an API client
//! let client = ApiClient::new(
//!     Url::parse("https://api.checknumber.ai")?,
//!     ApiKey::new("your-api-key")?,
//! )?;
//!
//! // Upload an input file, one account per line
//! let task = client.upload_file("input.txt")?;
//! println!("task {} is {}", task.task_id(), task.status());
//! # Ok(())
//! # }
//! ```

/// API client and types for interacting with the verification service
pub mod api;

/// Type-safe API key handling and validation
pub mod api_key;

/// Shared error types
pub mod errors;

/// Input file construction helpers
pub mod input;

/// Terminal progress indicators
pub mod progress;
