use thiserror::Error;
use url::Url;

use crate::errors::RequestFailure;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E001] Invalid base URL: {0}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Example: https://api.checknumber.ai\n  • Ensure the URL includes the protocol (http:// or https://)")]
    CannotBeBase(Url),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Failure(#[from] RequestFailure),

    #[error("[E003] Failed to decode task response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("[E004] Invalid URL format: {0}\n\nSuggestions:\n  • Check the URL format is correct\n  • Use absolute URLs with protocol (http:// or https://)")]
    UrlParse(#[from] url::ParseError),

    #[error("[E005] Task is still in progress\n\nSuggestions:\n  • Wait a moment before checking again\n  • Use submit --watch to poll until completion\n  • Re-run the status command later")]
    InProgress,
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CannotBeBase(_) => "E001",
            Self::Failure(f) => f.error_code(),
            Self::Decode { .. } => "E003",
            Self::UrlParse(_) => "E004",
            Self::InProgress => "E005",
            Self::Reqwest(_) | Self::Io(_) => "E999", // Network and file errors get generic code
        }
    }
}
