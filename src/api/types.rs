use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Task lifecycle status as reported by the status endpoint.
///
/// Only `exported` and `failed` are terminal. The service is free to
/// introduce new in-progress states, those deserialize to `Unknown`
/// and are treated as still running.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Processing,
    Exported,
    Failed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exported | Self::Failed)
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Exported => write!(f, "exported"),
            Self::Failed => write!(f, "failed"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
