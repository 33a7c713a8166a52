//! Error Types
//!
//! Gateway failures, client-side validation failures, and the wrapper
//! the controllers turn into inline messages.

use thiserror::Error;

/// A REST call that did not succeed
///
/// `resource` is the singular resource label (`"user"`, `"post"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("failed to fetch {resource}s: {detail}")]
    Fetch { resource: &'static str, detail: String },
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: u32 },
    #[error("failed to create {resource}: {detail}")]
    Create { resource: &'static str, detail: String },
    #[error("failed to update {resource}: {detail}")]
    Update { resource: &'static str, detail: String },
    #[error("failed to delete {resource}: {detail}")]
    Delete { resource: &'static str, detail: String },
}

impl GatewayError {
    /// Fixed message shown in the error banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch { resource, .. } => format!("Failed to fetch {resource}s"),
            Self::NotFound { resource, .. } => format!("Failed to fetch {resource}"),
            Self::Create { resource, .. } | Self::Update { resource, .. } => {
                format!("Failed to save {resource}")
            }
            Self::Delete { resource, .. } => format!("Failed to delete {resource}"),
        }
    }
}

/// A form field that failed its shape check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name can only contain letters and spaces")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Gateway(err) => err.user_message(),
            Self::Validation(err) => err.to_string(),
        }
    }
}
