//! Error taxonomy and its presentation
//!
//! Errors are classified once, where they are raised. Formatting only asks
//! an error how it should be shown.

use thiserror::Error;

/// Errors raised while preparing news output
#[derive(Error, Debug)]
pub enum NewsError {
    /// The request was malformed; the message is safe to show as-is
    #[error("{0}")]
    InvalidQuery(String),

    /// The upstream news provider rejected the request
    #[error("{message}")]
    Upstream {
        /// Provider error code (e.g., "apiKeyInvalid", "rateLimited")
        code: String,
        /// Provider error message
        message: String,
    },

    /// The article payload was not valid JSON
    #[error("Invalid article payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// How an error is shown to the end user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPresentation {
    /// Shown verbatim
    RecoverableMessage(String),
    /// Shown wrapped, as reported by the provider
    ExternalServiceError(String),
    /// Replaced by a generic message
    InternalError,
}

impl NewsError {
    /// Presentation kind for this error
    #[must_use]
    pub fn presentation(&self) -> ErrorPresentation {
        match self {
            Self::InvalidQuery(message) => ErrorPresentation::RecoverableMessage(message.clone()),
            Self::Upstream { message, .. } => {
                ErrorPresentation::ExternalServiceError(message.clone())
            }
            Self::Json(_) => ErrorPresentation::InternalError,
        }
    }
}

impl ErrorPresentation {
    /// Classify any error by looking for a [`NewsError`] in its source chain.
    ///
    /// Errors without one are internal.
    #[must_use]
    pub fn classify(error: &anyhow::Error) -> Self {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<NewsError>())
            .map_or(Self::InternalError, NewsError::presentation)
    }
}
