//! WhatsApp integration errors

use replybot::DomainError;
use thiserror::Error;

/// Errors from the WhatsApp Cloud API client
///
/// Outbound failures are split by where they happened: before the call
/// (`MissingCredentials`, `Request`), with no response (`NoResponse`), or
/// with an error response (`Api`).
#[derive(Debug, Error)]
pub enum WhatsAppError {
    #[error("Missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("WhatsApp API returned {status}: {body}")]
    Api {
        status: u16,
        message: Option<String>,
        body: String,
    },

    #[error("No response from WhatsApp API: {0}")]
    NoResponse(#[source] reqwest::Error),

    #[error("Failed to build WhatsApp API request: {0}")]
    Request(#[source] reqwest::Error),
}

impl WhatsAppError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err)
        } else {
            Self::NoResponse(err)
        }
    }
}

impl From<WhatsAppError> for DomainError {
    fn from(err: WhatsAppError) -> Self {
        match err {
            WhatsAppError::MissingCredentials(_) => DomainError::Configuration(err.to_string()),
            _ => DomainError::ExternalService(err.to_string()),
        }
    }
}
