//! Structured errors returned in place of a response body.
//!
//! Every dispatch produces a [`DispatchResult`]: the serialized body on
//! success or a [`StructuredError`] otherwise, never both. The constructors
//! here form the closed taxonomy used by the dispatcher and by resource
//! implementations. Each comes in two forms: an associated function on
//! [`StructuredError`] building the error value, and a free function of the
//! same name returning a ready `Err` so resources can `return error::not_found();`.

use std::fmt;

use http::StatusCode;
use thiserror::Error;


/// Outcome of a dispatch or a resource call.
pub type DispatchResult = Result<String, StructuredError>;

/// Uniform error carrier: HTTP status, optional redirect location, message.
///
/// When a location is present the transport is expected to surface it as a
/// `Location` header alongside the status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub struct StructuredError {
    status: StatusCode,
    location: Option<String>,
    message: String,
}

impl StructuredError {
    /// Creates an error with an arbitrary status and message.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            message: message.into(),
        }
    }

    /// Client input made no sense; `detail` is appended to the message.
    #[must_use]
    pub fn bad_request(detail: impl fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("BadRequest - {detail}"))
    }

    /// Success at the protocol level, but semantically empty.
    #[must_use]
    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, "No content")
    }

    /// Nothing is bound at the requested path, or the item does not exist.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    /// The path is known but the resource cannot serve the operation.
    #[must_use]
    pub fn not_implemented() -> Self {
        Self::new(StatusCode::NOT_IMPLEMENTED, "Not implemented")
    }

    /// Wraps the description of an underlying failure.
    #[must_use]
    pub fn internal_error(error: impl fmt::Display) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    }

    /// Attaches a redirect location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// HTTP status of the error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP status as its numeric code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Redirect location, when one was attached.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Plain-text message for the response body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `Err` form of [`StructuredError::bad_request`].
pub fn bad_request(detail: impl fmt::Display) -> DispatchResult {
    Err(StructuredError::bad_request(detail))
}

/// `Err` form of [`StructuredError::no_content`].
pub fn no_content() -> DispatchResult {
    Err(StructuredError::no_content())
}

/// `Err` form of [`StructuredError::not_found`].
pub fn not_found() -> DispatchResult {
    Err(StructuredError::not_found())
}

/// `Err` form of [`StructuredError::not_implemented`].
pub fn not_implemented() -> DispatchResult {
    Err(StructuredError::not_implemented())
}

/// `Err` form of [`StructuredError::internal_error`].
pub fn internal_error(error: impl fmt::Display) -> DispatchResult {
    Err(StructuredError::internal_error(error))
}
