//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `TextCompletion` backend.
///
/// Tutoring services log these and fall back to placeholder text; they are
/// only visible to code that calls a completion backend directly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompletionError {
    #[error("text completion returned an empty response")]
    EmptyResponse,
    #[error("text completion request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("scripted failure: {0}")]
    Scripted(String),
}

/// Errors emitted by `InterviewEngine`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InterviewError {
    #[error("no interview in progress")]
    NotStarted,
}
