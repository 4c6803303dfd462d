//! Error types for catalog extraction.
//!
//! Authentication, lookup and fetch failures propagate to the caller and abort
//! the enclosing operation. [`NormalizationError`] is the only error that is
//! recovered locally: the affected field is left empty and the record is kept.

use thiserror::Error;

/// Top-level error returned by the client and catalog operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A search returned zero matches.
    #[error("No {kind} found for '{query}'")]
    NotFound { kind: &'static str, query: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures of the client-credentials token exchange.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A credential is absent or blank. Raised before any request is sent.
    #[error("Missing credential {0}")]
    MissingCredential(&'static str),

    #[error("Token request failed: {0}")]
    Transport(String),

    #[error("Token endpoint rejected the credentials with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

/// A single or paginated fetch that did not produce a usable response.
#[derive(Error, Debug)]
#[error(
    "Request to {url}{} failed: {kind}",
    .offset.map(|o| format!(" (offset {o})")).unwrap_or_default()
)]
pub struct FetchError {
    pub url: String,
    /// Page offset of the failing request when it was part of a paginated walk.
    pub offset: Option<u32>,
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(url: impl Into<String>, offset: Option<u32>, kind: FetchErrorKind) -> Self {
        FetchError {
            url: url.into(),
            offset,
            kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    #[error("unexpected status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("cannot decode response: {0}")]
    Decode(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// A raw field that could not be turned into its normalized form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Unrecognised release date '{0}'")]
    ReleaseDate(String),
}

/// Error raised by a [`Transport`](crate::spotify::Transport) implementation.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}
