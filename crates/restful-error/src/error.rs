//! The `RestfulError` carrier and the `HttpError` capability trait

use std::backtrace::Backtrace;
use std::error::Error as StdError;

use http::StatusCode;
use thiserror::Error;

use crate::kind::ErrorKind;

/// An underlying cause wrapped by a [`RestfulError`]
///
/// Opaque to this crate; it is only surfaced through [`StdError::source`].
pub type SourceError = Box<dyn StdError + Send + Sync + 'static>;

/// Trait for domain errors that can be converted to HTTP responses
///
/// The transport layer decides how to map these into actual responses,
/// keeping error values decoupled from any particular HTTP framework.
pub trait HttpError: StdError {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `NOT_FOUND`)
    fn error_type(&self) -> &str;

    /// Long-form explanation of the error condition
    ///
    /// Named to avoid colliding with the deprecated
    /// `std::error::Error::description` inherited from the supertrait.
    fn error_description(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

const DEFAULT_ERROR_TYPE: &str = "UNKNOWN_INTERNAL_ERROR";
const DEFAULT_STATUS_CODE: u16 = 500;
const DEFAULT_DESCRIPTION: &str =
    "The server encountered an unknown internal error. Please retry the request.";
const DEFAULT_MESSAGE: &str = "Sorry carried out request has generated an unknown error.";

/// Loosely-typed options for building a [`RestfulError`]
///
/// Every field is optional and defaults independently. Construction from
/// `ErrorOptions::default()` yields the generic unknown-internal-error
/// instance.
#[derive(Debug, Default)]
pub struct ErrorOptions {
    /// Error-type identifier (e.g. `NOT_FOUND`)
    pub error_type: Option<String>,
    /// HTTP status code
    pub http_status_code: Option<u16>,
    /// Long-form explanation
    pub description: Option<String>,
    /// Underlying cause to wrap
    pub source_error: Option<SourceError>,
    /// Message safe to expose to API consumers
    pub message: Option<String>,
}

impl From<ErrorKind> for ErrorOptions {
    fn from(kind: ErrorKind) -> Self {
        Self {
            error_type: Some(kind.as_str().to_owned()),
            http_status_code: Some(kind.http_status_code()),
            description: Some(kind.description().to_owned()),
            source_error: None,
            message: None,
        }
    }
}

/// A typed RESTful error occurrence
///
/// Carries everything a caller needs to turn an application failure into
/// an HTTP response: a machine-readable type tag, a status code, a
/// long-form description, a client-safe message, and optionally the
/// underlying cause. A backtrace is captured at construction for
/// diagnostics (best-effort; empty when the platform or environment does
/// not provide one).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RestfulError {
    error_type: String,
    http_status_code: u16,
    description: String,
    #[source]
    source_error: Option<SourceError>,
    message: String,
    backtrace: Trace,
}

// Keeps the field opaque to the error derive: a bare `Backtrace` field
// would make it generate a `provide` impl that needs the unstable
// `error_generic_member_access` feature.
#[derive(Debug)]
struct Trace(Backtrace);

impl RestfulError {
    /// Fixed category name shared by every instance
    pub const NAME: &'static str = "RESTfulError";

    /// Build an error from options; never fails
    ///
    /// Each field falls back to its default independently. Empty strings
    /// and a zero status code are treated the same as an absent field, so
    /// a partial or degenerate option set still produces a fully
    /// populated instance.
    pub fn new(options: ErrorOptions) -> Self {
        Self {
            error_type: options
                .error_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_TYPE.to_owned()),
            http_status_code: options
                .http_status_code
                .filter(|&code| code != 0)
                .unwrap_or(DEFAULT_STATUS_CODE),
            description: options
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            source_error: options.source_error,
            message: options
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned()),
            backtrace: Trace(Backtrace::capture()),
        }
    }

    /// Error-type identifier
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// HTTP status code as supplied (or defaulted), without range checks
    pub const fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Long-form explanation
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Client-safe message; also the `Display` rendering
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source_error.as_deref()
    }

    /// Backtrace captured at construction
    ///
    /// Disabled (and cheap) unless the environment enables capture, e.g.
    /// via `RUST_BACKTRACE=1`.
    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace.0
    }
}

impl Default for RestfulError {
    fn default() -> Self {
        Self::new(ErrorOptions::default())
    }
}

impl From<ErrorKind> for RestfulError {
    /// Build an instance from a registry entry
    ///
    /// Type, status code, and description come from the registry record;
    /// the message stays at its default. Kinds with an empty registry
    /// description fall back to the default description.
    fn from(kind: ErrorKind) -> Self {
        Self::new(ErrorOptions::from(kind))
    }
}

impl HttpError for RestfulError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn error_description(&self) -> &str {
        &self.description
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }
}
