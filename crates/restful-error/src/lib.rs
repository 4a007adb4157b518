//! Typed RESTful error values with a registry of well-known HTTP error statuses
//!
//! Two pieces, usable independently:
//! - [`RestfulError`]: an error carrier with a machine-readable type tag,
//!   HTTP status code, long-form description, client-safe message, and an
//!   optional wrapped source error
//! - [`error_types`]: a static registry mapping identifiers like
//!   `NOT_FOUND` to their status code, label, and HTTP-specification
//!   description
//!
//! The crate performs no transport and never serializes the error itself;
//! callers decide how an error value maps to an actual HTTP response.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod kind;
pub mod registry;

pub use error::{ErrorOptions, HttpError, RestfulError, SourceError};
pub use kind::ErrorKind;
pub use registry::{ErrorTypeRecord, error_types};
