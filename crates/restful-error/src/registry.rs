//! Static registry of well-known HTTP error statuses
//!
//! Built once on first access from [`ErrorKind`] and immutable afterwards,
//! so the whole mapping is handed out by shared reference and is safe for
//! unsynchronized concurrent reads.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::kind::ErrorKind;

/// Descriptive record for one registry entry
///
/// Serializes to the canonical JSON shape (`errorType`, `HTTPStatusCode`,
/// `errorName`, `description`) for callers assembling response bodies;
/// this crate itself never writes it anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorTypeRecord {
    /// Stable identifier, always equal to the registry key
    pub error_type: &'static str,
    /// Associated HTTP status code
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
    /// Human-readable short label
    pub error_name: &'static str,
    /// Long-form explanation from HTTP specification text; may be empty
    pub description: &'static str,
}

impl ErrorKind {
    /// Registry record for this kind
    pub fn record(self) -> ErrorTypeRecord {
        ErrorTypeRecord {
            error_type: self.as_str(),
            http_status_code: self.http_status_code(),
            error_name: self.error_name(),
            description: self.description(),
        }
    }
}

static ERROR_TYPES: LazyLock<IndexMap<&'static str, ErrorTypeRecord>> =
    LazyLock::new(|| ErrorKind::iter().map(|kind| (kind.as_str(), kind.record())).collect());

/// The full registry, keyed by error-type identifier
///
/// Entries keep their definition order (status code ascending). There is
/// no mutation or insertion API; the accessor cannot fail.
pub fn error_types() -> &'static IndexMap<&'static str, ErrorTypeRecord> {
    &ERROR_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_matches_its_record_error_type() {
        let registry = error_types();
        assert_eq!(registry.len(), 45);
        for (key, record) in registry {
            assert_eq!(*key, record.error_type);
        }
    }

    #[test]
    fn documented_status_code_pairs() {
        let expected: [(&str, u16); 45] = [
            ("BAD_REQUEST", 400),
            ("UNAUTHORIZED", 401),
            ("FORBIDDEN", 403),
            ("NOT_FOUND", 404),
            ("METHOD_NOT_ALLOWED", 405),
            ("NOT_ACCEPTABLE", 406),
            ("PROXY_AUTHENTICATION_REQUIRED", 407),
            ("REQUEST_TIMEOUT", 408),
            ("CONFLICT", 409),
            ("GONE", 410),
            ("LENGTH_REQUIRED", 411),
            ("PRECONDITION_FAILED", 412),
            ("REQUEST_ENTITY_TOO_LARGE", 413),
            ("REQUEST_URI_TOO_LONG", 414),
            ("UNSUPPORTED_MEDIA_TYPE", 415),
            ("REQUESTED_RANGE_NOT_SATISFIABLE", 416),
            ("EXPECTATION_FAILED", 417),
            ("I_AM_A_TEAPOT", 418),
            ("ENHANCE_YOUR_CALM", 420),
            ("UNPROCESSABLE_ENTITY", 422),
            ("LOCKED", 423),
            ("FAILED_DEPENDENCY", 424),
            ("RESERVED_FOR_WEBDAV", 425),
            ("UPGRADE_REQUIRED", 426),
            ("PRECONDITION_REQUIRED", 428),
            ("TOO_MANY_REQUESTS", 429),
            ("REQUEST_HEADER_FIELDS_TOO_LARGE", 431),
            ("NO_RESPONSE", 444),
            ("RETRY_WITH", 449),
            ("BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS", 450),
            ("CLIENT_CLOSED_REQUEST", 499),
            ("INTERNAL_SERVER_ERROR", 500),
            ("NOT_IMPLEMENTED", 501),
            ("BAD_GATEWAY", 502),
            ("SERVICE_UNAVAILABLE", 503),
            ("GATEWAY_TIMEOUT", 504),
            ("HTTP_VERSION_NOT_SUPPORTED", 505),
            ("VARIANT_ALSO_NEGOTIATES", 506),
            ("INSUFFICIENT_STORAGE", 507),
            ("LOOP_DETECTED", 508),
            ("BANDWIDTH_LIMIT_EXCEEDED", 509),
            ("NOT_EXTENDED", 510),
            ("NETWORK_AUTHENTICATION_REQUIRED", 511),
            ("NETWORK_READ_TIMEOUT_ERROR", 598),
            ("NETWORK_CONNECT_TIMEOUT_ERROR", 599),
        ];

        let registry = error_types();
        for (key, code) in expected {
            assert_eq!(registry[key].http_status_code, code, "{key}");
        }
        // ascending definition order is preserved
        let keys: Vec<&str> = registry.keys().copied().collect();
        let expected_keys: Vec<&str> = expected.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, expected_keys);
    }

    #[test]
    fn repeated_access_returns_the_same_mapping() {
        assert!(std::ptr::eq(error_types(), error_types()));
        assert_eq!(error_types(), error_types());
    }

    #[test]
    fn only_network_connect_timeout_has_an_empty_description() {
        for record in error_types().values() {
            if record.error_type == "NETWORK_CONNECT_TIMEOUT_ERROR" {
                assert!(record.description.is_empty());
            } else {
                assert!(!record.description.is_empty(), "{}", record.error_type);
            }
        }
    }

    #[test]
    fn record_serializes_with_canonical_field_names() {
        let json = serde_json::to_value(error_types()["NOT_FOUND"]).expect("record serializes");
        assert_eq!(json["errorType"], "NOT_FOUND");
        assert_eq!(json["HTTPStatusCode"], 404);
        assert_eq!(json["errorName"], "Not Found");
        assert!(
            json["description"]
                .as_str()
                .expect("description is a string")
                .starts_with("The server has not found anything matching the Request-URI.")
        );
    }
}
