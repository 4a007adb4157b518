//! Identifiers for the well-known HTTP error statuses
//!
//! Each variant's `Display`/`FromStr` form is the SCREAMING_SNAKE_CASE
//! identifier used as the registry key, so `ErrorKind::NotFound` and the
//! string `"NOT_FOUND"` are interchangeable.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A well-known HTTP error status, 400 through 599
///
/// Covers the standard RFC statuses plus several vendor and de facto
/// codes (nginx, Microsoft, Twitter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 406 Not Acceptable
    NotAcceptable,
    /// 407 Proxy Authentication Required
    ProxyAuthenticationRequired,
    /// 408 Request Timeout
    RequestTimeout,
    /// 409 Conflict
    Conflict,
    /// 410 Gone
    Gone,
    /// 411 Length Required
    LengthRequired,
    /// 412 Precondition Failed
    PreconditionFailed,
    /// 413 Request Entity Too Large
    RequestEntityTooLarge,
    /// 414 Request-URI Too Long
    RequestUriTooLong,
    /// 415 Unsupported Media Type
    UnsupportedMediaType,
    /// 416 Requested Range Not Satisfiable
    RequestedRangeNotSatisfiable,
    /// 417 Expectation Failed
    ExpectationFailed,
    /// 418 I'm a teapot (RFC 2324)
    IAmATeapot,
    /// 420 Enhance Your Calm
    EnhanceYourCalm,
    /// 422 Unprocessable Entity
    UnprocessableEntity,
    /// 423 Locked (WebDAV)
    Locked,
    /// 424 Failed Dependency (WebDAV)
    FailedDependency,
    /// 425 Reserved for WebDAV
    ReservedForWebdav,
    /// 426 Upgrade Required
    UpgradeRequired,
    /// 428 Precondition Required
    PreconditionRequired,
    /// 429 Too Many Requests
    TooManyRequests,
    /// 431 Request Header Fields Too Large
    RequestHeaderFieldsTooLarge,
    /// 444 No Response
    NoResponse,
    /// 449 Retry With (Microsoft)
    RetryWith,
    /// 450 Blocked by Windows Parental Controls (Microsoft)
    BlockedByWindowsParentalControls,
    /// 499 Client Closed Request
    ClientClosedRequest,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
    /// 502 Bad Gateway
    BadGateway,
    /// 503 Service Unavailable
    ServiceUnavailable,
    /// 504 Gateway Timeout
    GatewayTimeout,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
    /// 506 Variant Also Negotiates
    VariantAlsoNegotiates,
    /// 507 Insufficient Storage (WebDAV)
    InsufficientStorage,
    /// 508 Loop Detected (WebDAV)
    LoopDetected,
    /// 509 Bandwidth Limit Exceeded
    BandwidthLimitExceeded,
    /// 510 Not Extended
    NotExtended,
    /// 511 Network Authentication Required
    NetworkAuthenticationRequired,
    /// 598 Network read timeout error
    NetworkReadTimeoutError,
    /// 599 Network connect timeout error
    NetworkConnectTimeoutError,
}

impl ErrorKind {
    /// The registry key for this kind (e.g. `"NOT_FOUND"`)
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Associated HTTP status code
    ///
    /// Kept as a bare `u16` because several entries (420, 444, 449, 450,
    /// 499, 509, 598, 599) have no named `http::StatusCode` constant.
    pub const fn http_status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::NotAcceptable => 406,
            Self::ProxyAuthenticationRequired => 407,
            Self::RequestTimeout => 408,
            Self::Conflict => 409,
            Self::Gone => 410,
            Self::LengthRequired => 411,
            Self::PreconditionFailed => 412,
            Self::RequestEntityTooLarge => 413,
            Self::RequestUriTooLong => 414,
            Self::UnsupportedMediaType => 415,
            Self::RequestedRangeNotSatisfiable => 416,
            Self::ExpectationFailed => 417,
            Self::IAmATeapot => 418,
            Self::EnhanceYourCalm => 420,
            Self::UnprocessableEntity => 422,
            Self::Locked => 423,
            Self::FailedDependency => 424,
            Self::ReservedForWebdav => 425,
            Self::UpgradeRequired => 426,
            Self::PreconditionRequired => 428,
            Self::TooManyRequests => 429,
            Self::RequestHeaderFieldsTooLarge => 431,
            Self::NoResponse => 444,
            Self::RetryWith => 449,
            Self::BlockedByWindowsParentalControls => 450,
            Self::ClientClosedRequest => 499,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
            Self::BadGateway => 502,
            Self::ServiceUnavailable => 503,
            Self::GatewayTimeout => 504,
            Self::HttpVersionNotSupported => 505,
            Self::VariantAlsoNegotiates => 506,
            Self::InsufficientStorage => 507,
            Self::LoopDetected => 508,
            Self::BandwidthLimitExceeded => 509,
            Self::NotExtended => 510,
            Self::NetworkAuthenticationRequired => 511,
            Self::NetworkReadTimeoutError => 598,
            Self::NetworkConnectTimeoutError => 599,
        }
    }

    /// Human-readable short label (e.g. `"Not Found"`)
    pub const fn error_name(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotAcceptable => "Not Acceptable",
            Self::ProxyAuthenticationRequired => "Proxy Authentication Required",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::LengthRequired => "Length Required",
            Self::PreconditionFailed => "Precondition Failed",
            Self::RequestEntityTooLarge => "Request Entity Too Large",
            Self::RequestUriTooLong => "Request-URI Too Long",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::RequestedRangeNotSatisfiable => "Requested Range Not Satisfiable",
            Self::ExpectationFailed => "Expectation Failed",
            Self::IAmATeapot => "I'm a teapoat (RFC 2324)",
            Self::EnhanceYourCalm => "Enhance Your Calm",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::Locked => "Locked (WebDAV)",
            Self::FailedDependency => "Failed Dependency (WebDAV)",
            Self::ReservedForWebdav => "Reserved for WebDAV",
            Self::UpgradeRequired => "Upgrade Required",
            Self::PreconditionRequired => "Precondition Required",
            Self::TooManyRequests => "Too Many Requests",
            Self::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            Self::NoResponse => "No Response",
            Self::RetryWith => "Retry With (Microsoft)",
            Self::BlockedByWindowsParentalControls => "Blocked by Windows Parental Controls (Microsoft)",
            Self::ClientClosedRequest => "Client Closed Request",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
            Self::BadGateway => "Bad Gateway",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::HttpVersionNotSupported => "HTTP Version Not Supported",
            Self::VariantAlsoNegotiates => "Variant Also Negotiates",
            Self::InsufficientStorage => "Insufficient Storage (WebDAV)",
            Self::LoopDetected => "Loop Detected (WebDAV)",
            Self::BandwidthLimitExceeded => "Bandwidth Limit Exceeded",
            Self::NotExtended => "Not Extended",
            Self::NetworkAuthenticationRequired => "Network Authentication Required",
            Self::NetworkReadTimeoutError => "Network read timeout error",
            Self::NetworkConnectTimeoutError => "Network connect timeout error",
        }
    }

    /// Long-form explanation drawn from HTTP specification text
    ///
    /// Empty for codes with no published description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::BadRequest => concat!(
                "The request could not be understood by the server due to malformed syntax. The client SHOULD ",
                "NOT repeat the request without modifications.",
            ),
            Self::Unauthorized => concat!(
                "The request requires user authentication. The response MUST include a WWW-Authenticate header",
                " field containing a challenge applicable to the requested resource. The client MAY repeat the request with",
                " a suitable Authorization header field. If the request already included Authorization credentials, then the",
                " 401 response indicates that authorization has been refused for those credentials. If the 401 response",
                " contains the same challenge as the prior response, and the user agent has already attempted authentication",
                " at least once, then the user SHOULD be presented the entity that was given in the response, since that",
                " entity might include relevant diagnostic information.",
            ),
            Self::Forbidden => concat!(
                "The server understood the request, but is refusing to fulfill it. Authorization will not help",
                " and the request SHOULD NOT be repeated. If the request method was not HEAD and the server wishes to make",
                " public why the request has not been fulfilled, it SHOULD describe the reason for the refusal in the entity.",
                " If the server does not wish to make this information available to the client, the status code 404",
                " (Not Found) can be used instead.",
            ),
            Self::NotFound => concat!(
                "The server has not found anything matching the Request-URI. No indication is given of whether",
                " the condition is temporary or permanent. The 410 (Gone) status code SHOULD be used if the server knows,",
                " through some internally configurable mechanism, that an old resource is permanently unavailable and has no",
                " forwarding address. This status code is commonly used when the server does not wish to reveal exactly why ",
                " the request has been refused, or when no other response is applicable.",
            ),
            Self::MethodNotAllowed => concat!(
                "The method specified in the Request-Line is not allowed for the resource identified by the",
                " Request-URI. The response MUST include an Allow header containing a list of valid methods for the requested",
                " resource.",
            ),
            Self::NotAcceptable => concat!(
                "The resource identified by the request is only capable of generating response entities which ",
                " have content characteristics not acceptable according to the accept headers sent in the request.",
            ),
            Self::ProxyAuthenticationRequired => concat!(
                "This code is similar to 401 (Unauthorized), but indicates that the client must first",
                " authenticate itself with the proxy. The proxy MUST return a Proxy-Authenticate header field containing a",
                " challenge applicable to the proxy for the requested resource. The client MAY repeat the request with a",
                " suitable Proxy-Authorization header field.",
            ),
            Self::RequestTimeout => concat!(
                "The client did not produce a request within the time that the server was prepared to wait. ",
                " The client MAY repeat the request without modifications at any later time.",
            ),
            Self::Conflict => concat!(
                "The request could not be completed due to a conflict with the current state of the resource.",
                " This code is only allowed in situations where it is expected that the user might be able to resolve the ",
                " conflict and resubmit the request. The response body SHOULD include enough information for the user to ",
                " recognize the source of the conflict. Ideally, the response entity would include enough information for the",
                " user or user agent to fix the problem; however, that might not be possible and is not required.",
            ),
            Self::Gone => concat!(
                "The requested resource is no longer available at the server and no forwarding address is",
                " known. This condition is expected to be considered permanent. Clients with link editing capabilities SHOULD",
                " delete references to the Request-URI after user approval. If the server does not know, or has no facility",
                " to determine, whether or not the condition is permanent, the status code 404 (Not Found) SHOULD be used ",
                " instead. This response is cacheable unless indicated otherwise.",
            ),
            Self::LengthRequired => concat!(
                "The server refuses to accept the request without a defined Content- Length. The client MAY",
                " repeat the request if it adds a valid Content-Length header field containing the length of the message-body",
                " in the request message.",
            ),
            Self::PreconditionFailed => concat!(
                "The precondition given in one or more of the request-header fields evaluated to false when it",
                " was tested on the server. This response code allows the client to place preconditions on the current ",
                " resource metainformation (header field data) and thus prevent the requested method from being applied to a",
                " resource other than the one intended.",
            ),
            Self::RequestEntityTooLarge => concat!(
                "The server is refusing to process a request because the request entity is larger than the",
                " server is willing or able to process. The server MAY close the connection to prevent the client from ",
                " continuing the request.",
            ),
            Self::RequestUriTooLong => concat!(
                "The server is refusing to service the request because the Request-URI is longer than the",
                " server is willing to interpret. This rare condition is only likely to occur when a client has improperly",
                " converted a POST request to a GET request with long query information, when the client has descended into",
                " a URI black hole of redirection (e.g., a redirected URI prefix that points to a suffix of itself), or when",
                " the server is under attack by a client attempting to exploit security holes present in some servers using",
                " fixed-length buffers for reading or manipulating the Request-URI.",
            ),
            Self::UnsupportedMediaType => concat!(
                "The server is refusing to service the request because the entity of the request is in a",
                " format not supported by the requested resource for the requested method.",
            ),
            Self::RequestedRangeNotSatisfiable => concat!(
                "A server SHOULD return a response with this status code if a request included a Range",
                " request-header field, and none of the range-specifier values in this field overlap the current extent of ",
                " the selected resource, and the request did not include an If-Range request-header field. (For byte-ranges, ",
                " this means that the first- byte-pos of all of the byte-range-spec values were greater than the current ",
                " length of the selected resource.) When this status code is returned for a byte-range request, the response ",
                " SHOULD include a Content-Range entity-header field specifying the current length of the selected resource.",
                " This response MUST NOT use the multipart/byteranges content- type.",
            ),
            Self::ExpectationFailed => concat!(
                "The expectation given in an Expect request-header field could not be met by this server, or,",
                " if the server is a proxy, the server has unambiguous evidence that the request could not be met by the",
                " next-hop server.",
            ),
            Self::IAmATeapot => concat!(
                "This code was defined in 1998 as one of the traditional IETF April Fools' jokes, in RFC 2324,",
                " Hyper Text Coffee Pot Control Protocol, and is not expected to be implemented by actual HTTP servers.",
            ),
            Self::EnhanceYourCalm => concat!(
                "Returned by the API endpoint when the client is being rate limited. Likely a reference to",
                " this number's association with marijuana. Other services may wish to implement the 429 Too Many Requests ",
                " response code instead.",
            ),
            Self::UnprocessableEntity => concat!(
                "The 422 (Unprocessable Entity) status code means the server understands the content type of",
                " the request entity (hence a 415(Unsupported Media Type) status code is inappropriate), and the syntax of",
                " the request entity is correct (thus a 400 (Bad Request) status code is inappropriate) but was unable to",
                " process the contained instructions. For example, this error condition may occur if an XML request body",
                " contains well-formed (i.e., syntactically correct), but semantically erroneous, XML instructions.",
            ),
            Self::Locked => concat!(
                "The 423 (Locked) status code means the source or destination resource of a method is locked.",
                " This response SHOULD contain an appropriate precondition or postcondition code, such as",
                " 'lock-token-submitted' or 'no-conflicting-lock'.",
            ),
            Self::FailedDependency => concat!(
                "The 424 (Failed Dependency) status code means that the method could not be performed on the",
                " resource because the requested action depended on another action and that action failed.",
            ),
            Self::ReservedForWebdav => concat!(
                "Defined in drafts of WebDAV Advanced Collections Protocol, but not present in Web Distributed",
                " Authoring and Versioning (WebDAV) Ordered Collections Protocol.",
            ),
            Self::UpgradeRequired => concat!(
                "Reliable, interoperable negotiation of Upgrade features requires an unambiguous failure",
                " signal. The 426 Upgrade Required status code allows a server to definitively state the precise protocol",
                " extensions a given resource must be served with.",
            ),
            Self::PreconditionRequired => concat!(
                "The origin server requires the request to be conditional. Intended to prevent the LOST UPDATE",
                " PROBLEM, where a client GETs a resource's state, modifies it, and PUTs it back to the server, when",
                " meanwhile a third party has modified the state on the server, leading to a conflict.",
            ),
            Self::TooManyRequests => concat!(
                "The 429 status code indicates that the user has sent too many requests in a given amount of",
                " time (rate limiting). The response representations SHOULD include details explaining the condition, and MAY",
                " include a Retry-After header indicating how long to wait before making a new request.",
            ),
            Self::RequestHeaderFieldsTooLarge => concat!(
                "The 431 status code indicates that the server is unwilling to process the request because its",
                " header fields are too large. The request MAY be resubmitted after reducing the size of the request header",
                " fields.",
            ),
            Self::NoResponse => concat!(
                "The server returns no information to the client and closes the connection (useful as a",
                " deterrent for malware).",
            ),
            Self::RetryWith => "A Microsoft extension. The request should be retried after performing the appropriate action.",
            Self::BlockedByWindowsParentalControls => concat!(
                "A Microsoft extension. This error is given when Windows Parental Controls are turned on and",
                " are blocking access to the given webpage.",
            ),
            Self::ClientClosedRequest => concat!(
                "This code is introduced to log the case when the connection is closed by client while HTTP",
                " server is processing its request, making server unable to send the HTTP header back.",
            ),
            Self::InternalServerError => "The server encountered an unexpected condition which prevented it from fulfilling the request.",
            Self::NotImplemented => concat!(
                "The server does not support the functionality required to fulfill the request. This is the",
                " appropriate response when the server does not recognize the request method and is not capable of supporting",
                " it for any resource.",
            ),
            Self::BadGateway => concat!(
                "The server, while acting as a gateway or proxy, received an invalid response from the",
                " upstream server it accessed in attempting to fulfill the request.",
            ),
            Self::ServiceUnavailable => concat!(
                "The server is currently unable to handle the request due to a temporary overloading or",
                " maintenance of the server. The implication is that this is a temporary condition which will be alleviated",
                " after some delay. If known, the length of the delay MAY be indicated in a Retry-After header. If no",
                " Retry-After is given, the client SHOULD handle the response as it would for a 500 response.",
            ),
            Self::GatewayTimeout => concat!(
                "The server, while acting as a gateway or proxy, did not receive a timely response from the",
                " upstream server specified by the URI (e.g. HTTP, FTP, LDAP) or some other auxiliary server (e.g. DNS) it",
                " needed to access in attempting to complete the request.",
            ),
            Self::HttpVersionNotSupported => concat!(
                "The server does not support, or refuses to support, the HTTP protocol version that was used",
                " in the request message. The server is indicating that it is unable or unwilling to complete the request",
                " using the same major version as the client, as described in section 3.1, other than with this error",
                " message. The response SHOULD contain an entity describing why that version is not supported and what other",
                " protocols are supported by that server.",
            ),
            Self::VariantAlsoNegotiates => concat!(
                "The 506 status code indicates that the server has an internal configuration error: the chosen",
                " variant resource is configured to engage in transparent content negotiation itself, and is therefore not a",
                " proper end point in the negotiation process.",
            ),
            Self::InsufficientStorage => concat!(
                "The 507 (Insufficient Storage) status code means the method could not be performed on the",
                " resource because the server is unable to store the representation needed to successfully complete the",
                " request. This condition is considered to be temporary. If the request that received this status code was",
                " the result of a user action, the request MUST NOT be repeated until it is requested by a separate user",
                " action.",
            ),
            Self::LoopDetected => concat!(
                "The 508 (Loop Detected) status code indicates that the server terminated an operation because",
                " it encountered an infinite loop while processing a request with Depth: infinity. This status indicates that",
                " the entire operation failed.",
            ),
            Self::BandwidthLimitExceeded => "This status code, while used by many servers, is not specified in any RFCs.",
            Self::NotExtended => concat!(
                "The policy for accessing the resource has not been met in the request. The server should send",
                " back all the information necessary for the client to issue an extended request. It is outside the scope of",
                " this specification to specify how the extensions inform the client.",
            ),
            Self::NetworkAuthenticationRequired => concat!(
                "The 511 status code indicates that the client needs to authenticate to gain network access.",
                " The response representation SHOULD contain a link to a resource that allows the user to submit credentials.",
            ),
            Self::NetworkReadTimeoutError => concat!(
                "This status code is not specified in any RFCs, but is used by some HTTP proxies to signal a",
                " network read timeout behind the proxy to a client in front of the proxy.",
            ),
            Self::NetworkConnectTimeoutError => "",
        }
    }

    /// Whether this is a 4xx client error
    pub const fn is_client_error(self) -> bool {
        let code = self.http_status_code();
        code >= 400 && code < 500
    }

    /// Whether this is a 5xx server error
    pub const fn is_server_error(self) -> bool {
        self.http_status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ErrorKind::iter() {
            let parsed: ErrorKind = kind.as_str().parse().expect("identifier parses back");
            assert_eq!(parsed, kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn screaming_snake_case_spellings() {
        assert_eq!(ErrorKind::IAmATeapot.as_str(), "I_AM_A_TEAPOT");
        assert_eq!(ErrorKind::RequestUriTooLong.as_str(), "REQUEST_URI_TOO_LONG");
        assert_eq!(
            ErrorKind::HttpVersionNotSupported.as_str(),
            "HTTP_VERSION_NOT_SUPPORTED"
        );
        assert_eq!(
            ErrorKind::BlockedByWindowsParentalControls.as_str(),
            "BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS"
        );
    }

    #[test]
    fn unknown_identifier_does_not_parse() {
        assert!("TOTALLY_MADE_UP".parse::<ErrorKind>().is_err());
    }

    #[test]
    fn client_and_server_classification() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(ErrorKind::EnhanceYourCalm.is_client_error());
        assert!(ErrorKind::ClientClosedRequest.is_client_error());
        assert!(!ErrorKind::BadRequest.is_server_error());

        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::NetworkConnectTimeoutError.is_server_error());
        assert!(!ErrorKind::NetworkConnectTimeoutError.is_client_error());
    }

    #[test]
    fn codes_stay_in_error_range() {
        for kind in ErrorKind::iter() {
            let code = kind.http_status_code();
            assert!((400..600).contains(&code), "{kind} -> {code}");
        }
    }
}
