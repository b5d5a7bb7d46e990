// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

/// Retrieve the symbolic name of a response status code.
///
/// Returns `None` for codes that have no registered name.
///
/// # Examples
///
/// ```
/// use http_tap::http1::status_name;
///
/// assert_eq!(status_name(404), Some("NOT_FOUND"));
/// assert_eq!(status_name(299), None);
/// ```
pub fn status_name(code: u16) -> Option<&'static str> {
    let name = match code {
        100 => "CONTINUE",
        101 => "SWITCHING_PROTOCOLS",
        102 => "PROCESSING",
        103 => "EARLY_HINTS",
        110 => "RESPONSE_IS_STALE",
        111 => "REVALIDATION_FAILED",
        112 => "DISCONNECTED_OPERATION",
        113 => "HEURISTIC_EXPIRATION",
        199 => "MISCELLANEOUS_WARNING",
        200 => "OK",
        201 => "CREATED",
        202 => "ACCEPTED",
        203 => "NON_AUTHORITATIVE_INFORMATION",
        204 => "NO_CONTENT",
        205 => "RESET_CONTENT",
        206 => "PARTIAL_CONTENT",
        207 => "MULTI_STATUS",
        208 => "ALREADY_REPORTED",
        214 => "TRANSFORMATION_APPLIED",
        226 => "IM_USED",
        300 => "MULTIPLE_CHOICES",
        301 => "MOVED_PERMANENTLY",
        302 => "FOUND",
        303 => "SEE_OTHER",
        304 => "NOT_MODIFIED",
        305 => "USE_PROXY",
        306 => "SWITCH_PROXY",
        307 => "TEMPORARY_REDIRECT",
        308 => "PERMANENT_REDIRECT",
        400 => "BAD_REQUEST",
        401 => "UNAUTHORIZED",
        402 => "PAYMENT_REQUIRED",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        405 => "METHOD_NOT_ALLOWED",
        406 => "NOT_ACCEPTABLE",
        407 => "PROXY_AUTHENTICATION_REQUIRED",
        408 => "REQUEST_TIMEOUT",
        409 => "CONFLICT",
        410 => "GONE",
        411 => "LENGTH_REQUIRED",
        412 => "PRECONDITION_FAILED",
        413 => "PAYLOAD_TOO_LARGE",
        414 => "URI_TOO_LONG",
        415 => "UNSUPPORTED_MEDIA_TYPE",
        416 => "RANGE_NOT_SATISFIABLE",
        417 => "EXPECTATION_FAILED",
        418 => "IM_A_TEAPOT",
        419 => "PAGE_EXPIRED",
        420 => "ENHANCE_YOUR_CALM",
        421 => "MISDIRECTED_REQUEST",
        422 => "UNPROCESSABLE_ENTITY",
        423 => "LOCKED",
        424 => "FAILED_DEPENDENCY",
        425 => "TOO_EARLY",
        426 => "UPGRADE_REQUIRED",
        428 => "PRECONDITION_REQUIRED",
        429 => "TOO_MANY_REQUESTS",
        430 => "REQUEST_HEADER_FIELDS_TOO_LARGE_UNOFFICIAL",
        431 => "REQUEST_HEADER_FIELDS_TOO_LARGE",
        440 => "LOGIN_TIMEOUT",
        444 => "NO_RESPONSE",
        449 => "RETRY_WITH",
        450 => "BLOCKED_BY_PARENTAL_CONTROL",
        451 => "UNAVAILABLE_FOR_LEGAL_REASONS",
        460 => "CLIENT_CLOSED_LOAD_BALANCED_REQUEST",
        463 => "INVALID_X_FORWARDED_FOR",
        494 => "REQUEST_HEADER_TOO_LARGE",
        495 => "SSL_CERTIFICATE_ERROR",
        496 => "SSL_CERTIFICATE_REQUIRED",
        497 => "HTTP_REQUEST_SENT_TO_HTTPS_PORT",
        498 => "INVALID_TOKEN",
        499 => "CLIENT_CLOSED_REQUEST",
        500 => "INTERNAL_SERVER_ERROR",
        501 => "NOT_IMPLEMENTED",
        502 => "BAD_GATEWAY",
        503 => "SERVICE_UNAVAILABLE",
        504 => "GATEWAY_TIMEOUT",
        505 => "HTTP_VERSION_NOT_SUPPORTED",
        506 => "VARIANT_ALSO_NEGOTIATES",
        507 => "INSUFFICIENT_STORAGE",
        508 => "LOOP_DETECTED",
        509 => "BANDWIDTH_LIMIT_EXCEEDED",
        510 => "NOT_EXTENDED",
        511 => "NETWORK_AUTHENTICATION_REQUIRED",
        520 => "WEB_SERVER_UNKNOWN_ERROR",
        521 => "WEB_SERVER_IS_DOWN",
        522 => "CONNECTION_TIMEOUT",
        523 => "ORIGIN_IS_UNREACHABLE",
        524 => "TIMEOUT_OCCURED",
        525 => "SSL_HANDSHAKE_FAILED",
        526 => "INVALID_SSL_CERTIFICATE",
        527 => "RAILGUN_ERROR",
        529 => "SITE_IS_OVERLOADED",
        530 => "SITE_IS_FROZEN",
        561 => "IDENTITY_PROVIDER_AUTHENTICATION_ERROR",
        598 => "NETWORK_READ_TIMEOUT",
        599 => "NETWORK_CONNECT_TIMEOUT",
        _   => return None
    };

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(status_name(101), Some("SWITCHING_PROTOCOLS"));
        assert_eq!(status_name(200), Some("OK"));
        assert_eq!(status_name(304), Some("NOT_MODIFIED"));
        assert_eq!(status_name(511), Some("NETWORK_AUTHENTICATION_REQUIRED"));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(status_name(0), None);
        assert_eq!(status_name(299), None);
        assert_eq!(status_name(999), None);
    }
}
