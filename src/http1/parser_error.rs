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

use thiserror::Error;

/// Parser result codes.
///
/// `ErrorCode::Ok` is the only code that does not halt the parser. `ErrorCode::Paused` and
/// `ErrorCode::PausedUpgrade` are recoverable with
/// [`Parser::resume()`](struct.Parser.html#method.resume) and
/// [`Parser::resume_after_upgrade()`](struct.Parser.html#method.resume_after_upgrade). All other
/// codes are terminal until [`Parser::reset()`](struct.Parser.html#method.reset).
#[derive(Clone,Copy,Debug,Eq,Error,Hash,PartialEq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Success.
    #[error("success")]
    Ok = 0,

    /// Internal parser failure.
    #[error("internal parser failure")]
    Internal = 1,

    /// A strict mode check failed.
    #[error("strict mode assertion failed")]
    Strict = 2,

    /// Expected `CR` was not found.
    #[error("missing expected CR")]
    CrExpected = 25,

    /// Expected `LF` was not found.
    #[error("missing expected LF")]
    LfExpected = 3,

    /// Content length is not permitted here.
    #[error("unexpected content length")]
    UnexpectedContentLength = 4,

    /// White space is not permitted here.
    #[error("unexpected space")]
    UnexpectedSpace = 30,

    /// Data arrived after a message that closed the connection.
    #[error("data after connection close")]
    ClosedConnection = 5,

    /// Invalid request method.
    #[error("invalid method")]
    InvalidMethod = 6,

    /// Invalid request target.
    #[error("invalid URL")]
    InvalidUrl = 7,

    /// Invalid constant string, such as the `HTTP/` protocol name.
    #[error("invalid constant")]
    InvalidConstant = 8,

    /// Invalid HTTP version.
    #[error("invalid HTTP version")]
    InvalidVersion = 9,

    /// Invalid header name or value byte.
    #[error("invalid header token")]
    InvalidHeaderToken = 10,

    /// Invalid `Content-Length` value.
    #[error("invalid content length")]
    InvalidContentLength = 11,

    /// Invalid chunk size.
    #[error("invalid chunk size")]
    InvalidChunkSize = 12,

    /// Invalid chunk extension.
    #[error("invalid chunk extension")]
    InvalidChunkExtension = 34,

    /// Invalid response status.
    #[error("invalid status")]
    InvalidStatus = 13,

    /// The stream ended in a state where the message cannot be complete.
    #[error("invalid EOF state")]
    InvalidEofState = 14,

    /// Invalid `Transfer-Encoding` framing.
    #[error("invalid transfer encoding")]
    InvalidTransferEncoding = 15,

    /// The message head exceeded the configured maximum length.
    #[error("header overflow")]
    HeaderOverflow = 33,

    /// `on_message_begin` callback error.
    #[error("`on_message_begin` callback error")]
    CbMessageBegin = 16,

    /// `on_headers_complete` callback error.
    #[error("`on_headers_complete` callback error")]
    CbHeadersComplete = 17,

    /// `on_message_complete` callback error.
    #[error("`on_message_complete` callback error")]
    CbMessageComplete = 18,

    /// `on_chunk_header` callback error.
    #[error("`on_chunk_header` callback error")]
    CbChunkHeader = 19,

    /// `on_chunk_complete` callback error.
    #[error("`on_chunk_complete` callback error")]
    CbChunkComplete = 20,

    /// Parsing is paused.
    #[error("paused")]
    Paused = 21,

    /// Parsing is paused after a message requesting a protocol upgrade.
    #[error("paused for upgrade")]
    PausedUpgrade = 22,

    /// A data callback stopped the parser with `DataResult::User`.
    #[error("user callback error")]
    User = 24,

    /// A data callback returned `DataResult::Error`.
    #[error("data callback error")]
    CbData = 23,

    /// `on_url_complete` callback error.
    #[error("`on_url_complete` callback error")]
    CbUrlComplete = 26,

    /// `on_status_complete` callback error.
    #[error("`on_status_complete` callback error")]
    CbStatusComplete = 27,

    /// `on_method_complete` callback error.
    #[error("`on_method_complete` callback error")]
    CbMethodComplete = 32,

    /// `on_version_complete` callback error.
    #[error("`on_version_complete` callback error")]
    CbVersionComplete = 31,

    /// `on_header_field_complete` callback error.
    #[error("`on_header_field_complete` callback error")]
    CbHeaderFieldComplete = 28,

    /// `on_header_value_complete` callback error.
    #[error("`on_header_value_complete` callback error")]
    CbHeaderValueComplete = 29,

    /// `on_chunk_extension_name_complete` callback error.
    #[error("`on_chunk_extension_name_complete` callback error")]
    CbChunkExtensionNameComplete = 35,

    /// `on_chunk_extension_value_complete` callback error.
    #[error("`on_chunk_extension_value_complete` callback error")]
    CbChunkExtensionValueComplete = 36,

    /// `on_reset` callback error.
    #[error("`on_reset` callback error")]
    CbReset = 37
}

impl ErrorCode {
    /// Indicates that this code does not halt the parser.
    pub fn is_ok(&self) -> bool {
        *self == ErrorCode::Ok
    }

    /// Indicates that this code is a pause that can be resumed.
    pub fn is_paused(&self) -> bool {
        *self == ErrorCode::Paused || *self == ErrorCode::PausedUpgrade
    }

    /// Indicates that this code is a terminal error.
    pub fn is_error(&self) -> bool {
        !self.is_ok() && !self.is_paused()
    }

    /// Retrieve the symbolic name.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_tap::http1::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::InvalidMethod.name(), "INVALID_METHOD");
    /// assert_eq!(ErrorCode::PausedUpgrade.name(), "PAUSED_UPGRADE");
    /// ```
    pub fn name(&self) -> &'static str {
        match *self {
            ErrorCode::Ok                            => "OK",
            ErrorCode::Internal                      => "INTERNAL",
            ErrorCode::Strict                        => "STRICT",
            ErrorCode::CrExpected                    => "CR_EXPECTED",
            ErrorCode::LfExpected                    => "LF_EXPECTED",
            ErrorCode::UnexpectedContentLength       => "UNEXPECTED_CONTENT_LENGTH",
            ErrorCode::UnexpectedSpace               => "UNEXPECTED_SPACE",
            ErrorCode::ClosedConnection              => "CLOSED_CONNECTION",
            ErrorCode::InvalidMethod                 => "INVALID_METHOD",
            ErrorCode::InvalidUrl                    => "INVALID_URL",
            ErrorCode::InvalidConstant               => "INVALID_CONSTANT",
            ErrorCode::InvalidVersion                => "INVALID_VERSION",
            ErrorCode::InvalidHeaderToken            => "INVALID_HEADER_TOKEN",
            ErrorCode::InvalidContentLength          => "INVALID_CONTENT_LENGTH",
            ErrorCode::InvalidChunkSize              => "INVALID_CHUNK_SIZE",
            ErrorCode::InvalidChunkExtension         => "INVALID_CHUNK_EXTENSION",
            ErrorCode::InvalidStatus                 => "INVALID_STATUS",
            ErrorCode::InvalidEofState               => "INVALID_EOF_STATE",
            ErrorCode::InvalidTransferEncoding       => "INVALID_TRANSFER_ENCODING",
            ErrorCode::HeaderOverflow                => "HEADER_OVERFLOW",
            ErrorCode::CbMessageBegin                => "CB_MESSAGE_BEGIN",
            ErrorCode::CbHeadersComplete             => "CB_HEADERS_COMPLETE",
            ErrorCode::CbMessageComplete             => "CB_MESSAGE_COMPLETE",
            ErrorCode::CbChunkHeader                 => "CB_CHUNK_HEADER",
            ErrorCode::CbChunkComplete               => "CB_CHUNK_COMPLETE",
            ErrorCode::Paused                        => "PAUSED",
            ErrorCode::PausedUpgrade                 => "PAUSED_UPGRADE",
            ErrorCode::User                          => "USER",
            ErrorCode::CbData                        => "CB_DATA",
            ErrorCode::CbUrlComplete                 => "CB_URL_COMPLETE",
            ErrorCode::CbStatusComplete              => "CB_STATUS_COMPLETE",
            ErrorCode::CbMethodComplete              => "CB_METHOD_COMPLETE",
            ErrorCode::CbVersionComplete             => "CB_VERSION_COMPLETE",
            ErrorCode::CbHeaderFieldComplete         => "CB_HEADER_FIELD_COMPLETE",
            ErrorCode::CbHeaderValueComplete         => "CB_HEADER_VALUE_COMPLETE",
            ErrorCode::CbChunkExtensionNameComplete  => "CB_CHUNK_EXTENSION_NAME_COMPLETE",
            ErrorCode::CbChunkExtensionValueComplete => "CB_CHUNK_EXTENSION_VALUE_COMPLETE",
            ErrorCode::CbReset                       => "CB_RESET"
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// A latched parser error or pause, with the reason and the stream position where it occurred.
#[derive(Clone,Copy,Debug,Eq,Error,PartialEq)]
#[error("{reason} ({} at byte {position})", .code.name())]
pub struct ParserError {
    code:     ErrorCode,
    position: usize,
    reason:   &'static str
}

impl ParserError {
    /// Create a new `ParserError`.
    pub fn new(code: ErrorCode, reason: &'static str, position: usize) -> ParserError {
        ParserError{
            code:     code,
            position: position,
            reason:   reason
        }
    }

    /// Retrieve the code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Retrieve the offset within the buffer that was last executed.
    ///
    /// For protocol errors this is the offending byte. For pauses and callback errors this is the
    /// first byte that was not consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Retrieve the human readable reason.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}
