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

//! Details of the message being parsed.

use bitflags::bitflags;

use crate::http1::method::Method;
use crate::http1::parser_type::ParserType;

bitflags! {
    /// Message framing flags, collected from the special headers.
    #[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
    pub struct Flags: u16 {
        /// `Connection: keep-alive` was found.
        const CONNECTION_KEEP_ALIVE = 1 << 0;

        /// `Connection: close` was found.
        const CONNECTION_CLOSE      = 1 << 1;

        /// `Connection: upgrade` was found.
        const CONNECTION_UPGRADE    = 1 << 2;

        /// The final transfer coding is `chunked`.
        const CHUNKED               = 1 << 3;

        /// An `Upgrade` header was found.
        const UPGRADE               = 1 << 4;

        /// A `Content-Length` header was found.
        const CONTENT_LENGTH        = 1 << 5;

        /// The body must be skipped.
        const SKIP_BODY             = 1 << 6;

        /// Parsing chunked trailers.
        const TRAILING              = 1 << 7;

        /// A `Transfer-Encoding` header was found.
        const TRANSFER_ENCODING     = 1 << 8;
    }
}

/// Message details, updated as the message head is parsed.
///
/// A reference to the current message is supplied to each event callback.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct Message {
    /// Chunk size of the most recent chunk.
    pub(crate) chunk_length: u64,

    /// `Content-Length` value.
    pub(crate) content_length: u64,

    /// Framing flags.
    pub(crate) flags: Flags,

    /// HTTP major version.
    pub(crate) http_major: u8,

    /// HTTP minor version.
    pub(crate) http_minor: u8,

    /// Request method.
    pub(crate) method: Option<Method>,

    /// Message type. This is `ParserType::Both` until the type has been detected.
    pub(crate) parser_type: ParserType,

    /// Response status code.
    pub(crate) status_code: u16,

    /// Protocol upgrade was requested.
    pub(crate) upgrade: bool
}

impl Message {
    /// Create a new `Message` of type `parser_type`.
    pub(crate) fn new(parser_type: ParserType) -> Message {
        Message{
            chunk_length:   0,
            content_length: 0,
            flags:          Flags::empty(),
            http_major:     0,
            http_minor:     0,
            method:         None,
            parser_type:    parser_type,
            status_code:    0,
            upgrade:        false
        }
    }

    /// Retrieve the size of the most recent chunk.
    pub fn chunk_length(&self) -> u64 {
        self.chunk_length
    }

    /// Retrieve the `Content-Length` value, or `0` when none was supplied.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Retrieve the framing flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> u8 {
        self.http_major
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> u8 {
        self.http_minor
    }

    /// Indicates that the message is a request.
    pub fn is_request(&self) -> bool {
        self.parser_type == ParserType::Request
    }

    /// Indicates that the message is a response.
    pub fn is_response(&self) -> bool {
        self.parser_type == ParserType::Response
    }

    /// Indicates that the message requested a protocol upgrade.
    ///
    /// This is decided right before `on_headers_complete` executes.
    pub fn is_upgrade(&self) -> bool {
        self.upgrade
    }

    /// Retrieve the request method.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Indicates that the message body ends only when the connection closes.
    pub fn needs_eof(&self) -> bool {
        if self.parser_type == ParserType::Request {
            return false;
        }

        // see RFC 7230 section 3.3.3
        if self.status_code / 100 == 1
        || self.status_code == 204
        || self.status_code == 304
        || self.flags.contains(Flags::SKIP_BODY) {
            return false;
        }

        if self.flags.contains(Flags::TRANSFER_ENCODING) && !self.flags.contains(Flags::CHUNKED) {
            return true;
        }

        !self.flags.intersects(Flags::CHUNKED | Flags::CONTENT_LENGTH)
    }

    /// Retrieve the message type.
    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// Indicates that the connection may be reused after this message.
    pub fn should_keep_alive(&self) -> bool {
        if self.http_major > 0 && self.http_minor > 0 {
            // HTTP/1.1
            if self.flags.contains(Flags::CONNECTION_CLOSE) {
                return false;
            }
        } else if !self.flags.contains(Flags::CONNECTION_KEEP_ALIVE) {
            // HTTP/1.0 or earlier
            return false;
        }

        !self.needs_eof()
    }

    /// Retrieve the response status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(major: u8, minor: u8, status: u16, flags: Flags) -> Message {
        let mut message = Message::new(ParserType::Response);

        message.http_major  = major;
        message.http_minor  = minor;
        message.status_code = status;
        message.flags       = flags;
        message
    }

    #[test]
    fn request_never_needs_eof() {
        let mut message = Message::new(ParserType::Request);

        message.http_major = 1;
        message.http_minor = 1;

        assert!(!message.needs_eof());
        assert!(message.should_keep_alive());
    }

    #[test]
    fn response_without_framing_needs_eof() {
        assert!(response(1, 1, 200, Flags::empty()).needs_eof());
        assert!(!response(1, 1, 200, Flags::empty()).should_keep_alive());
        assert!(!response(1, 1, 200, Flags::CONTENT_LENGTH).needs_eof());
        assert!(!response(1, 1, 200, Flags::TRANSFER_ENCODING | Flags::CHUNKED).needs_eof());
        assert!(response(1, 1, 200, Flags::TRANSFER_ENCODING).needs_eof());
    }

    #[test]
    fn bodiless_statuses() {
        assert!(!response(1, 1, 100, Flags::empty()).needs_eof());
        assert!(!response(1, 1, 204, Flags::empty()).needs_eof());
        assert!(!response(1, 1, 304, Flags::empty()).needs_eof());
        assert!(!response(1, 1, 200, Flags::SKIP_BODY).needs_eof());
    }

    #[test]
    fn keep_alive_by_version() {
        assert!(response(1, 1, 204, Flags::empty()).should_keep_alive());
        assert!(!response(1, 1, 204, Flags::CONNECTION_CLOSE).should_keep_alive());
        assert!(!response(1, 0, 204, Flags::empty()).should_keep_alive());
        assert!(response(1, 0, 204, Flags::CONNECTION_KEEP_ALIVE).should_keep_alive());
        assert!(!response(0, 9, 204, Flags::empty()).should_keep_alive());
    }
}
