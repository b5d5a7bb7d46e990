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

//! HTTP 1.x parser states.

/// Parser states.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
#[repr(u8)]
pub enum ParserState {
    /// An error was latched. Parsing cannot continue until the parser is reset.
    Dead,

    /// Between messages. Stray `CR` and `LF` bytes are skipped here.
    Start,

    /// A message is about to begin.
    MessageBegin,

    /// The previous message closed the connection.
    Closed,

    /// Detect request/response byte 1.
    Detect1,

    /// Detect request/response byte 2, after `H`.
    Detect2,

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE
    // ---------------------------------------------------------------------------------------------

    /// Parsing request method.
    RequestMethod,

    /// Stripping spaces before the request target.
    RequestUrlStart,

    /// Parsing request target.
    RequestUrl,

    /// Expecting `LF` after an HTTP/0.9 request target.
    RequestHttp09Lf,

    /// Expecting `CR` after the request HTTP version.
    RequestLineCr,

    /// Expecting `LF` after the request HTTP version.
    RequestLineLf,

    // ---------------------------------------------------------------------------------------------
    // HTTP VERSION
    // ---------------------------------------------------------------------------------------------

    /// Parsing the `HTTP/` protocol name.
    Protocol,

    /// Parsing HTTP major version.
    VersionMajor,

    /// Expecting the period between major and minor versions.
    VersionPeriod,

    /// Parsing HTTP minor version.
    VersionMinor,

    // ---------------------------------------------------------------------------------------------
    // STATUS LINE
    // ---------------------------------------------------------------------------------------------

    /// Expecting space after the response HTTP version.
    ResponseVersionSpace,

    /// Parsing the 3 digit status code.
    ResponseStatusCode,

    /// Expecting space or line ending after the status code.
    ResponseStatusCodeEnd,

    /// Reason phrase start.
    ResponseStatusStart,

    /// Parsing reason phrase.
    ResponseStatus,

    /// Expecting `LF` after the status line.
    ResponseStatusLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Header name start, or the empty line that ends the headers.
    HeaderFieldStart,

    /// Parsing header name.
    HeaderField,

    /// Stripping white space before header value.
    HeaderValueStart,

    /// Parsing header value.
    HeaderValue,

    /// Expecting `LF` after header value.
    HeaderValueLf,

    /// Checking the next line for an obsolete line fold.
    HeaderValueLws,

    /// Stripping white space of an obsolete line fold.
    HeaderValueFold,

    /// Expecting `LF` of the empty line that ends the headers.
    HeadersLf,

    /// Headers have been parsed.
    HeadersComplete,

    /// Selecting the body framing.
    BodyStart,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Parsing a body with a known length.
    BodyIdentity,

    /// Parsing a body that ends when the connection closes.
    BodyIdentityEof,

    // ---------------------------------------------------------------------------------------------
    // CHUNKED
    // ---------------------------------------------------------------------------------------------

    /// Chunk size first digit.
    ChunkSizeStart,

    /// Parsing chunk size.
    ChunkSize,

    /// Stripping white space after the chunk size or after a chunk extension.
    ChunkParametersWs,

    /// Chunk extension name start.
    ChunkExtensionStart,

    /// Parsing chunk extension name.
    ChunkExtensionName,

    /// Stripping white space after a chunk extension name.
    ChunkExtensionNameWs,

    /// Chunk extension value start.
    ChunkExtensionValueStart,

    /// Parsing chunk extension value.
    ChunkExtensionValue,

    /// Parsing chunk extension quoted value.
    ChunkExtensionQuotedValue,

    /// Chunk extension quoted value escaped byte.
    ChunkExtensionQuotedEscape,

    /// Chunk extension quoted value ending quote was found.
    ChunkExtensionQuotedEnd,

    /// Expecting `LF` after the chunk size line.
    ChunkSizeLf,

    /// Parsing chunk data.
    ChunkData,

    /// Expecting `CR` after chunk data.
    ChunkDataCr,

    /// Expecting `LF` after chunk data.
    ChunkDataLf,

    // ---------------------------------------------------------------------------------------------
    // FINISHED
    // ---------------------------------------------------------------------------------------------

    /// The message has been parsed.
    MessageComplete
}

impl ParserState {
    /// Indicates that this state consumes bytes of a message head, which count toward the
    /// maximum head length.
    pub fn is_head(&self) -> bool {
        matches!(
            *self,
            ParserState::Detect1
            | ParserState::Detect2
            | ParserState::RequestMethod
            | ParserState::RequestUrlStart
            | ParserState::RequestUrl
            | ParserState::RequestHttp09Lf
            | ParserState::RequestLineCr
            | ParserState::RequestLineLf
            | ParserState::Protocol
            | ParserState::VersionMajor
            | ParserState::VersionPeriod
            | ParserState::VersionMinor
            | ParserState::ResponseVersionSpace
            | ParserState::ResponseStatusCode
            | ParserState::ResponseStatusCodeEnd
            | ParserState::ResponseStatusStart
            | ParserState::ResponseStatus
            | ParserState::ResponseStatusLf
            | ParserState::HeaderFieldStart
            | ParserState::HeaderField
            | ParserState::HeaderValueStart
            | ParserState::HeaderValue
            | ParserState::HeaderValueLf
            | ParserState::HeaderValueLws
            | ParserState::HeaderValueFold
            | ParserState::HeadersLf
        )
    }
}
