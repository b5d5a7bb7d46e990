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

use crate::http1::message::Message;

/// Event callback results.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum EventResult {
    /// Continue parsing.
    Continue,

    /// Pause parsing. The parser stops right after the event and reports `ErrorCode::Paused`.
    Pause,

    /// Stop parsing with the error code that belongs to the event.
    Error
}

/// `on_headers_complete` callback results.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum HeadersCompleteResult {
    /// Continue parsing, with the body framing that the headers describe.
    Proceed,

    /// The message has no body, regardless of the headers. This is typically returned by a client
    /// for the response to a `HEAD` request.
    NoBody,

    /// The message has no body, and the bytes that follow it are not HTTP. The parser completes
    /// the message and reports `ErrorCode::PausedUpgrade`.
    PauseForUpgrade,

    /// Pause parsing. The parser stops right after the event and reports `ErrorCode::Paused`.
    Pause,

    /// Stop parsing with `ErrorCode::CbHeadersComplete`.
    Error
}

/// Data callback results.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum DataResult {
    /// Continue parsing.
    Continue,

    /// Stop parsing with `ErrorCode::User`.
    User,

    /// Stop parsing with `ErrorCode::CbData`.
    Error
}

/// Type that handles HTTP/1.x parser events.
///
/// Every callback has a default implementation that continues parsing, so a handler implements
/// only the events it needs.
///
/// Data callbacks receive a slice of the buffer that is being executed. A single span, such as a
/// URL or a header value, may be delivered across several calls when it crosses buffer
/// boundaries. Each `*_complete` event marks the end of its span.
#[allow(unused_variables)]
pub trait HttpHandler {
    /// Callback that is executed when a new message begins.
    fn on_message_begin(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when request method data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_method(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when the request method is complete.
    ///
    /// The method is available from [`Message::method()`](struct.Message.html#method.method).
    fn on_method_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when request target data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_url(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when the request target is complete.
    fn on_url_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when HTTP version data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_version(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when the HTTP version is complete.
    fn on_version_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when response reason phrase data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_status(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when the response status line is complete.
    ///
    /// This is executed even when the reason phrase is empty.
    fn on_status_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when header name data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_header_field(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when a header name is complete.
    fn on_header_field_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when header value data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_header_value(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when a header value is complete.
    fn on_header_value_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when all headers have been parsed.
    ///
    /// The body framing has been decided at this point, and
    /// [`Message::is_upgrade()`](struct.Message.html#method.is_upgrade) is available.
    fn on_headers_complete(&mut self, message: &Message) -> HeadersCompleteResult {
        HeadersCompleteResult::Proceed
    }

    /// Callback that is executed when chunk extension name data has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_chunk_extension_name(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when a chunk extension name is complete.
    fn on_chunk_extension_name_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when chunk extension value data has been located. Quotes
    /// surrounding a quoted value are not included.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_chunk_extension_value(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when a chunk extension value is complete.
    fn on_chunk_extension_value_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when a chunk size line has been parsed.
    ///
    /// The size is available from
    /// [`Message::chunk_length()`](struct.Message.html#method.chunk_length). The final chunk has
    /// a size of `0`.
    fn on_chunk_header(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when body data has been located. For chunked messages this is
    /// the chunk data.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire segment.
    fn on_body(&mut self, data: &[u8]) -> DataResult {
        DataResult::Continue
    }

    /// Callback that is executed when a chunk has been parsed. For the final chunk, this is
    /// executed after the trailers.
    fn on_chunk_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when a message has been parsed.
    fn on_message_complete(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }

    /// Callback that is executed when a new message begins on a parser that has already completed
    /// a message. This is executed prior to `on_message_begin()`.
    fn on_reset(&mut self, message: &Message) -> EventResult {
        EventResult::Continue
    }
}
