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

use crate::http1::{ DataResult,
                    ErrorCode,
                    EventResult,
                    HeadersCompleteResult,
                    HttpHandler,
                    Message,
                    Parser,
                    ParserType };

mod chunked;
mod request;
mod response;

/// A single handler notification.
pub enum Record {
    Data(&'static str, Vec<u8>),
    Event(&'static str)
}

/// `DebugHandler` records every callback in order.
///
/// Adjacent data for the same callback is merged, so the log does not depend on how the stream
/// was split.
#[derive(Default)]
pub struct DebugHandler {
    /// Callback that returns an error.
    pub error_on: Option<&'static str>,

    /// `on_headers_complete` result, when not proceeding.
    pub headers_complete: Option<HeadersCompleteResult>,

    /// Event callback that pauses.
    pub pause_on: Option<&'static str>,

    /// Recorded callbacks.
    pub records: Vec<Record>,

    /// Data callback that stops the parser.
    pub user_on: Option<&'static str>
}

impl DebugHandler {
    pub fn new() -> DebugHandler {
        DebugHandler::default()
    }

    /// Retrieve all data recorded for `name`.
    pub fn data(&self, name: &str) -> Vec<u8> {
        let mut data = Vec::new();

        for record in self.records.iter() {
            if let Record::Data(name_, bytes) = record {
                if *name_ == name {
                    data.extend_from_slice(bytes);
                }
            }
        }

        data
    }

    /// Retrieve the amount of times event `name` was recorded.
    pub fn count(&self, name: &str) -> usize {
        self.records.iter().filter(|record| {
            matches!(record, Record::Event(name_) if *name_ == name)
        }).count()
    }

    /// Retrieve the log as text, with data formatted as `name=data`.
    pub fn log(&self) -> Vec<String> {
        self.records.iter().map(|record| {
            match record {
                Record::Data(name, data) => format!("{}={}", name, String::from_utf8_lossy(data)),
                Record::Event(name)      => name.to_string()
            }
        }).collect()
    }

    fn on_data(&mut self, name: &'static str, data: &[u8]) -> DataResult {
        let merged = match self.records.last_mut() {
            Some(Record::Data(last, buffer)) if *last == name => {
                buffer.extend_from_slice(data);
                true
            },
            _ => false
        };

        if !merged {
            self.records.push(Record::Data(name, data.to_vec()));
        }

        if self.user_on == Some(name) {
            DataResult::User
        } else if self.error_on == Some(name) {
            DataResult::Error
        } else {
            DataResult::Continue
        }
    }

    fn on_event(&mut self, name: &'static str) -> EventResult {
        self.records.push(Record::Event(name));

        if self.pause_on == Some(name) {
            EventResult::Pause
        } else if self.error_on == Some(name) {
            EventResult::Error
        } else {
            EventResult::Continue
        }
    }
}

impl HttpHandler for DebugHandler {
    fn on_message_begin(&mut self, _: &Message) -> EventResult {
        self.on_event("message_begin")
    }

    fn on_method(&mut self, data: &[u8]) -> DataResult {
        self.on_data("method", data)
    }

    fn on_method_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("method_complete")
    }

    fn on_url(&mut self, data: &[u8]) -> DataResult {
        self.on_data("url", data)
    }

    fn on_url_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("url_complete")
    }

    fn on_version(&mut self, data: &[u8]) -> DataResult {
        self.on_data("version", data)
    }

    fn on_version_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("version_complete")
    }

    fn on_status(&mut self, data: &[u8]) -> DataResult {
        self.on_data("status", data)
    }

    fn on_status_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("status_complete")
    }

    fn on_header_field(&mut self, data: &[u8]) -> DataResult {
        self.on_data("header_field", data)
    }

    fn on_header_field_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("header_field_complete")
    }

    fn on_header_value(&mut self, data: &[u8]) -> DataResult {
        self.on_data("header_value", data)
    }

    fn on_header_value_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("header_value_complete")
    }

    fn on_headers_complete(&mut self, _: &Message) -> HeadersCompleteResult {
        self.records.push(Record::Event("headers_complete"));

        if self.pause_on == Some("headers_complete") {
            HeadersCompleteResult::Pause
        } else if self.error_on == Some("headers_complete") {
            HeadersCompleteResult::Error
        } else {
            self.headers_complete.unwrap_or(HeadersCompleteResult::Proceed)
        }
    }

    fn on_chunk_extension_name(&mut self, data: &[u8]) -> DataResult {
        self.on_data("chunk_extension_name", data)
    }

    fn on_chunk_extension_name_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("chunk_extension_name_complete")
    }

    fn on_chunk_extension_value(&mut self, data: &[u8]) -> DataResult {
        self.on_data("chunk_extension_value", data)
    }

    fn on_chunk_extension_value_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("chunk_extension_value_complete")
    }

    fn on_chunk_header(&mut self, _: &Message) -> EventResult {
        self.on_event("chunk_header")
    }

    fn on_body(&mut self, data: &[u8]) -> DataResult {
        self.on_data("body", data)
    }

    fn on_chunk_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("chunk_complete")
    }

    fn on_message_complete(&mut self, _: &Message) -> EventResult {
        self.on_event("message_complete")
    }

    fn on_reset(&mut self, _: &Message) -> EventResult {
        self.on_event("reset")
    }
}

// -------------------------------------------------------------------------------------------------

pub fn setup(parser_type: ParserType) -> Parser<DebugHandler> {
    Parser::new(parser_type, DebugHandler::new())
}

/// Execute `stream` in slices of `size` bytes, stopping at the first code that is not
/// `ErrorCode::Ok`.
pub fn execute_split(parser: &mut Parser<DebugHandler>, stream: &[u8], size: usize) -> ErrorCode {
    for slice in stream.chunks(size) {
        let code = parser.execute(slice);

        if code != ErrorCode::Ok {
            return code;
        }
    }

    ErrorCode::Ok
}

pub fn assert_log(parser: &Parser<DebugHandler>, expected: &[&str]) {
    assert_eq!(parser.handler().log(), expected);
}

/// Assert that `stream` produces the same log whether it is executed at once or byte by byte.
pub fn assert_split_log(parser_type: ParserType, stream: &[u8]) -> Parser<DebugHandler> {
    let mut whole = setup(parser_type);
    let mut bytes = setup(parser_type);

    assert_eq!(whole.execute(stream), ErrorCode::Ok);
    assert_eq!(execute_split(&mut bytes, stream, 1), ErrorCode::Ok);
    assert_eq!(whole.handler().log(), bytes.handler().log());
    assert_eq!(whole.state(), bytes.state());

    whole
}
