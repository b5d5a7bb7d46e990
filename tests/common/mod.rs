#![allow(dead_code)]

use http_tap::http1::{ DataResult,
                       ErrorCode,
                       EventResult,
                       HeadersCompleteResult,
                       HttpHandler,
                       Message,
                       Parser,
                       ParserType };

/// Handler that records each callback as text, merging adjacent data of the same kind.
#[derive(Default)]
pub struct Recorder {
    pub log: Vec<String>,

    /// Event that pauses the parser.
    pub pause_on: Option<&'static str>,

    last_data: Option<&'static str>
}

impl Recorder {
    fn data(&mut self, name: &'static str, data: &[u8]) -> DataResult {
        let text = String::from_utf8_lossy(data);

        match self.log.last_mut() {
            Some(last) if self.last_data == Some(name) => {
                last.push_str(&text);
            },
            _ => {
                self.log.push(format!("{}={}", name, text));
            }
        }

        self.last_data = Some(name);

        DataResult::Continue
    }

    fn event(&mut self, name: &'static str) -> EventResult {
        self.log.push(name.to_string());

        self.last_data = None;

        if self.pause_on == Some(name) {
            EventResult::Pause
        } else {
            EventResult::Continue
        }
    }

    /// Retrieve the data of every `name` entry.
    pub fn values(&self, name: &str) -> Vec<String> {
        let prefix = format!("{}=", name);

        self.log.iter()
                .filter_map(|entry| entry.strip_prefix(prefix.as_str()))
                .map(|value| value.to_string())
                .collect()
    }
}

impl HttpHandler for Recorder {
    fn on_message_begin(&mut self, _: &Message) -> EventResult {
        self.event("message_begin")
    }

    fn on_method(&mut self, data: &[u8]) -> DataResult {
        self.data("method", data)
    }

    fn on_method_complete(&mut self, _: &Message) -> EventResult {
        self.event("method_complete")
    }

    fn on_url(&mut self, data: &[u8]) -> DataResult {
        self.data("url", data)
    }

    fn on_url_complete(&mut self, _: &Message) -> EventResult {
        self.event("url_complete")
    }

    fn on_version(&mut self, data: &[u8]) -> DataResult {
        self.data("version", data)
    }

    fn on_version_complete(&mut self, _: &Message) -> EventResult {
        self.event("version_complete")
    }

    fn on_status(&mut self, data: &[u8]) -> DataResult {
        self.data("status", data)
    }

    fn on_status_complete(&mut self, _: &Message) -> EventResult {
        self.event("status_complete")
    }

    fn on_header_field(&mut self, data: &[u8]) -> DataResult {
        self.data("header_field", data)
    }

    fn on_header_field_complete(&mut self, _: &Message) -> EventResult {
        self.event("header_field_complete")
    }

    fn on_header_value(&mut self, data: &[u8]) -> DataResult {
        self.data("header_value", data)
    }

    fn on_header_value_complete(&mut self, _: &Message) -> EventResult {
        self.event("header_value_complete")
    }

    fn on_headers_complete(&mut self, _: &Message) -> HeadersCompleteResult {
        match self.event("headers_complete") {
            EventResult::Pause => HeadersCompleteResult::Pause,
            _                  => HeadersCompleteResult::Proceed
        }
    }

    fn on_chunk_extension_name(&mut self, data: &[u8]) -> DataResult {
        self.data("chunk_extension_name", data)
    }

    fn on_chunk_extension_name_complete(&mut self, _: &Message) -> EventResult {
        self.event("chunk_extension_name_complete")
    }

    fn on_chunk_extension_value(&mut self, data: &[u8]) -> DataResult {
        self.data("chunk_extension_value", data)
    }

    fn on_chunk_extension_value_complete(&mut self, _: &Message) -> EventResult {
        self.event("chunk_extension_value_complete")
    }

    fn on_chunk_header(&mut self, _: &Message) -> EventResult {
        self.event("chunk_header")
    }

    fn on_body(&mut self, data: &[u8]) -> DataResult {
        self.data("body", data)
    }

    fn on_chunk_complete(&mut self, _: &Message) -> EventResult {
        self.event("chunk_complete")
    }

    fn on_message_complete(&mut self, _: &Message) -> EventResult {
        self.event("message_complete")
    }

    fn on_reset(&mut self, _: &Message) -> EventResult {
        self.event("reset")
    }
}

/// Convert `LF` line endings to `CRLF`.
pub fn crlf(text: &str) -> Vec<u8> {
    text.replace('\n', "\r\n").into_bytes()
}

/// Execute `stream` in slices whose lengths cycle through `sizes`, stopping at the first code
/// that is not `ErrorCode::Ok`.
pub fn execute_sizes(parser_type: ParserType, stream: &[u8], sizes: &[usize])
-> (Parser<Recorder>, ErrorCode) {
    let mut parser = Parser::new(parser_type, Recorder::default());
    let mut offset = 0;

    for size in sizes.iter().cycle() {
        if offset >= stream.len() {
            break;
        }

        let end  = stream.len().min(offset + (*size).max(1));
        let code = parser.execute(&stream[offset..end]);

        if code != ErrorCode::Ok {
            return (parser, code);
        }

        offset = end;
    }

    (parser, ErrorCode::Ok)
}

/// Install a test log writer. Output is shown for failing tests only.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
}
