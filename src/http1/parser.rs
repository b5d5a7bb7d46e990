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

//! HTTP 1.x parser.

use crate::byte::{ hex_to_byte,
                   is_digit,
                   is_header_value,
                   is_space,
                   is_token,
                   is_upper,
                   is_url };
use crate::fsm::{ ParserValue,
                  Success };
use crate::http1::callbacks::{ CallbackHandler,
                               Callbacks };
use crate::http1::header::{ HeaderKind,
                            NameMatcher,
                            TokenScanner };
use crate::http1::http_handler::{ DataResult,
                                  EventResult,
                                  HeadersCompleteResult,
                                  HttpHandler };
use crate::http1::lenient::{ DEFAULT_MAX_HEAD_LENGTH,
                             Lenient };
use crate::http1::message::{ Flags,
                             Message };
use crate::http1::method::{ MAX_METHOD_LENGTH,
                            Method };
use crate::http1::parser_error::{ ErrorCode,
                                  ParserError };
use crate::http1::parser_state::ParserState;
use crate::http1::parser_type::ParserType;

use byte_slice::ByteStream;
use tracing::{ debug,
               trace };

use std::fmt;

/// The protocol name that precedes each HTTP version.
const PROTOCOL: &[u8] = b"HTTP/";

/// Kinds of data that are reported to data callbacks while they are being collected.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
enum Span {
    ChunkExtensionName,
    ChunkExtensionValue,
    HeaderField,
    HeaderValue,
    Method,
    Status,
    Url,
    Version
}

/// `Content-Length` digit scanning progress.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
enum LengthState {
    Empty,
    Digits,
    Trailing
}

/// State function type.
type StateFunction<H> = fn(&mut Parser<H>, &mut ByteStream) -> Result<ParserValue, ParserError>;

// -------------------------------------------------------------------------------------------------

/// HTTP/1.x parser.
///
/// Data is supplied with [`execute()`](#method.execute) in as many pieces as it arrives. Events
/// and data are delivered to the handler as soon as they are parsed, and nothing is buffered
/// besides a few bytes needed to recognize methods and the headers that control message framing.
///
/// # Examples
///
/// ```
/// use http_tap::http1::{ DataResult, ErrorCode, HttpHandler, Parser, ParserType };
///
/// #[derive(Default)]
/// struct Handler {
///     body: Vec<u8>
/// }
///
/// impl HttpHandler for Handler {
///     fn on_body(&mut self, data: &[u8]) -> DataResult {
///         self.body.extend_from_slice(data);
///         DataResult::Continue
///     }
/// }
///
/// let mut parser = Parser::new(ParserType::Response, Handler::default());
///
/// assert_eq!(parser.execute(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhel"), ErrorCode::Ok);
/// assert_eq!(parser.execute(b"lo"), ErrorCode::Ok);
/// assert_eq!(parser.handler().body, b"hello");
/// assert_eq!(parser.status_code(), 200);
/// ```
pub struct Parser<H: HttpHandler> {
    /// Latched error or pause.
    error: Option<ParserError>,

    /// Handler implementation.
    handler: H,

    /// Special header currently being parsed.
    header: HeaderKind,

    /// Amount of head bytes parsed for the current message or its trailers.
    head_length: usize,

    /// Multi-purpose index, used while matching constants and status code digits.
    index: usize,

    /// Enabled relaxations.
    lenient: Lenient,

    /// `Content-Length` scanning progress.
    length_state: LengthState,

    /// Maximum amount of head bytes.
    max_head_length: usize,

    /// Current message.
    message: Message,

    /// Amount of messages that completed since the last reset.
    message_count: usize,

    /// Method bytes collected so far.
    method: [u8; MAX_METHOD_LENGTH],

    /// Length of `method`.
    method_length: usize,

    /// Header name matcher.
    name: NameMatcher,

    /// Parser type.
    parser_type: ParserType,

    /// Body or chunk bytes remaining.
    remaining: u64,

    /// Open span.
    span: Option<Span>,

    /// Current state.
    state: ParserState,

    /// Current state function.
    state_function: StateFunction<H>,

    /// `Connection` and `Transfer-Encoding` token scanner.
    tokens: TokenScanner
}

impl<H: HttpHandler> Parser<H> {
    /// Create a new `Parser`.
    ///
    /// # Arguments
    ///
    /// **`parser_type`**
    ///
    /// The type of messages to parse.
    ///
    /// **`handler`**
    ///
    /// The handler implementation.
    pub fn new(parser_type: ParserType, handler: H) -> Parser<H> {
        Parser{
            error:           None,
            handler:         handler,
            header:          HeaderKind::General,
            head_length:     0,
            index:           0,
            lenient:         Lenient::empty(),
            length_state:    LengthState::Empty,
            max_head_length: DEFAULT_MAX_HEAD_LENGTH,
            message:         Message::new(parser_type),
            message_count:   0,
            method:          [0; MAX_METHOD_LENGTH],
            method_length:   0,
            name:            NameMatcher::new(),
            parser_type:     parser_type,
            remaining:       0,
            span:            None,
            state:           ParserState::Start,
            state_function:  Parser::start,
            tokens:          TokenScanner::new()
        }
    }

    /// Retrieve the `Content-Length` value of the current message.
    pub fn content_length(&self) -> u64 {
        self.message.content_length
    }

    /// Retrieve the latched code. This is `ErrorCode::Ok` unless the parser is paused or has
    /// failed.
    pub fn error(&self) -> ErrorCode {
        self.error.map_or(ErrorCode::Ok, |error| error.code())
    }

    /// Retrieve the latched error or pause.
    pub fn error_detail(&self) -> Option<&ParserError> {
        self.error.as_ref()
    }

    /// Retrieve the offset of the latched error or pause within the buffer that was executed when
    /// it occurred.
    pub fn error_position(&self) -> Option<usize> {
        self.error.map(|error| error.position())
    }

    /// Retrieve the reason of the latched error or pause.
    pub fn error_reason(&self) -> Option<&'static str> {
        self.error.map(|error| error.reason())
    }

    /// Parse a slice of data.
    ///
    /// Returns `ErrorCode::Ok` when the entire slice has been consumed. When a callback pauses,
    /// or a message requests a protocol upgrade, the matching pause code is returned and the
    /// remaining bytes have not been consumed. Any other code is a latched error.
    ///
    /// # Arguments
    ///
    /// **`data`**
    ///
    /// The data to parse.
    pub fn execute(&mut self, data: &[u8]) -> ErrorCode {
        self.execute_with_remainder(data).0
    }

    /// Parse a slice of data, additionally returning the amount of trailing bytes that were not
    /// consumed.
    ///
    /// Executing while paused or failed consumes nothing.
    ///
    /// # Arguments
    ///
    /// **`data`**
    ///
    /// The data to parse.
    pub fn execute_with_remainder(&mut self, data: &[u8]) -> (ErrorCode, usize) {
        if let Some(error) = self.error {
            return (error.code(), data.len());
        }

        let mut context = ByteStream::new(data);

        loop {
            let in_head = self.state.is_head();
            let start   = context.stream_index;

            context.stream = if in_head {
                &data[..self.head_limit(start, data.len())]
            } else {
                data
            };

            let value = (self.state_function)(self, &mut context);

            if in_head {
                self.head_length += context.stream_index - start;
            }

            match value {
                Ok(ParserValue::Continue) => {
                },
                Ok(ParserValue::Exit(Success::Eos(_))) => {
                    if context.stream.len() < data.len() {
                        return self.latch(
                            ParserError::new(
                                ErrorCode::HeaderOverflow,
                                "Header overflow",
                                context.stream_index
                            ),
                            data.len()
                        );
                    }

                    if let Err(error) = self.flush_span(&context) {
                        return self.latch(error, data.len());
                    }

                    trace!(state = ?self.state, length = data.len(), "end of stream");

                    return (ErrorCode::Ok, 0);
                },
                Ok(ParserValue::Exit(Success::Pause(position, reason))) => {
                    return self.latch(
                        ParserError::new(ErrorCode::Paused, reason, position),
                        data.len()
                    );
                },
                Ok(ParserValue::Exit(Success::Upgrade(position))) => {
                    return self.latch(
                        ParserError::new(
                            ErrorCode::PausedUpgrade,
                            "Pause on CONNECT/Upgrade",
                            position
                        ),
                        data.len()
                    );
                },
                Err(error) => {
                    return self.latch(error, data.len());
                }
            }
        }
    }

    /// Signal that the stream has ended.
    ///
    /// Between messages this returns `ErrorCode::Ok`. When the current message body is delimited
    /// by the end of the connection, `on_message_complete()` is executed. Any other state is an
    /// incomplete message, and `ErrorCode::InvalidEofState` is latched.
    pub fn finish(&mut self) -> ErrorCode {
        if let Some(error) = self.error {
            return error.code();
        }

        match self.state {
            ParserState::Start | ParserState::Closed => {
                ErrorCode::Ok
            },
            ParserState::BodyIdentityEof => {
                trace!("end of connection body");

                self.message_count += 1;

                set_state!(self, Closed, closed);

                match self.handler.on_message_complete(&self.message) {
                    EventResult::Continue => {
                        ErrorCode::Ok
                    },
                    EventResult::Pause => {
                        self.latch(
                            ParserError::new(ErrorCode::Paused, "`on_message_complete` pause", 0),
                            0
                        ).0
                    },
                    EventResult::Error => {
                        self.latch(
                            ParserError::new(
                                ErrorCode::CbMessageComplete,
                                "`on_message_complete` callback error",
                                0
                            ),
                            0
                        ).0
                    }
                }
            },
            _ => {
                self.latch(
                    ParserError::new(ErrorCode::InvalidEofState, "Invalid EOF state", 0),
                    0
                ).0
            }
        }
    }

    /// Retrieve the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Retrieve the handler as mutable.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Retrieve the HTTP major version of the current message.
    pub fn http_major(&self) -> u8 {
        self.message.http_major
    }

    /// Retrieve the HTTP minor version of the current message.
    pub fn http_minor(&self) -> u8 {
        self.message.http_minor
    }

    /// Consume the parser, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Indicates that the current message requested a protocol upgrade.
    pub fn is_upgrade(&self) -> bool {
        self.message.upgrade
    }

    /// Retrieve the enabled relaxations.
    pub fn lenient(&self) -> Lenient {
        self.lenient
    }

    /// Retrieve the maximum amount of bytes in a message head, or in chunked trailers.
    pub fn max_head_length(&self) -> usize {
        self.max_head_length
    }

    /// Retrieve the current message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Retrieve the request method of the current message.
    pub fn method(&self) -> Option<Method> {
        self.message.method
    }

    /// Indicates that the current message body ends only when the connection closes.
    pub fn needs_eof(&self) -> bool {
        self.message.needs_eof()
    }

    /// Retrieve the parser type. This is the configured type, see
    /// [`Message::parser_type()`](struct.Message.html#method.parser_type) for the detected type.
    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// Reset the parser to its initial state.
    ///
    /// The latched error, the current message, and all partially parsed data are discarded. The
    /// parser type, handler and configuration are kept.
    pub fn reset(&mut self) {
        debug!(state = ?self.state, "reset");

        self.error         = None;
        self.header        = HeaderKind::General;
        self.head_length   = 0;
        self.index         = 0;
        self.length_state  = LengthState::Empty;
        self.message       = Message::new(self.parser_type);
        self.message_count = 0;
        self.method_length = 0;
        self.remaining     = 0;
        self.span          = None;

        self.name.clear();
        self.tokens.clear();

        set_state!(self, Start, start);
    }

    /// Resume parsing after a callback paused.
    ///
    /// This does nothing unless the latched code is `ErrorCode::Paused`.
    pub fn resume(&mut self) {
        self.unpause(ErrorCode::Paused);
    }

    /// Resume parsing after a protocol upgrade.
    ///
    /// This does nothing unless the latched code is `ErrorCode::PausedUpgrade`. Parsing continues
    /// with a new message, so this is only useful when the upgrade has been declined.
    pub fn resume_after_upgrade(&mut self) {
        self.unpause(ErrorCode::PausedUpgrade);
    }

    /// Set the enabled relaxations.
    pub fn set_lenient(&mut self, lenient: Lenient) {
        self.lenient = lenient;
    }

    /// Set the maximum amount of bytes in a message head, or in chunked trailers.
    pub fn set_max_head_length(&mut self, length: usize) {
        self.max_head_length = length;
    }

    /// Indicates that the connection may be reused after the current message.
    pub fn should_keep_alive(&self) -> bool {
        self.message.should_keep_alive()
    }

    /// Retrieve the current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Retrieve the response status code of the current message.
    pub fn status_code(&self) -> u16 {
        self.message.status_code
    }

    // ---------------------------------------------------------------------------------------------
    // INTERNAL
    // ---------------------------------------------------------------------------------------------

    /// Report the open span with the bytes collected before the end of the stream.
    fn flush_span(&mut self, context: &ByteStream) -> Result<(), ParserError> {
        if let Some(span) = self.span {
            if context.stream_index > context.mark_index {
                self.on_span(span, &context.stream[context.mark_index..context.stream_index],
                             context.stream_index)?;
            }
        }

        Ok(())
    }

    /// Retrieve the end index of the bytes that may still be parsed as part of a head.
    fn head_limit(&self, start: usize, length: usize) -> usize {
        let allowance = self.max_head_length.saturating_sub(self.head_length);

        if length - start > allowance {
            start + allowance
        } else {
            length
        }
    }

    /// Latch an error or pause, returning its code and the amount of unconsumed bytes.
    fn latch(&mut self, error: ParserError, length: usize) -> (ErrorCode, usize) {
        if error.code().is_paused() {
            debug!(code = error.code().name(), position = error.position(), reason = error.reason(),
                   "paused");
        } else {
            debug!(code = error.code().name(), position = error.position(), reason = error.reason(),
                   state = ?self.state, "parser error");

            self.span = None;

            set_state!(self, Dead, dead);
        }

        self.error = Some(error);

        (error.code(), length.saturating_sub(error.position()))
    }

    /// Execute the data callback for `span`.
    fn on_span(&mut self, span: Span, data: &[u8], position: usize) -> Result<(), ParserError> {
        let result = match span {
            Span::ChunkExtensionName  => self.handler.on_chunk_extension_name(data),
            Span::ChunkExtensionValue => self.handler.on_chunk_extension_value(data),
            Span::HeaderField         => self.handler.on_header_field(data),
            Span::HeaderValue         => self.handler.on_header_value(data),
            Span::Method              => self.handler.on_method(data),
            Span::Status              => self.handler.on_status(data),
            Span::Url                 => self.handler.on_url(data),
            Span::Version             => self.handler.on_version(data)
        };

        match result {
            DataResult::Continue => Ok(()),
            DataResult::User => {
                Err(ParserError::new(ErrorCode::User, "Span callback stopped the parser", position))
            },
            DataResult::Error => {
                Err(ParserError::new(ErrorCode::CbData, "Span callback error", position))
            }
        }
    }

    /// Clear the latched pause `code`.
    fn unpause(&mut self, code: ErrorCode) {
        match self.error {
            Some(error) if error.code() == code => {
                debug!(code = code.name(), state = ?self.state, "resume");

                self.error = None;
            },
            _ => {
                debug!(expected = code.name(), latched = self.error().name(), "resume ignored");
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // SPECIAL HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Apply the current `Connection` or `Transfer-Encoding` list element.
    fn apply_token(&mut self) {
        let token = match self.tokens.token() {
            Some(token) => token,
            None        => return
        };

        match self.header {
            HeaderKind::Connection | HeaderKind::ProxyConnection => {
                match token {
                    b"close"      => self.message.flags.insert(Flags::CONNECTION_CLOSE),
                    b"keep-alive" => self.message.flags.insert(Flags::CONNECTION_KEEP_ALIVE),
                    b"upgrade"    => self.message.flags.insert(Flags::CONNECTION_UPGRADE),
                    _             => {}
                }
            },
            HeaderKind::TransferEncoding => {
                // only a final chunked coding frames the message
                self.message.flags.set(Flags::CHUNKED, token == b"chunked");
            },
            _ => {}
        }
    }

    /// Finish interpreting a special header value.
    fn header_value_end(&mut self, position: usize) -> Result<(), ParserError> {
        match self.header {
            HeaderKind::ContentLength => {
                if self.length_state == LengthState::Empty {
                    return Err(ParserError::new(
                        ErrorCode::InvalidContentLength,
                        "Empty Content-Length",
                        position
                    ));
                }
            },
            HeaderKind::Connection | HeaderKind::ProxyConnection | HeaderKind::TransferEncoding => {
                self.apply_token();
                self.tokens.clear();
            },
            HeaderKind::General | HeaderKind::Upgrade => {}
        }

        self.header = HeaderKind::General;

        Ok(())
    }

    /// Interpret a special header value byte.
    fn scan_header_value(&mut self, byte: u8, position: usize) -> Result<(), ParserError> {
        match self.header {
            HeaderKind::ContentLength => {
                if is_digit(byte) {
                    if self.length_state == LengthState::Trailing {
                        return Err(ParserError::new(
                            ErrorCode::InvalidContentLength,
                            "Invalid character in Content-Length",
                            position
                        ));
                    }

                    self.message.content_length = self.message.content_length
                        .checked_mul(10)
                        .and_then(|length| length.checked_add((byte - b'0') as u64))
                        .ok_or(ParserError::new(
                            ErrorCode::InvalidContentLength,
                            "Content-Length overflow",
                            position
                        ))?;

                    self.length_state = LengthState::Digits;
                } else if is_space(byte) {
                    if self.length_state == LengthState::Digits {
                        self.length_state = LengthState::Trailing;
                    }
                } else {
                    return Err(ParserError::new(
                        ErrorCode::InvalidContentLength,
                        "Invalid character in Content-Length",
                        position
                    ));
                }
            },
            HeaderKind::Connection | HeaderKind::ProxyConnection | HeaderKind::TransferEncoding => {
                if self.tokens.push(byte) {
                    self.apply_token();
                    self.tokens.clear();
                }
            },
            HeaderKind::General | HeaderKind::Upgrade => {}
        }

        Ok(())
    }

    // ---------------------------------------------------------------------------------------------
    // MESSAGE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn dead(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_state_error!(context, Internal, "Parser is dead");
    }

    #[inline]
    fn start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte != b'\r' && byte != b'\n' {
                break;
            }
        }

        bs_replay!(context);

        if self.message_count > 0 {
            callback_event!(
                self,
                context,
                on_reset,
                CbReset,
                MessageBegin,
                message_begin
            );
        }

        transition!(
            self,
            context,
            MessageBegin,
            message_begin
        );
    }

    #[inline]
    fn message_begin(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.message     = Message::new(self.parser_type);
        self.head_length = 0;

        match self.parser_type {
            ParserType::Request => {
                self.method_length = 0;

                span_start!(self, context, Method);

                callback_event!(
                    self,
                    context,
                    on_message_begin,
                    CbMessageBegin,
                    RequestMethod,
                    request_method
                );
            },
            ParserType::Response => {
                self.index = 0;

                callback_event!(
                    self,
                    context,
                    on_message_begin,
                    CbMessageBegin,
                    Protocol,
                    protocol
                );
            },
            ParserType::Both => {
                callback_event!(
                    self,
                    context,
                    on_message_begin,
                    CbMessageBegin,
                    Detect1,
                    detect1
                );
            }
        }
    }

    #[inline]
    fn closed(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte != b'\r' && byte != b'\n' {
                break;
            }
        }

        if self.lenient.contains(Lenient::DATA_AFTER_CLOSE) {
            bs_replay!(context);

            transition!(
                self,
                context,
                Start,
                start
            );
        }

        exit_error!(context, ClosedConnection, "Data after `Connection: close`");
    }

    // ---------------------------------------------------------------------------------------------
    // DETECTION STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn detect1(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let byte = next_byte!(self, context);

        if byte == b'H' {
            transition!(
                self,
                context,
                Detect2,
                detect2
            );
        } else if is_upper(byte) {
            bs_replay!(context);

            self.message.parser_type = ParserType::Request;
            self.method_length       = 0;

            span_start!(self, context, Method);

            transition!(
                self,
                context,
                RequestMethod,
                request_method
            );
        }

        exit_error!(context, InvalidConstant, "Invalid word encountered");
    }

    #[inline]
    fn detect2(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'T' {
            self.message.parser_type = ParserType::Response;
            self.index               = 2;

            transition!(
                self,
                context,
                Protocol,
                protocol
            );
        }

        bs_replay!(context);

        // the H was consumed by the previous state, and may belong to an earlier slice
        self.message.parser_type = ParserType::Request;
        self.method[0]           = b'H';
        self.method_length       = 1;

        callback_data!(self, context, on_method, b"H");

        span_start!(self, context, Method);

        transition!(
            self,
            context,
            RequestMethod,
            request_method
        );
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn request_method(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte == b' ' {
                break;
            } else if self.method_length == MAX_METHOD_LENGTH {
                exit_error!(context, InvalidMethod, "Invalid method encountered");
            }

            self.method[self.method_length] = byte;
            self.method_length             += 1;

            if !Method::is_prefix(&self.method[..self.method_length]) {
                exit_error!(context, InvalidMethod, "Invalid method encountered");
            }
        }

        if let Some(method) = Method::from_bytes(&self.method[..self.method_length]) {
            self.message.method = Some(method);

            span_end!(self, context, 1);

            callback_event!(
                self,
                context,
                on_method_complete,
                CbMethodComplete,
                RequestUrlStart,
                request_url_start
            );
        }

        exit_error!(context, InvalidMethod, "Invalid method encountered");
    }

    #[inline]
    fn request_url_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            if next_byte!(self, context) != b' ' {
                break;
            }
        }

        if is_url(context.byte) {
            bs_replay!(context);

            span_start!(self, context, Url);

            transition!(
                self,
                context,
                RequestUrl,
                request_url
            );
        }

        exit_error!(context, InvalidUrl, "Unexpected start char in url");
    }

    #[inline]
    fn request_url(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            if !is_url(next_byte!(self, context)) {
                break;
            }
        }

        match context.byte {
            b' ' => {
                span_end!(self, context, 1);

                self.index = 0;

                callback_event!(
                    self,
                    context,
                    on_url_complete,
                    CbUrlComplete,
                    Protocol,
                    protocol
                );
            },
            b'\r' => {
                span_end!(self, context, 1);

                callback_event!(
                    self,
                    context,
                    on_url_complete,
                    CbUrlComplete,
                    RequestHttp09Lf,
                    request_http09_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after url");
                span_end!(self, context, 1);

                self.message.http_major = 0;
                self.message.http_minor = 9;

                callback_event!(
                    self,
                    context,
                    on_url_complete,
                    CbUrlComplete,
                    HeadersComplete,
                    headers_complete
                );
            },
            _ => {
                exit_error!(context, InvalidUrl, "Invalid characters in url");
            }
        }
    }

    #[inline]
    fn request_http09_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'\n' {
            self.message.http_major = 0;
            self.message.http_minor = 9;

            transition!(
                self,
                context,
                HeadersComplete,
                headers_complete
            );
        }

        exit_error!(context, LfExpected, "Expected LF after HTTP/0.9 request line");
    }

    #[inline]
    fn request_line_cr(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        match next_byte!(self, context) {
            b'\r' => {
                transition!(
                    self,
                    context,
                    RequestLineLf,
                    request_line_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after version");

                transition!(
                    self,
                    context,
                    HeaderFieldStart,
                    header_field_start
                );
            },
            _ => {
                exit_error!(context, InvalidVersion, "Expected CRLF after version");
            }
        }
    }

    #[inline]
    fn request_line_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'\n' {
            transition!(
                self,
                context,
                HeaderFieldStart,
                header_field_start
            );
        }

        exit_error!(context, LfExpected, "Missing expected LF after request line");
    }

    // ---------------------------------------------------------------------------------------------
    // HTTP VERSION STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn protocol(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        while self.index < PROTOCOL.len() {
            if next_byte!(self, context) != PROTOCOL[self.index] {
                exit_error!(context, InvalidConstant, "Expected HTTP/");
            }

            self.index += 1;
        }

        span_start!(self, context, Version);

        transition!(
            self,
            context,
            VersionMajor,
            version_major
        );
    }

    #[inline]
    fn version_major(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let byte = next_byte!(self, context);

        if is_digit(byte) {
            self.message.http_major = byte - b'0';

            transition!(
                self,
                context,
                VersionPeriod,
                version_period
            );
        }

        exit_error!(context, InvalidVersion, "Invalid major version");
    }

    #[inline]
    fn version_period(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'.' {
            transition!(
                self,
                context,
                VersionMinor,
                version_minor
            );
        }

        exit_error!(context, InvalidVersion, "Expected dot");
    }

    #[inline]
    fn version_minor(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let byte = next_byte!(self, context);

        if !is_digit(byte) {
            exit_error!(context, InvalidVersion, "Invalid minor version");
        }

        self.message.http_minor = byte - b'0';

        if !self.lenient.contains(Lenient::VERSION)
        && !matches!((self.message.http_major, self.message.http_minor),
                     (0, 9) | (1, 0) | (1, 1) | (2, 0)) {
            exit_error!(context, InvalidVersion, "Invalid HTTP version");
        }

        span_end!(self, context, 0);

        if self.message.parser_type == ParserType::Request {
            callback_event!(
                self,
                context,
                on_version_complete,
                CbVersionComplete,
                RequestLineCr,
                request_line_cr
            );
        }

        callback_event!(
            self,
            context,
            on_version_complete,
            CbVersionComplete,
            ResponseVersionSpace,
            response_version_space
        );
    }

    // ---------------------------------------------------------------------------------------------
    // STATUS LINE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn response_version_space(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b' ' {
            self.index               = 0;
            self.message.status_code = 0;

            transition!(
                self,
                context,
                ResponseStatusCode,
                response_status_code
            );
        }

        exit_error!(context, InvalidVersion, "Expected space after version");
    }

    #[inline]
    fn response_status_code(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        while self.index < 3 {
            let byte = next_byte!(self, context);

            if !is_digit(byte) {
                exit_error!(context, InvalidStatus, "Invalid status code");
            }

            self.message.status_code = self.message.status_code * 10 + (byte - b'0') as u16;
            self.index              += 1;
        }

        transition!(
            self,
            context,
            ResponseStatusCodeEnd,
            response_status_code_end
        );
    }

    #[inline]
    fn response_status_code_end(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        match next_byte!(self, context) {
            b' ' => {
                transition!(
                    self,
                    context,
                    ResponseStatusStart,
                    response_status_start
                );
            },
            b'\r' => {
                callback_event!(
                    self,
                    context,
                    on_status_complete,
                    CbStatusComplete,
                    ResponseStatusLf,
                    response_status_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after response line");

                callback_event!(
                    self,
                    context,
                    on_status_complete,
                    CbStatusComplete,
                    HeaderFieldStart,
                    header_field_start
                );
            },
            _ => {
                exit_error!(context, InvalidStatus, "Invalid response status");
            }
        }
    }

    #[inline]
    fn response_status_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        match next_byte!(self, context) {
            b'\r' => {
                callback_event!(
                    self,
                    context,
                    on_status_complete,
                    CbStatusComplete,
                    ResponseStatusLf,
                    response_status_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after response line");

                callback_event!(
                    self,
                    context,
                    on_status_complete,
                    CbStatusComplete,
                    HeaderFieldStart,
                    header_field_start
                );
            },
            _ => {
                bs_replay!(context);

                span_start!(self, context, Status);

                transition!(
                    self,
                    context,
                    ResponseStatus,
                    response_status
                );
            }
        }
    }

    #[inline]
    fn response_status(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte == b'\r' || byte == b'\n' {
                break;
            } else if !is_header_value(byte) {
                exit_error!(context, InvalidStatus, "Invalid response status");
            }
        }

        if context.byte == b'\n' {
            lenient_lf!(self, context, "Missing expected CR after response line");
            span_end!(self, context, 1);

            callback_event!(
                self,
                context,
                on_status_complete,
                CbStatusComplete,
                HeaderFieldStart,
                header_field_start
            );
        }

        span_end!(self, context, 1);

        callback_event!(
            self,
            context,
            on_status_complete,
            CbStatusComplete,
            ResponseStatusLf,
            response_status_lf
        );
    }

    #[inline]
    fn response_status_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'\n' {
            transition!(
                self,
                context,
                HeaderFieldStart,
                header_field_start
            );
        }

        exit_error!(context, LfExpected, "Missing expected LF after response line");
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn header_field_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let byte = next_byte!(self, context);

        if is_token(byte) {
            bs_replay!(context);

            self.name.clear();

            span_start!(self, context, HeaderField);

            transition!(
                self,
                context,
                HeaderField,
                header_field
            );
        }

        match byte {
            b'\r' => {
                transition!(
                    self,
                    context,
                    HeadersLf,
                    headers_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after headers");
                bs_replay!(context);

                transition!(
                    self,
                    context,
                    HeadersLf,
                    headers_lf
                );
            },
            _ => {
                exit_error!(context, InvalidHeaderToken, "Invalid header token");
            }
        }
    }

    #[inline]
    fn header_field(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte == b':' {
                break;
            } else if !is_token(byte) {
                exit_error!(context, InvalidHeaderToken, "Invalid header token");
            }

            self.name.push(byte);
        }

        span_end!(self, context, 1);

        // trailers never change the framing
        self.header = if self.message.flags.contains(Flags::TRAILING) {
            HeaderKind::General
        } else {
            self.name.kind()
        };

        match self.header {
            HeaderKind::ContentLength => {
                if self.message.flags.contains(Flags::CONTENT_LENGTH) {
                    exit_error!(context, UnexpectedContentLength, "Duplicate Content-Length");
                }

                self.message.flags.insert(Flags::CONTENT_LENGTH);

                self.length_state = LengthState::Empty;
            },
            HeaderKind::Connection | HeaderKind::ProxyConnection => {
                self.tokens.clear();
            },
            HeaderKind::TransferEncoding => {
                self.message.flags.insert(Flags::TRANSFER_ENCODING);

                self.tokens.clear();
            },
            HeaderKind::Upgrade => {
                self.message.flags.insert(Flags::UPGRADE);
            },
            HeaderKind::General => {}
        }

        callback_event!(
            self,
            context,
            on_header_field_complete,
            CbHeaderFieldComplete,
            HeaderValueStart,
            header_value_start
        );
    }

    #[inline]
    fn header_value_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        match next_byte!(self, context) {
            b'\r' => {
                transition!(
                    self,
                    context,
                    HeaderValueLf,
                    header_value_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after header value");

                transition!(
                    self,
                    context,
                    HeaderValueLws,
                    header_value_lws
                );
            },
            _ => {
                bs_replay!(context);

                span_start!(self, context, HeaderValue);

                transition!(
                    self,
                    context,
                    HeaderValue,
                    header_value
                );
            }
        }
    }

    #[inline]
    fn header_value(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte == b'\r' || byte == b'\n' {
                break;
            } else if !is_header_value(byte) && !self.lenient.contains(Lenient::HEADERS) {
                exit_error!(context, InvalidHeaderToken, "Invalid header value char");
            }

            if self.header != HeaderKind::General {
                self.scan_header_value(byte, context.stream_index - 1)?;
            }
        }

        if context.byte == b'\n' {
            lenient_lf!(self, context, "Missing expected CR after header value");
            span_end!(self, context, 1);

            transition!(
                self,
                context,
                HeaderValueLws,
                header_value_lws
            );
        }

        span_end!(self, context, 1);

        transition!(
            self,
            context,
            HeaderValueLf,
            header_value_lf
        );
    }

    #[inline]
    fn header_value_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'\n' {
            transition!(
                self,
                context,
                HeaderValueLws,
                header_value_lws
            );
        }

        exit_error!(context, LfExpected, "Missing expected LF after header value");
    }

    #[inline]
    fn header_value_lws(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if is_space(next_byte!(self, context)) {
            // obsolete line folding continues the value, and is reported as a single space
            if self.header != HeaderKind::General {
                self.scan_header_value(b' ', context.stream_index - 1)?;
            }

            callback_data!(self, context, on_header_value, b" ");

            transition!(
                self,
                context,
                HeaderValueFold,
                header_value_start
            );
        }

        bs_replay!(context);

        self.header_value_end(context.stream_index)?;

        callback_event!(
            self,
            context,
            on_header_value_complete,
            CbHeaderValueComplete,
            HeaderFieldStart,
            header_field_start
        );
    }

    #[inline]
    fn headers_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) != b'\n' {
            exit_error!(context, LfExpected, "Missing expected LF after headers");
        }

        if self.message.flags.contains(Flags::TRAILING) {
            callback_event!(
                self,
                context,
                on_chunk_complete,
                CbChunkComplete,
                MessageComplete,
                message_complete
            );
        }

        if self.message.flags.contains(Flags::TRANSFER_ENCODING | Flags::CONTENT_LENGTH)
        && !self.lenient.contains(Lenient::CHUNKED_LENGTH) {
            exit_error!(
                context,
                UnexpectedContentLength,
                "Content-Length can't be present with Transfer-Encoding"
            );
        }

        transition!(
            self,
            context,
            HeadersComplete,
            headers_complete
        );
    }

    #[inline]
    fn headers_complete(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let flags = self.message.flags;

        // responses carry upgrade headers to announce support, and only switch on 101
        self.message.upgrade = if flags.contains(Flags::UPGRADE | Flags::CONNECTION_UPGRADE) {
            self.message.parser_type == ParserType::Request || self.message.status_code == 101
        } else {
            self.message.method == Some(Method::Connect)
        };

        set_state!(self, BodyStart, body_start);

        match self.handler.on_headers_complete(&self.message) {
            HeadersCompleteResult::Proceed => {
            },
            HeadersCompleteResult::NoBody => {
                self.message.flags.insert(Flags::SKIP_BODY);
            },
            HeadersCompleteResult::PauseForUpgrade => {
                self.message.upgrade = true;

                self.message.flags.insert(Flags::SKIP_BODY);
            },
            HeadersCompleteResult::Pause => {
                exit_pause!(self, context, on_headers_complete);
            },
            HeadersCompleteResult::Error => {
                exit_state_error!(
                    context,
                    CbHeadersComplete,
                    "`on_headers_complete` callback error"
                );
            }
        }

        transition!(self, context);
    }

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn body_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let flags    = self.message.flags;
        let response = self.message.parser_type == ParserType::Response;
        let status   = self.message.status_code;
        let has_body = flags.contains(Flags::CHUNKED)
                       || (flags.contains(Flags::CONTENT_LENGTH)
                           && self.message.content_length > 0);

        if (self.message.upgrade
            && (self.message.method == Some(Method::Connect)
                || flags.contains(Flags::SKIP_BODY)
                || !has_body))
        || (response && status == 101) {
            // the rest of the stream belongs to a different protocol
            trace!(status = status, "body skipped for upgrade");

            self.message.upgrade = true;

            transition!(
                self,
                context,
                MessageComplete,
                message_complete
            );
        }

        if flags.contains(Flags::SKIP_BODY)
        || (response && matches!(status, 100 | 102 | 103 | 204 | 304)) {
            trace!(status = status, "body skipped");

            transition!(
                self,
                context,
                MessageComplete,
                message_complete
            );
        }

        if flags.contains(Flags::CHUNKED) {
            trace!("chunked body");

            transition!(
                self,
                context,
                ChunkSizeStart,
                chunk_size_start
            );
        }

        if flags.contains(Flags::TRANSFER_ENCODING) {
            if !response
            && !self.lenient.intersects(Lenient::CHUNKED_LENGTH | Lenient::TRANSFER_ENCODING) {
                exit_state_error!(
                    context,
                    InvalidTransferEncoding,
                    "Request has invalid `Transfer-Encoding`"
                );
            }

            trace!("body ends with connection");

            transition!(
                self,
                context,
                BodyIdentityEof,
                body_identity_eof
            );
        }

        if !flags.contains(Flags::CONTENT_LENGTH) {
            if self.message.needs_eof() {
                trace!("body ends with connection");

                transition!(
                    self,
                    context,
                    BodyIdentityEof,
                    body_identity_eof
                );
            }

            transition!(
                self,
                context,
                MessageComplete,
                message_complete
            );
        }

        if self.message.content_length == 0 {
            transition!(
                self,
                context,
                MessageComplete,
                message_complete
            );
        }

        trace!(length = self.message.content_length, "identity body");

        self.remaining = self.message.content_length;

        transition!(
            self,
            context,
            BodyIdentity,
            body_identity
        );
    }

    #[inline]
    fn body_identity(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_remaining!(self, context);

        transition!(
            self,
            context,
            MessageComplete,
            message_complete
        );
    }

    #[inline]
    fn body_identity_eof(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        let start = context.stream_index;

        bs_jump!(context, bs_available!(context));

        callback_data!(self, context, on_body, &context.stream[start..]);

        exit_eos!(self, context);
    }

    // ---------------------------------------------------------------------------------------------
    // CHUNKED STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn chunk_size_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if let Some(value) = hex_to_byte(next_byte!(self, context)) {
            self.remaining = value as u64;

            transition!(
                self,
                context,
                ChunkSize,
                chunk_size
            );
        }

        exit_error!(context, InvalidChunkSize, "Invalid character in chunk size");
    }

    #[inline]
    fn chunk_size(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let value = match hex_to_byte(next_byte!(self, context)) {
                Some(value) => value,
                None        => break
            };

            self.remaining = match self.remaining
                                       .checked_mul(16)
                                       .and_then(|size| size.checked_add(value as u64)) {
                Some(size) => size,
                None       => exit_error!(context, InvalidChunkSize, "Chunk size overflow")
            };
        }

        match context.byte {
            b'\r' => {
                transition!(
                    self,
                    context,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after chunk size");
                bs_replay!(context);

                transition!(
                    self,
                    context,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b';' => {
                transition!(
                    self,
                    context,
                    ChunkExtensionStart,
                    chunk_extension_start
                );
            },
            b' ' | b'\t' if self.lenient.contains(Lenient::SPACES_AFTER_CHUNK_SIZE) => {
                transition!(
                    self,
                    context,
                    ChunkParametersWs,
                    chunk_parameters_ws
                );
            },
            _ => {
                exit_error!(context, InvalidChunkSize, "Invalid character in chunk size");
            }
        }
    }

    #[inline]
    fn chunk_parameters_ws(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        match next_byte!(self, context) {
            b';' => {
                transition!(
                    self,
                    context,
                    ChunkExtensionStart,
                    chunk_extension_start
                );
            },
            b'\r' => {
                transition!(
                    self,
                    context,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after chunk size");
                bs_replay!(context);

                transition!(
                    self,
                    context,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            _ => {
                exit_error!(context, InvalidChunkExtension, "Invalid character in chunk extensions");
            }
        }
    }

    #[inline]
    fn chunk_extension_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        if is_token(next_byte!(self, context)) {
            bs_replay!(context);

            span_start!(self, context, ChunkExtensionName);

            transition!(
                self,
                context,
                ChunkExtensionName,
                chunk_extension_name
            );
        }

        exit_error!(context, InvalidChunkExtension, "Invalid character in chunk extensions name");
    }

    #[inline]
    fn chunk_extension_name(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_tokens!(
            self,
            context,

            // stop on any name delimiter
            matches!(context.byte, b'=' | b';' | b'\r' | b'\n' | b' ' | b'\t'),

            InvalidChunkExtension,
            "Invalid character in chunk extensions name"
        );

        span_end!(self, context, 1);

        match context.byte {
            b'=' => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_name_complete,
                    CbChunkExtensionNameComplete,
                    ChunkExtensionValueStart,
                    chunk_extension_value_start
                );
            },
            b';' => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_name_complete,
                    CbChunkExtensionNameComplete,
                    ChunkExtensionStart,
                    chunk_extension_start
                );
            },
            b'\r' => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_name_complete,
                    CbChunkExtensionNameComplete,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after chunk extension name");
                bs_replay!(context);

                callback_event!(
                    self,
                    context,
                    on_chunk_extension_name_complete,
                    CbChunkExtensionNameComplete,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            _ => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_name_complete,
                    CbChunkExtensionNameComplete,
                    ChunkExtensionNameWs,
                    chunk_extension_name_ws
                );
            }
        }
    }

    #[inline]
    fn chunk_extension_name_ws(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        if next_byte!(self, context) == b'=' {
            transition!(
                self,
                context,
                ChunkExtensionValueStart,
                chunk_extension_value_start
            );
        }

        // everything else is handled the same as after a value
        bs_replay!(context);

        transition!(
            self,
            context,
            ChunkParametersWs,
            chunk_parameters_ws
        );
    }

    #[inline]
    fn chunk_extension_value_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        let byte = next_byte!(self, context);

        if byte == b'"' {
            span_start!(self, context, ChunkExtensionValue);

            transition!(
                self,
                context,
                ChunkExtensionQuotedValue,
                chunk_extension_quoted_value
            );
        } else if is_token(byte) {
            bs_replay!(context);

            span_start!(self, context, ChunkExtensionValue);

            transition!(
                self,
                context,
                ChunkExtensionValue,
                chunk_extension_value
            );
        }

        exit_error!(context, InvalidChunkExtension, "Invalid character in chunk extensions value");
    }

    #[inline]
    fn chunk_extension_value(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_tokens!(
            self,
            context,

            // stop on any value delimiter
            matches!(context.byte, b';' | b'\r' | b'\n' | b' ' | b'\t'),

            InvalidChunkExtension,
            "Invalid character in chunk extensions value"
        );

        span_end!(self, context, 1);

        match context.byte {
            b';' => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_value_complete,
                    CbChunkExtensionValueComplete,
                    ChunkExtensionStart,
                    chunk_extension_start
                );
            },
            b'\r' => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_value_complete,
                    CbChunkExtensionValueComplete,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after chunk extension value");
                bs_replay!(context);

                callback_event!(
                    self,
                    context,
                    on_chunk_extension_value_complete,
                    CbChunkExtensionValueComplete,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            _ => {
                callback_event!(
                    self,
                    context,
                    on_chunk_extension_value_complete,
                    CbChunkExtensionValueComplete,
                    ChunkParametersWs,
                    chunk_parameters_ws
                );
            }
        }
    }

    #[inline]
    fn chunk_extension_quoted_value(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            let byte = next_byte!(self, context);

            if byte == b'"' || byte == b'\\' {
                break;
            } else if !is_header_value(byte) {
                exit_error!(
                    context,
                    InvalidChunkExtension,
                    "Invalid character in chunk extensions quoted value"
                );
            }
        }

        if context.byte == b'\\' {
            transition!(
                self,
                context,
                ChunkExtensionQuotedEscape,
                chunk_extension_quoted_escape
            );
        }

        span_end!(self, context, 1);

        callback_event!(
            self,
            context,
            on_chunk_extension_value_complete,
            CbChunkExtensionValueComplete,
            ChunkExtensionQuotedEnd,
            chunk_extension_quoted_end
        );
    }

    #[inline]
    fn chunk_extension_quoted_escape(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if is_header_value(next_byte!(self, context)) {
            transition!(
                self,
                context,
                ChunkExtensionQuotedValue,
                chunk_extension_quoted_value
            );
        }

        exit_error!(
            context,
            InvalidChunkExtension,
            "Invalid quoted-pair in chunk extensions quoted value"
        );
    }

    #[inline]
    fn chunk_extension_quoted_end(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        match next_byte!(self, context) {
            b';' => {
                transition!(
                    self,
                    context,
                    ChunkExtensionStart,
                    chunk_extension_start
                );
            },
            b'\r' => {
                transition!(
                    self,
                    context,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after chunk extension value");
                bs_replay!(context);

                transition!(
                    self,
                    context,
                    ChunkSizeLf,
                    chunk_size_lf
                );
            },
            b' ' | b'\t' => {
                transition!(
                    self,
                    context,
                    ChunkParametersWs,
                    chunk_parameters_ws
                );
            },
            _ => {
                exit_error!(
                    context,
                    InvalidChunkExtension,
                    "Invalid character in chunk extensions quote value"
                );
            }
        }
    }

    #[inline]
    fn chunk_size_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) != b'\n' {
            exit_error!(context, LfExpected, "Missing expected LF after chunk size");
        }

        self.message.chunk_length = self.remaining;

        if self.remaining == 0 {
            // trailers are limited separately from the head
            self.message.flags.insert(Flags::TRAILING);

            self.head_length = 0;

            callback_event!(
                self,
                context,
                on_chunk_header,
                CbChunkHeader,
                HeaderFieldStart,
                header_field_start
            );
        }

        callback_event!(
            self,
            context,
            on_chunk_header,
            CbChunkHeader,
            ChunkData,
            chunk_data
        );
    }

    #[inline]
    fn chunk_data(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_remaining!(self, context);

        transition!(
            self,
            context,
            ChunkDataCr,
            chunk_data_cr
        );
    }

    #[inline]
    fn chunk_data_cr(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        match next_byte!(self, context) {
            b'\r' => {
                transition!(
                    self,
                    context,
                    ChunkDataLf,
                    chunk_data_lf
                );
            },
            b'\n' => {
                lenient_lf!(self, context, "Missing expected CR after chunk data");

                callback_event!(
                    self,
                    context,
                    on_chunk_complete,
                    CbChunkComplete,
                    ChunkSizeStart,
                    chunk_size_start
                );
            },
            _ => {
                if self.lenient.contains(Lenient::OPTIONAL_CRLF_AFTER_CHUNK) {
                    bs_replay!(context);

                    callback_event!(
                        self,
                        context,
                        on_chunk_complete,
                        CbChunkComplete,
                        ChunkSizeStart,
                        chunk_size_start
                    );
                }

                exit_error!(context, CrExpected, "Expected CRLF after chunk data");
            }
        }
    }

    #[inline]
    fn chunk_data_lf(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if next_byte!(self, context) == b'\n' {
            callback_event!(
                self,
                context,
                on_chunk_complete,
                CbChunkComplete,
                ChunkSizeStart,
                chunk_size_start
            );
        }

        exit_error!(context, LfExpected, "Expected LF after chunk data");
    }

    // ---------------------------------------------------------------------------------------------
    // FINISHED STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn message_complete(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.message_count += 1;

        if self.message.upgrade {
            trace!("message complete, upgrading");

            set_state!(self, Start, start);

            // the upgrade pause wins over a callback pause
            match self.handler.on_message_complete(&self.message) {
                EventResult::Continue | EventResult::Pause => {
                    exit_upgrade!(self, context);
                },
                EventResult::Error => {
                    exit_state_error!(
                        context,
                        CbMessageComplete,
                        "`on_message_complete` callback error"
                    );
                }
            }
        }

        if self.message.should_keep_alive() {
            trace!("message complete, keep alive");

            callback_event!(
                self,
                context,
                on_message_complete,
                CbMessageComplete,
                Start,
                start
            );
        }

        trace!("message complete, closing");

        callback_event!(
            self,
            context,
            on_message_complete,
            CbMessageComplete,
            Closed,
            closed
        );
    }
}

impl<'a, C> Parser<CallbackHandler<'a, C>> {
    /// Create a new `Parser` that dispatches to a set of callback closures.
    ///
    /// # Arguments
    ///
    /// **`parser_type`**
    ///
    /// The type of messages to parse.
    ///
    /// **`callbacks`**
    ///
    /// The callback closures.
    ///
    /// **`context`**
    ///
    /// The user context supplied to each closure.
    pub fn with_callbacks(parser_type: ParserType, callbacks: Callbacks<'a, C>, context: C)
    -> Parser<CallbackHandler<'a, C>> {
        Parser::new(parser_type, CallbackHandler::new(callbacks, context))
    }

    /// Retrieve the user context.
    pub fn context(&self) -> &C {
        self.handler.context()
    }

    /// Retrieve the user context as mutable.
    pub fn context_mut(&mut self) -> &mut C {
        self.handler.context_mut()
    }
}

impl<H: HttpHandler> fmt::Debug for Parser<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Parser")
                 .field("parser_type", &self.parser_type)
                 .field("state", &self.state)
                 .field("error", &self.error)
                 .field("message", &self.message)
                 .finish()
    }
}
