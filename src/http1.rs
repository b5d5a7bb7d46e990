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

//! HTTP 1.x parser, states, and errors.
//!
//! A [`Parser`](struct.Parser.html) is fed with [`execute()`](struct.Parser.html#method.execute)
//! as data arrives, and reports what it finds to an [`HttpHandler`](trait.HttpHandler.html).
//! Handlers that prefer closures can be built from [`Callbacks`](struct.Callbacks.html).
//!
//! # Examples
//!
//! ```
//! use http_tap::http1::{ Callbacks, DataResult, ErrorCode, EventResult, Parser, ParserType };
//!
//! #[derive(Default)]
//! struct Context {
//!     fields:   Vec<Vec<u8>>,
//!     complete: usize
//! }
//!
//! let callbacks = Callbacks::new()
//!     .on_header_field(|context: &mut Context, data: &[u8]| {
//!         context.fields.push(data.to_vec());
//!         DataResult::Continue
//!     })
//!     .on_message_complete(|context: &mut Context, _| {
//!         context.complete += 1;
//!         EventResult::Continue
//!     });
//!
//! let mut parser = Parser::with_callbacks(ParserType::Request, callbacks, Context::default());
//!
//! assert_eq!(parser.execute(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n"), ErrorCode::Ok);
//! assert_eq!(parser.context().fields, vec![b"Host".to_vec()]);
//! assert_eq!(parser.context().complete, 1);
//! assert!(parser.should_keep_alive());
//! ```

mod callbacks;
mod header;
mod http_handler;
mod lenient;
mod message;
mod method;
mod parser;
mod parser_error;
mod parser_state;
mod parser_type;
mod status;

pub use crate::http1::callbacks::{ CallbackHandler,
                                   Callbacks,
                                   DataCallback,
                                   EventCallback,
                                   HeadersCompleteCallback };
pub use crate::http1::http_handler::{ DataResult,
                                      EventResult,
                                      HeadersCompleteResult,
                                      HttpHandler };
pub use crate::http1::lenient::{ DEFAULT_MAX_HEAD_LENGTH,
                                 Lenient };
pub use crate::http1::message::{ Flags,
                                 Message };
pub use crate::http1::method::Method;
pub use crate::http1::parser::Parser;
pub use crate::http1::parser_error::{ ErrorCode,
                                      ParserError };
pub use crate::http1::parser_state::ParserState;
pub use crate::http1::parser_type::ParserType;
pub use crate::http1::status::status_name;

#[cfg(test)]
mod test;
