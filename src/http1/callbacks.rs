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

//! Closure based callbacks.

use crate::http1::http_handler::{ DataResult,
                                  EventResult,
                                  HeadersCompleteResult,
                                  HttpHandler };
use crate::http1::message::Message;

/// Event callback closure.
pub type EventCallback<'a, C> = Box<dyn FnMut(&mut C, &Message) -> EventResult + 'a>;

/// `on_headers_complete` callback closure.
pub type HeadersCompleteCallback<'a, C> =
    Box<dyn FnMut(&mut C, &Message) -> HeadersCompleteResult + 'a>;

/// Data callback closure.
pub type DataCallback<'a, C> = Box<dyn FnMut(&mut C, &[u8]) -> DataResult + 'a>;

/// Set of optional callback closures, each receiving a mutable reference to a user context of
/// type `C`.
///
/// Absent callbacks continue parsing.
///
/// # Examples
///
/// ```
/// use http_tap::http1::{ Callbacks, DataResult, ErrorCode, Parser, ParserType };
///
/// let callbacks = Callbacks::new()
///     .on_url(|urls: &mut Vec<u8>, data: &[u8]| {
///         urls.extend_from_slice(data);
///         DataResult::Continue
///     });
///
/// let mut parser = Parser::with_callbacks(ParserType::Request, callbacks, Vec::new());
///
/// assert_eq!(parser.execute(b"GET /index.html HTTP/1.1\r\n\r\n"), ErrorCode::Ok);
/// assert_eq!(parser.context(), b"/index.html");
/// ```
pub struct Callbacks<'a, C> {
    on_message_begin:                  Option<EventCallback<'a, C>>,
    on_method:                         Option<DataCallback<'a, C>>,
    on_method_complete:                Option<EventCallback<'a, C>>,
    on_url:                            Option<DataCallback<'a, C>>,
    on_url_complete:                   Option<EventCallback<'a, C>>,
    on_version:                        Option<DataCallback<'a, C>>,
    on_version_complete:               Option<EventCallback<'a, C>>,
    on_status:                         Option<DataCallback<'a, C>>,
    on_status_complete:                Option<EventCallback<'a, C>>,
    on_header_field:                   Option<DataCallback<'a, C>>,
    on_header_field_complete:          Option<EventCallback<'a, C>>,
    on_header_value:                   Option<DataCallback<'a, C>>,
    on_header_value_complete:          Option<EventCallback<'a, C>>,
    on_headers_complete:               Option<HeadersCompleteCallback<'a, C>>,
    on_chunk_extension_name:           Option<DataCallback<'a, C>>,
    on_chunk_extension_name_complete:  Option<EventCallback<'a, C>>,
    on_chunk_extension_value:          Option<DataCallback<'a, C>>,
    on_chunk_extension_value_complete: Option<EventCallback<'a, C>>,
    on_chunk_header:                   Option<EventCallback<'a, C>>,
    on_body:                           Option<DataCallback<'a, C>>,
    on_chunk_complete:                 Option<EventCallback<'a, C>>,
    on_message_complete:               Option<EventCallback<'a, C>>,
    on_reset:                          Option<EventCallback<'a, C>>
}

/// Generate a builder method for an event slot.
macro_rules! event_setter {
    ($name:ident) => (
        #[doc = concat!("Set the `", stringify!($name), "` event callback.")]
        pub fn $name<F>(mut self, callback: F) -> Self
        where F: FnMut(&mut C, &Message) -> EventResult + 'a {
            self.$name = Some(Box::new(callback));
            self
        }
    );
}

/// Generate a builder method for a data slot.
macro_rules! data_setter {
    ($name:ident) => (
        #[doc = concat!("Set the `", stringify!($name), "` data callback.")]
        pub fn $name<F>(mut self, callback: F) -> Self
        where F: FnMut(&mut C, &[u8]) -> DataResult + 'a {
            self.$name = Some(Box::new(callback));
            self
        }
    );
}

impl<'a, C> Callbacks<'a, C> {
    /// Create a new `Callbacks` with every slot empty.
    pub fn new() -> Callbacks<'a, C> {
        Callbacks{
            on_message_begin:                  None,
            on_method:                         None,
            on_method_complete:                None,
            on_url:                            None,
            on_url_complete:                   None,
            on_version:                        None,
            on_version_complete:               None,
            on_status:                         None,
            on_status_complete:                None,
            on_header_field:                   None,
            on_header_field_complete:          None,
            on_header_value:                   None,
            on_header_value_complete:          None,
            on_headers_complete:               None,
            on_chunk_extension_name:           None,
            on_chunk_extension_name_complete:  None,
            on_chunk_extension_value:          None,
            on_chunk_extension_value_complete: None,
            on_chunk_header:                   None,
            on_body:                           None,
            on_chunk_complete:                 None,
            on_message_complete:               None,
            on_reset:                          None
        }
    }

    event_setter!(on_message_begin);
    data_setter!(on_method);
    event_setter!(on_method_complete);
    data_setter!(on_url);
    event_setter!(on_url_complete);
    data_setter!(on_version);
    event_setter!(on_version_complete);
    data_setter!(on_status);
    event_setter!(on_status_complete);
    data_setter!(on_header_field);
    event_setter!(on_header_field_complete);
    data_setter!(on_header_value);
    event_setter!(on_header_value_complete);
    data_setter!(on_chunk_extension_name);
    event_setter!(on_chunk_extension_name_complete);
    data_setter!(on_chunk_extension_value);
    event_setter!(on_chunk_extension_value_complete);
    event_setter!(on_chunk_header);
    data_setter!(on_body);
    event_setter!(on_chunk_complete);
    event_setter!(on_message_complete);
    event_setter!(on_reset);

    /// Set the `on_headers_complete` callback.
    pub fn on_headers_complete<F>(mut self, callback: F) -> Self
    where F: FnMut(&mut C, &Message) -> HeadersCompleteResult + 'a {
        self.on_headers_complete = Some(Box::new(callback));
        self
    }
}

impl<'a, C> Default for Callbacks<'a, C> {
    fn default() -> Callbacks<'a, C> {
        Callbacks::new()
    }
}

// -------------------------------------------------------------------------------------------------

/// Handler that dispatches events to a `Callbacks` set and its context.
pub struct CallbackHandler<'a, C> {
    callbacks: Callbacks<'a, C>,
    context:   C
}

impl<'a, C> CallbackHandler<'a, C> {
    /// Create a new `CallbackHandler`.
    pub fn new(callbacks: Callbacks<'a, C>, context: C) -> CallbackHandler<'a, C> {
        CallbackHandler{
            callbacks: callbacks,
            context:   context
        }
    }

    /// Retrieve the context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Retrieve the context as mutable.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the handler, returning the context.
    pub fn into_context(self) -> C {
        self.context
    }
}

/// Dispatch an event to its slot.
macro_rules! dispatch_event {
    ($name:ident) => (
        fn $name(&mut self, message: &Message) -> EventResult {
            match self.callbacks.$name.as_mut() {
                Some(callback) => callback(&mut self.context, message),
                None           => EventResult::Continue
            }
        }
    );
}

/// Dispatch data to its slot.
macro_rules! dispatch_data {
    ($name:ident) => (
        fn $name(&mut self, data: &[u8]) -> DataResult {
            match self.callbacks.$name.as_mut() {
                Some(callback) => callback(&mut self.context, data),
                None           => DataResult::Continue
            }
        }
    );
}

impl<'a, C> HttpHandler for CallbackHandler<'a, C> {
    dispatch_event!(on_message_begin);
    dispatch_data!(on_method);
    dispatch_event!(on_method_complete);
    dispatch_data!(on_url);
    dispatch_event!(on_url_complete);
    dispatch_data!(on_version);
    dispatch_event!(on_version_complete);
    dispatch_data!(on_status);
    dispatch_event!(on_status_complete);
    dispatch_data!(on_header_field);
    dispatch_event!(on_header_field_complete);
    dispatch_data!(on_header_value);
    dispatch_event!(on_header_value_complete);
    dispatch_data!(on_chunk_extension_name);
    dispatch_event!(on_chunk_extension_name_complete);
    dispatch_data!(on_chunk_extension_value);
    dispatch_event!(on_chunk_extension_value_complete);
    dispatch_event!(on_chunk_header);
    dispatch_data!(on_body);
    dispatch_event!(on_chunk_complete);
    dispatch_event!(on_message_complete);
    dispatch_event!(on_reset);

    fn on_headers_complete(&mut self, message: &Message) -> HeadersCompleteResult {
        match self.callbacks.on_headers_complete.as_mut() {
            Some(callback) => callback(&mut self.context, message),
            None           => HeadersCompleteResult::Proceed
        }
    }
}
