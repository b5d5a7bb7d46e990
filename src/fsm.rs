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

//! Finite state machine macros and enums.

use std::fmt;

/// Execute data callback `$function` with `$data`.
///
/// `DataResult::User` and `DataResult::Error` both stop the parser for good.
macro_rules! callback_data {
    ($parser:expr, $context:expr, $function:ident, $data:expr) => ({
        match $parser.handler.$function($data) {
            DataResult::Continue => {},
            DataResult::User => {
                return Err(ParserError::new(
                    ErrorCode::User,
                    concat!("`", stringify!($function), "` callback stopped the parser"),
                    $context.stream_index
                ));
            },
            DataResult::Error => {
                return Err(ParserError::new(
                    ErrorCode::CbData,
                    concat!("`", stringify!($function), "` callback error"),
                    $context.stream_index
                ));
            }
        }
    });
}

/// Set the state to `$state` and then execute event callback `$function`.
///
/// After each event callback the state must already have changed, so that a pause resumes at the
/// next state and never replays the event.
macro_rules! callback_event {
    ($parser:expr, $context:expr, $function:ident, $error:ident, $state:ident,
     $state_function:ident) => ({
        set_state!($parser, $state, $state_function);

        match $parser.handler.$function(&$parser.message) {
            EventResult::Continue => transition!($parser, $context),
            EventResult::Pause    => exit_pause!($parser, $context, $function),
            EventResult::Error    => {
                return Err(ParserError::new(
                    ErrorCode::$error,
                    concat!("`", stringify!($function), "` callback error"),
                    $context.stream_index
                ));
            }
        }
    });
}

/// Exit parser with `Success::Eos`.
macro_rules! exit_eos {
    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Exit(Success::Eos($context.stream_index)));
    });
}

/// Exit parser with a `ParserError` positioned at the last consumed byte.
macro_rules! exit_error {
    ($context:expr, $code:ident, $reason:expr) => ({
        return Err(ParserError::new(ErrorCode::$code, $reason, $context.stream_index - 1));
    });
}

/// Exit parser with `Success::Eos` when the stream is exhausted. Otherwise do nothing.
macro_rules! exit_if_eos {
    ($parser:expr, $context:expr) => ({
        if bs_is_eos!($context) {
            exit_eos!($parser, $context);
        }
    });
}

/// Exit parser with `Success::Pause`, naming the callback that requested it.
macro_rules! exit_pause {
    ($parser:expr, $context:expr, $function:ident) => ({
        return Ok(ParserValue::Exit(Success::Pause(
            $context.stream_index,
            concat!("`", stringify!($function), "` pause")
        )));
    });
}

/// Exit parser with a `ParserError` positioned at the next unconsumed byte.
///
/// This is used for errors that are detected between bytes, such as an invalid body framing.
macro_rules! exit_state_error {
    ($context:expr, $code:ident, $reason:expr) => ({
        return Err(ParserError::new(ErrorCode::$code, $reason, $context.stream_index));
    });
}

/// Exit parser with `Success::Upgrade`.
macro_rules! exit_upgrade {
    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Exit(Success::Upgrade($context.stream_index)));
    });
}

/// Accept a bare `LF` in place of `CRLF` when `Lenient::OPTIONAL_CR_BEFORE_LF` is set. Otherwise
/// exit with `ErrorCode::CrExpected`.
macro_rules! lenient_lf {
    ($parser:expr, $context:expr, $reason:expr) => ({
        if !$parser.lenient.contains(Lenient::OPTIONAL_CR_BEFORE_LF) {
            exit_error!($context, CrExpected, $reason);
        }
    });
}

/// Set state and state function.
macro_rules! set_state {
    ($parser:expr, $state:ident, $state_function:ident) => ({
        $parser.state          = ParserState::$state;
        $parser.state_function = Self::$state_function;
    });
}

/// Close the open span, executing its data callback with the marked bytes.
///
/// `$ignore` is the amount of trailing bytes, such as a delimiter, that are not part of the span.
macro_rules! span_end {
    ($parser:expr, $context:expr, $ignore:expr) => ({
        if let Some(span) = $parser.span.take() {
            let end = $context.stream_index - $ignore;

            if end > $context.mark_index {
                $parser.on_span(span, &$context.stream[$context.mark_index..end],
                                $context.stream_index)?;
            }
        }
    });
}

/// Open a span of kind `$span` starting at the next unconsumed byte.
macro_rules! span_start {
    ($parser:expr, $context:expr, $span:ident) => ({
        $parser.span = Some(Span::$span);

        bs_mark!($context, $context.stream_index);
    });
}

/// Transition to `$state`.
macro_rules! transition {
    ($parser:expr, $context:expr, $state:ident, $state_function:ident) => ({
        set_state!($parser, $state, $state_function);

        return Ok(ParserValue::Continue);
    });

    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Continue);
    });
}

// -------------------------------------------------------------------------------------------------

/// Parsing function return values.
pub enum ParserValue {
    /// Continue the parser loop.
    Continue,

    /// Exit the parser loop.
    Exit(Success)
}

// -------------------------------------------------------------------------------------------------

/// Parsing function success return values.
#[derive(Clone,Copy,PartialEq)]
pub enum Success {
    /// Additional `stream` data is expected.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed.
    Eos(usize),

    /// An event callback requested a pause.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed before the pause.
    ///
    /// **(2)**: The pause reason.
    Pause(usize, &'static str),

    /// A message requesting a protocol upgrade completed. The bytes that follow do not belong to
    /// HTTP.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of `stream` bytes that were processed, which is the end of the message
    ///          head.
    Upgrade(usize)
}

impl fmt::Debug for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Success::Eos(length) => {
                write!(formatter, "Success::Eos({})", length)
            },
            Success::Pause(length, reason) => {
                write!(formatter, "Success::Pause({}, {:?})", length, reason)
            },
            Success::Upgrade(length) => {
                write!(formatter, "Success::Upgrade({})", length)
            }
        }
    }
}

impl fmt::Display for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Success::Eos(length)
            | Success::Pause(length, _)
            | Success::Upgrade(length) => {
                write!(formatter, "{}", length)
            }
        }
    }
}
