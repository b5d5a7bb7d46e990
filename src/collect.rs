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

//! Stream collection macros.

/// Collect body bytes until the remaining length is zero, executing `on_body` with each slice.
///
/// Falls through when the remaining length reaches zero. Exits with `Success::Eos` when the stream
/// is exhausted first.
macro_rules! collect_remaining {
    ($parser:expr, $context:expr) => ({
        exit_if_eos!($parser, $context);

        let start     = $context.stream_index;
        let available = bs_available!($context);
        let count     = if (available as u64) < $parser.remaining {
            available
        } else {
            $parser.remaining as usize
        };

        bs_jump!($context, count);

        $parser.remaining -= count as u64;

        callback_data!($parser, $context, on_body, &$context.stream[start..start + count]);

        if $parser.remaining > 0 {
            exit_eos!($parser, $context);
        }
    });
}

/// Collect all token bytes.
///
/// Exit the collection loop when `$stop` yields `true`, leaving the stop byte consumed. Exit with
/// `$code` upon finding any other non-token byte.
macro_rules! collect_tokens {
    ($parser:expr, $context:expr, $stop:expr, $code:ident, $reason:expr) => ({
        loop {
            exit_if_eos!($parser, $context);

            bs_next!($context);

            if $stop {
                break;
            } else if !is_token($context.byte) {
                exit_error!($context, $code, $reason);
            }
        }
    });
}

/// Consume all linear white space bytes.
///
/// Exit the collection loop when a non-linear white space byte is found. That byte is not
/// consumed.
macro_rules! consume_linear_space {
    ($parser:expr, $context:expr) => ({
        loop {
            exit_if_eos!($parser, $context);

            bs_next!($context);

            if !is_space($context.byte) {
                bs_replay!($context);

                break;
            }
        }
    });
}

/// Consume the next byte, exiting with `Success::Eos` when there is none.
macro_rules! next_byte {
    ($parser:expr, $context:expr) => ({
        exit_if_eos!($parser, $context);

        bs_next!($context);

        $context.byte
    });
}
