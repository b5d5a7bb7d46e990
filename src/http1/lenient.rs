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

//! Parser configuration.

use bitflags::bitflags;

/// Default maximum length of a message head, including the start line and all headers.
pub const DEFAULT_MAX_HEAD_LENGTH: usize = 80 * 1024;

bitflags! {
    /// Relaxations of strict HTTP/1.x parsing.
    ///
    /// Each flag accepts input that is otherwise rejected. All flags are off by default.
    #[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
    pub struct Lenient: u16 {
        /// Accept control bytes within header values.
        const HEADERS                 = 1 << 0;

        /// Accept `Content-Length` together with `Transfer-Encoding`.
        const CHUNKED_LENGTH          = 1 << 1;

        /// Accept a request `Transfer-Encoding` whose final coding is not `chunked`. The body is
        /// then read until the connection closes.
        const TRANSFER_ENCODING       = 1 << 2;

        /// Accept any single digit major and minor HTTP version.
        const VERSION                 = 1 << 3;

        /// Accept data after a message that closed the connection. The data is parsed as a new
        /// message.
        const DATA_AFTER_CLOSE        = 1 << 4;

        /// Accept a bare `LF` line ending.
        const OPTIONAL_CR_BEFORE_LF   = 1 << 5;

        /// Accept a chunk that is not followed by `CRLF`.
        const OPTIONAL_CRLF_AFTER_CHUNK = 1 << 6;

        /// Accept white space after the chunk size.
        const SPACES_AFTER_CHUNK_SIZE = 1 << 7;
    }
}
