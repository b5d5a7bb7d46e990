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

use std::fmt;

/// Parser message type.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
pub enum ParserType {
    /// Parse requests only.
    Request,

    /// Parse responses only.
    Response,

    /// Detect the message type from the first bytes of each message. Messages starting with
    /// `HTTP/` are responses, everything else is a request.
    Both
}

impl fmt::Display for ParserType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserType::Request  => write!(formatter, "request"),
            ParserType::Response => write!(formatter, "response"),
            ParserType::Both     => write!(formatter, "both")
        }
    }
}
