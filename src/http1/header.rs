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

//! Recognition of the headers that control message framing.
//!
//! Header names and values arrive in pieces, so both are matched incrementally with small fixed
//! buffers. Nothing here allocates.

use crate::byte::to_lower;

/// Longest special header name, `transfer-encoding`.
const MAX_NAME_LENGTH: usize = 17;

/// Longest list token that can match, `keep-alive`.
const MAX_TOKEN_LENGTH: usize = 10;

/// Headers that are interpreted by the parser.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum HeaderKind {
    Connection,
    ContentLength,
    General,
    ProxyConnection,
    TransferEncoding,
    Upgrade
}

// -------------------------------------------------------------------------------------------------

/// Case-insensitive header name matcher.
#[derive(Clone,Copy,Debug)]
pub struct NameMatcher {
    buffer:   [u8; MAX_NAME_LENGTH],
    length:   usize,
    overflow: bool
}

impl NameMatcher {
    pub fn new() -> NameMatcher {
        NameMatcher{
            buffer:   [0; MAX_NAME_LENGTH],
            length:   0,
            overflow: false
        }
    }

    pub fn clear(&mut self) {
        self.length   = 0;
        self.overflow = false;
    }

    /// Classify the collected name.
    pub fn kind(&self) -> HeaderKind {
        if self.overflow {
            return HeaderKind::General;
        }

        match &self.buffer[..self.length] {
            b"connection"        => HeaderKind::Connection,
            b"content-length"    => HeaderKind::ContentLength,
            b"proxy-connection"  => HeaderKind::ProxyConnection,
            b"transfer-encoding" => HeaderKind::TransferEncoding,
            b"upgrade"           => HeaderKind::Upgrade,
            _                    => HeaderKind::General
        }
    }

    /// Collect the next name byte.
    pub fn push(&mut self, byte: u8) {
        if self.length == MAX_NAME_LENGTH {
            self.overflow = true;
        } else {
            self.buffer[self.length] = to_lower(byte);
            self.length             += 1;
        }
    }
}

// -------------------------------------------------------------------------------------------------

#[derive(Clone,Copy,Debug,Eq,PartialEq)]
enum TokenState {
    // no token bytes yet
    Before,

    // within token
    Token,

    // white space after token
    After,

    // too long, or contains white space
    Junk
}

/// Comma separated list token scanner, used for `Connection` and `Transfer-Encoding` values.
#[derive(Clone,Copy,Debug)]
pub struct TokenScanner {
    buffer: [u8; MAX_TOKEN_LENGTH],
    length: usize,
    state:  TokenState
}

impl TokenScanner {
    pub fn new() -> TokenScanner {
        TokenScanner{
            buffer: [0; MAX_TOKEN_LENGTH],
            length: 0,
            state:  TokenState::Before
        }
    }

    pub fn clear(&mut self) {
        self.length = 0;
        self.state  = TokenState::Before;
    }

    /// Scan the next value byte.
    ///
    /// Returns `true` when `byte` is the comma that ends a list element. The element is available
    /// from `token()` until the scanner is cleared.
    pub fn push(&mut self, byte: u8) -> bool {
        match byte {
            b',' => {
                return true;
            },
            b' ' | b'\t' => {
                if self.state == TokenState::Token {
                    self.state = TokenState::After;
                }
            },
            _ => {
                match self.state {
                    TokenState::Before | TokenState::Token => {
                        if self.length < MAX_TOKEN_LENGTH {
                            self.buffer[self.length] = to_lower(byte);
                            self.length             += 1;
                            self.state               = TokenState::Token;
                        } else {
                            self.state = TokenState::Junk;
                        }
                    },
                    TokenState::After | TokenState::Junk => {
                        self.state = TokenState::Junk;
                    }
                }
            }
        }

        false
    }

    /// Retrieve the current list element, lower-cased.
    ///
    /// Returns `None` for an empty element. An element that cannot match any known token is
    /// returned as an empty slice.
    pub fn token(&self) -> Option<&[u8]> {
        match self.state {
            TokenState::Before                     => None,
            TokenState::Token | TokenState::After  => Some(&self.buffer[..self.length]),
            TokenState::Junk                       => Some(&self.buffer[..0])
        }
    }
}
