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

//! Request methods.

use std::fmt;

/// Longest method name.
pub(crate) const MAX_METHOD_LENGTH: usize = 11;

/// Request methods.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
#[repr(u8)]
pub enum Method {
    Delete      = 0,
    Get         = 1,
    Head        = 2,
    Post        = 3,
    Put         = 4,
    Connect     = 5,
    Options     = 6,
    Trace       = 7,
    Copy        = 8,
    Lock        = 9,
    Mkcol       = 10,
    Move        = 11,
    Propfind    = 12,
    Proppatch   = 13,
    Search      = 14,
    Unlock      = 15,
    Bind        = 16,
    Rebind      = 17,
    Unbind      = 18,
    Acl         = 19,
    Report      = 20,
    Mkactivity  = 21,
    Checkout    = 22,
    Merge       = 23,
    MSearch     = 24,
    Notify      = 25,
    Subscribe   = 26,
    Unsubscribe = 27,
    Patch       = 28,
    Purge       = 29,
    Mkcalendar  = 30,
    Link        = 31,
    Unlink      = 32,
    Source      = 33,
    Pri         = 34,
    Query       = 46
}

/// All methods with their names.
static METHODS: [(&[u8], Method); 36] = [
    (b"DELETE",      Method::Delete),
    (b"GET",         Method::Get),
    (b"HEAD",        Method::Head),
    (b"POST",        Method::Post),
    (b"PUT",         Method::Put),
    (b"CONNECT",     Method::Connect),
    (b"OPTIONS",     Method::Options),
    (b"TRACE",       Method::Trace),
    (b"COPY",        Method::Copy),
    (b"LOCK",        Method::Lock),
    (b"MKCOL",       Method::Mkcol),
    (b"MOVE",        Method::Move),
    (b"PROPFIND",    Method::Propfind),
    (b"PROPPATCH",   Method::Proppatch),
    (b"SEARCH",      Method::Search),
    (b"UNLOCK",      Method::Unlock),
    (b"BIND",        Method::Bind),
    (b"REBIND",      Method::Rebind),
    (b"UNBIND",      Method::Unbind),
    (b"ACL",         Method::Acl),
    (b"REPORT",      Method::Report),
    (b"MKACTIVITY",  Method::Mkactivity),
    (b"CHECKOUT",    Method::Checkout),
    (b"MERGE",       Method::Merge),
    (b"M-SEARCH",    Method::MSearch),
    (b"NOTIFY",      Method::Notify),
    (b"SUBSCRIBE",   Method::Subscribe),
    (b"UNSUBSCRIBE", Method::Unsubscribe),
    (b"PATCH",       Method::Patch),
    (b"PURGE",       Method::Purge),
    (b"MKCALENDAR",  Method::Mkcalendar),
    (b"LINK",        Method::Link),
    (b"UNLINK",      Method::Unlink),
    (b"SOURCE",      Method::Source),
    (b"PRI",         Method::Pri),
    (b"QUERY",       Method::Query)
];

impl Method {
    /// Retrieve the method name.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_tap::http1::Method;
    ///
    /// assert_eq!(Method::MSearch.as_str(), "M-SEARCH");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match *self {
            Method::Delete      => "DELETE",
            Method::Get         => "GET",
            Method::Head        => "HEAD",
            Method::Post        => "POST",
            Method::Put         => "PUT",
            Method::Connect     => "CONNECT",
            Method::Options     => "OPTIONS",
            Method::Trace       => "TRACE",
            Method::Copy        => "COPY",
            Method::Lock        => "LOCK",
            Method::Mkcol       => "MKCOL",
            Method::Move        => "MOVE",
            Method::Propfind    => "PROPFIND",
            Method::Proppatch   => "PROPPATCH",
            Method::Search      => "SEARCH",
            Method::Unlock      => "UNLOCK",
            Method::Bind        => "BIND",
            Method::Rebind      => "REBIND",
            Method::Unbind      => "UNBIND",
            Method::Acl         => "ACL",
            Method::Report      => "REPORT",
            Method::Mkactivity  => "MKACTIVITY",
            Method::Checkout    => "CHECKOUT",
            Method::Merge       => "MERGE",
            Method::MSearch     => "M-SEARCH",
            Method::Notify      => "NOTIFY",
            Method::Subscribe   => "SUBSCRIBE",
            Method::Unsubscribe => "UNSUBSCRIBE",
            Method::Patch       => "PATCH",
            Method::Purge       => "PURGE",
            Method::Mkcalendar  => "MKCALENDAR",
            Method::Link        => "LINK",
            Method::Unlink      => "UNLINK",
            Method::Source      => "SOURCE",
            Method::Pri         => "PRI",
            Method::Query       => "QUERY"
        }
    }

    /// Find the method named exactly `name`. Names are case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_tap::http1::Method;
    ///
    /// assert_eq!(Method::from_bytes(b"PROPFIND"), Some(Method::Propfind));
    /// assert_eq!(Method::from_bytes(b"get"), None);
    /// ```
    pub fn from_bytes(name: &[u8]) -> Option<Method> {
        METHODS.iter()
               .find(|(bytes, _)| *bytes == name)
               .map(|(_, method)| *method)
    }

    /// Indicates that `prefix` begins at least one method name.
    pub(crate) fn is_prefix(prefix: &[u8]) -> bool {
        METHODS.iter().any(|(bytes, _)| bytes.starts_with(prefix))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
