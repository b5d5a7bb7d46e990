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

use crate::http1::*;
use crate::http1::test::*;

#[test]
fn get() {
    let p = assert_split_log(
        ParserType::Request,
        b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n"
    );

    assert_log(&p, &[
        "message_begin",
        "method=GET",
        "method_complete",
        "url=/index.html",
        "url_complete",
        "version=1.1",
        "version_complete",
        "header_field=Host",
        "header_field_complete",
        "header_value=example.com",
        "header_value_complete",
        "headers_complete",
        "message_complete"
    ]);

    assert_eq!(p.method(), Some(Method::Get));
    assert_eq!(p.http_major(), 1);
    assert_eq!(p.http_minor(), 1);
    assert!(p.should_keep_alive());
    assert!(p.message().is_request());
    assert_eq!(p.state(), ParserState::Start);
}

#[test]
fn post_content_length() {
    let p = assert_split_log(
        ParserType::Request,
        b"POST /submit HTTP/1.1\r\nContent-Length: 11\r\n\r\nhello world"
    );

    assert_eq!(p.handler().data("body"), b"hello world");
    assert_eq!(p.content_length(), 11);
    assert_eq!(p.method(), Some(Method::Post));
    assert_eq!(p.handler().count("message_complete"), 1);
}

#[test]
fn body_across_slices() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(b"PUT /x HTTP/1.1\r\nContent-Length: 6\r\n\r\nab"), ErrorCode::Ok);
    assert_eq!(p.state(), ParserState::BodyIdentity);
    assert_eq!(p.handler().count("message_complete"), 0);

    assert_eq!(p.execute(b"cdef"), ErrorCode::Ok);
    assert_eq!(p.handler().data("body"), b"abcdef");
    assert_eq!(p.handler().count("message_complete"), 1);
}

#[test]
fn http09() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(b"GET /\r\n"), ErrorCode::Ok);

    assert_log(&p, &[
        "message_begin",
        "method=GET",
        "method_complete",
        "url=/",
        "url_complete",
        "headers_complete",
        "message_complete"
    ]);

    assert_eq!(p.http_major(), 0);
    assert_eq!(p.http_minor(), 9);
    assert!(!p.should_keep_alive());
    assert_eq!(p.state(), ParserState::Closed);
}

#[test]
fn leading_empty_lines() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(b"\r\n\r\nGET / HTTP/1.1\r\n\r\n"), ErrorCode::Ok);
    assert_eq!(p.method(), Some(Method::Get));
    assert_eq!(p.handler().count("message_begin"), 1);
}

#[test]
fn url_spaces_and_query() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(b"GET   /a?b=c&d=%20 HTTP/1.1\r\n\r\n"), ErrorCode::Ok);
    assert_eq!(p.handler().data("url"), b"/a?b=c&d=%20");
}

#[test]
fn methods() {
    for name in ["DELETE", "OPTIONS", "PATCH", "PROPFIND", "M-SEARCH", "UNSUBSCRIBE", "QUERY"] {
        let mut p      = setup(ParserType::Request);
        let     stream = format!("{} /resource HTTP/1.1\r\n\r\n", name);

        assert_eq!(execute_split(&mut p, stream.as_bytes(), 3), ErrorCode::Ok);
        assert_eq!(p.handler().data("method"), name.as_bytes());
        assert_eq!(p.method().map(|method| method.as_str()), Some(name));
    }
}

#[test]
fn header_names_are_case_insensitive() {
    let mut p = setup(ParserType::Request);

    assert_eq!(
        p.execute(b"PUT /x HTTP/1.0\r\ncontent-LENGTH: 3\r\nConnection: Keep-Alive\r\n\r\nabc"),
        ErrorCode::Ok
    );

    assert_eq!(p.handler().data("body"), b"abc");
    assert_eq!(p.handler().data("header_field"), b"content-LENGTHConnection");
    assert!(p.should_keep_alive());
    assert_eq!(p.state(), ParserState::Start);
}

#[test]
fn header_value_white_space() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(b"GET / HTTP/1.1\r\nX-Empty:\r\nX-Pad: \t value\r\n\r\n"), ErrorCode::Ok);

    assert_log(&p, &[
        "message_begin",
        "method=GET",
        "method_complete",
        "url=/",
        "url_complete",
        "version=1.1",
        "version_complete",
        "header_field=X-Empty",
        "header_field_complete",
        "header_value_complete",
        "header_field=X-Pad",
        "header_field_complete",
        "header_value=value",
        "header_value_complete",
        "headers_complete",
        "message_complete"
    ]);
}

#[test]
fn obsolete_line_folding() {
    let p = assert_split_log(
        ParserType::Request,
        b"GET / HTTP/1.1\r\nX-Long: first\r\n second\r\n\tthird\r\n\r\n"
    );

    assert_eq!(p.handler().data("header_value"), b"first second third");
    assert_eq!(p.handler().count("header_value_complete"), 1);
}

#[test]
fn detect_request() {
    let mut p = setup(ParserType::Both);

    assert_eq!(execute_split(&mut p, b"HEAD / HTTP/1.1\r\n\r\n", 1), ErrorCode::Ok);
    assert_eq!(p.handler().data("method"), b"HEAD");
    assert_eq!(p.method(), Some(Method::Head));
    assert!(p.message().is_request());
    assert_eq!(p.parser_type(), ParserType::Both);
    assert_eq!(p.message().parser_type(), ParserType::Request);
}

#[test]
fn detect_request_other_letter() {
    let mut p = setup(ParserType::Both);

    assert_eq!(p.execute(b"DELETE /item HTTP/1.1\r\n\r\n"), ErrorCode::Ok);
    assert_eq!(p.method(), Some(Method::Delete));
    assert_eq!(p.handler().data("url"), b"/item");
}
