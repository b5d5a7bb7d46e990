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
fn content_length() {
    let p = assert_split_log(
        ParserType::Response,
        b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello"
    );

    assert_log(&p, &[
        "message_begin",
        "version=1.1",
        "version_complete",
        "status=OK",
        "status_complete",
        "header_field=Content-Length",
        "header_field_complete",
        "header_value=5",
        "header_value_complete",
        "headers_complete",
        "body=hello",
        "message_complete"
    ]);

    assert_eq!(p.status_code(), 200);
    assert_eq!(p.content_length(), 5);
    assert!(p.message().is_response());
    assert!(p.should_keep_alive());
}

#[test]
fn empty_reason() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 204\r\n\r\n"), ErrorCode::Ok);

    assert_log(&p, &[
        "message_begin",
        "version=1.1",
        "version_complete",
        "status_complete",
        "headers_complete",
        "message_complete"
    ]);

    assert_eq!(p.status_code(), 204);
}

#[test]
fn reason_with_spaces() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n"), ErrorCode::Ok);
    assert_eq!(p.handler().data("status"), b"Not Found");
    assert_eq!(status_name(p.status_code()), Some("NOT_FOUND"));
}

#[test]
fn body_until_eof() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.0 200 OK\r\n\r\nsome data"), ErrorCode::Ok);
    assert!(p.needs_eof());
    assert_eq!(p.state(), ParserState::BodyIdentityEof);

    assert_eq!(p.execute(b", more"), ErrorCode::Ok);
    assert_eq!(p.handler().count("message_complete"), 0);

    assert_eq!(p.finish(), ErrorCode::Ok);
    assert_eq!(p.handler().data("body"), b"some data, more");
    assert_eq!(p.handler().count("message_complete"), 1);
    assert_eq!(p.state(), ParserState::Closed);

    // nothing is left to complete
    assert_eq!(p.finish(), ErrorCode::Ok);
    assert_eq!(p.handler().count("message_complete"), 1);
}

#[test]
fn no_body_statuses() {
    for status in [b"100", b"102", b"103", b"204", b"304"] {
        let mut p      = setup(ParserType::Response);
        let mut stream = b"HTTP/1.1 ".to_vec();

        stream.extend_from_slice(status);
        stream.extend_from_slice(b" Status\r\nContent-Length: 10\r\n\r\n");

        assert_eq!(p.execute(&stream), ErrorCode::Ok);
        assert!(p.handler().data("body").is_empty());
        assert_eq!(p.handler().count("message_complete"), 1);
        assert_eq!(p.state(), ParserState::Start);
    }
}

#[test]
fn consecutive_responses() {
    let mut p = setup(ParserType::Response);

    assert_eq!(
        p.execute(b"HTTP/1.1 304 Not Modified\r\n\r\nHTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok"),
        ErrorCode::Ok
    );

    assert_eq!(p.handler().count("reset"), 1);
    assert_eq!(p.handler().count("message_complete"), 2);
    assert_eq!(p.handler().data("body"), b"ok");
    assert_eq!(p.status_code(), 200);
}

#[test]
fn detect_response() {
    let mut p = setup(ParserType::Both);

    assert_eq!(execute_split(&mut p, b"HTTP/1.1 204 No Content\r\n\r\n", 1), ErrorCode::Ok);
    assert!(p.message().is_response());
    assert_eq!(p.status_code(), 204);
    assert_eq!(p.handler().data("status"), b"No Content");
    assert_eq!(p.state(), ParserState::Start);
}

#[test]
fn finish_incomplete() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 200 OK\r\nContent-Le"), ErrorCode::Ok);
    assert_eq!(p.finish(), ErrorCode::InvalidEofState);
    assert_eq!(p.error(), ErrorCode::InvalidEofState);
    assert_eq!(p.error_reason(), Some("Invalid EOF state"));
    assert_eq!(p.execute(b"ngth: 0\r\n\r\n"), ErrorCode::InvalidEofState);
}

#[test]
fn finish_incomplete_body() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nabc"), ErrorCode::Ok);
    assert_eq!(p.finish(), ErrorCode::InvalidEofState);
}

#[test]
fn invalid_status_code() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 2x0 OK\r\n\r\n"), ErrorCode::InvalidStatus);
    assert_eq!(p.error_position(), Some(10));

    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 2000 OK\r\n\r\n"), ErrorCode::InvalidStatus);
    assert_eq!(p.error_position(), Some(12));
}

#[test]
fn invalid_protocol() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTX/1.1 200 OK\r\n\r\n"), ErrorCode::InvalidConstant);
    assert_eq!(p.error_position(), Some(3));
}
