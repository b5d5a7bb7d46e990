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

const HEAD: &[u8] = b"POST /upload HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n";

fn chunked(body: &[u8]) -> Vec<u8> {
    let mut stream = HEAD.to_vec();

    stream.extend_from_slice(body);
    stream
}

#[test]
fn extensions_and_trailers() {
    let p = assert_split_log(
        ParserType::Request,
        &chunked(b"5;name=value\r\nhello\r\n0\r\nTrailer: x\r\n\r\n")
    );

    assert_log(&p, &[
        "message_begin",
        "method=POST",
        "method_complete",
        "url=/upload",
        "url_complete",
        "version=1.1",
        "version_complete",
        "header_field=Transfer-Encoding",
        "header_field_complete",
        "header_value=chunked",
        "header_value_complete",
        "headers_complete",
        "chunk_extension_name=name",
        "chunk_extension_name_complete",
        "chunk_extension_value=value",
        "chunk_extension_value_complete",
        "chunk_header",
        "body=hello",
        "chunk_complete",
        "chunk_header",
        "header_field=Trailer",
        "header_field_complete",
        "header_value=x",
        "header_value_complete",
        "chunk_complete",
        "message_complete"
    ]);

    assert!(p.message().flags().contains(Flags::CHUNKED));
    assert_eq!(p.message().chunk_length(), 0);
    assert_eq!(p.state(), ParserState::Start);
}

#[test]
fn multiple_chunks() {
    let p = assert_split_log(
        ParserType::Request,
        &chunked(b"4\r\nWiki\r\n5\r\npedia\r\nE\r\n in\r\n\r\nchunks.\r\n0\r\n\r\n")
    );

    assert_eq!(p.handler().data("body"), b"Wikipedia in\r\n\r\nchunks.");
    assert_eq!(p.handler().count("chunk_header"), 4);
    assert_eq!(p.handler().count("chunk_complete"), 4);
    assert_eq!(p.handler().count("message_complete"), 1);
}

#[test]
fn chunk_length() {
    struct H(Vec<u64>);

    impl HttpHandler for H {
        fn on_chunk_header(&mut self, message: &Message) -> EventResult {
            self.0.push(message.chunk_length());
            EventResult::Continue
        }
    }

    let mut p = Parser::new(ParserType::Request, H(Vec::new()));

    assert_eq!(p.execute(&chunked(b"1a\r\n")), ErrorCode::Ok);
    assert_eq!(p.execute(&[b'x'; 26]), ErrorCode::Ok);
    assert_eq!(p.execute(b"\r\nFf\r\n"), ErrorCode::Ok);
    assert_eq!(p.handler().0, vec![26, 255]);
}

#[test]
fn extension_list() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"3;x;y=1\r\nabc\r\n0\r\n\r\n")), ErrorCode::Ok);

    assert_eq!(p.handler().data("chunk_extension_name"), b"xy");
    assert_eq!(p.handler().data("chunk_extension_value"), b"1");
    assert_eq!(p.handler().count("chunk_extension_name_complete"), 2);
    assert_eq!(p.handler().count("chunk_extension_value_complete"), 1);
}

#[test]
fn extension_quoted_value() {
    let p = assert_split_log(
        ParserType::Request,
        &chunked(b"3;a=\"b\\\"c\"\r\nabc\r\n0\r\n\r\n")
    );

    assert_eq!(p.handler().data("chunk_extension_value"), b"b\\\"c");
    assert_eq!(p.handler().count("chunk_extension_value_complete"), 1);
    assert_eq!(p.handler().data("body"), b"abc");
}

#[test]
fn invalid_chunk_size() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"zz\r\n")), ErrorCode::InvalidChunkSize);
    assert_eq!(p.error_position(), Some(HEAD.len()));
}

#[test]
fn chunk_size_overflow() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"FFFFFFFFFFFFFFFF")), ErrorCode::Ok);
    assert_eq!(p.execute(b"F\r\n"), ErrorCode::InvalidChunkSize);
    assert_eq!(p.error_reason(), Some("Chunk size overflow"));
    assert_eq!(p.error_position(), Some(0));
}

#[test]
fn missing_crlf_after_data() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"3\r\nabcX")), ErrorCode::CrExpected);

    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"3\r\nabc\rX")), ErrorCode::LfExpected);
}

#[test]
fn invalid_extension() {
    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"3;=x\r\n")), ErrorCode::InvalidChunkExtension);

    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(&chunked(b"3;a=\"b\x01\"\r\n")), ErrorCode::InvalidChunkExtension);
}

#[test]
fn content_length_with_transfer_encoding() {
    let stream = b"POST / HTTP/1.1\r\nContent-Length: 3\r\nTransfer-Encoding: chunked\r\n\r\n\
                   3\r\nabc\r\n0\r\n\r\n";

    let mut p = setup(ParserType::Request);

    assert_eq!(p.execute(stream), ErrorCode::UnexpectedContentLength);

    let mut p = setup(ParserType::Request);

    p.set_lenient(Lenient::CHUNKED_LENGTH);

    assert_eq!(p.execute(stream), ErrorCode::Ok);
    assert_eq!(p.handler().data("body"), b"abc");
    assert_eq!(p.handler().count("message_complete"), 1);
}

#[test]
fn request_transfer_encoding_not_chunked() {
    for coding in ["gzip", "chunked, gzip"] {
        let mut p      = setup(ParserType::Request);
        let     stream = format!("POST / HTTP/1.1\r\nTransfer-Encoding: {}\r\n\r\n", coding);

        assert_eq!(p.execute(stream.as_bytes()), ErrorCode::InvalidTransferEncoding);
    }
}

#[test]
fn final_coding_chunked() {
    let mut p = setup(ParserType::Request);

    assert_eq!(
        p.execute(b"POST / HTTP/1.1\r\nTransfer-Encoding: gzip, Chunked\r\n\r\n2\r\nok\r\n0\r\n\r\n"),
        ErrorCode::Ok
    );

    assert_eq!(p.handler().data("body"), b"ok");
}

#[test]
fn response_transfer_encoding_not_chunked() {
    let mut p = setup(ParserType::Response);

    assert_eq!(p.execute(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: gzip\r\n\r\nabc"), ErrorCode::Ok);
    assert!(p.needs_eof());
    assert_eq!(p.finish(), ErrorCode::Ok);
    assert_eq!(p.handler().data("body"), b"abc");
}

#[test]
fn trailers_do_not_change_framing() {
    let mut p = setup(ParserType::Request);

    assert_eq!(
        p.execute(&chunked(b"0\r\nContent-Length: 5\r\nConnection: close\r\n\r\n")),
        ErrorCode::Ok
    );

    assert_eq!(p.handler().count("message_complete"), 1);
    assert!(p.should_keep_alive());
    assert_eq!(p.state(), ParserState::Start);
}
