//! HTTP response building module
//!
//! Provides builders for the listing, download and error responses.

use super::{full, Body};
use futures_util::TryStreamExt;
use http_body_util::{BodyExt, StreamBody};
use hyper::body::Frame;
use hyper::Response;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Build 404 Not Found response
pub fn build_404_response(request_path: &str) -> Response<Body> {
    let message = format!("404 Not Found: {request_path}");
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(full(message))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            plain_fallback(404, "404 Not Found")
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Body> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(full("500 Internal Server Error"))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            plain_fallback(500, "500 Internal Server Error")
        })
}

/// Build a rendered directory listing response
pub fn build_listing_response(content_type: &str, content: Vec<u8>) -> Response<Body> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(full(content))
        .unwrap_or_else(|e| {
            log_build_error("listing", &e);
            build_500_response()
        })
}

/// Build a download response streaming `file` to the client
pub fn build_attachment_response(file: File, file_size: u64, file_name: &str) -> Response<Body> {
    let stream = ReaderStream::new(file).map_ok(Frame::data);
    let body = StreamBody::new(stream).boxed_unsync();

    Response::builder()
        .status(200)
        .header("Content-Type", "application/octet-stream")
        .header("Content-Disposition", content_disposition(file_name))
        .header("Content-Length", file_size)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("attachment", &e);
            build_500_response()
        })
}

/// `attachment; filename="<name>"`, plus an RFC 5987 form for non-ASCII names
pub fn content_disposition(file_name: &str) -> String {
    let quoted = file_name.replace('\\', "\\\\").replace('"', "\\\"");
    if file_name.is_ascii() {
        format!("attachment; filename=\"{quoted}\"")
    } else {
        format!(
            "attachment; filename=\"{quoted}\"; filename*=UTF-8''{}",
            urlencoding::encode(file_name)
        )
    }
}

fn plain_fallback(status: u16, message: &'static str) -> Response<Body> {
    let mut response = Response::new(full(message));
    *response.status_mut() =
        hyper::StatusCode::from_u16(status).unwrap_or(hyper::StatusCode::INTERNAL_SERVER_ERROR);
    response
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
