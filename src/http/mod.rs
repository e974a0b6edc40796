//! HTTP protocol layer module
//!
//! Response body type and builders for every status the browser emits.

pub mod response;

use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;

/// Response body shared by buffered and streamed responses
pub type Body = UnsyncBoxBody<Bytes, std::io::Error>;

/// Wrap fully buffered content
pub fn full(data: impl Into<Bytes>) -> Body {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

// Re-export commonly used builders
pub use response::{
    build_404_response, build_500_response, build_attachment_response, build_listing_response,
};
