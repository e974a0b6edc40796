//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: resolves the path, probes it and
//! dispatches to the listing or download response.

use crate::browser::{self, BrowseError};
use crate::config::AppState;
use crate::handler::files::{self, Served};
use crate::http::{self, Body};
use crate::logger::{self, AccessLogEntry};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Every method is answered the same way and the request body is ignored.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Body>, Infallible> {
    let started = Instant::now();
    let request_path = browser::decode_request_path(req.uri().path()).into_owned();

    let served = match browse(&state, &request_path).await {
        Ok(served) => served,
        Err(err) => error_response(&err, &request_path),
    };

    if state.access_log() {
        let entry = access_entry(&req, peer_addr, &served, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(served.response)
}

/// Resolve, probe and dispatch a decoded request path
async fn browse(state: &AppState, request_path: &str) -> Result<Served, BrowseError> {
    let target = state.join.resolve(request_path);
    let meta = browser::probe(&target, request_path).await?;

    if meta.is_dir() {
        files::serve_listing(state.renderer.as_ref(), &target, request_path).await
    } else if meta.is_file() {
        files::serve_download(&target, &meta).await
    } else {
        // FIFOs, sockets and devices would block on open
        Err(BrowseError::NotRegularFile(target))
    }
}

fn error_response(err: &BrowseError, request_path: &str) -> Served {
    let response = match err {
        BrowseError::NotFound(path) => http::build_404_response(path),
        _ => {
            logger::log_error(&format!("{request_path}: {err}"));
            http::build_500_response()
        }
    };
    Served {
        response,
        body_bytes: 0,
    }
}

fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    served: &Served,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = served.response.status().as_u16();
    entry.body_bytes = served.body_bytes;
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
