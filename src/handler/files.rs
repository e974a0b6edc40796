//! Directory listing and file download responses

use crate::browser::{self, BrowseError, ListingRenderer};
use crate::http::{self, Body};
use hyper::Response;
use std::fs::Metadata;
use std::path::Path;
use tokio::fs::File;

/// A built response together with its body size for the access log
pub struct Served {
    pub response: Response<Body>,
    pub body_bytes: u64,
}

/// Render the children of `dir`
pub async fn serve_listing(
    renderer: &dyn ListingRenderer,
    dir: &Path,
    request_path: &str,
) -> Result<Served, BrowseError> {
    let entries = browser::read_listing(dir).await?;
    let content = renderer.render(request_path, &entries)?;
    let body_bytes = content.len() as u64;

    Ok(Served {
        response: http::build_listing_response(renderer.content_type(), content),
        body_bytes,
    })
}

/// Stream `file_path` as an attachment named after its basename
pub async fn serve_download(file_path: &Path, meta: &Metadata) -> Result<Served, BrowseError> {
    let file = File::open(file_path)
        .await
        .map_err(|e| BrowseError::io(file_path, e))?;
    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Served {
        response: http::build_attachment_response(file, meta.len(), &file_name),
        body_bytes: meta.len(),
    })
}
