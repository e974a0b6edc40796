//! Request path resolution
//!
//! The join policy is the only place a request path turns into a filesystem
//! path. `ConcatJoin` appends the request path to the root verbatim, so
//! `..` segments are not filtered.

use super::error::RootError;
use std::borrow::Cow;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Maps a decoded request path onto the filesystem
pub trait JoinPolicy: Send + Sync {
    fn resolve(&self, request_path: &str) -> PathBuf;

    /// The served root, for logging
    fn root(&self) -> &Path;
}

/// Plain `root + request_path` concatenation
#[derive(Debug, Clone)]
pub struct ConcatJoin {
    root: PathBuf,
    prefix: OsString,
}

impl ConcatJoin {
    pub fn new(root: impl AsRef<Path>) -> Self {
        // Collecting components drops trailing separators
        let root: PathBuf = root.as_ref().components().collect();
        let prefix = if root == Path::new("/") {
            OsString::new()
        } else {
            root.clone().into_os_string()
        };
        Self { root, prefix }
    }
}

impl JoinPolicy for ConcatJoin {
    fn resolve(&self, request_path: &str) -> PathBuf {
        let mut joined = self.prefix.clone();
        if !request_path.starts_with('/') {
            joined.push("/");
        }
        joined.push(request_path);
        PathBuf::from(joined)
    }

    fn root(&self) -> &Path {
        &self.root
    }
}

/// Percent-decode a URI path, keeping the raw path when it is not valid UTF-8
pub fn decode_request_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// Check that the root exists and is a directory
pub fn validate_root(root: &Path) -> Result<PathBuf, RootError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(root.to_path_buf()),
        Ok(_) => Err(RootError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(RootError::NotFound(root.to_path_buf()))
        }
        Err(source) => Err(RootError::Io {
            path: root.to_path_buf(),
            source,
        }),
    }
}
