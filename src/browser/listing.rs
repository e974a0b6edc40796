//! Filesystem probing and directory listing

use super::error::BrowseError;
use crate::logger;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs::Metadata;
use std::io;
use std::path::Path;
use tokio::fs;

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
    pub mod_time: DateTime<Local>,
    /// Always empty
    pub path: String,
    /// Always empty
    pub ext: String,
}

impl DirectoryEntry {
    fn from_metadata(name: String, meta: &Metadata) -> io::Result<Self> {
        Ok(Self {
            name,
            size: meta.len(),
            is_dir: meta.is_dir(),
            mod_time: DateTime::from(meta.modified()?),
            path: String::new(),
            ext: String::new(),
        })
    }
}

/// Stat the resolved path, following symlinks
///
/// `request_path` is only used for the not-found message.
pub async fn probe(target: &Path, request_path: &str) -> Result<Metadata, BrowseError> {
    match fs::metadata(target).await {
        Ok(meta) => Ok(meta),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(BrowseError::NotFound(request_path.to_string()))
        }
        Err(e) => Err(BrowseError::io(target, e)),
    }
}

/// Read the immediate children of `dir`, sorted by name
pub async fn read_listing(dir: &Path) -> Result<Vec<DirectoryEntry>, BrowseError> {
    let mut reader = fs::read_dir(dir)
        .await
        .map_err(|e| BrowseError::io(dir, e))?;

    let mut entries = Vec::new();
    while let Some(item) = reader
        .next_entry()
        .await
        .map_err(|e| BrowseError::io(dir, e))?
    {
        // A lossy name would produce a link that resolves nowhere
        let name = match item.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                logger::log_warning(&format!(
                    "Skipping entry with non UTF-8 name in {}: {}",
                    dir.display(),
                    raw.to_string_lossy()
                ));
                continue;
            }
        };
        let child = item.path();
        // Dangling symlinks fall back to the link itself
        let meta = match fs::metadata(&child).await {
            Ok(meta) => meta,
            Err(_) => item
                .metadata()
                .await
                .map_err(|e| BrowseError::io(&child, e))?,
        };
        let entry =
            DirectoryEntry::from_metadata(name, &meta).map_err(|e| BrowseError::io(&child, e))?;
        entries.push(entry);
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_listing_children() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"hello").unwrap();
        std::fs::write(dir.path().join("a.bin"), vec![0u8; 2048]).unwrap();
        std::fs::create_dir(dir.path().join("c")).unwrap();
        std::fs::write(dir.path().join("c").join("nested.txt"), b"n").unwrap();

        let entries = read_listing(dir.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.bin", "b.txt", "c"]);

        let a = &entries[0];
        assert_eq!(a.size, 2048);
        assert!(!a.is_dir);
        let expected: DateTime<Local> = std::fs::metadata(dir.path().join("a.bin"))
            .unwrap()
            .modified()
            .unwrap()
            .into();
        assert_eq!(a.mod_time, expected);

        assert_eq!(entries[1].size, 5);
        assert!(entries[2].is_dir);
        assert!(entries.iter().all(|e| e.path.is_empty() && e.ext.is_empty()));
    }

    #[tokio::test]
    async fn test_read_listing_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_listing(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_listing_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_listing(&dir.path().join("gone")).await;
        assert!(matches!(result, Err(BrowseError::Io { .. })));
    }

    #[tokio::test]
    async fn test_probe() {
        let dir = tempfile::tempdir().unwrap();
        let meta = probe(dir.path(), "/").await.unwrap();
        assert!(meta.is_dir());

        match probe(&dir.path().join("nope"), "/nope").await {
            Err(BrowseError::NotFound(p)) => assert_eq!(p, "/nope"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_non_utf8_names_are_skipped() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.txt"), b"x").unwrap();
        let raw = std::ffi::OsStr::from_bytes(b"bad\xff.txt");
        std::fs::write(dir.path().join(raw), b"x").unwrap();

        let entries = read_listing(dir.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ok.txt"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("void"), dir.path().join("dangling")).unwrap();

        let entries = read_listing(dir.path()).await.unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(link.is_dir);
        let dangling = entries.iter().find(|e| e.name == "dangling").unwrap();
        assert!(!dangling.is_dir);
    }
}
