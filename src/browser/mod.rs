//! Directory browsing module
//!
//! Maps request paths onto the served root, probes the filesystem and builds
//! directory listings for the renderers.

pub mod error;
pub mod listing;
pub mod path;
pub mod render;
pub mod size;

// Re-export commonly used types
pub use error::BrowseError;
pub use listing::{probe, read_listing};
pub use path::{decode_request_path, validate_root, ConcatJoin, JoinPolicy};
pub use render::{ListingRenderer, RenderMode};
