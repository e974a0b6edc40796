//! Request handler module
//!
//! Maps every request onto the served root and answers with a listing, a
//! download or an error page.

pub mod files;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
