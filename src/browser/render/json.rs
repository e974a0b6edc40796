use super::ListingRenderer;
use crate::browser::error::BrowseError;
use crate::browser::listing::DirectoryEntry;

/// Serializes the listing as a JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ListingRenderer for JsonRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(
        &self,
        _request_path: &str,
        entries: &[DirectoryEntry],
    ) -> Result<Vec<u8>, BrowseError> {
        Ok(serde_json::to_vec(entries)?)
    }
}
