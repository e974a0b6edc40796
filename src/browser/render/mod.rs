//! Listing renderers
//!
//! Each server instance renders listings with exactly one variant, chosen
//! from `browser.render` at startup.

mod html;
mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use super::error::BrowseError;
use super::listing::DirectoryEntry;
use serde::{Deserialize, Serialize};

/// Turns a directory listing into a response body
pub trait ListingRenderer: Send + Sync {
    /// `Content-Type` of the rendered body
    fn content_type(&self) -> &'static str;

    /// Render `entries`, listed under the decoded `request_path`
    fn render(&self, request_path: &str, entries: &[DirectoryEntry])
        -> Result<Vec<u8>, BrowseError>;
}

/// Listing variant selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Json,
    #[default]
    Html,
}

impl RenderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    pub fn renderer(self) -> Box<dyn ListingRenderer> {
        match self {
            Self::Json => Box::new(JsonRenderer),
            Self::Html => Box::new(HtmlRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_selection() {
        assert_eq!(RenderMode::Json.renderer().content_type(), "application/json");
        assert_eq!(
            RenderMode::Html.renderer().content_type(),
            "text/html; charset=utf-8"
        );
        assert_eq!(RenderMode::default(), RenderMode::Html);
    }

    #[test]
    fn test_mode_names() {
        let mode: RenderMode = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(mode, RenderMode::Json);
        assert_eq!(RenderMode::Html.as_str(), "html");
    }
}
