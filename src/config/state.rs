// Application state module
// Immutable per-process state shared by every connection

use std::path::PathBuf;

use super::types::Config;
use crate::browser::{ConcatJoin, JoinPolicy, ListingRenderer};

/// Application state
pub struct AppState {
    pub config: Config,
    pub join: Box<dyn JoinPolicy>,
    pub renderer: Box<dyn ListingRenderer>,
}

impl AppState {
    /// Build state serving `root` with the configured listing variant
    pub fn new(config: &Config, root: PathBuf) -> Self {
        Self {
            config: config.clone(),
            join: Box::new(ConcatJoin::new(root)),
            renderer: config.browser.render.renderer(),
        }
    }

    pub fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
