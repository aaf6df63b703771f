//! CLI output configuration.

use serde::{Deserialize, Serialize};

/// Defaults applied to list commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Items per page when a command does not pass `--limit`.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    20
}
