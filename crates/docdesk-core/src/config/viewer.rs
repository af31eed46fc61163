//! Embedded annotation viewer configuration.

use serde::{Deserialize, Serialize};

/// Where the viewer lives relative to the content service origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Path of the viewer page on the content origin.
    #[serde(default = "default_viewer_path")]
    pub viewer_path: String,
    /// Store reference prefixed to the node id in the `docId` parameter.
    #[serde(default = "default_store_prefix")]
    pub store_prefix: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            viewer_path: default_viewer_path(),
            store_prefix: default_store_prefix(),
        }
    }
}

fn default_viewer_path() -> String {
    "/OpenAnnotate/viewer.htm".to_string()
}

fn default_store_prefix() -> String {
    "workspace://SpacesStore/".to_string()
}
