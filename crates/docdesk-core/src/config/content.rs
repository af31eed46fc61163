//! Content service connection configuration.

use serde::{Deserialize, Serialize};

/// REST content service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Origin of the content service, e.g. `https://ecm.example.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the public REST API below the origin.
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Basic-auth username. Takes precedence over `ticket`.
    #[serde(default)]
    pub username: Option<String>,
    /// Basic-auth password.
    #[serde(default)]
    pub password: Option<String>,
    /// Authentication ticket sent as the `alf_ticket` query parameter.
    #[serde(default)]
    pub ticket: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ContentConfig {
    /// Full API root, joined without a duplicate slash.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_path.trim_start_matches('/').trim_end_matches('/')
        )
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_path: default_api_path(),
            username: None,
            password: None,
            ticket: None,
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_path() -> String {
    "/alfresco/api/-default-/public/alfresco/versions/1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root_joins_cleanly() {
        let config = ContentConfig {
            base_url: "https://ecm.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.api_root(),
            "https://ecm.example.com/alfresco/api/-default-/public/alfresco/versions/1"
        );
    }
}
