//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so an empty file
//! yields a usable configuration.

pub mod app;
pub mod content;
pub mod logging;
pub mod notification;
pub mod viewer;

use serde::{Deserialize, Serialize};

use self::app::ApplicationConfig;
use self::content::ContentConfig;
use self::logging::LoggingConfig;
use self::notification::NotificationConfig;
use self::viewer::ViewerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay + `DOCDESK__*`
/// environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application identity (name and build number).
    #[serde(default)]
    pub application: ApplicationConfig,
    /// Content service connection settings.
    #[serde(default)]
    pub content: ContentConfig,
    /// Notification durations and labels for the copy workflow.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Embedded viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// `base` is a file path with or without the `.toml` extension. A sibling
    /// overlay named after `env` (`config/production.toml` next to
    /// `config/default.toml`) is merged on top when present, then environment
    /// variables prefixed with `DOCDESK__`.
    pub fn load(base: &str, env: &str) -> Result<Self, AppError> {
        let base_path = std::path::Path::new(base);
        let overlay = base_path
            .with_file_name(env)
            .to_string_lossy()
            .into_owned();

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(
                config::Environment::with_prefix("DOCDESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_source() {
        let config: AppConfig = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(config.notifications.success_duration_ms, 10_000);
        assert_eq!(config.notifications.error_duration_ms, 3_000);
        assert_eq!(config.notifications.undo_label, "Undo");
        assert_eq!(config.viewer.viewer_path, "/OpenAnnotate/viewer.htm");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            [application]
            name = "Content App"
            build = "42"

            [content]
            base_url = "https://ecm.example.com"
            username = "admin"
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(config.application.title(), "Content App (Build #42)");
        assert_eq!(config.content.base_url, "https://ecm.example.com");
        assert_eq!(config.content.username.as_deref(), Some("admin"));
        assert_eq!(config.notifications.event_buffer, 64);
    }

    #[test]
    fn test_load_missing_files_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist/default", "test").unwrap();
        assert_eq!(config.application.name, "DocDesk");
    }
}
