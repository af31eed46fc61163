//! Application info CLI command.

use serde::Serialize;

use crate::output::{self, OutputFormat};
use docdesk_core::config::AppConfig;
use docdesk_core::error::AppError;

/// Effective settings, without secrets.
#[derive(Debug, Serialize)]
struct InfoView {
    title: String,
    api_root: String,
    auth: &'static str,
    success_duration_ms: u64,
    error_duration_ms: u64,
    undo_label: String,
    viewer_path: String,
    log_level: String,
}

impl InfoView {
    fn from_config(config: &AppConfig) -> Self {
        let auth = match (&config.content.username, &config.content.ticket) {
            (Some(_), _) => "basic",
            (None, Some(_)) => "ticket",
            (None, None) => "none",
        };

        Self {
            title: config.application.title(),
            api_root: config.content.api_root(),
            auth,
            success_duration_ms: config.notifications.success_duration_ms,
            error_duration_ms: config.notifications.error_duration_ms,
            undo_label: config.notifications.undo_label.clone(),
            viewer_path: config.viewer.viewer_path.clone(),
            log_level: config.logging.level.clone(),
        }
    }
}

/// Execute the info command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let view = InfoView::from_config(config);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Table => {
            println!("{}", view.title);
            output::print_kv("Content API", &view.api_root);
            output::print_kv("Authentication", view.auth);
            output::print_kv("Success duration", &format!("{} ms", view.success_duration_ms));
            output::print_kv("Error duration", &format!("{} ms", view.error_duration_ms));
            output::print_kv("Undo label", &view.undo_label);
            output::print_kv("Viewer path", &view.viewer_path);
            output::print_kv("Log level", &view.log_level);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_hides_credentials() {
        let mut config = AppConfig::default();
        config.content.username = Some("admin".to_string());
        config.content.password = Some("secret".to_string());

        let view = InfoView::from_config(&config);
        let json = serde_json::to_string(&view).unwrap();

        assert_eq!(view.auth, "basic");
        assert!(!json.contains("secret"));
        assert_eq!(view.title, "DocDesk (Build #dev)");
    }
}
