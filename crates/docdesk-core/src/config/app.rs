//! Application identity shown in the header and the CLI banner.

use serde::{Deserialize, Serialize};

/// Application name and build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Display name of the application.
    #[serde(default = "default_name")]
    pub name: String,
    /// Build number, usually injected by CI through `DOCDESK__APPLICATION__BUILD`.
    #[serde(default = "default_build")]
    pub build: String,
}

impl ApplicationConfig {
    /// Header title in the form `"<name> (Build #<build>)"`.
    pub fn title(&self) -> String {
        format!("{} (Build #{})", self.name, self.build)
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            build: default_build(),
        }
    }
}

fn default_name() -> String {
    "DocDesk".to_string()
}

fn default_build() -> String {
    "dev".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        let app = ApplicationConfig {
            name: "Content App".to_string(),
            build: "1337".to_string(),
        };
        assert_eq!(app.title(), "Content App (Build #1337)");
        assert_eq!(ApplicationConfig::default().title(), "DocDesk (Build #dev)");
    }
}
