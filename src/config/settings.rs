//! Application configuration

use anyhow::Result;
use livesupport_widgets_types::ConfigElement;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{CONFIG_ELEMENT_NAME, PATH_ATTRIBUTE};

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Gallery window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Configuration elements handed to configurable objects
    #[serde(default)]
    pub elements: Vec<ConfigElement>,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = project_dirs()?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The element with the given name, if present
    pub fn element(&self, name: &str) -> Option<&ConfigElement> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Point the widget factory element at `path`, adding the element if needed
    pub fn set_widget_image_path(&mut self, path: &Path) {
        let value = path.to_string_lossy().into_owned();
        match self.elements.iter_mut().find(|e| e.name == CONFIG_ELEMENT_NAME) {
            Some(element) => element.set_attribute(PATH_ATTRIBUTE, value),
            None => self.elements.push(
                ConfigElement::new(CONFIG_ELEMENT_NAME).with_attribute(PATH_ATTRIBUTE, value),
            ),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let image_path = project_dirs()
            .map(|dirs| dirs.data_dir().join("images"))
            .unwrap_or_else(|_| PathBuf::from("images"));

        let mut config = Self {
            version: 1,
            window: WindowConfig::default(),
            elements: Vec::new(),
        };
        config.set_widget_image_path(&image_path);
        config
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "LiveSupport", "livesupport-widgets")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Gallery window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "LiveSupport Widgets".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 420,
            title: default_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_widget_factory_element() {
        let config = AppConfig::default();
        let element = config.element(CONFIG_ELEMENT_NAME).unwrap();
        assert!(element.attribute(PATH_ATTRIBUTE).is_some());
    }

    #[test]
    fn test_set_widget_image_path_replaces_value() {
        let mut config = AppConfig::default();
        config.set_widget_image_path(Path::new("/assets/theme1/"));

        let matching: Vec<_> = config
            .elements
            .iter()
            .filter(|e| e.name == CONFIG_ELEMENT_NAME)
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].attribute(PATH_ATTRIBUTE), Some("/assets/theme1/"));
    }

    #[test]
    fn test_minimal_config_deserialization() {
        let json = r#"{
            "version": 1,
            "elements": [
                { "name": "widgetFactory", "attributes": { "path": "/assets/theme1/" } }
            ]
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.title, "LiveSupport Widgets");
        assert_eq!(
            config.element("widgetFactory").and_then(|e| e.attribute("path")),
            Some("/assets/theme1/")
        );
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.window.width = 1024;
        config.set_widget_image_path(Path::new("/assets/theme1"));
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.window.width, 1024);
        assert_eq!(loaded.elements, config.elements);
    }
}
