//! Error type for widget factory configuration and widget creation

use gtk4::glib;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the widget factory
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The configuration element is not the expected one, or its
    /// attributes are missing or malformed
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A theme image is missing or could not be decoded
    #[error("could not load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: glib::Error,
    },

    /// configure() was called on a factory that is already configured
    #[error("the widget factory is already configured and can not be reconfigured")]
    AlreadyConfigured,

    /// A widget was requested before the factory was configured
    #[error("the widget factory has not been configured")]
    NotConfigured,
}

impl WidgetError {
    /// True for errors caused by bad configuration data (including missing images)
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            WidgetError::InvalidConfiguration(_) | WidgetError::ImageLoad { .. }
        )
    }

    /// True for errors caused by calling the factory in the wrong lifecycle state
    pub fn is_logic_error(&self) -> bool {
        matches!(self, WidgetError::AlreadyConfigured | WidgetError::NotConfigured)
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
