//! livesupport-widgets: Themed GTK4 widgets for the LiveSupport studio
//!
//! This library provides:
//! - A widget factory configured once from a theme image directory
//! - Themed buttons, stock image buttons, text combo boxes and bins
//! - Application configuration holding the factory's configuration element

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use core::{configure_from, Configurable, WidgetError, WidgetFactory};
pub use livesupport_widgets_types::{ButtonType, ConfigElement};
