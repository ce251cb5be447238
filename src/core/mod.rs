//! Core types for the widget factory

mod configurable;
mod error;
pub(crate) mod image_loader;
mod theme_assets;
mod widget_factory;

pub use configurable::{configure_from, Configurable};
pub use error::{Result, WidgetError};
pub use image_loader::{ImageDirectory, ImageLoader, PixbufFileLoader};
pub use theme_assets::ThemeAssets;
pub use widget_factory::{WidgetFactory, CONFIG_ELEMENT_NAME, PATH_ATTRIBUTE};
