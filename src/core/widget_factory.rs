//! Factory for themed widgets
//!
//! The factory is configured once with a `widgetFactory` element:
//!
//! ```json
//! { "name": "widgetFactory", "attributes": { "path": "path/to/widget/images/" } }
//! ```
//!
//! Configuration loads every theme image up front. Widgets created afterwards
//! share those images; each widget itself is a new, independently owned
//! instance.

use livesupport_widgets_types::{ButtonType, ConfigElement, CornerSet};
use log::{info, warn};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::configurable::Configurable;
use super::error::{Result, WidgetError};
use super::image_loader::{ImageLoader, PixbufFileLoader};
use super::theme_assets::ThemeAssets;
use crate::ui::{
    BlueBin, Button, ComboBoxText, CornerImages, ImageButton, BLUE_BACKGROUND,
    DARK_BLUE_BACKGROUND,
};

/// Name of the configuration element the factory expects
pub const CONFIG_ELEMENT_NAME: &str = "widgetFactory";

/// Attribute holding the image directory
pub const PATH_ATTRIBUTE: &str = "path";

enum FactoryState {
    Unconfigured,
    Configured(Rc<ThemeAssets>),
}

thread_local! {
    // GTK objects are bound to the main thread, so is the shared factory
    static INSTANCE: Rc<WidgetFactory> = Rc::new(WidgetFactory::new());
}

/// Creates themed widgets from a configured image directory
pub struct WidgetFactory {
    loader: Box<dyn ImageLoader>,
    state: RefCell<FactoryState>,
}

impl WidgetFactory {
    /// Create an unconfigured factory that reads images from disk
    pub fn new() -> Self {
        Self::with_loader(Box::new(PixbufFileLoader))
    }

    /// Create an unconfigured factory with a custom image loader
    pub fn with_loader(loader: Box<dyn ImageLoader>) -> Self {
        Self {
            loader,
            state: RefCell::new(FactoryState::Unconfigured),
        }
    }

    /// The shared factory of the current (GTK main) thread.
    ///
    /// Created on first call; every later call returns the same `Rc`.
    pub fn instance() -> Rc<WidgetFactory> {
        INSTANCE.with(Rc::clone)
    }

    pub fn is_configured(&self) -> bool {
        matches!(*self.state.borrow(), FactoryState::Configured(_))
    }

    /// Image directory of the configured theme
    pub fn image_path(&self) -> Option<PathBuf> {
        match &*self.state.borrow() {
            FactoryState::Configured(assets) => Some(assets.path().to_path_buf()),
            FactoryState::Unconfigured => None,
        }
    }

    /// The loaded theme
    pub fn assets(&self) -> Result<Rc<ThemeAssets>> {
        match &*self.state.borrow() {
            FactoryState::Configured(assets) => Ok(Rc::clone(assets)),
            FactoryState::Unconfigured => Err(WidgetError::NotConfigured),
        }
    }

    /// Create a button carrying `label`
    pub fn create_button(&self, label: &str) -> Result<Button> {
        let assets = self.assets()?;
        Ok(Button::new(label, Rc::clone(assets.button())))
    }

    /// Create a stock button
    pub fn create_stock_button(&self, button_type: ButtonType) -> Result<ImageButton> {
        let assets = self.assets()?;
        Ok(ImageButton::stock(
            button_type,
            Rc::clone(assets.stock_button(button_type)),
        ))
    }

    /// Create a combo box that holds text entries
    pub fn create_combo_box_text(&self) -> Result<ComboBoxText> {
        let assets = self.assets()?;
        Ok(ComboBoxText::new(Rc::clone(assets.combo_box())))
    }

    /// Create a blue single-child container
    pub fn create_blue_bin(&self) -> Result<BlueBin> {
        let assets = self.assets()?;
        Ok(BlueBin::new(
            Rc::clone(assets.corners(CornerSet::BlueBin)),
            BLUE_BACKGROUND,
        ))
    }

    /// Create a dark blue single-child container
    pub fn create_dark_blue_bin(&self) -> Result<BlueBin> {
        let assets = self.assets()?;
        Ok(BlueBin::new(
            Rc::clone(assets.corners(CornerSet::DarkBlueBin)),
            DARK_BLUE_BACKGROUND,
        ))
    }

    /// The corner images of the white window
    pub fn white_window_corners(&self) -> Result<Rc<CornerImages>> {
        let assets = self.assets()?;
        Ok(Rc::clone(assets.corners(CornerSet::WhiteWindow)))
    }
}

impl Default for WidgetFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for WidgetFactory {
    fn config_element_name(&self) -> &'static str {
        CONFIG_ELEMENT_NAME
    }

    /// Load the theme named by the element's `path` attribute.
    ///
    /// All images are loaded before the factory switches state, so a failed
    /// call leaves it unconfigured and may be retried.
    fn configure(&self, element: &ConfigElement) -> Result<()> {
        if self.is_configured() {
            warn!("Ignoring attempt to reconfigure the widget factory");
            return Err(WidgetError::AlreadyConfigured);
        }

        if element.name != CONFIG_ELEMENT_NAME {
            return Err(WidgetError::InvalidConfiguration(format!(
                "bad configuration element <{}>, expected <{}>",
                element.name, CONFIG_ELEMENT_NAME
            )));
        }

        let path = element.attribute(PATH_ATTRIBUTE).ok_or_else(|| {
            WidgetError::InvalidConfiguration(format!(
                "missing attribute {} in <{}>",
                PATH_ATTRIBUTE, CONFIG_ELEMENT_NAME
            ))
        })?;
        if path.trim().is_empty() {
            return Err(WidgetError::InvalidConfiguration(format!(
                "empty attribute {} in <{}>",
                PATH_ATTRIBUTE, CONFIG_ELEMENT_NAME
            )));
        }

        for unknown in element.unknown_attributes(&[PATH_ATTRIBUTE]) {
            warn!("Ignoring unknown attribute {} in <{}>", unknown, CONFIG_ELEMENT_NAME);
        }

        let assets = ThemeAssets::load(Path::new(path), self.loader.as_ref())?;
        info!("Widget factory configured from {}", path);

        *self.state.borrow_mut() = FactoryState::Configured(Rc::new(assets));
        Ok(())
    }
}
