//! Every image of a widget theme, loaded up front

use livesupport_widgets_types::assets::{BUTTON_PASSIVE, BUTTON_ROLLOVER, COMBO_BOX};
use livesupport_widgets_types::{ButtonType, CornerSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::error::Result;
use super::image_loader::{ImageDirectory, ImageLoader};
use crate::ui::{ButtonImages, CornerImages, ImageButtonImages, ThreeSlice};

/// The decoded images of one theme directory.
///
/// Immutable once loaded; widgets share the bundles through `Rc`.
#[derive(Debug)]
pub struct ThemeAssets {
    path: PathBuf,
    button: Rc<ButtonImages>,
    combo_box: Rc<ThreeSlice>,
    delete_button: Rc<ImageButtonImages>,
    blue_bin: Rc<CornerImages>,
    dark_blue_bin: Rc<CornerImages>,
    white_window: Rc<CornerImages>,
}

impl ThemeAssets {
    /// Load the full theme, stopping at the first image that fails
    pub fn load(path: &Path, loader: &dyn ImageLoader) -> Result<Self> {
        let dir = ImageDirectory::new(path, loader);

        let button = ButtonImages {
            passive: ThreeSlice::load(&dir, BUTTON_PASSIVE)?,
            rollover: ThreeSlice::load(&dir, BUTTON_ROLLOVER)?,
        };
        let combo_box = ThreeSlice::load(&dir, COMBO_BOX)?;
        let delete_button = ImageButtonImages::load(&dir, ButtonType::Delete)?;
        let blue_bin = CornerImages::load(&dir, CornerSet::BlueBin)?;
        let dark_blue_bin = CornerImages::load(&dir, CornerSet::DarkBlueBin)?;
        let white_window = CornerImages::load(&dir, CornerSet::WhiteWindow)?;

        Ok(Self {
            path: path.to_path_buf(),
            button: Rc::new(button),
            combo_box: Rc::new(combo_box),
            delete_button: Rc::new(delete_button),
            blue_bin: Rc::new(blue_bin),
            dark_blue_bin: Rc::new(dark_blue_bin),
            white_window: Rc::new(white_window),
        })
    }

    /// Directory the theme was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn button(&self) -> &Rc<ButtonImages> {
        &self.button
    }

    pub fn combo_box(&self) -> &Rc<ThreeSlice> {
        &self.combo_box
    }

    pub fn stock_button(&self, button_type: ButtonType) -> &Rc<ImageButtonImages> {
        match button_type {
            ButtonType::Delete => &self.delete_button,
        }
    }

    pub fn corners(&self, set: CornerSet) -> &Rc<CornerImages> {
        match set {
            CornerSet::BlueBin => &self.blue_bin,
            CornerSet::DarkBlueBin => &self.dark_blue_bin,
            CornerSet::WhiteWindow => &self.white_window,
        }
    }
}
