//! Left / center / right image triples used to skin horizontal widgets
//!
//! The two ends are drawn once at their natural width; the center image is
//! tiled across whatever width remains.

use gtk4::cairo;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::GdkCairoContextExt;
use livesupport_widgets_types::assets::ThreeSliceNames;

use crate::core::{ImageDirectory, Result};

/// A three-slice skin
#[derive(Debug, Clone)]
pub struct ThreeSlice {
    pub left: Pixbuf,
    pub center: Pixbuf,
    pub right: Pixbuf,
}

impl ThreeSlice {
    pub fn new(left: Pixbuf, center: Pixbuf, right: Pixbuf) -> Self {
        Self { left, center, right }
    }

    /// Load the three images named by `names` from the theme directory
    pub fn load(dir: &ImageDirectory<'_>, names: ThreeSliceNames) -> Result<Self> {
        Ok(Self {
            left: dir.load_image(names.left)?,
            center: dir.load_image(names.center)?,
            right: dir.load_image(names.right)?,
        })
    }

    /// Natural height of the skin (tallest slice)
    pub fn height(&self) -> i32 {
        self.left
            .height()
            .max(self.center.height())
            .max(self.right.height())
    }

    /// Width of the two ends plus one center tile
    pub fn min_width(&self) -> i32 {
        self.left.width() + self.center.width() + self.right.width()
    }

    /// Paint the skin into a `width` x `height` area at the origin
    pub fn paint(&self, cr: &cairo::Context, width: f64, height: f64) -> std::result::Result<(), cairo::Error> {
        let left_width = self.left.width() as f64;
        let right_width = self.right.width() as f64;

        paint_tiled(
            cr,
            &self.center,
            left_width,
            0.0,
            width - left_width - right_width,
            height,
        )?;
        paint_tiled(cr, &self.left, 0.0, 0.0, left_width.min(width), height)?;
        paint_tiled(cr, &self.right, width - right_width, 0.0, right_width, height)?;
        Ok(())
    }
}

/// Fill a rectangle with `pixbuf`, repeating it in both directions from the
/// rectangle's top-left corner. Empty rectangles are skipped.
pub(crate) fn paint_tiled(
    cr: &cairo::Context,
    pixbuf: &Pixbuf,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> std::result::Result<(), cairo::Error> {
    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }

    cr.save()?;
    cr.rectangle(x, y, width, height);
    cr.clip();
    cr.set_source_pixbuf(pixbuf, x, y);
    cr.source().set_extend(cairo::Extend::Repeat);
    cr.paint()?;
    cr.restore()
}
