//! Corner image bundles
//!
//! A bundle holds the eight images that make up the decorated border of a
//! bin or window: four corners drawn once, and four edges tiled between them.

use gtk4::cairo;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::GdkCairoContextExt;
use livesupport_widgets_types::{CornerPosition, CornerSet};

use super::three_slice::paint_tiled;
use crate::core::{ImageDirectory, Result};

/// Border thickness on each side, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// The images of one corner bundle
#[derive(Debug, Clone)]
pub struct CornerImages {
    pub top_left: Pixbuf,
    pub top: Pixbuf,
    pub top_right: Pixbuf,
    pub left: Pixbuf,
    pub right: Pixbuf,
    pub bottom_left: Pixbuf,
    pub bottom: Pixbuf,
    pub bottom_right: Pixbuf,
}

impl CornerImages {
    /// Load the bundle stored in `set`'s sub-directory of the theme
    pub fn load(dir: &ImageDirectory<'_>, set: CornerSet) -> Result<Self> {
        let load = |position: CornerPosition| dir.load_image(&set.file(position));

        Ok(Self {
            top_left: load(CornerPosition::TopLeft)?,
            top: load(CornerPosition::Top)?,
            top_right: load(CornerPosition::TopRight)?,
            left: load(CornerPosition::Left)?,
            right: load(CornerPosition::Right)?,
            bottom_left: load(CornerPosition::BottomLeft)?,
            bottom: load(CornerPosition::Bottom)?,
            bottom_right: load(CornerPosition::BottomRight)?,
        })
    }

    /// Image at the given position
    pub fn image(&self, position: CornerPosition) -> &Pixbuf {
        match position {
            CornerPosition::TopLeft => &self.top_left,
            CornerPosition::Top => &self.top,
            CornerPosition::TopRight => &self.top_right,
            CornerPosition::Left => &self.left,
            CornerPosition::Right => &self.right,
            CornerPosition::BottomLeft => &self.bottom_left,
            CornerPosition::Bottom => &self.bottom,
            CornerPosition::BottomRight => &self.bottom_right,
        }
    }

    /// Space the border takes up on each side
    pub fn insets(&self) -> Insets {
        Insets {
            left: self.left.width(),
            top: self.top.height(),
            right: self.right.width(),
            bottom: self.bottom.height(),
        }
    }

    /// Smallest size at which all four corners fit without overlapping
    pub fn min_size(&self) -> (i32, i32) {
        let width = (self.top_left.width() + self.top_right.width())
            .max(self.bottom_left.width() + self.bottom_right.width());
        let height = (self.top_left.height() + self.bottom_left.height())
            .max(self.top_right.height() + self.bottom_right.height());
        (width, height)
    }

    /// Paint the border into a `width` x `height` area at the origin.
    ///
    /// Only the border is painted; the interior is left to the caller.
    pub fn paint(&self, cr: &cairo::Context, width: f64, height: f64) -> std::result::Result<(), cairo::Error> {
        let w = |p: &Pixbuf| p.width() as f64;
        let h = |p: &Pixbuf| p.height() as f64;

        // Edges first so the corners cover any tile overhang
        paint_tiled(
            cr,
            &self.top,
            w(&self.top_left),
            0.0,
            width - w(&self.top_left) - w(&self.top_right),
            h(&self.top),
        )?;
        paint_tiled(
            cr,
            &self.bottom,
            w(&self.bottom_left),
            height - h(&self.bottom),
            width - w(&self.bottom_left) - w(&self.bottom_right),
            h(&self.bottom),
        )?;
        paint_tiled(
            cr,
            &self.left,
            0.0,
            h(&self.top_left),
            w(&self.left),
            height - h(&self.top_left) - h(&self.bottom_left),
        )?;
        paint_tiled(
            cr,
            &self.right,
            width - w(&self.right),
            h(&self.top_right),
            w(&self.right),
            height - h(&self.top_right) - h(&self.bottom_right),
        )?;

        paint_at(cr, &self.top_left, 0.0, 0.0)?;
        paint_at(cr, &self.top_right, width - w(&self.top_right), 0.0)?;
        paint_at(cr, &self.bottom_left, 0.0, height - h(&self.bottom_left))?;
        paint_at(
            cr,
            &self.bottom_right,
            width - w(&self.bottom_right),
            height - h(&self.bottom_right),
        )?;
        Ok(())
    }
}

fn paint_at(cr: &cairo::Context, pixbuf: &Pixbuf, x: f64, y: f64) -> std::result::Result<(), cairo::Error> {
    cr.set_source_pixbuf(pixbuf, x, y);
    cr.rectangle(x, y, pixbuf.width() as f64, pixbuf.height() as f64);
    cr.fill()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image_loader::testing::MemoryLoader;
    use crate::ui::test_support::{render, solid_pixbuf};
    use std::path::{Path, PathBuf};

    const CORNER: u32 = 0xff0000ff;
    const EDGE: u32 = 0x00ff00ff;

    fn bundle() -> CornerImages {
        let corner = || solid_pixbuf(6, 6, CORNER);
        CornerImages {
            top_left: corner(),
            top: solid_pixbuf(1, 4, EDGE),
            top_right: corner(),
            left: solid_pixbuf(3, 1, EDGE),
            right: solid_pixbuf(2, 1, EDGE),
            bottom_left: corner(),
            bottom: solid_pixbuf(1, 5, EDGE),
            bottom_right: corner(),
        }
    }

    #[test]
    fn test_load_reads_set_directory() {
        let loader = MemoryLoader::new();
        let dir = ImageDirectory::new(Path::new("/assets/theme1"), &loader);

        CornerImages::load(&dir, CornerSet::DarkBlueBin).unwrap();

        let requested = loader.requested();
        assert_eq!(requested.len(), 8);
        assert_eq!(requested[0], PathBuf::from("/assets/theme1/darkBlueBin/topLeft.png"));
        assert_eq!(requested[7], PathBuf::from("/assets/theme1/darkBlueBin/bottomRight.png"));
    }

    #[test]
    fn test_load_stops_at_missing_image() {
        let loader = MemoryLoader::new().missing("blueBin/left.png");
        let dir = ImageDirectory::new(Path::new("/assets/theme1"), &loader);

        assert!(CornerImages::load(&dir, CornerSet::BlueBin).is_err());
        // topLeft, top, topRight, left
        assert_eq!(loader.requested().len(), 4);
    }

    #[test]
    fn test_insets_and_min_size() {
        let bundle = bundle();
        assert_eq!(
            bundle.insets(),
            Insets { left: 3, top: 4, right: 2, bottom: 5 }
        );
        assert_eq!(bundle.min_size(), (12, 12));
    }

    #[test]
    fn test_image_by_position() {
        let bundle = bundle();
        assert_eq!(bundle.image(CornerPosition::Bottom), &bundle.bottom);
        assert_eq!(bundle.image(CornerPosition::TopLeft), &bundle.top_left);
    }

    #[test]
    fn test_paint_border_leaves_interior() {
        let bundle = bundle();
        let pixels = render(30, 30, |cr| bundle.paint(cr, 30.0, 30.0));

        // Corners
        assert_eq!(pixels.at(0, 0), 0xffff0000);
        assert_eq!(pixels.at(29, 0), 0xffff0000);
        assert_eq!(pixels.at(0, 29), 0xffff0000);
        assert_eq!(pixels.at(29, 29), 0xffff0000);
        // Edges
        assert_eq!(pixels.at(15, 1), 0xff00ff00);
        assert_eq!(pixels.at(15, 27), 0xff00ff00);
        assert_eq!(pixels.at(1, 15), 0xff00ff00);
        assert_eq!(pixels.at(28, 15), 0xff00ff00);
        // Interior untouched
        assert_eq!(pixels.at(15, 15), 0);
    }
}
