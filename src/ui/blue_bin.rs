//! Single-child container decorated with a corner image bundle

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, DrawingArea, Orientation, Overlay, Widget};
use std::cell::RefCell;
use std::rc::Rc;

use super::corner_images::CornerImages;

/// Interior fill of a bin, as RGB components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinBackground {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl BinBackground {
    pub fn from_rgb_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f64 / 255.0,
            g: ((rgb >> 8) & 0xff) as f64 / 255.0,
            b: (rgb & 0xff) as f64 / 255.0,
        }
    }
}

/// Fill behind the blue bin corners
pub const BLUE_BACKGROUND: BinBackground = BinBackground {
    r: 0xcf as f64 / 255.0,
    g: 0xde as f64 / 255.0,
    b: 0xe7 as f64 / 255.0,
};

/// Fill behind the dark blue bin corners
pub const DARK_BLUE_BACKGROUND: BinBackground = BinBackground {
    r: 0x99 as f64 / 255.0,
    g: 0xcd as f64 / 255.0,
    b: 0xff as f64 / 255.0,
};

/// Fill behind the white window corners
pub const WHITE_BACKGROUND: BinBackground = BinBackground { r: 1.0, g: 1.0, b: 1.0 };

/// A container holding at most one child, framed by a corner bundle
pub struct BlueBin {
    overlay: Overlay,
    content: GtkBox,
    child: RefCell<Option<Widget>>,
    corners: Rc<CornerImages>,
    background: BinBackground,
}

impl BlueBin {
    pub fn new(corners: Rc<CornerImages>, background: BinBackground) -> Self {
        let (min_width, min_height) = corners.min_size();

        let drawing_area = DrawingArea::new();
        drawing_area.set_content_width(min_width);
        drawing_area.set_content_height(min_height);

        let corners_for_draw = corners.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            let insets = corners_for_draw.insets();
            cr.set_source_rgb(background.r, background.g, background.b);
            cr.rectangle(
                insets.left as f64,
                insets.top as f64,
                (width - insets.left - insets.right) as f64,
                (height - insets.top - insets.bottom) as f64,
            );
            let _ = cr.fill();

            if let Err(e) = corners_for_draw.paint(cr, width as f64, height as f64) {
                log::warn!("Failed to paint bin corners: {}", e);
            }
        });

        // Child area sits inside the border
        let insets = corners.insets();
        let content = GtkBox::new(Orientation::Vertical, 0);
        content.set_margin_start(insets.left);
        content.set_margin_top(insets.top);
        content.set_margin_end(insets.right);
        content.set_margin_bottom(insets.bottom);

        let overlay = Overlay::new();
        overlay.add_css_class("livesupport-bin");
        overlay.set_child(Some(&drawing_area));
        overlay.add_overlay(&content);
        overlay.set_measure_overlay(&content, true);

        Self {
            overlay,
            content,
            child: RefCell::new(None),
            corners,
            background,
        }
    }

    /// Get the root widget (for adding to layouts).
    pub fn widget(&self) -> &Overlay {
        &self.overlay
    }

    /// Replace the bin's child; `None` empties the bin
    pub fn set_child(&self, child: Option<&impl IsA<Widget>>) {
        if let Some(old) = self.child.borrow_mut().take() {
            self.content.remove(&old);
        }

        if let Some(child) = child {
            child.set_hexpand(true);
            child.set_vexpand(true);
            self.content.append(child);
            *self.child.borrow_mut() = Some(child.clone().upcast());
        }
    }

    pub fn child(&self) -> Option<Widget> {
        self.child.borrow().clone()
    }

    /// The shared corner bundle
    pub fn corners(&self) -> &Rc<CornerImages> {
        &self.corners
    }

    pub fn background(&self) -> BinBackground {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_from_hex() {
        let bg = BinBackground::from_rgb_hex(0xff8000);
        assert_eq!(bg.r, 1.0);
        assert!((bg.g - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(bg.b, 0.0);
    }

    #[test]
    fn test_background_constants_match_hex() {
        assert_eq!(BLUE_BACKGROUND, BinBackground::from_rgb_hex(0xcfdee7));
        assert_eq!(DARK_BLUE_BACKGROUND, BinBackground::from_rgb_hex(0x99cdff));
        assert_eq!(WHITE_BACKGROUND, BinBackground::from_rgb_hex(0xffffff));
    }
}
