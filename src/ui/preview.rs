//! Offscreen preview of a theme
//!
//! Paints every skin of a loaded theme onto an image surface, without
//! creating any widgets. Used by `widget-gallery --snapshot` to check a
//! theme directory on machines without a display.

use gtk4::cairo;
use gtk4::prelude::GdkCairoContextExt;
use livesupport_widgets_types::{ButtonState, ButtonType, CornerSet};

use super::blue_bin::{BinBackground, BLUE_BACKGROUND, DARK_BLUE_BACKGROUND, WHITE_BACKGROUND};
use super::corner_images::CornerImages;
use crate::core::ThemeAssets;

const MARGIN: f64 = 16.0;
const SPACING: f64 = 8.0;
const SKIN_WIDTH: f64 = 120.0;

/// Render a `width` x `height` preview of the theme
pub fn render_preview(
    assets: &ThemeAssets,
    width: i32,
    height: i32,
) -> Result<cairo::ImageSurface, cairo::Error> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let cr = cairo::Context::new(&surface)?;
        let (w, h) = (width as f64, height as f64);

        paint_bin(
            &cr,
            assets.corners(CornerSet::WhiteWindow),
            WHITE_BACKGROUND,
            0.0,
            0.0,
            w,
            h,
        )?;

        let window_insets = assets.corners(CornerSet::WhiteWindow).insets();
        let inner_x = window_insets.left as f64 + MARGIN;
        let inner_y = window_insets.top as f64 + MARGIN;
        let inner_w = w - inner_x - window_insets.right as f64 - MARGIN;
        let inner_h = h - inner_y - window_insets.bottom as f64 - MARGIN;
        let bin_w = ((inner_w - MARGIN) / 2.0).max(0.0);

        // Left: blue bin with the three-slice skins
        let blue = assets.corners(CornerSet::BlueBin);
        paint_bin(&cr, blue, BLUE_BACKGROUND, inner_x, inner_y, bin_w, inner_h)?;

        let insets = blue.insets();
        let mut y = inner_y + insets.top as f64 + SPACING;
        let x = inner_x + insets.left as f64 + SPACING;
        for state in [ButtonState::Passive, ButtonState::Rollover] {
            let skin = assets.button().skin(state);
            cr.save()?;
            cr.translate(x, y);
            skin.paint(&cr, SKIN_WIDTH, skin.height() as f64)?;
            cr.restore()?;
            y += skin.height() as f64 + SPACING;
        }
        cr.save()?;
        cr.translate(x, y);
        assets
            .combo_box()
            .paint(&cr, SKIN_WIDTH, assets.combo_box().height() as f64)?;
        cr.restore()?;

        // Right: dark blue bin with the stock buttons
        let dark = assets.corners(CornerSet::DarkBlueBin);
        let dark_x = inner_x + bin_w + MARGIN;
        paint_bin(&cr, dark, DARK_BLUE_BACKGROUND, dark_x, inner_y, bin_w, inner_h)?;

        let insets = dark.insets();
        let mut x = dark_x + insets.left as f64 + SPACING;
        let y = inner_y + insets.top as f64 + SPACING;
        for button_type in ButtonType::ALL {
            let images = assets.stock_button(button_type);
            for state in [ButtonState::Passive, ButtonState::Rollover] {
                let pixbuf = images.image(state);
                cr.set_source_pixbuf(pixbuf, x, y);
                cr.rectangle(x, y, pixbuf.width() as f64, pixbuf.height() as f64);
                cr.fill()?;
                x += pixbuf.width() as f64 + SPACING;
            }
        }
    }
    surface.flush();
    Ok(surface)
}

/// Paint a bin's background and corners into the given rectangle
fn paint_bin(
    cr: &cairo::Context,
    corners: &CornerImages,
    background: BinBackground,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let insets = corners.insets();

    cr.save()?;
    cr.translate(x, y);
    cr.set_source_rgb(background.r, background.g, background.b);
    cr.rectangle(
        insets.left as f64,
        insets.top as f64,
        width - (insets.left + insets.right) as f64,
        height - (insets.top + insets.bottom) as f64,
    );
    cr.fill()?;
    corners.paint(cr, width, height)?;
    cr.restore()
}
