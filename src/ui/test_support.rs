//! Helpers for rendering tests that run without a display

use gtk4::cairo;
use gtk4::gdk_pixbuf::{Colorspace, Pixbuf};

/// A pixbuf filled with one RGBA colour (0xRRGGBBAA)
pub fn solid_pixbuf(width: i32, height: i32, rgba: u32) -> Pixbuf {
    let pixbuf = Pixbuf::new(Colorspace::Rgb, true, 8, width, height)
        .expect("Failed to allocate pixbuf");
    pixbuf.fill(rgba);
    pixbuf
}

/// Pixels copied out of a rendered surface
pub struct Rendered {
    stride: usize,
    data: Vec<u8>,
}

impl Rendered {
    /// Pixel as premultiplied 0xAARRGGBB
    pub fn at(&self, x: i32, y: i32) -> u32 {
        let offset = y as usize * self.stride + x as usize * 4;
        u32::from_ne_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ])
    }
}

/// Render into a fresh ARGB surface and copy out its pixels
pub fn render<F>(width: i32, height: i32, draw: F) -> Rendered
where
    F: FnOnce(&cairo::Context) -> Result<(), cairo::Error>,
{
    let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .expect("Failed to create surface");
    {
        let cr = cairo::Context::new(&surface).expect("Failed to create context");
        draw(&cr).expect("Drawing failed");
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let data = surface.data().expect("Surface is still shared").to_vec();
    Rendered { stride, data }
}
