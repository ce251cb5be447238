//! Themed widgets and the image bundles they are drawn with

mod blue_bin;
mod button;
mod combo_box_text;
mod corner_images;
mod image_button;
pub mod preview;
mod three_slice;

#[cfg(test)]
pub(crate) mod test_support;

pub use blue_bin::{BinBackground, BlueBin, BLUE_BACKGROUND, DARK_BLUE_BACKGROUND, WHITE_BACKGROUND};
pub use button::{Button, ButtonImages};
pub use combo_box_text::ComboBoxText;
pub use corner_images::{CornerImages, Insets};
pub use image_button::{ImageButton, ImageButtonImages};
pub use preview::render_preview;
pub use three_slice::ThreeSlice;
