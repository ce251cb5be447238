//! Image-only buttons, used for the theme's stock buttons

use gtk4::prelude::*;
use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::{DrawingArea, EventControllerMotion};
use livesupport_widgets_types::{ButtonState, ButtonType};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::{ImageDirectory, Result};

/// Passive and rollover images of an image button
#[derive(Debug, Clone)]
pub struct ImageButtonImages {
    pub passive: Pixbuf,
    pub rollover: Pixbuf,
}

impl ImageButtonImages {
    /// Load the images of a stock button from the theme directory
    pub fn load(dir: &ImageDirectory<'_>, button_type: ButtonType) -> Result<Self> {
        let (passive, rollover) = button_type.image_files();
        Ok(Self {
            passive: dir.load_image(passive)?,
            rollover: dir.load_image(rollover)?,
        })
    }

    pub fn image(&self, state: ButtonState) -> &Pixbuf {
        match state {
            ButtonState::Passive => &self.passive,
            ButtonState::Rollover => &self.rollover,
        }
    }
}

/// A button showing only an image, swapped for its rollover image on hover
pub struct ImageButton {
    button: gtk4::Button,
    drawing_area: DrawingArea,
    state: Rc<Cell<ButtonState>>,
    images: Rc<ImageButtonImages>,
    button_type: Option<ButtonType>,
}

impl ImageButton {
    pub fn new(images: Rc<ImageButtonImages>) -> Self {
        Self::build(images, None)
    }

    /// Create a stock button of the given type
    pub fn stock(button_type: ButtonType, images: Rc<ImageButtonImages>) -> Self {
        let image_button = Self::build(images, Some(button_type));
        image_button
            .button
            .set_tooltip_text(Some(button_type.tooltip()));
        image_button
    }

    fn build(images: Rc<ImageButtonImages>, button_type: Option<ButtonType>) -> Self {
        let state = Rc::new(Cell::new(ButtonState::Passive));

        let button = gtk4::Button::new();
        button.add_css_class("flat");
        button.add_css_class("livesupport-image-button");

        let drawing_area = DrawingArea::new();
        drawing_area.set_content_width(images.passive.width());
        drawing_area.set_content_height(images.passive.height());

        let images_for_draw = images.clone();
        let state_for_draw = state.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            let pixbuf = images_for_draw.image(state_for_draw.get());
            // Center the image in whatever space GTK allocates
            let x = ((width - pixbuf.width()) / 2) as f64;
            let y = ((height - pixbuf.height()) / 2) as f64;
            cr.set_source_pixbuf(pixbuf, x, y);
            if let Err(e) = cr.paint() {
                log::warn!("Failed to paint image button: {}", e);
            }
        });
        button.set_child(Some(&drawing_area));

        let motion = EventControllerMotion::new();
        let state_for_enter = state.clone();
        let area_for_enter = drawing_area.clone();
        motion.connect_enter(move |_, _, _| {
            state_for_enter.set(ButtonState::Rollover);
            area_for_enter.queue_draw();
        });
        let state_for_leave = state.clone();
        let area_for_leave = drawing_area.clone();
        motion.connect_leave(move |_| {
            state_for_leave.set(ButtonState::Passive);
            area_for_leave.queue_draw();
        });
        button.add_controller(motion);

        Self {
            button,
            drawing_area,
            state,
            images,
            button_type,
        }
    }

    /// Get the root widget (for adding to layouts).
    pub fn widget(&self) -> &gtk4::Button {
        &self.button
    }

    /// Stock type, if this is a stock button
    pub fn button_type(&self) -> Option<ButtonType> {
        self.button_type
    }

    pub fn state(&self) -> ButtonState {
        self.state.get()
    }

    pub fn set_state(&self, state: ButtonState) {
        self.state.set(state);
        self.drawing_area.queue_draw();
    }

    pub fn images(&self) -> &Rc<ImageButtonImages> {
        &self.images
    }

    /// Set a callback to be called when the button is clicked.
    pub fn connect_clicked<F: Fn() + 'static>(&self, callback: F) {
        self.button.connect_clicked(move |_| callback());
    }
}
