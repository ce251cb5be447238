//! Label button drawn with the theme's three-slice button skins

use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerMotion, Label, Overlay};
use livesupport_widgets_types::ButtonState;
use std::cell::Cell;
use std::rc::Rc;

use super::three_slice::ThreeSlice;

/// Passive and rollover skins shared by every themed button
#[derive(Debug, Clone)]
pub struct ButtonImages {
    pub passive: ThreeSlice,
    pub rollover: ThreeSlice,
}

impl ButtonImages {
    /// Skin for the given state
    pub fn skin(&self, state: ButtonState) -> &ThreeSlice {
        match state {
            ButtonState::Passive => &self.passive,
            ButtonState::Rollover => &self.rollover,
        }
    }
}

/// A themed push button with a text label.
///
/// The skin switches to the rollover images while the pointer is over the
/// button.
pub struct Button {
    button: gtk4::Button,
    label: Label,
    drawing_area: DrawingArea,
    state: Rc<Cell<ButtonState>>,
    images: Rc<ButtonImages>,
}

impl Button {
    /// Create a button showing `label`, skinned with the shared `images`.
    pub fn new(label: &str, images: Rc<ButtonImages>) -> Self {
        let state = Rc::new(Cell::new(ButtonState::Passive));

        let button = gtk4::Button::new();
        button.add_css_class("flat");
        button.add_css_class("livesupport-button");

        let drawing_area = DrawingArea::new();
        drawing_area.set_content_width(images.passive.min_width());
        drawing_area.set_content_height(images.passive.height());

        let images_for_draw = images.clone();
        let state_for_draw = state.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            let skin = images_for_draw.skin(state_for_draw.get());
            if let Err(e) = skin.paint(cr, width as f64, height as f64) {
                log::warn!("Failed to paint button skin: {}", e);
            }
        });

        // Keep the label clear of the skin's end caps
        let label_widget = Label::new(Some(label));
        label_widget.set_margin_start(images.passive.left.width());
        label_widget.set_margin_end(images.passive.right.width());

        let overlay = Overlay::new();
        overlay.set_child(Some(&drawing_area));
        overlay.add_overlay(&label_widget);
        overlay.set_measure_overlay(&label_widget, true);
        button.set_child(Some(&overlay));

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
            label: label_widget,
            drawing_area,
            state,
            images,
        }
    }

    /// Get the root widget (for adding to layouts).
    pub fn widget(&self) -> &gtk4::Button {
        &self.button
    }

    pub fn label(&self) -> String {
        self.label.text().to_string()
    }

    pub fn set_label(&self, label: &str) {
        self.label.set_text(label);
    }

    /// Current skin state
    pub fn state(&self) -> ButtonState {
        self.state.get()
    }

    /// Force a skin state (the pointer overrides it on the next enter/leave)
    pub fn set_state(&self, state: ButtonState) {
        self.state.set(state);
        self.drawing_area.queue_draw();
    }

    /// The shared skin images
    pub fn images(&self) -> &Rc<ButtonImages> {
        &self.images
    }

    /// Set a callback to be called when the button is clicked.
    pub fn connect_clicked<F: Fn() + 'static>(&self, callback: F) {
        self.button.connect_clicked(move |_| callback());
    }
}
