//! Text combo box drawn over the theme's combo box skin

use gtk4::prelude::*;
use gtk4::{DrawingArea, DropDown, Overlay, StringList};
use std::rc::Rc;

use super::three_slice::ThreeSlice;

/// A combo box holding text entries.
///
/// The dropdown itself is flat; the three-slice skin painted underneath
/// supplies its frame.
pub struct ComboBoxText {
    overlay: Overlay,
    dropdown: DropDown,
    model: StringList,
    images: Rc<ThreeSlice>,
}

impl ComboBoxText {
    pub fn new(images: Rc<ThreeSlice>) -> Self {
        let drawing_area = DrawingArea::new();
        drawing_area.set_content_width(images.min_width());
        drawing_area.set_content_height(images.height());

        let images_for_draw = images.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            if let Err(e) = images_for_draw.paint(cr, width as f64, height as f64) {
                log::warn!("Failed to paint combo box skin: {}", e);
            }
        });

        let model = StringList::new(&[]);
        let dropdown = DropDown::new(Some(model.clone()), Option::<gtk4::Expression>::None);
        dropdown.add_css_class("flat");
        dropdown.set_margin_start(images.left.width());
        dropdown.set_margin_end(images.right.width());

        let overlay = Overlay::new();
        overlay.add_css_class("livesupport-combo-box");
        overlay.set_child(Some(&drawing_area));
        overlay.add_overlay(&dropdown);
        overlay.set_measure_overlay(&dropdown, true);

        Self {
            overlay,
            dropdown,
            model,
            images,
        }
    }

    /// Get the root widget (for adding to layouts).
    pub fn widget(&self) -> &Overlay {
        &self.overlay
    }

    /// Append an entry to the end of the list
    pub fn append_text(&self, text: &str) {
        self.model.append(text);
    }

    /// Remove every entry
    pub fn remove_all(&self) {
        self.model.splice(0, self.model.n_items(), &[]);
    }

    /// Number of entries
    pub fn len(&self) -> u32 {
        self.model.n_items()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Select an entry by index, or clear the selection with `None`
    pub fn set_active(&self, index: Option<u32>) {
        self.dropdown
            .set_selected(index.unwrap_or(gtk4::INVALID_LIST_POSITION));
    }

    /// Index of the selected entry
    pub fn active(&self) -> Option<u32> {
        let selected = self.dropdown.selected();
        (selected != gtk4::INVALID_LIST_POSITION).then_some(selected)
    }

    /// Text of the selected entry
    pub fn active_text(&self) -> Option<String> {
        self.active()
            .and_then(|index| self.model.string(index))
            .map(|s| s.to_string())
    }

    /// The shared skin images
    pub fn images(&self) -> &Rc<ThreeSlice> {
        &self.images
    }

    /// Set a callback to be called with the newly selected text.
    pub fn connect_changed<F: Fn(Option<String>) + 'static>(&self, callback: F) {
        let model = self.model.clone();
        self.dropdown.connect_selected_notify(move |dropdown| {
            let selected = dropdown.selected();
            let text = if selected == gtk4::INVALID_LIST_POSITION {
                None
            } else {
                model.string(selected).map(|s| s.to_string())
            };
            callback(text);
        });
    }
}
