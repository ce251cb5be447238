//! Widget construction through the factory
//!
//! Needs a display. Everything runs inside a single test so GTK stays on
//! one thread; without a display the test returns early.

mod common;

use gtk4::prelude::*;
use livesupport_widgets::ui::BlueBin;
use livesupport_widgets::ButtonType;
use livesupport_widgets_types::{ButtonState, CornerSet};
use std::rc::Rc;

#[test]
fn test_factory_widgets() {
    if gtk4::init().is_err() {
        eprintln!("No display available, skipping widget tests");
        return;
    }

    let root = tempfile::tempdir().unwrap();
    let factory = common::configured_factory(root.path());
    let assets = factory.assets().unwrap();

    // Buttons: new instance each time, shared skins
    let play = factory.create_button("Play").unwrap();
    let stop = factory.create_button("Stop").unwrap();
    assert_ne!(play.widget(), stop.widget());
    assert!(Rc::ptr_eq(play.images(), stop.images()));
    assert!(Rc::ptr_eq(play.images(), assets.button()));
    assert_eq!(play.label(), "Play");
    play.set_label("Pause");
    assert_eq!(play.label(), "Pause");
    assert_eq!(play.state(), ButtonState::Passive);
    play.set_state(ButtonState::Rollover);
    assert_eq!(play.state(), ButtonState::Rollover);

    // Empty label is accepted
    let empty = factory.create_button("").unwrap();
    assert_eq!(empty.label(), "");

    // Stock buttons
    let delete_a = factory.create_stock_button(ButtonType::Delete).unwrap();
    let delete_b = factory.create_stock_button(ButtonType::Delete).unwrap();
    assert_ne!(delete_a.widget(), delete_b.widget());
    assert!(Rc::ptr_eq(delete_a.images(), delete_b.images()));
    assert_eq!(delete_a.button_type(), Some(ButtonType::Delete));
    assert_eq!(
        delete_a.widget().tooltip_text().as_deref(),
        Some(ButtonType::Delete.tooltip())
    );

    // Combo box
    let combo = factory.create_combo_box_text().unwrap();
    assert!(combo.is_empty());
    combo.append_text("Morning show");
    combo.append_text("Night playlist");
    assert_eq!(combo.len(), 2);
    combo.set_active(Some(1));
    assert_eq!(combo.active(), Some(1));
    assert_eq!(combo.active_text().as_deref(), Some("Night playlist"));
    combo.set_active(None);
    assert_eq!(combo.active_text(), None);
    combo.remove_all();
    assert!(combo.is_empty());
    assert!(Rc::ptr_eq(combo.images(), assets.combo_box()));

    // Bins
    let blue = factory.create_blue_bin().unwrap();
    let dark = factory.create_dark_blue_bin().unwrap();
    assert!(Rc::ptr_eq(blue.corners(), assets.corners(CornerSet::BlueBin)));
    assert!(Rc::ptr_eq(dark.corners(), assets.corners(CornerSet::DarkBlueBin)));
    assert!(!Rc::ptr_eq(blue.corners(), dark.corners()));

    let second_blue = factory.create_blue_bin().unwrap();
    assert_ne!(blue.widget(), second_blue.widget());
    assert!(Rc::ptr_eq(blue.corners(), second_blue.corners()));

    assert!(blue.child().is_none());
    let label = gtk4::Label::new(Some("On air"));
    blue.set_child(Some(&label));
    assert_eq!(blue.child(), Some(label.clone().upcast::<gtk4::Widget>()));
    blue.set_child(None::<&gtk4::Widget>);
    assert!(blue.child().is_none());
    assert!(label.parent().is_none());

    // White window corners: same bundle every time
    let corners = factory.white_window_corners().unwrap();
    assert!(Rc::ptr_eq(&corners, &factory.white_window_corners().unwrap()));
    let window_bin = BlueBin::new(corners, livesupport_widgets::ui::WHITE_BACKGROUND);
    window_bin.set_child(Some(blue.widget()));
    assert!(window_bin.child().is_some());
}
