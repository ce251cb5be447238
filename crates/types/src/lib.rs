//! livesupport-widgets-types: Shared data types for the themed widget factory.
//!
//! This crate contains pure data types (configuration elements, asset names,
//! stock button kinds) that the widget crate builds on. They carry no GTK
//! dependencies, so they can be used and tested without a display.

pub mod assets;
pub mod button;
pub mod config_element;

pub use assets::{required_files, CornerPosition, CornerSet, ThreeSliceNames};
pub use button::{ButtonState, ButtonType};
pub use config_element::ConfigElement;
