//! Button kinds and visual states

use serde::{Deserialize, Serialize};

/// Stock buttons whose appearance is predefined by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    Delete,
}

impl ButtonType {
    pub const ALL: [ButtonType; 1] = [ButtonType::Delete];

    /// Relative (passive, rollover) image files for this stock button
    pub fn image_files(&self) -> (&'static str, &'static str) {
        match self {
            ButtonType::Delete => ("imageButton/delete.png", "imageButton/deleteRoll.png"),
        }
    }

    /// Tooltip shown on the stock button
    pub fn tooltip(&self) -> &'static str {
        match self {
            ButtonType::Delete => "Delete",
        }
    }
}

/// Which skin a button is currently drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Passive,
    Rollover,
}
