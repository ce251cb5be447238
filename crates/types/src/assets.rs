//! Fixed asset layout of a widget theme directory.
//!
//! Every theme directory must provide the same set of files; the factory
//! loads all of them up front, in the order returned by [`required_files`].

/// File names of a left / center / right image triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeSliceNames {
    pub left: &'static str,
    pub center: &'static str,
    pub right: &'static str,
}

impl ThreeSliceNames {
    /// The three names in drawing order.
    pub fn as_array(&self) -> [&'static str; 3] {
        [self.left, self.center, self.right]
    }
}

/// Skin of a button in its normal state
pub const BUTTON_PASSIVE: ThreeSliceNames = ThreeSliceNames {
    left: "button/left.png",
    center: "button/centre.png",
    right: "button/right.png",
};

/// Skin of a button while the pointer hovers over it
pub const BUTTON_ROLLOVER: ThreeSliceNames = ThreeSliceNames {
    left: "button/leftRoll.png",
    center: "button/centreRoll.png",
    right: "button/rightRoll.png",
};

/// Skin of a text combo box
pub const COMBO_BOX: ThreeSliceNames = ThreeSliceNames {
    left: "combo/left.png",
    center: "combo/centre.png",
    right: "combo/right.png",
};

/// Position of one image inside a corner image bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl CornerPosition {
    pub const ALL: [CornerPosition; 8] = [
        CornerPosition::TopLeft,
        CornerPosition::Top,
        CornerPosition::TopRight,
        CornerPosition::Left,
        CornerPosition::Right,
        CornerPosition::BottomLeft,
        CornerPosition::Bottom,
        CornerPosition::BottomRight,
    ];

    /// File name of this position inside a corner set directory
    pub fn file_name(&self) -> &'static str {
        match self {
            CornerPosition::TopLeft => "topLeft.png",
            CornerPosition::Top => "top.png",
            CornerPosition::TopRight => "topRight.png",
            CornerPosition::Left => "left.png",
            CornerPosition::Right => "right.png",
            CornerPosition::BottomLeft => "bottomLeft.png",
            CornerPosition::Bottom => "bottom.png",
            CornerPosition::BottomRight => "bottomRight.png",
        }
    }

    /// Whether this position is one of the four corners (drawn once, not tiled)
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            CornerPosition::TopLeft
                | CornerPosition::TopRight
                | CornerPosition::BottomLeft
                | CornerPosition::BottomRight
        )
    }
}

/// The corner image bundles a theme provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerSet {
    BlueBin,
    DarkBlueBin,
    WhiteWindow,
}

impl CornerSet {
    pub const ALL: [CornerSet; 3] = [
        CornerSet::BlueBin,
        CornerSet::DarkBlueBin,
        CornerSet::WhiteWindow,
    ];

    /// Sub-directory of the theme holding this bundle
    pub fn directory(&self) -> &'static str {
        match self {
            CornerSet::BlueBin => "blueBin",
            CornerSet::DarkBlueBin => "darkBlueBin",
            CornerSet::WhiteWindow => "whiteWindow",
        }
    }

    /// Relative path of one image of this bundle, e.g. `blueBin/topLeft.png`
    pub fn file(&self, position: CornerPosition) -> String {
        format!("{}/{}", self.directory(), position.file_name())
    }
}

/// Every file a theme directory must contain, in load order.
pub fn required_files() -> Vec<String> {
    let mut files: Vec<String> = Vec::with_capacity(32);

    for names in [BUTTON_PASSIVE, BUTTON_ROLLOVER, COMBO_BOX] {
        files.extend(names.as_array().iter().map(|n| n.to_string()));
    }

    for button_type in crate::ButtonType::ALL {
        let (passive, rollover) = button_type.image_files();
        files.push(passive.to_string());
        files.push(rollover.to_string());
    }

    for set in CornerSet::ALL {
        files.extend(CornerPosition::ALL.iter().map(|p| set.file(*p)));
    }

    files
}
