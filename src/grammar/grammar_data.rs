//! Grammar data - Pure DOP
//!
//! Tokens and the timed panel plans produced from them.
//! All parsing happens in grammar_operations.rs

use crate::constants::TARGET_ANGLES;
use crate::geometry::Edge;
use crate::schedule::UnfoldWindow;

/// Which way a child panel swings out of its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceSide {
    /// Uppercase letter, rotates toward the parent's hinge normal
    Front,
    /// Lowercase letter, rotates to the opposite side
    Back,
}

/// Grammar digit selecting the rotation magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleCode {
    Quarter,      // '0', 90 degrees
    Half,         // '1', 180 degrees
    ThreeQuarter, // '2', 270 degrees
}

impl AngleCode {
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(AngleCode::Quarter),
            '1' => Some(AngleCode::Half),
            '2' => Some(AngleCode::ThreeQuarter),
            _ => None,
        }
    }

    /// Rotation magnitude in radians
    pub fn radians(&self) -> f32 {
        let index = match self {
            AngleCode::Quarter => 0,
            AngleCode::Half => 1,
            AngleCode::ThreeQuarter => 2,
        };
        TARGET_ANGLES[index]
    }
}

/// One lexical unit of a strip grammar, tagged with its byte offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrammarToken {
    Fold {
        edge: Edge,
        face: FaceSide,
        angle: AngleCode,
        offset: usize,
    },
    BranchOpen {
        offset: usize,
    },
    BranchClose {
        offset: usize,
    },
}

/// A panel as planned by the parser, before any geometry is attached
///
/// Plans are emitted parent-before-child; index 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlan {
    /// Index of the panel this one hinges on (`None` for the root)
    pub parent: Option<usize>,

    /// Parent edge this panel hinges on
    pub edge: Option<Edge>,

    pub face: Option<FaceSide>,

    /// Unsigned rotation magnitude from the angle table (radians)
    pub target_angle: f32,

    pub window: UnfoldWindow,

    /// Branch nesting level, 0 for the main chain
    pub depth: usize,

    /// Byte offset of the token that produced this panel
    pub offset: Option<usize>,
}
