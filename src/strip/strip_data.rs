//! Strip data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All building and sampling happens in strip_operations.rs

use crate::geometry::{Edge, HingeFrame, QuadGeometry};
use crate::grammar::FaceSide;
use cgmath::{Matrix4, SquareMatrix, Vector3};

/// One rigid panel in a strip's arena
///
/// Written once when the strip is built, only read afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// Corners once the rotation has finished
    pub rest_geometry: QuadGeometry,

    /// Edge shared with the parent panel, `None` for the strip root
    pub pivot_edge: Option<Edge>,

    /// Hinge angle at `start_time`, relative to rest geometry (radians)
    pub start_angle: f32,

    /// Hinge angle at `end_time`, always 0
    pub end_angle: f32,

    pub start_time: f32,
    pub end_time: f32,

    /// Opaque renderer tag
    pub material_id: u32,

    /// Arena index of the parent panel
    pub parent: Option<usize>,

    /// Branch nesting level
    pub depth: usize,

    pub face: Option<FaceSide>,

    /// Frame of `pivot_edge` within `rest_geometry`
    pub hinge: Option<HingeFrame>,

    /// Byte offset of the grammar token that produced this panel
    pub grammar_offset: Option<usize>,
}

/// Everything needed to build one strip
#[derive(Debug, Clone)]
pub struct StripDescriptor {
    /// Identifies the strip in logs and errors
    pub label: String,

    pub grammar: String,

    /// Seed quad in model space
    pub seed: QuadGeometry,

    /// Base transform applied to the seed before the offset
    pub transform: Matrix4<f32>,

    /// World-space translation applied last
    pub offset: Vector3<f32>,

    /// Animation time at which the strip starts unfolding
    pub start_time: f32,

    pub material_id: u32,
}

/// A built strip: panels in parent-before-child order, root first
#[derive(Debug, Clone)]
pub struct StripData {
    pub label: String,
    pub panels: Vec<Panel>,
}

/// Per-panel animation state at a query time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelState {
    /// Not started, renderer should skip the panel
    Dormant,
    /// Mid-rotation, `bias` in [0, 1)
    Unfolding { bias: f32 },
    /// At rest geometry
    Settled,
}

/// What the renderer gets for one panel at one time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSample {
    /// Arena index within the strip
    pub index: usize,
    pub geometry: QuadGeometry,
    pub visible: bool,
    pub material_id: u32,
    pub state: PanelState,
}

impl Default for StripDescriptor {
    fn default() -> Self {
        Self {
            label: "strip".to_string(),
            grammar: String::new(),
            seed: crate::geometry::unit_quad(),
            transform: Matrix4::identity(),
            offset: Vector3::new(0.0, 0.0, 0.0),
            start_time: 0.0,
            material_id: 0,
        }
    }
}
