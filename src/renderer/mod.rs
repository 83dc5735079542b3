//! Renderer Module - vertex export only
//!
//! Drawing lives outside this crate; this module turns panel samples into
//! GPU-ready vertex and index arrays.

pub mod vertex;
pub mod vertex_operations;

pub use vertex::PanelVertex;
pub use vertex_operations::{build_frame_vertices, build_strip_vertices, panel_vertices, quad_indices};
