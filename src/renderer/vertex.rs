//! Panel vertex layout handed to the renderer
//!
//! Plain `Pod` data so a frame's vertices can be uploaded with
//! `bytemuck::cast_slice` and no intermediate copy.

/// One corner of a sampled panel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelVertex {
    /// World-space corner position
    pub position: [f32; 3],

    /// Opaque material tag copied from the panel
    pub material_id: u32,
}

// Must match the shader-side vertex stride
static_assertions::const_assert_eq!(std::mem::size_of::<PanelVertex>(), 16);
