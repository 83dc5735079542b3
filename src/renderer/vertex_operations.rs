//! Vertex Operations - flatten sampled panels for upload

use super::vertex::PanelVertex;
use crate::engine::FrameSample;
use crate::strip::{visible_panels, PanelSample, StripData};

/// Four vertices for one panel, in corner order
pub fn panel_vertices(sample: &PanelSample) -> [PanelVertex; 4] {
    sample.geometry.corners.map(|c| PanelVertex {
        position: [c.x, c.y, c.z],
        material_id: sample.material_id,
    })
}

/// Vertices for every visible panel of a strip at `time`
pub fn build_strip_vertices(strip: &StripData, time: f32) -> Vec<PanelVertex> {
    visible_panels(strip, time)
        .iter()
        .flat_map(panel_vertices)
        .collect()
}

/// Vertices for every visible panel in a frame sample
pub fn build_frame_vertices(frame: &[FrameSample]) -> Vec<PanelVertex> {
    frame
        .iter()
        .filter(|s| s.panel.visible)
        .flat_map(|s| panel_vertices(&s.panel))
        .collect()
}

/// Two triangles per quad over vertices laid out by `build_*_vertices`
pub fn quad_indices(quad_count: usize) -> Vec<u32> {
    (0..quad_count as u32)
        .flat_map(|q| {
            let base = q * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}
