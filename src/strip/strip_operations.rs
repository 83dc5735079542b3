//! Strip operations - build once, sample many
//!
//! Building is the only fallible step. Sampling is pure: it reads the panel
//! arena and returns fresh geometry without touching shared state.

use super::strip_data::{Panel, PanelSample, PanelState, StripData, StripDescriptor};
use crate::error::{StripErrorContext, UnfoldError, UnfoldResult};
use crate::geometry::{
    check_finite_quad, hinge_frame, rotate_about_edge, rotate_in_frame, transform_quad, translate_quad,
    QuadGeometry,
};
use crate::grammar::{parse_grammar, PanelPlan};
use crate::schedule::{interpolate_angle, rest_rotation, window_bias, UnfoldWindow};
use crate::UnfoldConfig;

// ============================================================================
// BUILDING
// ============================================================================

/// Parse, schedule and lay out a strip
///
/// Any grammar or geometry failure aborts the whole strip; the error is tagged
/// with the strip label.
pub fn build_strip(descriptor: &StripDescriptor, config: &UnfoldConfig) -> UnfoldResult<StripData> {
    if !descriptor.start_time.is_finite() {
        return Err(UnfoldError::StripBuild {
            strip: descriptor.label.clone(),
            source: Box::new(UnfoldError::InvalidConfig {
                field: "start_time".to_string(),
                value: descriptor.start_time.to_string(),
                reason: "must be finite".to_string(),
            }),
        });
    }

    let seed = translate_quad(
        &transform_quad(&descriptor.seed, &descriptor.transform),
        descriptor.offset,
    );
    check_finite_quad(&seed).strip_context(&descriptor.label)?;

    let plans = parse_grammar(&descriptor.grammar, descriptor.start_time, config)
        .strip_context(&descriptor.label)?;

    let mut panels: Vec<Panel> = Vec::with_capacity(plans.len());
    for plan in &plans {
        let panel = build_panel(plan, &panels, &seed, descriptor.material_id)
            .strip_context(&descriptor.label)?;
        panels.push(panel);
    }

    let strip = StripData {
        label: descriptor.label.clone(),
        panels,
    };

    log::info!(
        "[build_strip] Built strip '{}': {} panels, unfolding {:.3}s -> {:.3}s",
        strip.label,
        strip.panels.len(),
        descriptor.start_time,
        strip_end_time(&strip)
    );

    Ok(strip)
}

fn build_panel(
    plan: &PanelPlan,
    built: &[Panel],
    seed: &QuadGeometry,
    material_id: u32,
) -> UnfoldResult<Panel> {
    let window = plan.window;

    let (rest_geometry, hinge) = match (plan.parent, plan.edge, plan.face) {
        (Some(parent), Some(edge), Some(face)) => {
            // Plans are parent-before-child, so the parent is already built
            let parent_rest = built[parent].rest_geometry;
            let rest = rotate_about_edge(&parent_rest, edge, rest_rotation(face, plan.target_angle))?;
            let hinge = hinge_frame(&rest, edge)?;
            (rest, Some(hinge))
        }
        _ => (*seed, None),
    };

    Ok(Panel {
        rest_geometry,
        pivot_edge: plan.edge,
        start_angle: window.start_angle,
        end_angle: window.end_angle,
        start_time: window.start_time,
        end_time: window.end_time,
        material_id,
        parent: plan.parent,
        depth: plan.depth,
        face: plan.face,
        hinge,
        grammar_offset: plan.offset,
    })
}

// ============================================================================
// QUERIES
// ============================================================================

fn panel_window(panel: &Panel) -> UnfoldWindow {
    UnfoldWindow {
        start_time: panel.start_time,
        end_time: panel.end_time,
        start_angle: panel.start_angle,
        end_angle: panel.end_angle,
    }
}

/// Classify a panel at `time`; strip roots are always settled
pub fn panel_state(panel: &Panel, time: f32) -> PanelState {
    if panel.pivot_edge.is_none() {
        return PanelState::Settled;
    }

    if time < panel.start_time {
        PanelState::Dormant
    } else if time >= panel.end_time {
        PanelState::Settled
    } else {
        PanelState::Unfolding {
            bias: window_bias(&panel_window(panel), time),
        }
    }
}

/// Hinge angle at a given state (rest is 0)
pub fn panel_angle(panel: &Panel, state: PanelState) -> f32 {
    match state {
        PanelState::Dormant => panel.start_angle,
        PanelState::Unfolding { bias } => interpolate_angle(&panel_window(panel), bias),
        PanelState::Settled => panel.end_angle,
    }
}

/// Geometry of a panel in the given state
///
/// Settled panels return their stored rest geometry verbatim so the final
/// pose never picks up rotation round-off.
pub fn panel_geometry(panel: &Panel, state: PanelState) -> QuadGeometry {
    match (state, panel.hinge.as_ref()) {
        (PanelState::Settled, _) | (_, None) => panel.rest_geometry,
        (_, Some(hinge)) => rotate_in_frame(hinge, &panel.rest_geometry, panel_angle(panel, state)),
    }
}

/// Sample one panel at `time`
pub fn sample_panel(panel: &Panel, index: usize, time: f32) -> PanelSample {
    let state = panel_state(panel, time);
    PanelSample {
        index,
        geometry: panel_geometry(panel, state),
        visible: state != PanelState::Dormant,
        material_id: panel.material_id,
        state,
    }
}

/// Sample every panel of a strip at `time`, in arena order
pub fn sample_strip(strip: &StripData, time: f32) -> Vec<PanelSample> {
    strip
        .panels
        .iter()
        .enumerate()
        .map(|(index, panel)| sample_panel(panel, index, time))
        .collect()
}

/// Only the panels a renderer should draw at `time`
pub fn visible_panels(strip: &StripData, time: f32) -> Vec<PanelSample> {
    sample_strip(strip, time)
        .into_iter()
        .filter(|sample| sample.visible)
        .collect()
}

/// Time at which the last panel of the strip settles
pub fn strip_end_time(strip: &StripData) -> f32 {
    strip
        .panels
        .iter()
        .map(|p| p.end_time)
        .fold(f32::NEG_INFINITY, f32::max)
}

/// True once every panel has reached its rest geometry
pub fn is_strip_settled(strip: &StripData, time: f32) -> bool {
    time >= strip_end_time(strip)
}
