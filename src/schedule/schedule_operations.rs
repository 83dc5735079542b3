//! Schedule operations - Pure DOP functions
//!
//! Every panel unfolds at the same constant angular speed, so a window is
//! fully determined by its start time and its two angles.

use super::schedule_data::UnfoldWindow;
use crate::grammar::FaceSide;

/// Seconds needed to sweep from `start_angle` to `end_angle`
pub fn unfold_duration(start_angle: f32, end_angle: f32, angular_speed: f32) -> f32 {
    (start_angle - end_angle).abs() / angular_speed
}

/// Folded offset for a panel that comes to rest `target` radians from its parent
///
/// Front panels rest at `+target`, back panels at `-target`; starting at the
/// negated offset puts the panel flat on its parent.
pub fn folded_start_angle(face: FaceSide, target: f32) -> f32 {
    match face {
        FaceSide::Front => -target,
        FaceSide::Back => target,
    }
}

/// Signed rotation applied to the parent's rest geometry to get the child's
pub fn rest_rotation(face: FaceSide, target: f32) -> f32 {
    -folded_start_angle(face, target)
}

/// Build the window for a panel whose chain reaches it at `start_time`
pub fn schedule_window(start_time: f32, start_angle: f32, angular_speed: f32) -> UnfoldWindow {
    let end_angle = 0.0;
    UnfoldWindow {
        start_time,
        end_time: start_time + unfold_duration(start_angle, end_angle, angular_speed),
        start_angle,
        end_angle,
    }
}

/// Window for a panel that never rotates (strip roots)
pub fn settled_window(time: f32) -> UnfoldWindow {
    UnfoldWindow {
        start_time: time,
        end_time: time,
        start_angle: 0.0,
        end_angle: 0.0,
    }
}

/// Time at which the first panel of a branch starts
pub fn branch_start_time(chain_time: f32, branch_delay: f32) -> f32 {
    chain_time + branch_delay
}

/// Normalized progress through the window, clamped to [0, 1]
pub fn window_bias(window: &UnfoldWindow, time: f32) -> f32 {
    let duration = window.end_time - window.start_time;
    if duration <= 0.0 {
        return if time >= window.start_time { 1.0 } else { 0.0 };
    }
    ((time - window.start_time) / duration).clamp(0.0, 1.0)
}

/// Hinge angle at a given bias
pub fn interpolate_angle(window: &UnfoldWindow, bias: f32) -> f32 {
    window.start_angle + bias * (window.end_angle - window.start_angle)
}
