//! Schedule data - Pure DOP
//!
//! NO METHODS. Just data.
//! All timing rules live in schedule_operations.rs

/// Time and angle window of a single panel's rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnfoldWindow {
    /// Absolute animation time the rotation begins (seconds)
    pub start_time: f32,

    /// Absolute animation time the panel settles (seconds)
    pub end_time: f32,

    /// Hinge angle relative to rest geometry at `start_time` (radians)
    pub start_angle: f32,

    /// Hinge angle relative to rest geometry at `end_time`, always 0
    pub end_angle: f32,
}
