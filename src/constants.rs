//! Engine-wide constants
//!
//! Lookup tables and defaults shared by the grammar, scheduler and geometry
//! modules. Keep these as plain tables so they can be audited in isolation.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Edge index -> (first corner, second corner, handedness corner)
///
/// Edge `k` runs from corner `k` to corner `k + 1` (wrapping). The third
/// entry is the opposite corner, used to orient the hinge frame.
pub const EDGE_CORNERS: [[usize; 3]; 4] = [[0, 1, 2], [1, 2, 3], [2, 3, 0], [3, 0, 1]];

/// Angle code (grammar digit) -> target rotation magnitude in radians
pub const TARGET_ANGLES: [f32; 3] = [FRAC_PI_2, PI, PI + FRAC_PI_2];

/// Default angular speed, one full turn per second (rad/s)
pub const DEFAULT_ANGULAR_SPEED: f32 = TAU;

/// Default delay before a branch's first panel starts unfolding (seconds)
pub const DEFAULT_BRANCH_DELAY: f32 = 0.25;

/// Default cap on `{` nesting
pub const DEFAULT_MAX_BRANCH_DEPTH: usize = 32;

/// Shortest hinge edge / smallest cross product accepted as non-degenerate
pub const GEOMETRY_EPSILON: f32 = 1e-6;

/// Largest `max_branch_depth` a config may ask for; the parser recurses once per level
pub const MAX_BRANCH_DEPTH_LIMIT: usize = 256;
