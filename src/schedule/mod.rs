//! Schedule Module - start/end times for every unfolding panel

pub mod schedule_data;
pub mod schedule_operations;

pub use schedule_data::UnfoldWindow;
pub use schedule_operations::{
    branch_start_time, folded_start_angle, interpolate_angle, rest_rotation, schedule_window,
    settled_window, unfold_duration, window_bias,
};
