//! Animation Engine Module - owns strips, answers frame queries
//!
//! - engine_data.rs: Engine state, strip handles, tagged samples
//! - engine_operations.rs: Strip management and frame sampling

pub mod engine_data;
pub mod engine_operations;

pub use engine_data::{AnimationData, FrameSample, StripId};

pub use engine_operations::{
    add_strip, add_strips, animation_end_time, create_animation, is_animation_settled,
    panel_count, sample_frame, sample_frame_parallel, strip, strip_by_label,
};
