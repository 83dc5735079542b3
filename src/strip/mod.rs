/// Strip Module - Data-Oriented Programming (DOP) style
///
/// - strip_data.rs: Panel arena, descriptors and samples (no methods)
/// - strip_operations.rs: Building and time queries as pure functions
///

pub mod strip_data;
pub mod strip_operations;

// Re-export data structures
pub use strip_data::{Panel, PanelSample, PanelState, StripData, StripDescriptor};

// Re-export all operations
pub use strip_operations::{
    // Building
    build_strip,

    // Queries
    is_strip_settled,
    panel_angle,
    panel_geometry,
    panel_state,
    sample_panel,
    sample_strip,
    strip_end_time,
    visible_panels,
};
