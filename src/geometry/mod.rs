/// Geometry Module - Data-Oriented Programming (DOP) style
///
/// - quad_data.rs: Plain value types (quads, edges, hinge frames)
/// - quad_operations.rs: Pure functions that operate on them
///

pub mod quad_data;
pub mod quad_operations;

// Re-export data structures
pub use quad_data::{Edge, HingeFrame, QuadGeometry};

// Re-export all operations
pub use quad_operations::{
    // Construction
    create_quad,
    quad_from_axes,
    unit_quad,

    // Edges
    check_finite_quad,
    edge_corner_indices,
    edge_endpoints,

    // Edge rotation
    hinge_frame,
    rotate_about_edge,
    rotate_in_frame,

    // Placement
    transform_quad,
    translate_quad,

    // Utilities
    quad_center,
    quad_max_distance,
    quad_normal,
    quads_approx_eq,
};
