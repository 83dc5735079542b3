//! Quad geometry operations - Pure DOP functions
//!
//! All functions are pure: they take geometry, return new geometry, no side effects.

use super::quad_data::{Edge, HingeFrame, QuadGeometry};
use crate::constants::{EDGE_CORNERS, GEOMETRY_EPSILON};
use crate::error::DegenerateGeometryError;
use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Transform, Vector3};

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create quad from four corners
pub fn create_quad(corners: [Point3<f32>; 4]) -> QuadGeometry {
    QuadGeometry { corners }
}

/// Create a parallelogram spanned by `u` then `v` from `origin`
pub fn quad_from_axes(origin: Point3<f32>, u: Vector3<f32>, v: Vector3<f32>) -> QuadGeometry {
    QuadGeometry {
        corners: [origin, origin + u, origin + u + v, origin + v],
    }
}

/// Unit square in the XY plane with its first corner at the origin
pub fn unit_quad() -> QuadGeometry {
    quad_from_axes(Point3::origin(), Vector3::unit_x(), Vector3::unit_y())
}

// ============================================================================
// EDGES
// ============================================================================

/// Corner indices of an edge plus the corner used for handedness
pub fn edge_corner_indices(edge: Edge) -> (usize, usize, usize) {
    let [first, second, third] = EDGE_CORNERS[edge.index()];
    (first, second, third)
}

/// World-space endpoints of an edge
pub fn edge_endpoints(quad: &QuadGeometry, edge: Edge) -> (Point3<f32>, Point3<f32>) {
    let (first, second, _) = edge_corner_indices(edge);
    (quad.corners[first], quad.corners[second])
}

/// Reject quads with NaN or infinite coordinates
///
/// The error names the edge that starts at the first bad corner.
pub fn check_finite_quad(quad: &QuadGeometry) -> Result<(), DegenerateGeometryError> {
    match quad
        .corners
        .iter()
        .position(|c| !(c.x.is_finite() && c.y.is_finite() && c.z.is_finite()))
    {
        Some(corner) => Err(DegenerateGeometryError {
            edge: Edge::from_index(corner),
            reason: format!("corner {} is not finite: {:?}", corner, quad.corners[corner]),
        }),
        None => Ok(()),
    }
}

// ============================================================================
// EDGE ROTATION
// ============================================================================

/// Build the hinge frame for an edge
///
/// Fails when the edge has no length or the handedness corner sits on the
/// edge line, since no rotation axis or plane can be derived from either.
pub fn hinge_frame(quad: &QuadGeometry, edge: Edge) -> Result<HingeFrame, DegenerateGeometryError> {
    let (first, second, third) = edge_corner_indices(edge);
    let anchor = quad.corners[first];

    let edge_dir = quad.corners[second] - anchor;
    let edge_len = edge_dir.magnitude();
    if !edge_len.is_finite() || edge_len < GEOMETRY_EPSILON {
        return Err(DegenerateGeometryError {
            edge,
            reason: format!("hinge edge length {} is below {}", edge_len, GEOMETRY_EPSILON),
        });
    }
    let e0 = edge_dir / edge_len;

    let side = e0.cross(quad.corners[third] - anchor);
    let side_len = side.magnitude();
    if !side_len.is_finite() || side_len < GEOMETRY_EPSILON {
        return Err(DegenerateGeometryError {
            edge,
            reason: format!("corner {} is collinear with the hinge edge", third),
        });
    }
    let e2 = side / side_len;
    let e1 = e0.cross(e2).normalize();

    Ok(HingeFrame {
        edge,
        anchor,
        e0,
        e1,
        e2,
    })
}

/// Rotate every corner of `quad` around the frame's edge by `angle` radians
pub fn rotate_in_frame(frame: &HingeFrame, quad: &QuadGeometry, angle: f32) -> QuadGeometry {
    let (sin, cos) = angle.sin_cos();

    let corners = quad.corners.map(|corner| {
        let rel = corner - frame.anchor;
        let x = rel.dot(frame.e0);
        let y = rel.dot(frame.e1);
        let z = rel.dot(frame.e2);

        let new_y = y * cos + z * sin;
        let new_z = z * cos - y * sin;

        frame.anchor + frame.e0 * x + frame.e1 * new_y + frame.e2 * new_z
    });

    QuadGeometry { corners }
}

/// Rotate a quad around one of its own edges
pub fn rotate_about_edge(
    quad: &QuadGeometry,
    edge: Edge,
    angle: f32,
) -> Result<QuadGeometry, DegenerateGeometryError> {
    let frame = hinge_frame(quad, edge)?;
    Ok(rotate_in_frame(&frame, quad, angle))
}

// ============================================================================
// PLACEMENT
// ============================================================================

/// Apply an affine transform to every corner
pub fn transform_quad(quad: &QuadGeometry, transform: &Matrix4<f32>) -> QuadGeometry {
    QuadGeometry {
        corners: quad.corners.map(|c| transform.transform_point(c)),
    }
}

/// Create translated copy of a quad
pub fn translate_quad(quad: &QuadGeometry, offset: Vector3<f32>) -> QuadGeometry {
    QuadGeometry {
        corners: quad.corners.map(|c| c + offset),
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Unit normal from the first two edges (zero for degenerate quads)
pub fn quad_normal(quad: &QuadGeometry) -> Vector3<f32> {
    let [c0, c1, _, c3] = quad.corners;
    let n = (c1 - c0).cross(c3 - c0);
    let len = n.magnitude();
    if len < GEOMETRY_EPSILON {
        Vector3::new(0.0, 0.0, 0.0)
    } else {
        n / len
    }
}

/// Centroid of the four corners
pub fn quad_center(quad: &QuadGeometry) -> Point3<f32> {
    Point3::centroid(&quad.corners)
}

/// Largest per-corner distance between two quads
pub fn quad_max_distance(a: &QuadGeometry, b: &QuadGeometry) -> f32 {
    a.corners
        .iter()
        .zip(b.corners.iter())
        .map(|(p, q)| (*p - *q).magnitude())
        .fold(0.0, f32::max)
}

/// Compare two quads corner by corner within `epsilon`
pub fn quads_approx_eq(a: &QuadGeometry, b: &QuadGeometry, epsilon: f32) -> bool {
    quad_max_distance(a, b) <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn skewed_quad() -> QuadGeometry {
        quad_from_axes(
            Point3::new(1.0, -2.0, 0.5),
            Vector3::new(2.0, 0.5, 0.0),
            Vector3::new(-0.3, 1.0, 1.5),
        )
    }

    #[test]
    fn test_edge_table_wraps() {
        assert_eq!(edge_corner_indices(Edge::A), (0, 1, 2));
        assert_eq!(edge_corner_indices(Edge::D), (3, 0, 1));
        assert_eq!(Edge::from_index(6), Edge::C);
    }

    #[test]
    fn test_non_finite_corner_is_rejected() {
        assert!(check_finite_quad(&skewed_quad()).is_ok());

        let mut quad = skewed_quad();
        quad.corners[2].y = f32::NAN;
        let err = check_finite_quad(&quad).expect_err("NaN corner");
        assert_eq!(err.edge, Edge::C);

        quad.corners[1].x = f32::INFINITY;
        let err = check_finite_quad(&quad).expect_err("infinite corner");
        assert_eq!(err.edge, Edge::B);
    }

    #[test]
    fn test_identity_rotation() {
        let quad = skewed_quad();
        for edge in Edge::ALL {
            let rotated = rotate_about_edge(&quad, edge, 0.0).expect("valid quad");
            assert!(quads_approx_eq(&rotated, &quad, EPS), "edge {:?}", edge);
        }
    }

    #[test]
    fn test_hinge_corners_stay_fixed() {
        let quad = skewed_quad();
        for edge in Edge::ALL {
            let rotated = rotate_about_edge(&quad, edge, 1.1).expect("valid quad");
            let (a, b) = edge_endpoints(&quad, edge);
            let (ra, rb) = edge_endpoints(&rotated, edge);
            assert!((a - ra).magnitude() < EPS);
            assert!((b - rb).magnitude() < EPS);
        }
    }

    #[test]
    fn test_half_turn_unfolds_flat() {
        // Rotating the unit square 180 degrees around edge A mirrors it across y = 0
        let rotated = rotate_about_edge(&unit_quad(), Edge::A, PI).expect("valid quad");
        let expected = quad_from_axes(Point3::origin(), Vector3::unit_x(), -Vector3::unit_y());
        assert!(quads_approx_eq(&rotated, &expected, EPS));
    }

    #[test]
    fn test_quarter_turn_lifts_out_of_plane() {
        let rotated = rotate_about_edge(&unit_quad(), Edge::A, FRAC_PI_2).expect("valid quad");
        // Far corners leave the XY plane, hinge stays on it
        assert!(rotated.corners[2].z.abs() > 0.99);
        assert!(rotated.corners[3].z.abs() > 0.99);
        assert!(rotated.corners[0].z.abs() < EPS);
    }

    #[test]
    fn test_rotations_compose() {
        let quad = skewed_quad();
        let once = rotate_about_edge(&quad, Edge::B, 0.7).expect("valid quad");
        let twice = rotate_about_edge(&once, Edge::B, 0.5).expect("valid quad");
        let direct = rotate_about_edge(&quad, Edge::B, 1.2).expect("valid quad");
        assert!(quads_approx_eq(&twice, &direct, EPS));
    }

    #[test]
    fn test_zero_length_edge_is_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let quad = create_quad([p, p, Point3::new(2.0, 2.0, 1.0), Point3::new(0.0, 2.0, 1.0)]);
        let err = rotate_about_edge(&quad, Edge::A, 0.3).expect_err("edge A has no length");
        assert_eq!(err.edge, Edge::A);
    }

    #[test]
    fn test_collinear_quad_is_rejected() {
        let quad = create_quad([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ]);
        assert!(hinge_frame(&quad, Edge::A).is_err());
    }

    #[test]
    fn test_translate_and_transform_agree() {
        let offset = Vector3::new(3.0, -1.0, 2.0);
        let quad = skewed_quad();
        let translated = translate_quad(&quad, offset);
        let transformed = transform_quad(&quad, &Matrix4::from_translation(offset));
        assert!(quads_approx_eq(&translated, &transformed, EPS));
    }

    #[test]
    fn test_unit_quad_normal_and_center() {
        let quad = unit_quad();
        assert!((quad_normal(&quad) - Vector3::unit_z()).magnitude() < EPS);
        assert!((quad_center(&quad) - Point3::new(0.5, 0.5, 0.0)).magnitude() < EPS);
    }
}
