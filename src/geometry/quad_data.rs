//! Quad geometry data - Pure DOP
//!
//! Plain values only. All transformations happen in quad_operations.rs

use cgmath::{Point3, Vector3};

/// One rectangular panel: four ordered corners in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadGeometry {
    pub corners: [Point3<f32>; 4],
}

/// Panel edge selected by a grammar letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    A, // corners 0-1
    B, // corners 1-2
    C, // corners 2-3
    D, // corners 3-0
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::A, Edge::B, Edge::C, Edge::D];

    pub fn index(&self) -> usize {
        match self {
            Edge::A => 0,
            Edge::B => 1,
            Edge::C => 2,
            Edge::D => 3,
        }
    }

    /// Wraps, so any integer names a valid edge
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

/// Orthonormal frame anchored on a hinge edge
///
/// `e0` runs along the edge, `e2` is perpendicular to the panel and `e1`
/// lies in the panel plane pointing away from its interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeFrame {
    pub edge: Edge,
    pub anchor: Point3<f32>,
    pub e0: Vector3<f32>,
    pub e1: Vector3<f32>,
    pub e2: Vector3<f32>,
}
