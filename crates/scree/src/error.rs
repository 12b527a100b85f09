//! Errors raised while building or loading collision geometry.
//!
//! Queries never fail; only construction does.

use thiserror::Error;

use crate::world::ColliderId;

/// Errors that can occur when adding or loading geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A polygon needs at least three vertices
    #[error("polygon has {0} vertices, at least 3 are required")]
    TooFewVertices(usize),

    /// A vertex coordinate was NaN or infinite
    #[error("polygon vertex {index} is not finite")]
    NonFiniteVertex {
        /// Index of the offending vertex
        index: usize,
    },

    /// Vertices are not a convex, counter-clockwise loop
    #[error("polygon is not convex with counter-clockwise winding (first bad corner: {corner})")]
    NotConvex {
        /// Index of the first corner that turns the wrong way
        corner: usize,
    },

    /// No collider with the given id exists
    #[error("unknown collider {0:?}")]
    UnknownCollider(ColliderId),

    /// A level file could not be parsed
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),
}
