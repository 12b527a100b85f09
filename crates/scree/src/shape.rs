//! Collision shapes and their ray intersection routines.
//!
//! All shapes are static and expressed in world space. Ray directions passed to
//! [`Shape::cast_ray`] must already be normalized; distances are returned in
//! world units along that direction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::Aabb;

/// Below this magnitude a direction component or cross product counts as zero.
const PARALLEL_EPSILON: f32 = 1e-7;

/// A two-sided line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint
    pub a: Vec2,
    /// Second endpoint
    pub b: Vec2,
}

impl Segment {
    /// Create a segment between two points.
    #[must_use]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Bounding box of the segment.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_min_max(self.a.min(self.b), self.a.max(self.b))
    }

    /// Ray parameter `t` and segment parameter `s` where the ray crosses this
    /// segment's supporting line, or `None` when parallel.
    fn line_params(&self, origin: Vec2, direction: Vec2) -> Option<(f32, f32)> {
        let edge = self.b - self.a;
        let denom = direction.perp_dot(edge);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let w = self.a - origin;
        Some((w.perp_dot(edge) / denom, w.perp_dot(direction) / denom))
    }

    /// Intersect a ray with the segment. The normal faces the ray origin.
    #[must_use]
    pub fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<(f32, Vec2)> {
        let (t, s) = self.line_params(origin, direction)?;
        if t < 0.0 || t > max_distance || !(0.0..=1.0).contains(&s) {
            return None;
        }
        let normal = (self.b - self.a).perp().normalize_or_zero();
        let normal = if normal.dot(direction) > 0.0 {
            -normal
        } else {
            normal
        };
        Some((t, normal))
    }
}

/// A convex polygon with counter-clockwise winding.
///
/// Construct through [`ConvexPolygon::new`], which validates the vertex loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
}

impl ConvexPolygon {
    /// Create a polygon from a counter-clockwise convex vertex loop.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if there are fewer than three vertices, any
    /// vertex is not finite, or the loop is not convex and counter-clockwise.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index });
        }

        let n = vertices.len();
        let mut area_twice = 0.0;
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            let here = vertices[i];
            let next = vertices[(i + 1) % n];
            if (here - prev).perp_dot(next - here) < 0.0 {
                return Err(GeometryError::NotConvex { corner: i });
            }
            area_twice += here.perp_dot(next);
        }
        if area_twice <= 0.0 {
            return Err(GeometryError::NotConvex { corner: 0 });
        }

        Ok(Self { vertices })
    }

    /// The vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Iterate over edges as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Bounding box of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let first = self.vertices[0];
        self.vertices[1..]
            .iter()
            .fold(Aabb::from_min_max(first, first), |acc, &v| {
                Aabb::from_min_max(acc.min.min(v), acc.max.max(v))
            })
    }

    /// Check if a point lies strictly inside the polygon.
    #[must_use]
    pub fn contains_strict(&self, point: Vec2) -> bool {
        self.edges().all(|(a, b)| (b - a).perp_dot(point - a) > 0.0)
    }

    /// Intersect a ray with the polygon boundary.
    ///
    /// Only edges facing the ray are considered. A ray starting inside the
    /// polygon reports distance 0 with the reversed ray direction as normal.
    #[must_use]
    pub fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<(f32, Vec2)> {
        if self.contains_strict(origin) {
            return Some((0.0, -direction));
        }

        let mut nearest: Option<(f32, Vec2)> = None;
        for (a, b) in self.edges() {
            let edge = b - a;
            // Outward normal for counter-clockwise winding
            let normal = Vec2::new(edge.y, -edge.x).normalize_or_zero();
            if normal.dot(direction) >= 0.0 {
                continue;
            }
            let Some((t, s)) = Segment::new(a, b).line_params(origin, direction) else {
                continue;
            };
            if t < 0.0 || t > max_distance || !(0.0..=1.0).contains(&s) {
                continue;
            }
            if nearest.map_or(true, |(best, _)| t < best) {
                nearest = Some((t, normal));
            }
        }
        nearest
    }
}

impl TryFrom<Vec<Vec2>> for ConvexPolygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<ConvexPolygon> for Vec<Vec2> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.vertices
    }
}

/// Static collision shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box
    Rect(Aabb),
    /// Two-sided line segment
    Segment(Segment),
    /// Convex polygon
    Polygon(ConvexPolygon),
}

impl Shape {
    /// Bounding box of the shape.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Rect(aabb) => *aabb,
            Shape::Segment(segment) => segment.bounds(),
            Shape::Polygon(polygon) => polygon.bounds(),
        }
    }

    /// Intersect a normalized ray with the shape.
    ///
    /// # Returns
    ///
    /// `(distance, normal)` of the nearest contact within `max_distance`, or
    /// `None` on a miss.
    #[must_use]
    pub fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<(f32, Vec2)> {
        match self {
            Shape::Rect(aabb) => cast_rect(aabb, origin, direction, max_distance),
            Shape::Segment(segment) => segment.cast_ray(origin, direction, max_distance),
            Shape::Polygon(polygon) => polygon.cast_ray(origin, direction, max_distance),
        }
    }
}

/// Ray-box intersection (slab method).
///
/// A ray running exactly along a face does not hit it. A ray starting strictly
/// inside reports distance 0 with the reversed direction as normal.
fn cast_rect(aabb: &Aabb, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<(f32, Vec2)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec2::ZERO;

    for (o, d, min, max, axis) in [
        (origin.x, direction.x, aabb.min.x, aabb.max.x, Vec2::X),
        (origin.y, direction.y, aabb.min.y, aabb.max.y, Vec2::Y),
    ] {
        if d.abs() < PARALLEL_EPSILON {
            if o <= min || o >= max {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t_min_face = (min - o) * inv;
        let t_max_face = (max - o) * inv;
        let (near, far, face_normal) = if t_min_face < t_max_face {
            (t_min_face, t_max_face, -axis)
        } else {
            (t_max_face, t_min_face, axis)
        };
        if near > t_enter {
            t_enter = near;
            normal = face_normal;
        }
        t_exit = t_exit.min(far);
    }

    if t_enter > t_exit || t_exit < 0.0 {
        return None;
    }
    if t_enter < 0.0 {
        return Some((0.0, -direction));
    }
    if t_enter > max_distance {
        return None;
    }
    Some((t_enter, normal))
}
