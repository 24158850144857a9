//! 2D geometry utilities for screen-space gizmo picking
//!
//! All functions work on projected screen coordinates (pixels). They are
//! pure and never panic: degenerate input (zero-length segments, collapsed
//! triangles) produces a well-defined result instead of NaN.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::constants::NORMALIZE_EPSILON;

/// Normalize a vector, returning zero for vectors shorter than the epsilon.
pub fn direction_or_zero(v: Vec2) -> Vec2 {
    let len = v.length();
    if len <= NORMALIZE_EPSILON {
        Vec2::ZERO
    } else {
        v / len
    }
}

/// Distance from a point to a line segment.
///
/// # Algorithm
///
/// The point is projected onto the segment's supporting line:
///
/// ```text
/// t = (p - a)·(b - a) / |b - a|²
/// ```
///
/// If the projection falls before `a` (or the segment is degenerate) the
/// distance to `a` is returned; past `b`, the distance to `b`; otherwise the
/// distance to the projected point.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let v = b - a;
    let w = p - a;

    let c1 = v.dot(w);
    if c1 <= 0.0 {
        return p.distance(a);
    }

    let c2 = v.dot(v);
    if c2 <= c1 {
        return p.distance(b);
    }

    let t = c1 / c2;
    p.distance(a + v * t)
}

/// Z component of `(b - a) × (c - a)`.
pub fn cross2(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Point-in-triangle test, independent of winding order.
///
/// Points on an edge count as inside.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let c1 = cross2(a, b, p);
    let c2 = cross2(b, c, p);
    let c3 = cross2(c, a, p);
    let has_neg = c1 < 0.0 || c2 < 0.0 || c3 < 0.0;
    let has_pos = c1 > 0.0 || c2 > 0.0 || c3 > 0.0;
    !(has_neg && has_pos)
}

/// Point-in-quad test, splitting `abcd` into triangles `abc` and `acd`.
pub fn point_in_quad(p: Vec2, quad: &[Vec2; 4]) -> bool {
    let [a, b, c, d] = *quad;
    point_in_triangle(p, a, b, c) || point_in_triangle(p, a, c, d)
}

/// Angle of sample `index` out of `count` evenly spaced samples on a circle.
pub fn sample_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32 * TAU
}

/// Sample an ellipse spanned by two projected basis vectors.
///
/// Sample `i` lies at `center + (b1·cos a + b2·sin a) · radius_scale` with
/// `a = sample_angle(i, segments)`. The last sample does not repeat the
/// first; callers treat the result as a closed loop.
pub fn ring_points(
    center: Vec2,
    b1: Vec2,
    b2: Vec2,
    radius_scale: f32,
    segments: usize,
) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let (sa, ca) = sample_angle(i, segments).sin_cos();
            center + (b1 * ca + b2 * sa) * radius_scale
        })
        .collect()
}

/// Point at parameter `t` along the segment `a → b`.
///
/// Exact at both endpoints, so an unclipped span reproduces its segment.
pub fn lerp_point(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_to_segment_interior() {
        let d = distance_to_segment(Vec2::new(5.0, 3.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_distance_to_segment_clamps_to_endpoints() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(-3.0, 4.0), a, b), 5.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(13.0, 4.0), a, b), 5.0);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let a = Vec2::new(2.0, 2.0);
        let d = distance_to_segment(Vec2::new(5.0, 6.0), a, a);
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_point_in_triangle_either_winding() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 10.0);
        let p = Vec2::new(2.0, 2.0);
        assert!(point_in_triangle(p, a, b, c));
        assert!(point_in_triangle(p, a, c, b));
        assert!(!point_in_triangle(Vec2::new(8.0, 8.0), a, b, c));
    }

    #[test]
    fn test_point_in_quad() {
        let quad = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        assert!(point_in_quad(Vec2::new(1.0, 3.0), &quad));
        assert!(point_in_quad(Vec2::new(3.0, 1.0), &quad));
        assert!(!point_in_quad(Vec2::new(5.0, 1.0), &quad));
    }

    #[test]
    fn test_ring_points_radius() {
        let center = Vec2::new(100.0, 100.0);
        let pts = ring_points(center, Vec2::new(50.0, 0.0), Vec2::new(0.0, 50.0), 0.9, 64);
        assert_eq!(pts.len(), 64);
        for p in &pts {
            assert_relative_eq!(p.distance(center), 45.0, epsilon = 1e-3);
        }
        assert_relative_eq!(pts[0].x, 145.0, epsilon = 1e-4);
    }

    #[test]
    fn test_direction_or_zero() {
        assert_eq!(direction_or_zero(Vec2::new(1e-7, 0.0)), Vec2::ZERO);
        assert_relative_eq!(direction_or_zero(Vec2::new(0.0, 3.0)).y, 1.0);
    }
}
