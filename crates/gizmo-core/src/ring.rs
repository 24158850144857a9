//! Rotation ring clipping
//!
//! A rotation ring is a closed 64-point polyline in screen space. Before any
//! segment is picked against or drawn, two exact clips are applied:
//!
//! 1. **Hemisphere clip**: every sample carries `dot = normal·view_dir`,
//!    where `normal` is the sample's 3D direction on the ring's plane. The
//!    segment is cut where the linearly interpolated dot crosses zero and only
//!    the front-facing part is kept.
//! 2. **Occluder clip**: the surviving range is intersected with the inner
//!    sphere's screen circle by solving `|a + t(b - a) - c|² = r²` and the
//!    part inside the circle is dropped.
//!
//! Both consumers (picking and drawing) go through
//! [`RotationRing::for_each_visible_span`], so they always agree on which
//! part of a ring is visible.

use glam::{Vec2, Vec3};

use crate::constants::{QUADRATIC_EPSILON, RING_SEGMENTS, ROTATION_RING_SCALE};
use crate::geometry::{distance_to_segment, lerp_point, ring_points, sample_angle};
use crate::handle::Axis;
use crate::layout::GizmoLayout;

/// World-space direction of ring sample `index` on the ring around `axis`.
///
/// Uses the same angle and basis as [`ring_points`]: the ring around X is
/// spanned by `(Y, Z)`, around Y by `(X, Z)`, around Z by `(X, Y)`.
pub fn ring_normal(axis: Axis, index: usize, count: usize) -> Vec3 {
    let (sa, ca) = sample_angle(index, count).sin_cos();
    let (a, b) = axis.ring_basis();
    a.unit() * ca + b.unit() * sa
}

/// Signed facing value of every ring sample.
///
/// Without a view direction every sample is treated as front-facing.
pub fn hemisphere_dots(axis: Axis, count: usize, view_dir: Option<Vec3>) -> Vec<f32> {
    match view_dir {
        Some(view) => (0..count)
            .map(|i| ring_normal(axis, i, count).dot(view))
            .collect(),
        None => vec![1.0; count],
    }
}

/// Front-facing parameter range `[t0, t1]` of a segment whose endpoints
/// have facing values `da` and `db`, or `None` if nothing faces the camera.
pub fn hemisphere_range(da: f32, db: f32) -> Option<(f32, f32)> {
    if da < 0.0 && db < 0.0 {
        return None;
    }

    let mut t0 = 0.0;
    let mut t1 = 1.0;
    if da < 0.0 {
        t0 = -da / (db - da);
    } else if db < 0.0 {
        t1 = -da / (db - da);
    }

    (t0 < t1).then_some((t0, t1))
}

/// Clip one segment against the hemisphere and the occluder circle.
///
/// `emit` receives each visible sub-segment (zero, one or two per call).
pub fn clip_segment(
    a: Vec2,
    b: Vec2,
    da: f32,
    db: f32,
    center: Vec2,
    inner_radius: f32,
    emit: &mut impl FnMut(Vec2, Vec2),
) {
    let Some((th0, th1)) = hemisphere_range(da, db) else {
        return;
    };

    // |d0 + t·e|² - r² = qA t² + qB t + qC
    let d0 = a - center;
    let e = b - a;
    let q_a = e.dot(e);
    let q_b = 2.0 * d0.dot(e);
    let q_c = d0.dot(d0) - inner_radius * inner_radius;

    let mut emit_range = |ts: f32, te: f32| {
        if ts < te {
            emit(lerp_point(a, b, ts), lerp_point(a, b, te));
        }
    };

    let disc = q_b * q_b - 4.0 * q_a * q_c;
    if q_a < QUADRATIC_EPSILON || disc < 0.0 {
        // No crossing: either entirely outside or entirely inside.
        if q_c >= 0.0 {
            emit_range(th0, th1);
        }
        return;
    }

    let sq = disc.sqrt();
    let t_enter = (-q_b - sq) / (2.0 * q_a);
    let t_exit = (-q_b + sq) / (2.0 * q_a);
    emit_range(th0, th1.min(t_enter));
    emit_range(th0.max(t_exit), th1);
}

/// One rotation ring with its per-sample facing values
#[derive(Debug, Clone, PartialEq)]
pub struct RotationRing {
    axis: Axis,
    center: Vec2,
    inner_radius: f32,
    points: Vec<Vec2>,
    front: Vec<f32>,
}

impl RotationRing {
    /// Sample the ring around `axis` for the current layout
    pub fn new(layout: &GizmoLayout, axis: Axis, view_dir: Option<Vec3>) -> Self {
        let (a, b) = axis.ring_basis();
        let points = ring_points(
            layout.center(),
            layout.axis_vector(a),
            layout.axis_vector(b),
            ROTATION_RING_SCALE,
            RING_SEGMENTS,
        );
        let front = hemisphere_dots(axis, points.len(), view_dir);

        Self {
            axis,
            center: layout.center(),
            inner_radius: layout.inner_radius(),
            points,
            front,
        }
    }

    /// Build a ring from explicit samples.
    ///
    /// Missing facing values are treated as front-facing.
    pub fn from_samples(
        axis: Axis,
        center: Vec2,
        inner_radius: f32,
        points: Vec<Vec2>,
        front: Vec<f32>,
    ) -> Self {
        Self {
            axis,
            center,
            inner_radius,
            points,
            front,
        }
    }

    /// Axis this ring rotates about
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Unclipped ring samples
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Facing value of each sample
    pub fn front(&self) -> &[f32] {
        &self.front
    }

    /// Visit every visible sub-segment of the closed ring
    pub fn for_each_visible_span(&self, mut emit: impl FnMut(Vec2, Vec2)) {
        let n = self.points.len();
        if n < 2 {
            return;
        }

        for i in 0..n {
            let j = (i + 1) % n;
            let da = self.front.get(i).copied().unwrap_or(1.0);
            let db = self.front.get(j).copied().unwrap_or(1.0);
            clip_segment(
                self.points[i],
                self.points[j],
                da,
                db,
                self.center,
                self.inner_radius,
                &mut emit,
            );
        }
    }

    /// Distance from `p` to the visible part of the ring
    ///
    /// Returns `f32::MAX` when nothing is visible.
    pub fn distance_to(&self, p: Vec2) -> f32 {
        let mut best = f32::MAX;
        self.for_each_visible_span(|a, b| {
            best = best.min(distance_to_segment(p, a, b));
        });
        best
    }

    /// Collect the visible sub-segments
    pub fn visible_spans(&self) -> Vec<(Vec2, Vec2)> {
        let mut spans = Vec::new();
        self.for_each_visible_span(|a, b| spans.push((a, b)));
        spans
    }
}

/// The three rotation rings of one frame, built once and shared by picking
/// and drawing
#[derive(Debug, Clone, PartialEq)]
pub struct RingSet {
    rings: [RotationRing; 3],
}

impl RingSet {
    /// Sample and face-classify all three rings
    pub fn new(layout: &GizmoLayout, view_dir: Option<Vec3>) -> Self {
        Self {
            rings: Axis::ALL.map(|axis| RotationRing::new(layout, axis, view_dir)),
        }
    }

    /// Ring around `axis`
    pub fn ring(&self, axis: Axis) -> &RotationRing {
        &self.rings[axis.index()]
    }

    /// Rings in X, Y, Z order
    pub fn iter(&self) -> impl Iterator<Item = &RotationRing> {
        self.rings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::TransformMode;
    use crate::input::GizmoFrameInput;
    use approx::assert_relative_eq;

    fn total_length(spans: &[(Vec2, Vec2)]) -> f32 {
        spans.iter().map(|(a, b)| a.distance(*b)).sum()
    }

    fn circle(center: Vec2, radius: f32, n: usize) -> Vec<Vec2> {
        ring_points(center, Vec2::X * radius, Vec2::Y * radius, 1.0, n)
    }

    fn front_layout() -> GizmoLayout {
        // Camera looking down +Z: X right, Y up (screen y down), Z edge-on.
        let input = GizmoFrameInput::new(
            Vec2::new(200.0, 200.0),
            [
                Some(Vec2::new(300.0, 200.0)),
                Some(Vec2::new(200.0, 100.0)),
                Some(Vec2::new(210.0, 205.0)),
            ],
            TransformMode::Rotate,
        );
        GizmoLayout::new(&input)
    }

    #[test]
    fn test_hemisphere_range() {
        assert_eq!(hemisphere_range(1.0, 1.0), Some((0.0, 1.0)));
        assert_eq!(hemisphere_range(-1.0, -0.5), None);
        assert_eq!(hemisphere_range(-1.0, 1.0), Some((0.5, 1.0)));
        assert_eq!(hemisphere_range(3.0, -1.0), Some((0.0, 0.75)));
        assert_eq!(hemisphere_range(0.0, -1.0), None);
    }

    #[test]
    fn test_fully_front_ring_is_unchanged() {
        let center = Vec2::new(0.0, 0.0);
        let points = circle(center, 100.0, 64);
        let ring = RotationRing::from_samples(Axis::Z, center, 10.0, points.clone(), vec![0.5; 64]);
        let spans = ring.visible_spans();
        assert_eq!(spans.len(), 64);
        for (i, (a, b)) in spans.iter().enumerate() {
            assert_eq!(*a, points[i]);
            assert_eq!(*b, points[(i + 1) % 64]);
        }
    }

    #[test]
    fn test_fully_back_ring_is_empty() {
        let center = Vec2::ZERO;
        let ring = RotationRing::from_samples(
            Axis::Z,
            center,
            10.0,
            circle(center, 100.0, 64),
            vec![-0.1; 64],
        );
        assert!(ring.visible_spans().is_empty());
        assert_eq!(ring.distance_to(Vec2::new(100.0, 0.0)), f32::MAX);
    }

    #[test]
    fn test_missing_view_direction_keeps_everything() {
        let dots = hemisphere_dots(Axis::X, 64, None);
        assert!(dots.iter().all(|d| *d == 1.0));
    }

    #[test]
    fn test_ring_outside_occluder_unaffected() {
        let center = Vec2::new(50.0, 50.0);
        let points = circle(center, 90.0, 64);
        let ring = RotationRing::from_samples(Axis::Z, center, 86.0, points.clone(), vec![1.0; 64]);
        // A regular 64-gon of circumradius 90 has inradius 90·cos(π/64) > 86.
        let expected: f32 = (0..64).map(|i| points[i].distance(points[(i + 1) % 64])).sum();
        assert_relative_eq!(total_length(&ring.visible_spans()), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_ring_inside_occluder_is_hidden() {
        let center = Vec2::ZERO;
        let ring = RotationRing::from_samples(
            Axis::Y,
            center,
            86.0,
            circle(center, 40.0, 64),
            vec![1.0; 64],
        );
        assert!(ring.visible_spans().is_empty());
    }

    #[test]
    fn test_segment_through_occluder_splits_in_two() {
        let mut spans = Vec::new();
        clip_segment(
            Vec2::new(-10.0, 0.0),
            Vec2::new(10.0, 0.0),
            1.0,
            1.0,
            Vec2::ZERO,
            5.0,
            &mut |a, b| spans.push((a, b)),
        );
        assert_eq!(spans.len(), 2);
        assert_relative_eq!(spans[0].1.x, -5.0, epsilon = 1e-4);
        assert_relative_eq!(spans[1].0.x, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_hemisphere_split_point() {
        let mut spans = Vec::new();
        clip_segment(
            Vec2::new(100.0, 0.0),
            Vec2::new(200.0, 0.0),
            1.0,
            -3.0,
            Vec2::ZERO,
            5.0,
            &mut |a, b| spans.push((a, b)),
        );
        assert_eq!(spans.len(), 1);
        assert_relative_eq!(spans[0].1.x, 125.0, epsilon = 1e-4);
    }

    fn clipped(a: Vec2, b: Vec2, da: f32, db: f32) -> Vec<(Vec2, Vec2)> {
        let mut spans = Vec::new();
        clip_segment(a, b, da, db, Vec2::ZERO, 5.0, &mut |a, b| spans.push((a, b)));
        spans
    }

    #[test]
    fn test_truncated_range_ending_inside_occluder() {
        // Front half ends at x = 0, inside the disc entered at x = -5.
        let spans = clipped(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0), 1.0, -1.0);
        assert_eq!(spans.len(), 1);
        assert_relative_eq!(spans[0].0.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(spans[0].1.x, -5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_truncated_range_inside_occluder_is_empty() {
        let spans = clipped(Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0), 1.0, -1.0);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_front_range_starting_past_exit() {
        // Front half starts at x = 6, after the disc is left at x = 5.
        let spans = clipped(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0), -4.0, 1.0);
        assert_eq!(spans.len(), 1);
        assert_relative_eq!(spans[0].0.x, 6.0, epsilon = 1e-4);
        assert_relative_eq!(spans[0].1.x, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_edge_on_ring_keeps_front_half() {
        let layout = front_layout();
        // View along +Z: the Y ring (spanned by X and Z) is edge-on and only
        // its samples with positive Z component face the camera.
        let ring = RotationRing::new(&layout, Axis::Y, Some(Vec3::Z));
        let front_samples = ring.front().iter().filter(|d| **d > 0.0).count();
        assert_eq!(front_samples, 31);
        // The Z ring (spanned by X and Y) is perpendicular to the view: every
        // sample has dot == 0 and stays visible.
        let z_ring = RotationRing::new(&layout, Axis::Z, Some(Vec3::Z));
        assert!(z_ring.front().iter().all(|d| d.abs() < 1e-6));
        assert!(!z_ring.visible_spans().is_empty());
    }

    #[test]
    fn test_picking_and_drawing_share_spans() {
        let layout = front_layout();
        let ring = RotationRing::new(&layout, Axis::Z, Some(Vec3::new(0.0, -0.6, 0.8)));
        let p = Vec2::new(290.0, 200.0);
        let from_spans = ring
            .visible_spans()
            .iter()
            .map(|(a, b)| distance_to_segment(p, *a, *b))
            .fold(f32::MAX, f32::min);
        assert_eq!(ring.distance_to(p), from_spans);
    }

    #[test]
    fn test_ring_set_order() {
        let layout = front_layout();
        let rings = RingSet::new(&layout, None);
        let axes: Vec<Axis> = rings.iter().map(RotationRing::axis).collect();
        assert_eq!(axes, Axis::ALL.to_vec());
        assert_eq!(rings.ring(Axis::Y).points().len(), RING_SEGMENTS);
    }

    #[test]
    fn test_ring_normal_matches_basis() {
        let n = ring_normal(Axis::X, 0, 64);
        assert_relative_eq!(n.y, 1.0);
        let quarter = ring_normal(Axis::Z, 16, 64);
        assert_relative_eq!(quarter.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-6);
    }
}
