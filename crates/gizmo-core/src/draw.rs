//! 2D draw primitives emitted by the gizmo
//!
//! The gizmo never talks to a renderer. Each frame it produces an ordered
//! [`DrawList`] that the host replays onto its immediate-mode overlay; order
//! matters because later primitives paint over earlier ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GizmoStyle;
use crate::geometry::direction_or_zero;
use crate::handle::{Axis, Handle, HandleKind, Plane, TransformMode};
use crate::layout::GizmoLayout;
use crate::ring::RingSet;

/// 8-bit straight-alpha color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba {
    /// Opaque white
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply alpha by `scale`, saturating to `[0, 255]` with rounding
    pub fn scale_alpha(self, scale: f32) -> Self {
        let a = (self.a as f32 / 255.0 * scale).clamp(0.0, 1.0);
        Self {
            a: (a * 255.0 + 0.5) as u8,
            ..self
        }
    }
}

/// A single 2D drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    /// Stroked line segment
    Line {
        /// Start point
        from: Vec2,
        /// End point
        to: Vec2,
        /// Stroke color
        color: Rgba,
        /// Stroke width in pixels
        thickness: f32,
    },
    /// Filled triangle
    FilledTriangle {
        /// Corners
        points: [Vec2; 3],
        /// Fill color
        color: Rgba,
    },
    /// Filled convex quad
    FilledQuad {
        /// Corners in order
        points: [Vec2; 4],
        /// Fill color
        color: Rgba,
    },
    /// Circle outline
    Circle {
        /// Center
        center: Vec2,
        /// Radius
        radius: f32,
        /// Stroke color
        color: Rgba,
        /// Stroke width in pixels
        thickness: f32,
    },
    /// Filled disc
    FilledCircle {
        /// Center
        center: Vec2,
        /// Radius
        radius: f32,
        /// Fill color
        color: Rgba,
    },
}

/// Ordered list of primitives for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    primitives: Vec<DrawPrimitive>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive
    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    /// Append a line
    pub fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, thickness: f32) {
        self.push(DrawPrimitive::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    /// Append a filled triangle
    pub fn triangle_filled(&mut self, points: [Vec2; 3], color: Rgba) {
        self.push(DrawPrimitive::FilledTriangle { points, color });
    }

    /// Append a filled quad
    pub fn quad_filled(&mut self, points: [Vec2; 4], color: Rgba) {
        self.push(DrawPrimitive::FilledQuad { points, color });
    }

    /// Append a circle outline
    pub fn circle(&mut self, center: Vec2, radius: f32, color: Rgba, thickness: f32) {
        self.push(DrawPrimitive::Circle {
            center,
            radius,
            color,
            thickness,
        });
    }

    /// Append a filled disc
    pub fn circle_filled(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.push(DrawPrimitive::FilledCircle {
            center,
            radius,
            color,
        });
    }

    /// Primitives in paint order
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    /// Iterate primitives in paint order
    pub fn iter(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives.iter()
    }

    /// Number of primitives
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether nothing is drawn
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawPrimitive;
    type IntoIter = std::slice::Iter<'a, DrawPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

/// Hover / active state used to highlight handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    /// Handle under the cursor (never set while dragging)
    pub hover: Option<Handle>,
    /// Handle being dragged, as known when the frame started
    pub active: Option<Handle>,
    /// Whether any handle is being dragged after this frame's latch,
    /// including host-owned handles with no [`Handle`] of their own
    pub dragging: bool,
}

impl Highlight {
    fn is_hot(&self, handle: Option<Handle>) -> bool {
        handle.is_some() && (handle == self.active || handle == self.hover)
    }

    fn is_active(&self, handle: Option<Handle>) -> bool {
        handle.is_some() && handle == self.active
    }

    /// The active handle's axis, in whichever mode it was grabbed
    fn active_axis(&self) -> Option<Axis> {
        self.active.and_then(Handle::axis)
    }
}

/// Build the frame's draw list.
///
/// `rings` must be present in rotate mode; without it no rings are drawn.
pub fn build_draw_list(
    layout: &GizmoLayout,
    rings: Option<&RingSet>,
    mode: TransformMode,
    style: &GizmoStyle,
    highlight: Highlight,
) -> DrawList {
    let mut list = DrawList::new();
    if mode == TransformMode::Select {
        return list;
    }

    let center = layout.center();
    let thickness = if highlight.dragging {
        style.active_thickness
    } else {
        style.thickness
    };

    // The grabbed axis stays fully opaque even if it has faded.
    let draw_visibility = |axis: Axis| {
        if highlight.active_axis() == Some(axis) {
            1.0
        } else {
            layout.visibility().axis(axis)
        }
    };
    let axis_color = |axis: Axis| {
        let hot = highlight.is_hot(Handle::axis_handle(mode, axis));
        style.axis_color(axis, hot).scale_alpha(draw_visibility(axis))
    };

    list.circle_filled(center, style.center_radius, style.center_color);

    for axis in Axis::ALL {
        let Some(end) = layout.axis_end(axis) else {
            continue;
        };
        let color = axis_color(axis);
        match mode {
            TransformMode::Translate => {
                draw_arrow(&mut list, style, center, end, color, thickness);
            }
            TransformMode::Scale => {
                draw_square_head(&mut list, style, center, end, color, thickness);
            }
            TransformMode::Rotate | TransformMode::Select => {}
        }
    }

    if mode.has_plane_handles() {
        for plane in Plane::ALL {
            let Some(quad) = layout.plane_quad(plane) else {
                continue;
            };
            let handle = Handle::plane_handle(mode, plane);
            let visibility = if highlight.is_active(handle) {
                1.0
            } else {
                layout.visibility().plane(plane)
            };
            let color = if highlight.is_hot(handle) {
                style.plane_highlight_color
            } else {
                style.plane_color
            };
            list.quad_filled(quad, color.scale_alpha(visibility));
        }
    }

    if mode == TransformMode::Rotate {
        let inner = Handle::new(mode, HandleKind::InnerSphere);
        let inner_alpha = if highlight.is_hot(inner) {
            style.inner_highlight_alpha
        } else {
            style.inner_alpha
        };
        list.circle_filled(
            center,
            layout.inner_radius(),
            style.inner_color.scale_alpha(inner_alpha),
        );

        if let Some(rings) = rings {
            for axis in Axis::ALL {
                let hot = highlight.is_hot(Handle::axis_handle(mode, axis));
                let color = style
                    .ring_color(axis, hot)
                    .scale_alpha(draw_visibility(axis));
                rings.ring(axis).for_each_visible_span(|a, b| {
                    list.line(a, b, color, thickness);
                });
            }
        }

        let view = Handle::new(mode, HandleKind::ViewRing);
        draw_circle_handle(
            &mut list,
            style,
            center,
            layout.view_ring_radius(),
            highlight.is_hot(view),
        );
    }

    if mode == TransformMode::Scale {
        let uniform = Handle::new(mode, HandleKind::UniformRing);
        draw_circle_handle(
            &mut list,
            style,
            center,
            layout.uniform_ring_radius(),
            highlight.is_hot(uniform),
        );
    }

    list
}

fn draw_arrow(
    list: &mut DrawList,
    style: &GizmoStyle,
    from: Vec2,
    to: Vec2,
    color: Rgba,
    thickness: f32,
) {
    list.line(from, to, color, thickness);
    let dir = direction_or_zero(to - from);
    let ortho = dir.perp();
    let base = to - dir * style.arrow_head_length;
    list.triangle_filled(
        [
            to,
            base + ortho * style.arrow_head_width,
            base - ortho * style.arrow_head_width,
        ],
        color,
    );
}

fn draw_square_head(
    list: &mut DrawList,
    style: &GizmoStyle,
    from: Vec2,
    to: Vec2,
    color: Rgba,
    thickness: f32,
) {
    list.line(from, to, color, thickness);
    let dir = direction_or_zero(to - from) * style.square_head_size;
    let ortho = dir.perp();
    list.quad_filled(
        [
            to + dir + ortho,
            to + dir - ortho,
            to - dir - ortho,
            to - dir + ortho,
        ],
        color,
    );
}

fn draw_circle_handle(list: &mut DrawList, style: &GizmoStyle, center: Vec2, radius: f32, hot: bool) {
    let color = if hot {
        style.circle_highlight_color
    } else {
        style.circle_color
    };
    list.circle(center, radius, color, style.circle_thickness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GizmoFrameInput;
    use glam::Vec3;

    fn input(mode: TransformMode) -> GizmoFrameInput {
        GizmoFrameInput::new(
            Vec2::new(200.0, 200.0),
            [
                Some(Vec2::new(300.0, 200.0)),
                Some(Vec2::new(200.0, 100.0)),
                Some(Vec2::new(205.0, 200.0)),
            ],
            mode,
        )
    }

    fn lines(list: &DrawList) -> usize {
        list.iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .count()
    }

    #[test]
    fn test_scale_alpha() {
        let c = Rgba::new(10, 20, 30, 255);
        assert_eq!(c.scale_alpha(0.0).a, 0);
        assert_eq!(c.scale_alpha(1.0).a, 255);
        assert_eq!(c.scale_alpha(0.5).a, 128);
        assert_eq!(c.scale_alpha(2.0).a, 255);
        assert_eq!(Rgba::WHITE.scale_alpha(0.12).a, 31);
        assert_eq!(c.scale_alpha(0.5).r, 10);
    }

    #[test]
    fn test_translate_draw_order() {
        let layout = GizmoLayout::new(&input(TransformMode::Translate));
        let list = build_draw_list(
            &layout,
            None,
            TransformMode::Translate,
            &GizmoStyle::default(),
            Highlight::default(),
        );
        let p = list.primitives();
        assert!(matches!(p[0], DrawPrimitive::FilledCircle { .. }));
        // Three arrows (line + head), then three plane quads.
        assert!(matches!(p[1], DrawPrimitive::Line { .. }));
        assert!(matches!(p[2], DrawPrimitive::FilledTriangle { .. }));
        assert_eq!(list.len(), 1 + 3 * 2 + 3);
        assert!(matches!(p[9], DrawPrimitive::FilledQuad { .. }));
    }

    #[test]
    fn test_faded_axis_is_transparent() {
        let layout = GizmoLayout::new(&input(TransformMode::Translate));
        let list = build_draw_list(
            &layout,
            None,
            TransformMode::Translate,
            &GizmoStyle::default(),
            Highlight::default(),
        );
        // Z (length 5 of 100) line is the 5th primitive.
        match list.primitives()[5] {
            DrawPrimitive::Line { color, .. } => assert_eq!(color.a, 0),
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_active_axis_drawn_opaque_and_thick() {
        let layout = GizmoLayout::new(&input(TransformMode::Translate));
        let active = Handle::axis_handle(TransformMode::Translate, Axis::Z);
        let list = build_draw_list(
            &layout,
            None,
            TransformMode::Translate,
            &GizmoStyle::default(),
            Highlight {
                hover: None,
                active,
                dragging: true,
            },
        );
        match list.primitives()[5] {
            DrawPrimitive::Line {
                color, thickness, ..
            } => {
                assert_eq!(color, Rgba::new(220, 220, 255, 255));
                assert_eq!(thickness, 4.0);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_host_drag_thickens_without_highlight() {
        let layout = GizmoLayout::new(&input(TransformMode::Translate));
        let list = build_draw_list(
            &layout,
            None,
            TransformMode::Translate,
            &GizmoStyle::default(),
            Highlight {
                hover: None,
                active: None,
                dragging: true,
            },
        );
        match list.primitives()[1] {
            DrawPrimitive::Line {
                color, thickness, ..
            } => {
                assert_eq!(color, Rgba::new(230, 80, 80, 255));
                assert_eq!(thickness, 4.0);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_hovered_plane_highlighted() {
        let layout = GizmoLayout::new(&input(TransformMode::Scale));
        let hover = Handle::plane_handle(TransformMode::Scale, Plane::XY);
        let list = build_draw_list(
            &layout,
            None,
            TransformMode::Scale,
            &GizmoStyle::default(),
            Highlight {
                hover,
                active: None,
                dragging: false,
            },
        );
        let quads: Vec<_> = list
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::FilledQuad { points, color } if points[0] != points[1] => {
                    Some(*color)
                }
                _ => None,
            })
            .collect();
        assert!(quads.contains(&Rgba::new(255, 230, 110, 165)));
        // Last primitive is the uniform scale ring.
        assert!(matches!(
            list.primitives().last(),
            Some(DrawPrimitive::Circle { .. })
        ));
    }

    #[test]
    fn test_rotate_draws_clipped_rings() {
        let frame = input(TransformMode::Rotate)
            .with_world(Some(Vec3::ZERO), Some(Vec3::new(0.0, 0.0, 10.0)));
        let layout = GizmoLayout::new(&frame);
        let rings = RingSet::new(&layout, frame.view_direction());
        let list = build_draw_list(
            &layout,
            Some(&rings),
            TransformMode::Rotate,
            &GizmoStyle::default(),
            Highlight::default(),
        );
        let expected: usize = Axis::ALL
            .iter()
            .map(|a| rings.ring(*a).visible_spans().len())
            .sum();
        assert_eq!(lines(&list), expected);
        assert!(matches!(list.primitives()[1], DrawPrimitive::FilledCircle { .. }));
        assert!(matches!(
            list.primitives().last(),
            Some(DrawPrimitive::Circle { .. })
        ));
    }

    #[test]
    fn test_select_draws_nothing() {
        let layout = GizmoLayout::new(&input(TransformMode::Select));
        let list = build_draw_list(
            &layout,
            None,
            TransformMode::Select,
            &GizmoStyle::default(),
            Highlight::default(),
        );
        assert!(list.is_empty());
    }
}
