//! Replays a gizmo draw list onto an egui painter

use gizmo_core::{DrawList, DrawPrimitive, Rgba};

/// Convert a gizmo color to egui
pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_pos2(p: glam::Vec2) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

/// Paint every primitive in order
pub fn paint_draw_list(painter: &egui::Painter, list: &DrawList) {
    for primitive in list {
        paint_primitive(painter, primitive);
    }
}

fn paint_primitive(painter: &egui::Painter, primitive: &DrawPrimitive) {
    match *primitive {
        DrawPrimitive::Line {
            from,
            to,
            color,
            thickness,
        } => {
            painter.line_segment(
                [to_pos2(from), to_pos2(to)],
                egui::Stroke::new(thickness, to_color32(color)),
            );
        }
        DrawPrimitive::FilledTriangle { points, color } => {
            painter.add(egui::Shape::convex_polygon(
                points.iter().copied().map(to_pos2).collect(),
                to_color32(color),
                egui::Stroke::NONE,
            ));
        }
        DrawPrimitive::FilledQuad { points, color } => {
            painter.add(egui::Shape::convex_polygon(
                points.iter().copied().map(to_pos2).collect(),
                to_color32(color),
                egui::Stroke::NONE,
            ));
        }
        DrawPrimitive::Circle {
            center,
            radius,
            color,
            thickness,
        } => {
            painter.circle_stroke(
                to_pos2(center),
                radius,
                egui::Stroke::new(thickness, to_color32(color)),
            );
        }
        DrawPrimitive::FilledCircle {
            center,
            radius,
            color,
        } => {
            painter.circle_filled(to_pos2(center), radius, to_color32(color));
        }
    }
}
