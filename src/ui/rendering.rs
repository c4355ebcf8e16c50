//! Canvas rendering for the grid, wires, parts and the pending draft.
//!
//! Everything is drawn from a [`Snapshot`] taken at the start of the frame, in
//! layers: grid, wires, parts, then the draft line on top.

use super::state::CircuitApp;
use crate::constants::{GRID_UNIT, PART_CORNER_RADIUS, PORT_RADIUS, WIRE_STROKE_WIDTH};
use crate::snapshot::{DraftView, PartView, Snapshot, WireView};
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Colours for one visual theme.
struct Palette {
    background: egui::Color32,
    grid: egui::Color32,
    part_fill: egui::Color32,
    part_border: egui::Color32,
    title: egui::Color32,
    subtitle: egui::Color32,
    port: egui::Color32,
    wire: egui::Color32,
    draft: egui::Color32,
    snap_highlight: egui::Color32,
}

impl Palette {
    fn light() -> Self {
        Self {
            background: egui::Color32::from_rgb(0xf8, 0xfa, 0xfc),
            grid: egui::Color32::from_rgb(0xe2, 0xe8, 0xf0),
            part_fill: egui::Color32::WHITE,
            part_border: egui::Color32::from_rgb(0xcb, 0xd5, 0xe1),
            title: egui::Color32::from_rgb(0x0f, 0x17, 0x2a),
            subtitle: egui::Color32::from_rgb(0x64, 0x74, 0x8b),
            port: egui::Color32::from_rgb(0x33, 0x41, 0x55),
            wire: egui::Color32::from_rgb(0x0f, 0x17, 0x2a),
            draft: egui::Color32::from_rgb(0x64, 0x74, 0x8b),
            snap_highlight: egui::Color32::from_rgb(0x25, 0x63, 0xeb),
        }
    }

    fn dark() -> Self {
        Self {
            background: egui::Color32::from_rgb(0x0f, 0x17, 0x2a),
            grid: egui::Color32::from_rgb(0x1e, 0x29, 0x3b),
            part_fill: egui::Color32::from_rgb(0x1e, 0x29, 0x3b),
            part_border: egui::Color32::from_rgb(0x47, 0x55, 0x69),
            title: egui::Color32::from_rgb(0xf8, 0xfa, 0xfc),
            subtitle: egui::Color32::from_rgb(0x94, 0xa3, 0xb8),
            port: egui::Color32::from_rgb(0xcb, 0xd5, 0xe1),
            wire: egui::Color32::from_rgb(0xe2, 0xe8, 0xf0),
            draft: egui::Color32::from_rgb(0x94, 0xa3, 0xb8),
            snap_highlight: egui::Color32::from_rgb(0x60, 0xa5, 0xfa),
        }
    }
}

impl CircuitApp {
    fn palette(&self) -> Palette {
        if self.prefs.dark_mode {
            Palette::dark()
        } else {
            Palette::light()
        }
    }

    /// Renders the whole diagram onto the canvas.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle of the canvas area
    pub fn render_diagram(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let colors = self.palette();
        painter.rect_filled(canvas_rect, 0.0, colors.background);

        if self.prefs.show_grid {
            self.draw_grid(painter, canvas_rect, &colors);
        }

        let snapshot = match self.editor.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("Failed to snapshot diagram: {err}");
                debug_assert!(false, "diagram holds a dangling reference: {err}");
                return;
            }
        };

        for wire in &snapshot.wires {
            self.draw_wire(painter, wire, &colors);
        }
        for part in &snapshot.parts {
            self.draw_part(painter, part, &colors);
        }
        if let Some(draft) = snapshot.draft() {
            self.draw_draft(painter, &snapshot, draft, &colors);
        }
    }

    fn draw_grid(&self, painter: &egui::Painter, canvas_rect: egui::Rect, colors: &Palette) {
        let stroke = egui::Stroke::new(1.0, colors.grid);

        let mut x = canvas_rect.min.x;
        while x <= canvas_rect.max.x {
            painter.line_segment(
                [
                    egui::pos2(x, canvas_rect.min.y),
                    egui::pos2(x, canvas_rect.max.y),
                ],
                stroke,
            );
            x += GRID_UNIT;
        }

        let mut y = canvas_rect.min.y;
        while y <= canvas_rect.max.y {
            painter.line_segment(
                [
                    egui::pos2(canvas_rect.min.x, y),
                    egui::pos2(canvas_rect.max.x, y),
                ],
                stroke,
            );
            y += GRID_UNIT;
        }
    }

    fn draw_wire(&self, painter: &egui::Painter, wire: &WireView, colors: &Palette) {
        let start = self.world_to_screen(egui::pos2(wire.from_pos.0, wire.from_pos.1));
        let end = self.world_to_screen(egui::pos2(wire.to_pos.0, wire.to_pos.1));
        painter.line_segment([start, end], egui::Stroke::new(WIRE_STROKE_WIDTH, colors.wire));
    }

    fn draw_part(&self, painter: &egui::Painter, part: &PartView, colors: &Palette) {
        let min = self.world_to_screen(egui::pos2(part.x as f32, part.y as f32));
        let rect = egui::Rect::from_min_size(min, egui::vec2(part.width, part.height));

        painter.rect_filled(rect, PART_CORNER_RADIUS, colors.part_fill);
        painter.rect_stroke(
            rect,
            PART_CORNER_RADIUS,
            egui::Stroke::new(1.5, colors.part_border),
            StrokeKind::Inside,
        );

        painter.text(
            rect.min + egui::vec2(16.0, 16.0),
            egui::Align2::LEFT_TOP,
            part.name,
            egui::FontId::proportional(15.0),
            colors.title,
        );
        painter.text(
            rect.min + egui::vec2(16.0, 38.0),
            egui::Align2::LEFT_TOP,
            part.kind,
            egui::FontId::proportional(12.0),
            colors.subtitle,
        );

        for port in &part.ports {
            let center = self.world_to_screen(egui::pos2(port.x, port.y));
            painter.circle_filled(center, PORT_RADIUS, colors.port);
            painter.circle_stroke(center, PORT_RADIUS, egui::Stroke::new(1.5, colors.part_fill));
        }
    }

    fn draw_draft(
        &self,
        painter: &egui::Painter,
        snapshot: &Snapshot,
        draft: &DraftView,
        colors: &Palette,
    ) {
        let start = self.world_to_screen(egui::pos2(draft.start.0, draft.start.1));
        let end = self.world_to_screen(egui::pos2(draft.end.0, draft.end.1));
        let color = if draft.is_snapped() {
            colors.snap_highlight
        } else {
            colors.draft
        };
        painter.extend(egui::Shape::dashed_line(
            &[start, end],
            egui::Stroke::new(WIRE_STROKE_WIDTH, color),
            8.0,
            5.0,
        ));

        painter.circle_stroke(
            start,
            PORT_RADIUS + 3.0,
            egui::Stroke::new(2.0, colors.snap_highlight),
        );

        // Ring around the port the draft would land on
        if let Some(target) = draft.snapped_to {
            let port = snapshot
                .parts
                .iter()
                .flat_map(|part| part.ports.iter())
                .find(|port| port.port == target);
            if let Some(port) = port {
                let center = self.world_to_screen(egui::pos2(port.x, port.y));
                painter.circle_stroke(
                    center,
                    PORT_RADIUS + 3.0,
                    egui::Stroke::new(2.0, colors.snap_highlight),
                );
            }
        }
    }
}
