//! User interface for the circuit editor.
//!
//! # Module Organization
//!
//! - `state` - The main CircuitApp and persisted view preferences
//! - `canvas` - Hit-testing and translating egui input into editor events
//! - `rendering` - Drawing the grid, wires, parts and the pending draft

mod canvas;
mod rendering;
mod state;


pub use state::{CircuitApp, ViewPrefs, PREFS_KEY};

use crate::interaction::{InputEvent, InteractionState};
use eframe::egui;

impl eframe::App for CircuitApp {
    /// Persist view preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.prefs.to_json() {
            Ok(json) => storage.set_string(PREFS_KEY, json),
            Err(err) => log::warn!("Failed to serialize view preferences: {err}"),
        }
    }

    /// Lays out the toolbar, the palette and the canvas for one frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::left("palette")
            .resizable(false)
            .exact_width(crate::constants::SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                self.draw_palette(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl CircuitApp {
    /// Allocates the canvas, feeds this frame's input to the editor and paints the result.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        self.canvas.origin = response.rect.min;

        self.handle_canvas_input(ui, &response);
        self.render_diagram(&painter, response.rect);
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let has_wires = !self.editor.connections().is_empty();
            if ui
                .add_enabled(has_wires, egui::Button::new("Clear wires"))
                .clicked()
            {
                self.dispatch(InputEvent::ClearAllWires);
            }

            ui.separator();
            ui.checkbox(&mut self.prefs.show_grid, "Show grid");
            ui.checkbox(&mut self.prefs.dark_mode, "Dark mode");

            ui.separator();
            ui.label(self.status_text());
        });
    }

    fn draw_palette(&mut self, ui: &mut egui::Ui) {
        ui.heading("Components");
        ui.add_space(8.0);

        let kinds: Vec<(&'static str, &'static str)> = self
            .editor
            .catalog()
            .iter()
            .map(|def| (def.kind, def.name))
            .collect();
        for (kind, name) in kinds {
            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new(name))
                .clicked()
            {
                self.place_from_palette(kind);
            }
        }

        ui.add_space(12.0);
        ui.weak("Drag parts to move them. Click a port, then another port, to wire them. Click a wire to delete it. Esc cancels.");
    }

    /// One-line summary of the diagram and the active gesture.
    pub fn status_text(&self) -> String {
        let gesture = match self.editor.state() {
            InteractionState::Idle => "Ready",
            InteractionState::Dragging(_) => "Moving part",
            InteractionState::Drafting(_) => "Drawing wire (Esc to cancel)",
        };
        format!(
            "{} parts, {} wires | {gesture}",
            self.editor.placement().len(),
            self.editor.connections().len()
        )
    }
}
