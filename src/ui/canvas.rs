//! Canvas input handling.
//!
//! Raw egui pointer and keyboard input is hit-tested against the diagram and
//! turned into [`InputEvent`]s for the editor. The canvas does not zoom or pan,
//! so world space is screen space shifted by the canvas' top-left corner.

use super::state::CircuitApp;
use crate::interaction::{ClickTarget, InputEvent, Key, Outcome, PointerTarget};
use eframe::egui;

impl CircuitApp {
    /// Converts screen coordinates to world coordinates.
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        egui::pos2(
            screen_pos.x - self.canvas.origin.x,
            screen_pos.y - self.canvas.origin.y,
        )
    }

    /// Converts world coordinates to screen coordinates.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        self.canvas.origin + world_pos.to_vec2()
    }

    /// Classifies what a pointer press at `world` lands on.
    ///
    /// Ports take priority over the body of the part they belong to.
    pub fn pointer_target_at(&self, world: egui::Pos2) -> PointerTarget {
        if let Some(port) = self.editor.port_at(world.x, world.y) {
            PointerTarget::Port(port)
        } else if let Some(part) = self.editor.part_at(world.x, world.y) {
            PointerTarget::PartBody(part)
        } else {
            PointerTarget::EmptyCanvas
        }
    }

    /// Classifies what a click at `world` lands on.
    ///
    /// Parts are drawn above wires, so a click on a part body never hits the
    /// wire underneath it.
    pub fn click_target_at(&self, world: egui::Pos2) -> ClickTarget {
        if let Some(port) = self.editor.port_at(world.x, world.y) {
            return ClickTarget::Port(port);
        }
        if self.editor.part_at(world.x, world.y).is_some() {
            return ClickTarget::EmptyCanvas;
        }
        match self.editor.wire_at(world.x, world.y) {
            Some(wire) => ClickTarget::WireHit(wire),
            None => ClickTarget::EmptyCanvas,
        }
    }

    /// Translates this frame's input into editor events.
    ///
    /// A press and release that stay within [`CLICK_THRESHOLD`] of each other also
    /// produce a click, delivered after the pointer-up, unless the press started a
    /// part drag.
    ///
    /// [`CLICK_THRESHOLD`]: crate::constants::CLICK_THRESHOLD
    pub fn handle_canvas_input(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dispatch(InputEvent::KeyDown(Key::Escape));
        }

        let (hover, pressed, released) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });

        let Some(screen_pos) = hover.filter(|pos| response.rect.contains(*pos)) else {
            if self.canvas.last_pointer.take().is_some() {
                self.canvas.press_pos = None;
                self.dispatch(InputEvent::PointerLeaveCanvas);
            }
            return;
        };

        let world = self.screen_to_world(screen_pos);
        if self.canvas.last_pointer != Some(world) {
            self.canvas.last_pointer = Some(world);
            self.dispatch(InputEvent::PointerMove {
                x: world.x,
                y: world.y,
            });
        }

        if pressed {
            let target = self.pointer_target_at(world);
            let outcome = self.dispatch(InputEvent::PointerDown {
                target,
                x: world.x,
                y: world.y,
            });
            // A press that grabbed a part is a drag, never the first half of a click
            self.canvas.press_pos = match outcome {
                Some(Outcome::DragStarted(_)) => None,
                _ => Some(world),
            };
        }

        if released {
            self.dispatch(InputEvent::PointerUp);
            let is_click = self
                .canvas
                .press_pos
                .take()
                .is_some_and(|start| start.distance(world) < crate::constants::CLICK_THRESHOLD);
            if is_click {
                let target = self.click_target_at(world);
                self.dispatch(InputEvent::Click {
                    target,
                    x: world.x,
                    y: world.y,
                });
            }
        }
    }
}
