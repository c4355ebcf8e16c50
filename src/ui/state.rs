//! Application state structures.
//!
//! The diagram itself lives in the [`Editor`]; this module only adds what the
//! window needs on top of it: where the canvas sits on screen, the last pointer
//! position seen, and the persisted view preferences.

use crate::demo::build_demo;
use crate::editor::Editor;
use crate::interaction::{InputEvent, Outcome};
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted [`ViewPrefs`].
pub const PREFS_KEY: &str = "view_prefs";

/// Presentation settings remembered between sessions.
///
/// Diagram contents are deliberately not part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPrefs {
    /// Whether the grid should be displayed on the canvas
    pub show_grid: bool,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
}

impl Default for ViewPrefs {
    fn default() -> Self {
        Self {
            show_grid: true,
            dark_mode: false,
        }
    }
}

impl ViewPrefs {
    /// Serializes the preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes preferences from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Per-frame canvas bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    /// Screen position of the canvas' world origin (its top-left corner)
    pub origin: egui::Pos2,
    /// Last pointer position over the canvas, in world space; `None` when outside
    pub last_pointer: Option<egui::Pos2>,
    /// World position where the primary button went down; `None` when no click can
    /// follow, including presses that started a part drag
    pub press_pos: Option<egui::Pos2>,
}

/// The main application structure: the editing core plus window state.
///
/// This struct implements the `eframe::App` trait and turns egui input into
/// [`InputEvent`]s for the editor.
pub struct CircuitApp {
    /// The editing core
    pub editor: Editor,
    /// Persisted presentation settings
    pub prefs: ViewPrefs,
    /// Canvas placement and pointer tracking
    pub canvas: CanvasState,
}

impl Default for CircuitApp {
    fn default() -> Self {
        Self::with_prefs(ViewPrefs::default())
    }
}

impl CircuitApp {
    /// Creates the app with the demo diagram and the given preferences.
    pub fn with_prefs(prefs: ViewPrefs) -> Self {
        let editor = build_demo().unwrap_or_else(|err| {
            log::error!("Failed to build demo diagram: {err}");
            Editor::new()
        });
        Self {
            editor,
            prefs,
            canvas: CanvasState::default(),
        }
    }

    /// Forwards one event to the editor.
    ///
    /// An error here means the UI resolved a target that the editor does not know,
    /// which is a bug in the hit-testing; it is logged and asserted in debug builds.
    pub fn dispatch(&mut self, event: InputEvent) -> Option<Outcome> {
        match self.editor.handle(event) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                log::error!("Editor rejected {event:?}: {err}");
                debug_assert!(false, "stale reference in {event:?}: {err}");
                None
            }
        }
    }

    /// Adds a part of `kind` at the palette drop position.
    pub fn place_from_palette(&mut self, kind: &str) {
        let (x, y) = crate::constants::PALETTE_DROP_POSITION;
        if let Err(err) = self.editor.place_part(kind, x, y) {
            log::error!("Failed to place {kind}: {err}");
        }
    }
}
