//! # Circuit Sketch
//!
//! An interactive node-link diagram editor for sketching circuits. Typed parts
//! (sources, resistors, LEDs) sit on a snapping grid, each exposing fixed ports,
//! and wires are drawn between ports with a click-to-start, click-to-finish gesture.
//!
//! ## Features
//! - Grid-snapped part dragging that keeps the grab point under the cursor
//! - Proximity-based port snapping while a wire is being drawn
//! - Undirected wires with duplicate and self-connection prevention
//! - Escape to abandon any gesture; click a wire to delete it
//!
//! The editing core ([`Editor`]) is independent of any UI toolkit: it consumes
//! [`InputEvent`]s and exposes [`Snapshot`]s. The bundled eframe application is a
//! thin shell around it.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod connections;
pub mod constants;
pub mod demo;
pub mod editor;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod placement;
pub mod snapshot;
pub mod spatial;
pub mod types;
mod ui;

// Re-export public types and functions
pub use catalog::{Catalog, ComponentDef, PortDef};
pub use connections::ConnectionStore;
pub use editor::Editor;
pub use error::EditorError;
pub use grid::snap;
pub use interaction::{ClickTarget, InputEvent, InteractionState, Key, Outcome, PointerTarget};
pub use placement::PlacementModel;
pub use snapshot::{DraftView, ModeView, PartView, PortView, Snapshot, WireView};
pub use spatial::find_nearest;
pub use types::*;
use ui::{CircuitApp, ViewPrefs};

/// Runs the editor application with default settings.
///
/// This function initializes the egui application window and starts the main event loop.
/// View preferences saved by a previous session are restored; the diagram always
/// starts from the built-in demo.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use circuit_sketch::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Circuit Sketch",
        options,
        Box::new(|cc| {
            let prefs = cc
                .storage
                .and_then(|storage| storage.get_string(ui::PREFS_KEY))
                .and_then(|json| ViewPrefs::from_json(&json).ok())
                .unwrap_or_default();
            Ok(Box::new(CircuitApp::with_prefs(prefs)))
        }),
    )
}
