//! Starter diagram shown when the application opens.

use crate::editor::Editor;
use crate::error::EditorError;

/// Kinds and positions of the starter parts.
const DEMO_PARTS: &[(&str, f32, f32)] = &[
    ("source", 120.0, 120.0),
    ("resistor", 360.0, 220.0),
    ("led", 620.0, 140.0),
];

/// Builds an editor holding a source, a resistor and an LED, not yet wired.
pub fn build_demo() -> Result<Editor, EditorError> {
    let mut editor = Editor::new();
    for &(kind, x, y) in DEMO_PARTS {
        editor.place_part(kind, x, y)?;
    }
    Ok(editor)
}
