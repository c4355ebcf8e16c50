//! Read-only views of the editor for rendering.
//!
//! A [`Snapshot`] is built fresh on every call, resolving every port and wire
//! endpoint to world coordinates, so a renderer never needs to reach into the
//! placement model or the catalog itself.

use serde::Serialize;

use crate::editor::Editor;
use crate::error::EditorError;
use crate::interaction::InteractionState;
use crate::types::{DraftState, KindId, PartId, PortId, PortRef, WireId};

/// A port with its resolved world position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortView {
    /// Which port this is
    pub port: PortRef,
    /// World x
    pub x: f32,
    /// World y
    pub y: f32,
}

impl PortView {
    /// Port id within its part.
    pub fn id(&self) -> PortId {
        self.port.port
    }
}

/// A placed part with its footprint and ports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartView {
    /// Part id
    pub id: PartId,
    /// Catalog kind
    pub kind: KindId,
    /// Display name from the catalog
    pub name: &'static str,
    /// Grid-aligned left edge
    pub x: i32,
    /// Grid-aligned top edge
    pub y: i32,
    /// Footprint width
    pub width: f32,
    /// Footprint height
    pub height: f32,
    /// Ports in definition order, at world positions
    pub ports: Vec<PortView>,
}

/// A committed wire with both endpoints resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireView {
    /// Wire id
    pub id: WireId,
    /// One endpoint
    pub from: PortRef,
    /// The other endpoint
    pub to: PortRef,
    /// World position of `from`
    pub from_pos: (f32, f32),
    /// World position of `to`
    pub to_pos: (f32, f32),
}

/// The pending line of an active draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftView {
    /// Port the draft started from
    pub from: PortRef,
    /// World position of `from`
    pub start: (f32, f32),
    /// Where the line currently ends: the snapped port if there is one, else the raw cursor
    pub end: (f32, f32),
    /// The port the draft would commit to if clicked now
    pub snapped_to: Option<PortRef>,
}

impl DraftView {
    /// Whether the line currently ends on a port.
    pub fn is_snapped(&self) -> bool {
        self.snapped_to.is_some()
    }
}

/// The active gesture as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ModeView {
    /// No gesture
    Idle,
    /// A part is being dragged
    Dragging {
        /// The dragged part
        part: PartId,
    },
    /// A wire is being drawn
    Drafting(DraftView),
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Parts in paint order
    pub parts: Vec<PartView>,
    /// Wires in paint order
    pub wires: Vec<WireView>,
    /// The active gesture
    pub mode: ModeView,
}

impl Snapshot {
    /// Serialize the snapshot to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The draft view, if a draft is active.
    pub fn draft(&self) -> Option<&DraftView> {
        match &self.mode {
            ModeView::Drafting(draft) => Some(draft),
            _ => None,
        }
    }
}

impl Editor {
    /// Builds a snapshot of the current diagram and gesture.
    ///
    /// Fails only if the model holds a reference that no longer resolves, which
    /// the editor never allows.
    pub fn snapshot(&self) -> Result<Snapshot, EditorError> {
        let mut parts = Vec::with_capacity(self.placement.len());
        for part in self.placement.parts() {
            let def = self.catalog.lookup(part.kind)?;
            let (origin_x, origin_y) = part.origin();
            parts.push(PartView {
                id: part.id,
                kind: part.kind,
                name: def.name,
                x: part.x,
                y: part.y,
                width: def.width,
                height: def.height,
                ports: def
                    .ports
                    .iter()
                    .map(|p| PortView {
                        port: PortRef::new(part.id, p.id),
                        x: origin_x + p.local_x,
                        y: origin_y + p.local_y,
                    })
                    .collect(),
            });
        }

        let wires = self
            .connections
            .wires()
            .iter()
            .map(|wire| {
                Ok(WireView {
                    id: wire.id,
                    from: wire.from,
                    to: wire.to,
                    from_pos: self.port_position(wire.from)?,
                    to_pos: self.port_position(wire.to)?,
                })
            })
            .collect::<Result<Vec<_>, EditorError>>()?;

        let mode = match self.state {
            InteractionState::Idle => ModeView::Idle,
            InteractionState::Dragging(drag) => ModeView::Dragging { part: drag.part },
            InteractionState::Drafting(draft) => ModeView::Drafting(self.draft_view(&draft)?),
        };

        Ok(Snapshot { parts, wires, mode })
    }

    /// The pending line of the active draft, recomputed from the current cursor.
    pub fn draft_preview(&self) -> Result<Option<DraftView>, EditorError> {
        match self.state {
            InteractionState::Drafting(draft) => self.draft_view(&draft).map(Some),
            _ => Ok(None),
        }
    }

    fn draft_view(&self, draft: &DraftState) -> Result<DraftView, EditorError> {
        let start = self.port_position(draft.from)?;
        let snapped_to = self.nearest_port(draft.cursor_x, draft.cursor_y, Some(draft.from));
        let end = match snapped_to {
            Some(port) => self.port_position(port)?,
            None => (draft.cursor_x, draft.cursor_y),
        };
        Ok(DraftView {
            from: draft.from,
            start,
            end,
            snapped_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ClickTarget, InputEvent, PointerTarget};

    fn editor_with_resistor_and_led() -> (Editor, PartId, PartId) {
        let mut editor = Editor::new();
        let resistor = editor.place_part("resistor", 96.0, 96.0).unwrap();
        let led = editor.place_part("led", 384.0, 96.0).unwrap();
        (editor, resistor, led)
    }

    fn start_draft(editor: &mut Editor, from: PortRef) {
        let (x, y) = editor.port_position(from).unwrap();
        editor
            .handle(InputEvent::Click {
                target: ClickTarget::Port(from),
                x,
                y,
            })
            .unwrap();
    }

    #[test]
    fn test_snapshot_parts_and_ports() {
        let (editor, resistor, led) = editor_with_resistor_and_led();

        let snapshot = editor.snapshot().unwrap();

        assert_eq!(snapshot.parts.len(), 2);
        let r = &snapshot.parts[0];
        assert_eq!(r.id, resistor);
        assert_eq!(r.name, "Resistor");
        assert_eq!((r.x, r.y, r.width, r.height), (96, 96, 170.0, 90.0));
        let port_ids: Vec<_> = r.ports.iter().map(|p| p.id()).collect();
        assert_eq!(port_ids, vec!["a", "b"]);
        assert_eq!((r.ports[1].x, r.ports[1].y), (266.0, 141.0));
        assert_eq!(snapshot.parts[1].id, led);
        assert_eq!(snapshot.mode, ModeView::Idle);
        assert!(snapshot.wires.is_empty());
    }

    #[test]
    fn test_snapshot_wire_endpoints_follow_drag() {
        let (mut editor, resistor, led) = editor_with_resistor_and_led();
        editor
            .connect(PortRef::new(resistor, "b"), PortRef::new(led, "anode"))
            .unwrap();
        editor
            .handle(InputEvent::PointerDown {
                target: PointerTarget::PartBody(led),
                x: 400.0,
                y: 100.0,
            })
            .unwrap();
        editor.handle(InputEvent::PointerMove { x: 448.0, y: 148.0 }).unwrap();

        let snapshot = editor.snapshot().unwrap();

        assert_eq!(snapshot.mode, ModeView::Dragging { part: led });
        let wire = &snapshot.wires[0];
        assert_eq!(wire.from_pos, (266.0, 141.0));
        assert_eq!(wire.to_pos, (432.0, 189.0));
    }

    #[test]
    fn test_draft_preview_follows_raw_cursor() {
        let (mut editor, resistor, _) = editor_with_resistor_and_led();
        let from = PortRef::new(resistor, "b");
        start_draft(&mut editor, from);
        editor.handle(InputEvent::PointerMove { x: 300.5, y: 20.25 }).unwrap();

        let draft = editor.draft_preview().unwrap().unwrap();

        assert_eq!(draft.from, from);
        assert_eq!(draft.start, (266.0, 141.0));
        assert_eq!(draft.end, (300.5, 20.25));
        assert!(!draft.is_snapped());
    }

    #[test]
    fn test_draft_preview_snaps_to_nearby_port() {
        let (mut editor, resistor, led) = editor_with_resistor_and_led();
        start_draft(&mut editor, PortRef::new(resistor, "b"));
        // led.anode is at (384, 141)
        editor.handle(InputEvent::PointerMove { x: 390.0, y: 150.0 }).unwrap();

        let draft = editor.draft_preview().unwrap().unwrap();

        assert_eq!(draft.snapped_to, Some(PortRef::new(led, "anode")));
        assert_eq!(draft.end, (384.0, 141.0));
    }

    #[test]
    fn test_draft_preview_never_snaps_to_origin() {
        let (mut editor, resistor, _) = editor_with_resistor_and_led();
        let from = PortRef::new(resistor, "b");
        start_draft(&mut editor, from);
        editor.handle(InputEvent::PointerMove { x: 268.0, y: 141.0 }).unwrap();

        let draft = editor.draft_preview().unwrap().unwrap();

        assert_eq!(draft.snapped_to, None);
        assert_eq!(draft.end, (268.0, 141.0));
    }

    #[test]
    fn test_draft_preview_snaps_past_origin_to_neighbour() {
        let (mut editor, resistor, _) = editor_with_resistor_and_led();
        // Second resistor's `a` port lands at (264, 141), 2 left of resistor.b
        let neighbour = editor.place_part("resistor", 264.0, 96.0).unwrap();
        start_draft(&mut editor, PortRef::new(resistor, "b"));
        editor.handle(InputEvent::PointerMove { x: 267.0, y: 141.0 }).unwrap();

        let draft = editor.draft_preview().unwrap().unwrap();

        assert_eq!(draft.snapped_to, Some(PortRef::new(neighbour, "a")));
        assert_eq!(draft.end, (264.0, 141.0));
    }

    #[test]
    fn test_draft_preview_none_when_idle() {
        let (editor, _, _) = editor_with_resistor_and_led();

        assert_eq!(editor.draft_preview(), Ok(None));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let (mut editor, resistor, _) = editor_with_resistor_and_led();
        start_draft(&mut editor, PortRef::new(resistor, "a"));

        let json = editor.snapshot().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["mode"]["mode"], "drafting");
        assert_eq!(value["mode"]["from"]["port"], "a");
        assert_eq!(value["parts"][0]["kind"], "resistor");
        assert_eq!(value["parts"][1]["ports"][1]["port"]["port"], "cathode");
    }

    #[test]
    fn test_snapshot_draft_accessor() {
        let (mut editor, resistor, _) = editor_with_resistor_and_led();
        assert!(editor.snapshot().unwrap().draft().is_none());

        start_draft(&mut editor, PortRef::new(resistor, "a"));

        assert!(editor.snapshot().unwrap().draft().is_some());
    }
}
