//! Core data types for the diagram editor.
//!
//! This module defines the placed parts, the port references that tie wires to
//! them, the committed wires, and the transient drag and draft records that live
//! only for the length of a single gesture.

use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for placed parts.
pub type PartId = Uuid;

/// Unique identifier for committed wires.
pub type WireId = Uuid;

/// Identifier of a component kind in the catalog.
pub type KindId = &'static str;

/// Identifier of a port, unique within one component definition.
pub type PortId = &'static str;

/// Structural reference to one port on one placed part.
///
/// A `PortRef` is not owned by anything; it resolves through the placement model
/// (part) and the catalog (port layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PortRef {
    /// The part carrying the port
    pub part: PartId,
    /// The port id within that part's component definition
    pub port: PortId,
}

impl PortRef {
    /// Creates a reference to `port` on `part`.
    pub fn new(part: PartId, port: PortId) -> Self {
        Self { part, port }
    }
}

/// A placed instance of a component kind on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartInstance {
    /// Unique identifier for this part
    pub id: PartId,
    /// The catalog kind this part is an instance of
    pub kind: KindId,
    /// Left edge, always a multiple of the grid unit
    pub x: i32,
    /// Top edge, always a multiple of the grid unit
    pub y: i32,
}

impl PartInstance {
    /// Creates a new part with a freshly generated id.
    ///
    /// The caller is responsible for passing grid-aligned coordinates.
    pub fn new(kind: KindId, x: i32, y: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
        }
    }

    /// Top-left corner as floating point canvas coordinates.
    pub fn origin(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

/// A committed, undirected connection between two ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wire {
    /// Unique identifier for this wire
    pub id: WireId,
    /// Port the wire was drawn from
    pub from: PortRef,
    /// Port the wire was drawn to
    pub to: PortRef,
}

impl Wire {
    /// Creates a new wire with a freshly generated id.
    pub fn new(from: PortRef, to: PortRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
        }
    }

    /// Whether this wire joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: PortRef, b: PortRef) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Whether either endpoint sits on `part`.
    pub fn touches_part(&self, part: PartId) -> bool {
        self.from.part == part || self.to.part == part
    }
}

/// An active part drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragState {
    /// The part being dragged
    pub part: PartId,
    /// Cursor x minus part x at the moment the drag began
    pub grab_offset_x: f32,
    /// Cursor y minus part y at the moment the drag began
    pub grab_offset_y: f32,
}

/// An in-progress wire that has a start port but no end yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DraftState {
    /// The port the draft started from
    pub from: PortRef,
    /// Latest raw (unsnapped) cursor x
    pub cursor_x: f32,
    /// Latest raw (unsnapped) cursor y
    pub cursor_y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_creation() {
        let part = PartInstance::new("resistor", 48, 72);

        assert_eq!(part.kind, "resistor");
        assert_eq!(part.origin(), (48.0, 72.0));
        assert!(!part.id.is_nil());
    }

    #[test]
    fn test_parts_get_distinct_ids() {
        let a = PartInstance::new("led", 0, 0);
        let b = PartInstance::new("led", 0, 0);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_connects_in_both_orientations() {
        let a = PortRef::new(Uuid::new_v4(), "a");
        let b = PortRef::new(Uuid::new_v4(), "b");
        let c = PortRef::new(Uuid::new_v4(), "c");
        let wire = Wire::new(a, b);

        assert!(wire.connects(a, b));
        assert!(wire.connects(b, a));
        assert!(!wire.connects(a, c));
    }

    #[test]
    fn test_wire_touches_part() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let wire = Wire::new(PortRef::new(p1, "a"), PortRef::new(p2, "b"));

        assert!(wire.touches_part(p1));
        assert!(wire.touches_part(p2));
        assert!(!wire.touches_part(Uuid::new_v4()));
    }

    #[test]
    fn test_port_ref_equality_needs_same_part_and_port() {
        let part = Uuid::new_v4();

        assert_eq!(PortRef::new(part, "a"), PortRef::new(part, "a"));
        assert_ne!(PortRef::new(part, "a"), PortRef::new(part, "b"));
        assert_ne!(PortRef::new(part, "a"), PortRef::new(Uuid::new_v4(), "a"));
    }
}
