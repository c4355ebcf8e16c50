//! Placement model: owns the placed parts and their grid-aligned positions.

use crate::catalog::Catalog;
use crate::error::EditorError;
use crate::grid::{snap, snap_point};
use crate::types::{DragState, PartId, PartInstance, PortRef};

/// Ordered arena of placed parts.
///
/// Insertion order is paint order: later parts are drawn above earlier ones and
/// win body hit-tests.
#[derive(Debug, Clone, Default)]
pub struct PlacementModel {
    parts: Vec<PartInstance>,
}

impl PlacementModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new part of `kind` with its origin snapped to the grid.
    pub fn place(
        &mut self,
        catalog: &Catalog,
        kind: &str,
        x: f32,
        y: f32,
    ) -> Result<PartId, EditorError> {
        let def = catalog.lookup(kind)?;
        let (x, y) = snap_point(x, y);
        let part = PartInstance::new(def.kind, x, y);
        let id = part.id;
        log::info!("placed {} {} at ({}, {})", def.kind, id, x, y);
        self.parts.push(part);
        Ok(id)
    }

    /// Returns the part with `id`.
    pub fn get(&self, id: PartId) -> Result<&PartInstance, EditorError> {
        self.parts
            .iter()
            .find(|p| p.id == id)
            .ok_or(EditorError::UnknownPart(id))
    }

    /// All parts in paint order.
    pub fn parts(&self) -> &[PartInstance] {
        &self.parts
    }

    /// Number of placed parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts are placed.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Captures the grab offset for dragging `id` from cursor position `(cursor_x, cursor_y)`.
    pub fn begin_drag(
        &self,
        id: PartId,
        cursor_x: f32,
        cursor_y: f32,
    ) -> Result<DragState, EditorError> {
        let part = self.get(id)?;
        let (x, y) = part.origin();
        Ok(DragState {
            part: id,
            grab_offset_x: cursor_x - x,
            grab_offset_y: cursor_y - y,
        })
    }

    /// Moves the dragged part so the grab point follows the cursor, snapped to the grid.
    ///
    /// There is no clamping to any visible area; parts may end up off-screen.
    /// Returns the new origin.
    pub fn move_drag(
        &mut self,
        drag: &DragState,
        raw_x: f32,
        raw_y: f32,
    ) -> Result<(i32, i32), EditorError> {
        let part = self
            .parts
            .iter_mut()
            .find(|p| p.id == drag.part)
            .ok_or(EditorError::UnknownPart(drag.part))?;
        part.x = snap(raw_x - drag.grab_offset_x);
        part.y = snap(raw_y - drag.grab_offset_y);
        Ok((part.x, part.y))
    }

    /// Topmost part whose footprint contains `(x, y)`, edges included.
    pub fn part_at(&self, catalog: &Catalog, x: f32, y: f32) -> Option<PartId> {
        self.parts.iter().rev().find_map(|part| {
            let def = catalog.lookup_placed(part.kind)?;
            let (px, py) = part.origin();
            let inside = x >= px && x <= px + def.width && y >= py && y <= py + def.height;
            inside.then_some(part.id)
        })
    }

    /// World position of `port`: part origin plus the port's local offset.
    pub fn port_position(&self, catalog: &Catalog, port: PortRef) -> Result<(f32, f32), EditorError> {
        let part = self.get(port.part)?;
        let def = catalog.lookup(part.kind)?;
        let port_def = def.port(port.port).ok_or_else(|| EditorError::UnknownPort {
            part: port.part,
            port: port.port.to_string(),
        })?;
        let (x, y) = part.origin();
        Ok((x + port_def.local_x, y + port_def.local_y))
    }

    /// Removes and returns the part with `id`.
    ///
    /// Callers must also drop anything referencing the part's ports; see
    /// [`crate::Editor::remove_part`].
    pub fn remove(&mut self, id: PartId) -> Result<PartInstance, EditorError> {
        let index = self
            .parts
            .iter()
            .position(|p| p.id == id)
            .ok_or(EditorError::UnknownPart(id))?;
        Ok(self.parts.remove(index))
    }
}
