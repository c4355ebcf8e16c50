//! The editor: single owner of the diagram and the active gesture.
//!
//! [`Editor`] holds the catalog, the placement model, the connection store and the
//! interaction state. Every mutation goes through it, either as an
//! [`InputEvent`](crate::InputEvent) passed to [`Editor::handle`] or as one of the
//! direct commands below.

use crate::catalog::Catalog;
use crate::connections::ConnectionStore;
use crate::constants::{PORT_HIT_RADIUS, WIRE_HIT_TOLERANCE};
use crate::error::EditorError;
use crate::interaction::InteractionState;
use crate::placement::PlacementModel;
use crate::spatial;
use crate::types::{PartId, PartInstance, PortRef, Wire, WireId};

/// The editing core.
#[derive(Debug, Clone)]
pub struct Editor {
    pub(crate) catalog: Catalog,
    pub(crate) placement: PlacementModel,
    pub(crate) connections: ConnectionStore,
    pub(crate) state: InteractionState,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_catalog(Catalog::builtin())
    }
}

impl Editor {
    /// Creates an empty editor using the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty editor using `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            placement: PlacementModel::new(),
            connections: ConnectionStore::new(),
            state: InteractionState::Idle,
        }
    }

    /// The component catalog parts are placed from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Placed parts, in paint order.
    pub fn placement(&self) -> &PlacementModel {
        &self.placement
    }

    /// Committed wires, in paint order.
    pub fn connections(&self) -> &ConnectionStore {
        &self.connections
    }

    /// The active gesture, if any.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Places a new part of `kind` at `(x, y)`, snapped to the grid.
    pub fn place_part(&mut self, kind: &str, x: f32, y: f32) -> Result<PartId, EditorError> {
        self.placement.place(&self.catalog, kind, x, y)
    }

    /// Commits a wire between two ports after checking both resolve.
    pub fn connect(&mut self, from: PortRef, to: PortRef) -> Result<Wire, EditorError> {
        self.port_position(from)?;
        self.port_position(to)?;
        let wire = self.connections.try_add(from, to)?;
        log::info!(
            "wired {}:{} to {}:{} as {}",
            from.part,
            from.port,
            to.part,
            to.port,
            wire.id
        );
        Ok(wire)
    }

    /// Removes a part together with every wire and gesture that references it.
    ///
    /// # Returns
    ///
    /// The removed part and the wires that were attached to it.
    pub fn remove_part(&mut self, id: PartId) -> Result<(PartInstance, Vec<Wire>), EditorError> {
        let part = self.placement.remove(id)?;
        let wires = self.connections.remove_touching(id);

        let gesture_on_part = match self.state {
            InteractionState::Dragging(drag) => drag.part == id,
            InteractionState::Drafting(draft) => draft.from.part == id,
            InteractionState::Idle => false,
        };
        if gesture_on_part {
            log::debug!("dropping {} gesture on removed part {}", self.state.name(), id);
            self.state = InteractionState::Idle;
        }

        log::info!("removed part {} and {} attached wires", id, wires.len());
        Ok((part, wires))
    }

    /// World position of `port`.
    pub fn port_position(&self, port: PortRef) -> Result<(f32, f32), EditorError> {
        self.placement.port_position(&self.catalog, port)
    }

    /// Nearest port strictly within the snap radius, skipping `exclude`.
    pub fn nearest_port(&self, x: f32, y: f32, exclude: Option<PortRef>) -> Option<PortRef> {
        spatial::find_nearest(x, y, self.placement.parts(), &self.catalog, exclude)
    }

    /// Port directly under `(x, y)`, using the tighter click radius.
    pub fn port_at(&self, x: f32, y: f32) -> Option<PortRef> {
        spatial::find_nearest_within(
            x,
            y,
            self.placement.parts(),
            &self.catalog,
            None,
            PORT_HIT_RADIUS,
        )
        .map(|hit| hit.port)
    }

    /// Topmost part whose body contains `(x, y)`.
    pub fn part_at(&self, x: f32, y: f32) -> Option<PartId> {
        self.placement.part_at(&self.catalog, x, y)
    }

    /// Topmost wire passing under `(x, y)`.
    pub fn wire_at(&self, x: f32, y: f32) -> Option<WireId> {
        spatial::wire_at(
            x,
            y,
            self.connections.wires(),
            &self.placement,
            &self.catalog,
            WIRE_HIT_TOLERANCE,
        )
    }
}
