//! Static registry of component kinds.
//!
//! A [`Catalog`] maps a kind identifier to its [`ComponentDef`]: display name,
//! footprint and port layout. It is built once when the editor starts and never
//! changes afterwards.

use serde::Serialize;

use crate::error::EditorError;
use crate::types::{KindId, PortId};

/// A connection point on a component, relative to the component's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortDef {
    /// Port id, unique within its component definition
    pub id: PortId,
    /// Horizontal offset from the part origin
    pub local_x: f32,
    /// Vertical offset from the part origin
    pub local_y: f32,
}

impl PortDef {
    /// Creates a port at the given local offset.
    pub const fn new(id: PortId, local_x: f32, local_y: f32) -> Self {
        Self {
            id,
            local_x,
            local_y,
        }
    }
}

/// Immutable description of one component kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDef {
    /// Kind identifier referenced by placed parts
    pub kind: KindId,
    /// Human-friendly display name
    pub name: &'static str,
    /// Footprint width in canvas units
    pub width: f32,
    /// Footprint height in canvas units
    pub height: f32,
    /// Ports in a stable order, which is also the nearest-port tie-break order
    pub ports: Vec<PortDef>,
}

impl ComponentDef {
    /// Looks up a port by id.
    pub fn port(&self, id: &str) -> Option<&PortDef> {
        self.ports.iter().find(|p| p.id == id)
    }
}

/// Read-only lookup from kind to component definition.
#[derive(Debug, Clone)]
pub struct Catalog {
    defs: Vec<ComponentDef>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with the editor: a source, a resistor and an LED.
    pub fn builtin() -> Self {
        Self {
            defs: vec![
                ComponentDef {
                    kind: "source",
                    name: "Source",
                    width: 150.0,
                    height: 90.0,
                    ports: vec![PortDef::new("pos", 150.0, 30.0), PortDef::new("neg", 150.0, 60.0)],
                },
                ComponentDef {
                    kind: "resistor",
                    name: "Resistor",
                    width: 170.0,
                    height: 90.0,
                    ports: vec![PortDef::new("a", 0.0, 45.0), PortDef::new("b", 170.0, 45.0)],
                },
                ComponentDef {
                    kind: "led",
                    name: "LED",
                    width: 150.0,
                    height: 90.0,
                    ports: vec![
                        PortDef::new("anode", 0.0, 45.0),
                        PortDef::new("cathode", 150.0, 45.0),
                    ],
                },
            ],
        }
    }

    /// Builds a catalog from caller-supplied definitions.
    ///
    /// Fails if two definitions share a kind or a definition repeats a port id.
    pub fn from_defs(defs: Vec<ComponentDef>) -> Result<Self, EditorError> {
        for (i, def) in defs.iter().enumerate() {
            if defs[..i].iter().any(|d| d.kind == def.kind) {
                return Err(EditorError::DuplicateKind(def.kind.to_string()));
            }
            for (j, port) in def.ports.iter().enumerate() {
                if def.ports[..j].iter().any(|p| p.id == port.id) {
                    return Err(EditorError::DuplicatePortId {
                        kind: def.kind.to_string(),
                        port: port.id.to_string(),
                    });
                }
            }
        }
        Ok(Self { defs })
    }

    /// Returns the definition for `kind`.
    pub fn lookup(&self, kind: &str) -> Result<&ComponentDef, EditorError> {
        self.defs
            .iter()
            .find(|d| d.kind == kind)
            .ok_or_else(|| EditorError::UnknownKind(kind.to_string()))
    }

    /// Definition for the kind of a part that is already placed.
    ///
    /// Every placed part was validated against this catalog, so a miss is an
    /// invariant violation: it is logged, asserted in debug builds, and the part
    /// is treated as absent.
    pub(crate) fn lookup_placed(&self, kind: &str) -> Option<&ComponentDef> {
        match self.lookup(kind) {
            Ok(def) => Some(def),
            Err(err) => {
                log::error!("placed part is not in the catalog: {err}");
                debug_assert!(false, "placed part is not in the catalog: {err}");
                None
            }
        }
    }

    /// All definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDef> {
        self.defs.iter()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the catalog has no kinds at all.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_kinds() {
        let catalog = Catalog::builtin();
        let kinds: Vec<_> = catalog.iter().map(|d| d.kind).collect();

        assert_eq!(kinds, vec!["source", "resistor", "led"]);
    }

    #[test]
    fn test_builtin_catalog_is_well_formed() {
        let defs = Catalog::builtin().iter().cloned().collect();

        assert!(Catalog::from_defs(defs).is_ok());
    }

    #[test]
    fn test_lookup_known_kind() {
        let catalog = Catalog::builtin();
        let def = catalog.lookup("resistor").unwrap();

        assert_eq!(def.name, "Resistor");
        assert_eq!(def.width, 170.0);
        assert_eq!(def.port("b"), Some(&PortDef::new("b", 170.0, 45.0)));
    }

    #[test]
    fn test_lookup_unknown_kind() {
        let catalog = Catalog::builtin();

        assert_eq!(
            catalog.lookup("capacitor"),
            Err(EditorError::UnknownKind("capacitor".to_string()))
        );
    }

    #[test]
    fn test_port_lookup_missing() {
        let catalog = Catalog::builtin();
        let def = catalog.lookup("led").unwrap();

        assert!(def.port("a").is_none());
    }

    #[test]
    fn test_from_defs_rejects_duplicate_port_ids() {
        let def = ComponentDef {
            kind: "bad",
            name: "Bad",
            width: 48.0,
            height: 48.0,
            ports: vec![PortDef::new("x", 0.0, 0.0), PortDef::new("x", 48.0, 0.0)],
        };

        assert_eq!(
            Catalog::from_defs(vec![def]).unwrap_err(),
            EditorError::DuplicatePortId {
                kind: "bad".to_string(),
                port: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_from_defs_rejects_duplicate_kinds() {
        let def = ComponentDef {
            kind: "twin",
            name: "Twin",
            width: 48.0,
            height: 48.0,
            ports: vec![],
        };

        assert_eq!(
            Catalog::from_defs(vec![def.clone(), def]).unwrap_err(),
            EditorError::DuplicateKind("twin".to_string())
        );
    }
}
