//! Connection store: owns the committed wires.

use crate::error::EditorError;
use crate::types::{PartId, PortRef, Wire, WireId};

/// Ordered collection of committed wires.
///
/// Append order is paint order, so the most recently added wire sits on top.
/// No two wires join the same pair of ports, regardless of orientation.
#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    wires: Vec<Wire>,
}

impl ConnectionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a wire between `from` and `to`.
    ///
    /// # Returns
    ///
    /// The new wire, or `SelfConnection` if both ends are the same port, or
    /// `DuplicateConnection` if the pair is already wired in either orientation.
    /// A refused wire leaves the store untouched.
    pub fn try_add(&mut self, from: PortRef, to: PortRef) -> Result<Wire, EditorError> {
        if from == to {
            return Err(EditorError::SelfConnection);
        }
        if let Some(existing) = self.find(from, to) {
            return Err(EditorError::DuplicateConnection { existing: existing.id });
        }

        let wire = Wire::new(from, to);
        self.wires.push(wire);
        Ok(wire)
    }

    /// The wire joining `a` and `b`, in either orientation.
    pub fn find(&self, a: PortRef, b: PortRef) -> Option<&Wire> {
        self.wires.iter().find(|w| w.connects(a, b))
    }

    /// Returns the wire with `id`.
    pub fn get(&self, id: WireId) -> Option<&Wire> {
        self.wires.iter().find(|w| w.id == id)
    }

    /// Removes and returns the wire with `id`.
    pub fn remove(&mut self, id: WireId) -> Result<Wire, EditorError> {
        let index = self
            .wires
            .iter()
            .position(|w| w.id == id)
            .ok_or(EditorError::WireNotFound(id))?;
        Ok(self.wires.remove(index))
    }

    /// Removes every wire with an endpoint on `part`, returning them in paint order.
    pub fn remove_touching(&mut self, part: PartId) -> Vec<Wire> {
        let (removed, kept): (Vec<Wire>, Vec<Wire>) = std::mem::take(&mut self.wires)
            .into_iter()
            .partition(|w| w.touches_part(part));
        self.wires = kept;
        removed
    }

    /// Removes every wire and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.wires.len();
        self.wires.clear();
        count
    }

    /// All wires in paint order.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Number of committed wires.
    pub fn len(&self) -> usize {
        self.wires.len()
    }

    /// Whether no wires are committed.
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn ports() -> (PortRef, PortRef, PortRef) {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        (
            PortRef::new(p1, "a"),
            PortRef::new(p1, "b"),
            PortRef::new(p2, "a"),
        )
    }

    #[test]
    fn test_try_add_commits_wire() {
        let mut store = ConnectionStore::new();
        let (a, _, c) = ports();

        let wire = store.try_add(a, c).unwrap();

        assert_eq!(wire.from, a);
        assert_eq!(wire.to, c);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(wire.id), Some(&wire));
    }

    #[test]
    fn test_try_add_rejects_self_connection() {
        let mut store = ConnectionStore::new();
        let (a, _, _) = ports();

        assert_eq!(store.try_add(a, a), Err(EditorError::SelfConnection));
        assert!(store.is_empty());
    }

    #[test]
    fn test_try_add_allows_two_ports_of_same_part() {
        let mut store = ConnectionStore::new();
        let (a, b, _) = ports();

        assert!(store.try_add(a, b).is_ok());
    }

    #[test]
    fn test_try_add_rejects_duplicate_same_orientation() {
        let mut store = ConnectionStore::new();
        let (a, _, c) = ports();
        let first = store.try_add(a, c).unwrap();

        assert_eq!(
            store.try_add(a, c),
            Err(EditorError::DuplicateConnection { existing: first.id })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_try_add_rejects_duplicate_reversed() {
        let mut store = ConnectionStore::new();
        let (a, _, c) = ports();
        let first = store.try_add(a, c).unwrap();

        assert_eq!(
            store.try_add(c, a),
            Err(EditorError::DuplicateConnection { existing: first.id })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_no_two_wires_share_an_unordered_pair() {
        let mut store = ConnectionStore::new();
        let (a, b, c) = ports();
        let attempts = [(a, b), (b, a), (a, c), (c, a), (b, c), (c, b), (a, a), (b, c)];

        for (from, to) in attempts {
            let _ = store.try_add(from, to);
        }

        assert_eq!(store.len(), 3);
        for (i, w1) in store.wires().iter().enumerate() {
            for w2 in &store.wires()[i + 1..] {
                assert!(!w1.connects(w2.from, w2.to));
            }
        }
    }

    #[test]
    fn test_wires_keep_append_order() {
        let mut store = ConnectionStore::new();
        let (a, b, c) = ports();
        let first = store.try_add(a, b).unwrap();
        let second = store.try_add(b, c).unwrap();

        let ids: Vec<_> = store.wires().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_remove_wire() {
        let mut store = ConnectionStore::new();
        let (a, _, c) = ports();
        let wire = store.try_add(a, c).unwrap();

        assert_eq!(store.remove(wire.id), Ok(wire));
        assert!(store.is_empty());
        assert_eq!(store.remove(wire.id), Err(EditorError::WireNotFound(wire.id)));
    }

    #[test]
    fn test_removed_pair_can_be_wired_again() {
        let mut store = ConnectionStore::new();
        let (a, _, c) = ports();
        let wire = store.try_add(a, c).unwrap();
        store.remove(wire.id).unwrap();

        assert!(store.try_add(c, a).is_ok());
    }

    #[test]
    fn test_remove_touching_part() {
        let mut store = ConnectionStore::new();
        let (a, b, c) = ports();
        let internal = store.try_add(a, b).unwrap();
        let external = store.try_add(b, c).unwrap();
        let other = PortRef::new(Uuid::new_v4(), "x");
        let unrelated = store.try_add(c, other).unwrap();

        let removed = store.remove_touching(a.part);

        assert_eq!(removed, vec![internal, external]);
        assert_eq!(store.wires(), &[unrelated]);
    }

    #[test]
    fn test_clear() {
        let mut store = ConnectionStore::new();
        let (a, b, c) = ports();
        store.try_add(a, b).unwrap();
        store.try_add(b, c).unwrap();

        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert_eq!(store.clear(), 0);
    }
}
