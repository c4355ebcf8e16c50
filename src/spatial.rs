//! Proximity queries over placed parts and committed wires.
//!
//! These scans are linear in the number of ports (or wires) and never allocate,
//! since they run on every pointer move while a gesture is active.

use crate::catalog::Catalog;
use crate::constants::SNAP_RADIUS;
use crate::placement::PlacementModel;
use crate::types::{PartInstance, PortRef, Wire, WireId};

/// A port found by a proximity query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPort {
    /// The port that was hit
    pub port: PortRef,
    /// World x of the port
    pub x: f32,
    /// World y of the port
    pub y: f32,
    /// Euclidean distance from the query point
    pub distance: f32,
}

/// Finds the port nearest to `(x, y)` that is strictly closer than the snap radius.
///
/// `exclude` is skipped, which keeps a draft from snapping back onto its own start.
pub fn find_nearest(
    x: f32,
    y: f32,
    parts: &[PartInstance],
    catalog: &Catalog,
    exclude: Option<PortRef>,
) -> Option<PortRef> {
    find_nearest_within(x, y, parts, catalog, exclude, SNAP_RADIUS).map(|hit| hit.port)
}

/// Finds the port nearest to `(x, y)` that is strictly closer than `radius`.
///
/// Ports are visited part by part in paint order, then in definition order. When two
/// ports are equally close the first one visited wins.
pub fn find_nearest_within(
    x: f32,
    y: f32,
    parts: &[PartInstance],
    catalog: &Catalog,
    exclude: Option<PortRef>,
    radius: f32,
) -> Option<NearestPort> {
    let mut best: Option<(PortRef, f32, f32)> = None;
    let mut best_distance_sq = radius * radius;

    for part in parts {
        let Some(def) = catalog.lookup_placed(part.kind) else {
            continue;
        };
        let (origin_x, origin_y) = part.origin();
        for port_def in &def.ports {
            let port = PortRef::new(part.id, port_def.id);
            if exclude == Some(port) {
                continue;
            }
            let port_x = origin_x + port_def.local_x;
            let port_y = origin_y + port_def.local_y;
            let dx = x - port_x;
            let dy = y - port_y;
            let distance_sq = dx * dx + dy * dy;
            if distance_sq < best_distance_sq {
                best_distance_sq = distance_sq;
                best = Some((port, port_x, port_y));
            }
        }
    }

    best.map(|(port, port_x, port_y)| NearestPort {
        port,
        x: port_x,
        y: port_y,
        distance: best_distance_sq.sqrt(),
    })
}

/// Finds the topmost wire whose straight segment passes strictly within `tolerance`
/// of `(x, y)`.
///
/// Later wires are drawn on top, so they are tested first.
pub fn wire_at(
    x: f32,
    y: f32,
    wires: &[Wire],
    placement: &PlacementModel,
    catalog: &Catalog,
    tolerance: f32,
) -> Option<WireId> {
    wires.iter().rev().find_map(|wire| {
        let endpoints = placement.port_position(catalog, wire.from).and_then(|start| {
            placement
                .port_position(catalog, wire.to)
                .map(|end| (start, end))
        });
        let (start, end) = match endpoints {
            Ok(endpoints) => endpoints,
            Err(err) => {
                log::error!("wire {} has a dangling endpoint: {err}", wire.id);
                debug_assert!(false, "wire {} has a dangling endpoint: {err}", wire.id);
                return None;
            }
        };
        (point_to_segment_distance((x, y), start, end) < tolerance).then_some(wire.id)
    })
}

/// Distance from `point` to the segment `start`..`end`.
pub fn point_to_segment_distance(point: (f32, f32), start: (f32, f32), end: (f32, f32)) -> f32 {
    let (seg_x, seg_y) = (end.0 - start.0, end.1 - start.1);
    let (rel_x, rel_y) = (point.0 - start.0, point.1 - start.1);
    let seg_len_sq = seg_x * seg_x + seg_y * seg_y;

    if seg_len_sq < 0.0001 {
        // Degenerate segment
        return (rel_x * rel_x + rel_y * rel_y).sqrt();
    }

    let t = ((rel_x * seg_x + rel_y * seg_y) / seg_len_sq).clamp(0.0, 1.0);
    let (proj_x, proj_y) = (start.0 + seg_x * t, start.1 + seg_y * t);
    let (dx, dy) = (point.0 - proj_x, point.1 - proj_y);
    (dx * dx + dy * dy).sqrt()
}
