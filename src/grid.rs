//! Grid quantization for part positions.

use crate::constants::GRID_UNIT;

/// Rounds `value` to the nearest multiple of the editor's grid unit.
///
/// Halfway values round up (towards positive infinity), so `12.0` snaps to `24`
/// and `-12.0` snaps to `0`.
pub fn snap(value: f32) -> i32 {
    snap_to(value, GRID_UNIT)
}

/// Rounds `value` to the nearest multiple of `unit`, halfway values rounding up.
///
/// Results saturate at the largest multiples of `unit` that fit in an `i32`, so
/// even infinite input stays on the grid. NaN snaps to `0`.
pub fn snap_to(value: f32, unit: f32) -> i32 {
    let unit = f64::from(unit);
    let max_steps = (f64::from(i32::MAX) / unit).floor();
    let min_steps = (f64::from(i32::MIN) / unit).ceil();
    let steps = (f64::from(value) / unit + 0.5).floor();
    if steps.is_nan() {
        return 0;
    }
    (steps.clamp(min_steps, max_steps) * unit) as i32
}

/// Snaps both coordinates of a point.
pub fn snap_point(x: f32, y: f32) -> (i32, i32) {
    (snap(x), snap(y))
}
