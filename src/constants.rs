//! Shared application-wide constants.
//! Centralizes the fixed values used by the editing core and the canvas rendering.

// Grid
/// Grid unit in canvas units. Every part position is a multiple of this value.
pub const GRID_UNIT: f32 = 24.0;

// Ports and wires
/// Maximum distance (exclusive) at which the cursor counts as "at" a port while drafting.
pub const SNAP_RADIUS: f32 = 18.0;
/// Distance (exclusive) from a port centre that counts as clicking that port.
pub const PORT_HIT_RADIUS: f32 = 9.0;
/// Distance (exclusive) from a wire segment that counts as clicking that wire.
pub const WIRE_HIT_TOLERANCE: f32 = 6.0;

// Rendering
/// Radius of a drawn port dot (in screen pixels).
pub const PORT_RADIUS: f32 = 6.0;
/// Corner radius for part rectangles (in screen pixels).
pub const PART_CORNER_RADIUS: f32 = 12.0;
/// Stroke width for committed wires (in screen pixels).
pub const WIRE_STROKE_WIDTH: f32 = 2.5;
/// Width of the palette sidebar (in screen pixels).
pub const SIDEBAR_WIDTH: f32 = 220.0;

// Placement
/// Where palette-placed parts land before the user drags them.
pub const PALETTE_DROP_POSITION: (f32, f32) = (48.0, 48.0);

// Canvas interactions
/// Maximum pointer travel (in canvas units) between press and release for a click.
pub const CLICK_THRESHOLD: f32 = 4.0;
