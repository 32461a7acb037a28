// Shared board tuning constants used by the web frontend and the host tests.

// Interaction
pub const PICK_THRESHOLD: f32 = 50.0; // press closer than this grabs an existing marker

// Canvas layout
pub const DEFAULT_CANVAS_WIDTH: f32 = 700.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 400.0;

// Halo radii (canvas units)
pub const DEFAULT_BROADCAST_RADIUS: f32 = 70.0; // outer halo
pub const DEFAULT_COVERAGE_RADIUS: f32 = 50.0; // inner halo
pub const RADIUS_SLIDER_MIN: f32 = 0.0;
pub const RADIUS_SLIDER_MAX: f32 = 200.0;

// Marker dot
pub const DOT_RADIUS: f32 = 3.0;
