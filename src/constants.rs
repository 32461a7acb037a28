/// DOM wiring constants.
///
/// Element ids must match `index.html`; keeping them here keeps string
/// literals out of the event wiring code.
pub const CANVAS_ID: &str = "board-canvas";

// Controls
pub const BROADCAST_SLIDER_ID: &str = "broadcast-radius";
pub const COVERAGE_SLIDER_ID: &str = "coverage-radius";
pub const SAVE_BUTTON_ID: &str = "save-sensors";
pub const LOAD_INPUT_ID: &str = "load-sensors";

// Legend swatches
pub const LEGEND_BROADCAST_ID: &str = "legend-broadcast";
pub const LEGEND_COVERAGE_ID: &str = "legend-coverage";
pub const LEGEND_FENCE_ID: &str = "legend-fence";

// Status line under the canvas
pub const STATUS_LINE_ID: &str = "status-line";

// Export
pub const EXPORT_FILE_NAME: &str = "sensors.json";
pub const EXPORT_MIME: &str = "application/json";
pub const OBJECT_URL_REVOKE_DELAY_MS: i32 = 1_000;
