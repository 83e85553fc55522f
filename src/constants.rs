/// Graph drawing and placement tuning constants.
///
/// Everything here is in logical (CSS) pixels or milliseconds.
// Plot rectangle insets
pub const PADDING_LEFT: f64 = 50.0;
pub const PADDING_RIGHT: f64 = 20.0;
pub const PADDING_TOP: f64 = 40.0;
pub const PADDING_BOTTOM: f64 = 40.0;

// Highest cylinder on the position axis
pub const MAX_POSITION: f64 = 199.0;

// Grid lattice and tick counts
pub const GRID_COLUMNS: u32 = 10;
pub const GRID_ROWS: u32 = 5;

// Size used before the first resize
pub const DEFAULT_CANVAS_WIDTH: f64 = 300.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 200.0;

// Animation timing
pub const SEGMENT_DURATION_MS: f64 = 900.0;

// Palette
pub const BACKGROUND_COLOR: &str = "rgb(15, 35, 75)";
pub const GRID_COLOR: &str = "rgba(88, 125, 185, 0.2)";
pub const AXIS_COLOR: &str = "rgb(204, 216, 235)";
pub const LABEL_COLOR: &str = "rgb(162, 188, 231)";
pub const SEGMENT_COLOR: &str = "rgb(100, 200, 255)";
pub const MARKER_COLOR: &str = "rgb(255, 150, 100)";

// Strokes and fonts
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const AXIS_LINE_WIDTH: f64 = 2.0;
pub const SEGMENT_LINE_WIDTH: f64 = 2.0;
pub const MARKER_RADIUS: f64 = 4.0;
pub const TITLE_FONT: &str = "12px Arial";
pub const TICK_FONT: &str = "10px Arial";

// Label offsets
pub const TIME_TITLE_OFFSET_Y: f64 = 15.0; // from the bottom edge
pub const TIME_TICK_OFFSET_Y: f64 = 25.0; // from the bottom edge
pub const POSITION_TITLE_X: f64 = 20.0;
pub const POSITION_TICK_X: f64 = 45.0;
pub const POSITION_TICK_BASELINE: f64 = 4.0;

// Container placement
pub const DEFAULT_CONTAINER_WIDTH: f64 = 550.0;
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 360.0;
pub const PLACEMENT_GAP: f64 = 20.0;
pub const PLACEMENT_GAP_VERTICAL: f64 = 12.0;
pub const VIEWPORT_INSET: f64 = 8.0;
