/// Camera, interaction and renderer tuning constants.
///
/// These keep magic numbers out of the wiring code; scene content (assets,
/// colors, fireflies field) lives in `core::constants`.
// Perspective camera
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [4.0, 2.0, 4.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05; // share of pending motion applied per frame
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;

// Renderer
pub const MSAA_SAMPLES: u32 = 4;

// DOM hooks
pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const DEBUG_PANEL_ID: &str = "debug-panel";
pub const DEBUG_PANEL_WIDTH_PX: u32 = 400;
