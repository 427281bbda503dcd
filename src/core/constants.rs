// Scene content constants shared by the web frontend and host tests.

// Assets served next to the page
pub const MODEL_PATH: &str = "p6.glb";
pub const BAKED_TEXTURE_PATH: &str = "baked3.jpg";

// Node names in the exported model, one per mesh role
pub const BAKED_MESH_NAME: &str = "bakednomaterial";
pub const POLE_LIGHT_A_MESH_NAME: &str = "poteau002";
pub const POLE_LIGHT_B_MESH_NAME: &str = "poteau005";
pub const PORTAL_LIGHT_MESH_NAME: &str = "Circle";

// Fireflies field
pub const FIREFLIES_COUNT: usize = 40;
pub const FIREFLIES_MAX_COUNT: usize = 10_000; // upper bound accepted from the query string
pub const FIREFLIES_EXTENT: f32 = 4.0; // side of the horizontal square, centered on the origin
pub const FIREFLIES_HEIGHT: f32 = 2.0; // fireflies float between the ground and this height

// Fireflies sprite size in pixels at unit view depth, and its debug range
pub const FIREFLIES_SIZE: f32 = 70.0;
pub const FIREFLIES_SIZE_MIN: f32 = 0.0;
pub const FIREFLIES_SIZE_MAX: f32 = 100.0;
pub const FIREFLIES_SIZE_STEP: f32 = 0.1;

// Colors (sRGB hex)
pub const POLE_LIGHT_COLOR: u32 = 0xffffe5;
pub const PORTAL_CENTER_COLOR: u32 = 0xebd6ff;
pub const PORTAL_BORDER_COLOR: u32 = 0xfdecfe;
pub const CLEAR_COLOR: u32 = 0x1b1631;
pub const FOG_COLOR: u32 = 0x39247f;

// Linear fog distances (view space)
pub const FOG_NEAR: f32 = 0.5;
pub const FOG_FAR: f32 = 15.0;

// Device pixel ratio is capped to keep fill rate sane on dense displays
pub const MAX_PIXEL_RATIO: f64 = 2.0;
