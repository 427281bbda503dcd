pub mod animation;
pub mod color;
pub mod config;
pub mod constants;
pub mod fireflies;
pub mod scene;
pub mod settings;

pub use animation::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use fireflies::*;
pub use scene::*;
pub use settings::*;

// Shaders bundled as string constants. Mesh shaders are prefixed with the
// shared globals/vertex prelude at pipeline creation.
pub static COMMON_WGSL: &str = include_str!("../../shaders/common.wgsl");
pub static BAKED_WGSL: &str = include_str!("../../shaders/baked.wgsl");
pub static FLAT_WGSL: &str = include_str!("../../shaders/flat.wgsl");
pub static PORTAL_WGSL: &str = include_str!("../../shaders/portal.wgsl");
pub static FIREFLIES_WGSL: &str = include_str!("../../shaders/fireflies.wgsl");
