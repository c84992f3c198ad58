pub mod camera;
pub mod config;
pub mod constants;
pub mod particles;
pub mod scene;
pub mod scheduler;
pub mod scroll;
pub mod texture;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use particles::*;
pub use scene::*;
pub use scheduler::*;
pub use scroll::*;
pub use texture::*;
