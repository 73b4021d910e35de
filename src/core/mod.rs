pub mod animate;
pub mod balloons;
pub mod build;
pub mod effects;
pub mod messages;
pub mod room;
pub mod scene;
pub mod timers;

pub use room::{Room, RoomConfig, UiCommand};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
