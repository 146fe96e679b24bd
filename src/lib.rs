pub mod camera;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use config::CameraConfig;
pub use input::MouseTracker;
pub use replay::{replay, CameraSnapshot, InputEvent, Replay, Script};
pub use types::CameraUniform;
