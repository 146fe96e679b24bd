use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, PITCH, PITCH_LIMIT, SENSITIVITY, SPEED, YAW, ZOOM};

/// Initial camera state and tunables, loadable from JSON.
/// Missing fields fall back to the camera defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            world_up: Vec3::Y,
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        }
    }
}

impl CameraConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse camera config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config: {}", path.display()))?;

        Self::from_json_str(&json).with_context(|| format!("Invalid camera config: {}", path.display()))
    }
}

fn finite_or(value: f32, fallback: f32, name: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!("Camera config {name} is not finite ({value}), using {fallback}");
        fallback
    }
}

impl Camera {
    /// Build a camera from a config. Pitch and zoom are clamped into range.
    pub fn from_config(config: &CameraConfig) -> Self {
        let yaw = finite_or(config.yaw, YAW, "yaw");
        let pitch = finite_or(config.pitch, PITCH, "pitch").clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let mut camera = Camera::new(config.position, config.world_up, yaw, pitch);
        camera.movement_speed = finite_or(config.movement_speed, SPEED, "movement_speed");
        camera.mouse_sensitivity = finite_or(config.mouse_sensitivity, SENSITIVITY, "mouse_sensitivity");
        camera.set_zoom(finite_or(config.zoom, ZOOM, "zoom"));
        camera
    }

    /// Snapshot the current state as a config
    pub fn config(&self) -> CameraConfig {
        CameraConfig {
            position: self.position,
            world_up: self.world_up(),
            yaw: self.yaw(),
            pitch: self.pitch(),
            movement_speed: self.movement_speed,
            mouse_sensitivity: self.mouse_sensitivity,
            zoom: self.zoom(),
        }
    }
}
