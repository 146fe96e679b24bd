//! Scripted input playback. Drives a [`Camera`] from a JSON list of input
//! events so the camera can be exercised without a window.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraMovement};
use crate::config::CameraConfig;
use crate::input::MouseTracker;

/// One frame's worth of input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Move {
        direction: CameraMovement,
        delta_time: f32,
    },
    Look {
        x_offset: f32,
        y_offset: f32,
    },
    /// Absolute cursor position, converted to a look offset
    Cursor { x: f32, y: f32 },
    Scroll { y_offset: f32 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub camera: CameraConfig,
    pub events: Vec<InputEvent>,
}

impl Script {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse input script")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script: {}", path.display()))?;

        Self::from_json_str(&json).with_context(|| format!("Invalid input script: {}", path.display()))
    }
}

/// Serializable view of the camera after an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    pub position: Vec3,
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    /// Column-major
    pub view: [[f32; 4]; 4],
}

impl From<&Camera> for CameraSnapshot {
    fn from(camera: &Camera) -> Self {
        Self {
            position: camera.position,
            front: camera.front(),
            right: camera.right(),
            up: camera.up(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            zoom: camera.zoom(),
            view: camera.view_matrix().to_cols_array_2d(),
        }
    }
}

/// Camera plus the cursor state needed to play back events
#[derive(Debug, Clone)]
pub struct Replay {
    camera: Camera,
    mouse: MouseTracker,
}

impl Replay {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            mouse: MouseTracker::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn into_camera(self) -> Camera {
        self.camera
    }

    pub fn apply(&mut self, event: &InputEvent) {
        trace!("Applying {event:?}");

        match *event {
            InputEvent::Move {
                direction,
                delta_time,
            } => self.camera.process_keyboard(direction, delta_time),
            InputEvent::Look { x_offset, y_offset } => {
                self.camera.process_mouse_movement(x_offset, y_offset)
            }
            InputEvent::Cursor { x, y } => {
                let (x_offset, y_offset) = self.mouse.offset(x, y);
                self.camera.process_mouse_movement(x_offset, y_offset);
            }
            InputEvent::Scroll { y_offset } => self.camera.process_mouse_scroll(y_offset),
        }
    }

    /// Apply every event in order, returning a snapshot after each one
    pub fn run<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) -> Vec<CameraSnapshot> {
        events
            .into_iter()
            .map(|event| {
                self.apply(event);
                CameraSnapshot::from(&self.camera)
            })
            .collect()
    }
}

/// Play a whole script from its initial camera
pub fn replay(script: &Script) -> (Camera, Vec<CameraSnapshot>) {
    let mut replay = Replay::new(Camera::from_config(&script.camera));
    let snapshots = replay.run(&script.events);

    debug!("Replayed {} events", snapshots.len());
    (replay.into_camera(), snapshots)
}
