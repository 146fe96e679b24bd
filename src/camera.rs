use glam::{Mat4, Vec3};
use log::{debug, warn};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

/// Pitch stays strictly inside ±90° so `front` never lines up with `world_up`
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Movement intent, decoupled from any key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera driven by Euler angles (degrees)
///
/// `front`, `right` and `up` are derived from `yaw`, `pitch` and `world_up`
/// and are only reachable through accessors, so they can never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();

        debug!(
            "Camera created at {:?} (yaw {:.1}, pitch {:.1}), front {:?}",
            camera.position, camera.yaw, camera.pitch, camera.front
        );
        camera
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Right-handed look-at from `position` towards `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// OpenGL-style perspective using `zoom` as the vertical FOV
    pub fn projection_matrix(&self, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, z_near, z_far)
    }

    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        if !velocity.is_finite() {
            warn!("Ignoring {direction:?} move: velocity {velocity} is not finite");
            return;
        }

        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply one frame of pointer motion. Pitch is clamped before the basis
    /// is rebuilt.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        let (dx, dy) = (x_offset * self.mouse_sensitivity, y_offset * self.mouse_sensitivity);
        let (yaw, pitch) = (self.yaw + dx, self.pitch + dy);

        if ![dx, dy, yaw, pitch].iter().all(|v| v.is_finite()) {
            warn!(
                "Ignoring mouse offset ({x_offset}, {y_offset}) at sensitivity {}: result is not finite",
                self.mouse_sensitivity
            );
            return;
        }

        // Keep yaw in [-180, 180) so precision does not decay over a long session
        self.yaw = (yaw + 180.0).rem_euclid(360.0) - 180.0;
        self.pitch = pitch;

        if self.pitch > PITCH_LIMIT {
            self.pitch = PITCH_LIMIT;
        } else if self.pitch < -PITCH_LIMIT {
            self.pitch = -PITCH_LIMIT;
        }

        self.update_vectors();
    }

    /// Positive offsets zoom in (narrower field of view)
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if !y_offset.is_finite() {
            warn!("Ignoring non-finite scroll offset {y_offset}");
            return;
        }

        if (MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            self.zoom -= y_offset;
        }

        if self.zoom <= MIN_ZOOM {
            self.zoom = MIN_ZOOM;
        } else if self.zoom >= MAX_ZOOM {
            self.zoom = MAX_ZOOM;
        }
    }

    pub(crate) fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Both cross products shrink as front approaches world_up
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW, PITCH)
    }
}
