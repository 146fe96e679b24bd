use crate::camera::Camera;

/// Camera uniform buffer data for GPU (std140 layout)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub _pad1: f32,
    pub front: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub _pad4: f32,
    pub view: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub fov_y: f32, // Radians
    pub aspect_ratio: f32,
    pub _pad5: [f32; 2],
}

impl Camera {
    pub fn to_uniform(&self, aspect_ratio: f32, z_near: f32, z_far: f32) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix(aspect_ratio, z_near, z_far);

        CameraUniform {
            position: self.position.to_array(),
            _pad1: 0.0,
            front: self.front().to_array(),
            _pad2: 0.0,
            right: self.right().to_array(),
            _pad3: 0.0,
            up: self.up().to_array(),
            _pad4: 0.0,
            view: view.to_cols_array_2d(),
            view_proj: (proj * view).to_cols_array_2d(),
            fov_y: self.zoom().to_radians(),
            aspect_ratio,
            _pad5: [0.0; 2],
        }
    }
}
