//! Camera for Pong game
//!
//! 2D orthographic camera over the playfield, in pixels with y pointing down

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map a `width` x `height` playfield onto clip space, origin top-left
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view = Mat4::look_at_rh(Vec3::Z, Vec3::ZERO, Vec3::Y);
        // Bottom and top swapped so y grows downward like the simulation
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, 0.1, 10.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec4};

    fn to_clip(camera: &Camera, point: Vec2) -> Vec2 {
        let clip = camera.view_proj() * Vec4::new(point.x, point.y, 0.0, 1.0);
        Vec2::new(clip.x, clip.y) / clip.w
    }

    fn assert_near(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::orthographic(1280.0, 720.0);
        assert_near(to_clip(&camera, Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_near(to_clip(&camera, Vec2::new(1280.0, 720.0)), Vec2::new(1.0, -1.0));
        assert_near(to_clip(&camera, Vec2::new(640.0, 360.0)), Vec2::ZERO);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
