use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

/// Fixed perspective camera. There is no view matrix; the eye offset is folded into the projection.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub eye_offset: Vec3,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 1.0,
            far: 10000.0,
            eye_offset: Vec3::new(0.0, 0.0, -5.0),
        }
    }
}

impl Projection {
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width as f32 / height.max(1) as f32;
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
            * Mat4::from_translation(self.eye_offset)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Default)]
pub struct ProjectionUniform {
    projection: Mat4,
}

impl ProjectionUniform {
    pub fn new(projection: &Projection, width: u32, height: u32) -> Self {
        Self {
            projection: projection.matrix(width, height),
        }
    }

    pub fn create_buffer(&self, device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Projection Uniform Buffer"),
            contents: bytemuck::cast_slice(&[*self]),
            usage: wgpu::BufferUsages::UNIFORM,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn origin_lands_in_view_centre_behind_eye_offset() {
        let matrix = Projection::default().matrix(1280, 720);
        let clip = matrix * Vec4::new(0.0, 0.0, 0.0, 1.0);

        assert!(clip.x.abs() < 1e-6);
        assert!(clip.y.abs() < 1e-6);
        assert!((clip.w - 5.0).abs() < 1e-5);

        let ndc_z = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&ndc_z));
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let projection = Projection {
            eye_offset: Vec3::ZERO,
            ..Projection::default()
        };
        let matrix = projection.matrix(800, 600);

        let near = matrix.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = matrix.project_point3(Vec3::new(0.0, 0.0, -10000.0));

        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn aspect_follows_viewport() {
        let projection = Projection::default();
        let wide = projection.matrix(1600, 800);
        let square = projection.matrix(800, 800);

        assert!((square.x_axis.x / wide.x_axis.x - 2.0).abs() < 1e-5);
        assert_eq!(square.y_axis.y, wide.y_axis.y);
    }
}
