use crate::camera::Projection;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: wgpu::Color,
    pub projection: Projection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Spinning figures".to_string(),
            width: 1280,
            height: 720,
            clear_color: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            projection: Projection::default(),
        }
    }
}
