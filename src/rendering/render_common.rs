use anyhow::Context;

use crate::camera::{Projection, ProjectionUniform};

pub struct RenderCommon {
    pub output_surface_config: wgpu::SurfaceConfiguration,
    /// Written once at startup; there is no resize handling.
    pub projection_uniform_buffer: wgpu::Buffer,
}

impl RenderCommon {
    pub fn new(
        device: &wgpu::Device,
        adapter: &wgpu::Adapter,
        surface: &wgpu::Surface,
        width: u32,
        height: u32,
        projection: &Projection,
    ) -> anyhow::Result<Self> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = pick_surface_format(&surface_caps.formats)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .context("Surface reports no alpha modes")?;

        let output_surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(device, &output_surface_config);

        let projection_uniform_buffer =
            ProjectionUniform::new(projection, width, height).create_buffer(device);

        Ok(Self {
            output_surface_config,
            projection_uniform_buffer,
        })
    }
}

/// Face colors are authored as display values, so prefer a format without the sRGB encode.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> anyhow::Result<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first())
        .copied()
        .context("Surface reports no supported formats")
}
