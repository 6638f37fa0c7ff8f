use wgpu::{
    DepthBiasState, MultisampleState, PipelineCompilationOptions, RenderPass,
    RenderPassDescriptor, StencilState,
};

use crate::{
    geometry::Topology,
    rendering::{
        model_uniform::ModelUniform,
        render_common::RenderCommon,
        render_mesh::{self, COLOR_VBL, POSITION_VBL},
        shader_loader::{self, ShaderDefinition},
        texture::DepthTexture,
    },
};

/// Flat-colored, unlit triangles with depth testing.
pub struct FlatPass {
    pipeline: wgpu::RenderPipeline,
    projection_bind_group: wgpu::BindGroup,
    pub model_bind_group_layout: wgpu::BindGroupLayout,
}

pub struct FlatPassTextureViews {
    pub color: wgpu::TextureView,
    pub depth: wgpu::TextureView,
}

const FLAT_SHADER: ShaderDefinition = ShaderDefinition {
    name: "Flat Shader",
    source: include_str!("../../shaders/flat.wgsl"),
};

impl FlatPass {
    pub const TOPOLOGY: Topology = Topology::TriangleList;

    pub fn create(device: &wgpu::Device, common: &RenderCommon) -> anyhow::Result<Self> {
        let projection_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Projection bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let projection_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Projection bind group"),
            layout: &projection_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: common.projection_uniform_buffer.as_entire_binding(),
            }],
        });

        let model_bind_group_layout = ModelUniform::create_bind_group_layout(device);

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Flat shader render pipeline layout"),
                bind_group_layouts: &[&projection_bind_group_layout, &model_bind_group_layout],
                push_constant_ranges: &[],
            });

        let format = common.output_surface_config.format;

        let pipeline = shader_loader::create_pipeline(
            device,
            &FLAT_SHADER,
            |device: &wgpu::Device, _shader_def: &ShaderDefinition, shader: &wgpu::ShaderModule| {
                device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some("Flat shader render pipeline"),
                    layout: Some(&render_pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: shader,
                        entry_point: Some("vs_main"),
                        buffers: &[POSITION_VBL, COLOR_VBL],
                        compilation_options: PipelineCompilationOptions::default(),
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: shader,
                        entry_point: Some("fs_main"),
                        targets: &[Some(wgpu::ColorTargetState {
                            format,
                            blend: Some(wgpu::BlendState::REPLACE),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                        compilation_options: PipelineCompilationOptions::default(),
                    }),
                    primitive: render_mesh::primitive_state(Self::TOPOLOGY),
                    depth_stencil: Some(wgpu::DepthStencilState {
                        format: DepthTexture::DEPTH_FORMAT,
                        depth_write_enabled: true,
                        depth_compare: wgpu::CompareFunction::Less,
                        stencil: StencilState::default(),
                        bias: DepthBiasState::default(),
                    }),
                    multisample: MultisampleState::default(),
                    multiview: None,
                    cache: None,
                })
            },
        )?;

        Ok(Self {
            pipeline,
            projection_bind_group,
            model_bind_group_layout,
        })
    }

    pub fn render<'a, F>(
        &self,
        texture_views: &FlatPassTextureViews,
        encoder: &mut wgpu::CommandEncoder,
        clear_color: wgpu::Color,
        render_callback: F,
    ) where
        F: FnOnce(&mut RenderPass) + 'a,
    {
        let mut render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Flat Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &texture_views.color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &texture_views.depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.projection_bind_group, &[]);
        render_callback(&mut render_pass);
    }
}
