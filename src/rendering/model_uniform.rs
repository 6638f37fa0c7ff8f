use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use id_arena::Id;
use wgpu::util::DeviceExt;

pub type ModelUniformId = Id<ModelUniform>;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ModelUniformState {
    pub model: Mat4,
}

/// Per-object model matrix. Each object has its own buffer so that every draw in a pass sees its own transform.
pub struct ModelUniform {
    buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl ModelUniform {
    pub fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Model uniform bind group layout"),
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
        })
    }

    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        name: &str,
        initial_state: ModelUniformState,
    ) -> Self {
        let buffer_name = format!("Model uniform buffer ({})", name);
        let bind_group_name = format!("Model uniform bind group ({})", name);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&buffer_name),
            contents: bytemuck::cast_slice(&[initial_state]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&bind_group_name),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }

    pub fn update(&self, queue: &wgpu::Queue, state: ModelUniformState) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[state]));
    }
}
