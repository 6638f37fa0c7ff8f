use glam::{Vec3, Vec4};
use id_arena::Id;
use wgpu::util::DeviceExt;

use crate::{
    geometry::{Mesh, Topology},
    rendering::model_uniform::ModelUniform,
};

pub type RenderMeshId = Id<RenderMesh>;

/// GPU copies of a mesh, uploaded once and never written again.
pub struct RenderMesh {
    pub position_buffer: wgpu::Buffer,
    pub color_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl RenderMesh {
    pub fn from_mesh(device: &wgpu::Device, mesh: &Mesh) -> Self {
        let position_buffer_name = format!("Position buffer ({})", mesh.name);
        let color_buffer_name = format!("Color buffer ({})", mesh.name);
        let index_buffer_name = format!("Index buffer ({})", mesh.name);

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&position_buffer_name),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&color_buffer_name),
            contents: bytemuck::cast_slice(&mesh.vertex_colors),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&index_buffer_name),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            position_buffer,
            color_buffer,
            index_buffer,
            num_indices: mesh.index_count(),
        }
    }
}

/// Binds the mesh and its object's model uniform, then issues one indexed draw.
pub fn draw_mesh(
    render_pass: &mut wgpu::RenderPass<'_>,
    render_mesh: &RenderMesh,
    model_uniform: &ModelUniform,
    index_count: u32,
) {
    debug_assert_eq!(index_count, render_mesh.num_indices);

    render_pass.set_vertex_buffer(0, render_mesh.position_buffer.slice(..));
    render_pass.set_vertex_buffer(1, render_mesh.color_buffer.slice(..));
    render_pass.set_index_buffer(render_mesh.index_buffer.slice(..), INDEX_FORMAT);
    render_pass.set_bind_group(1, &model_uniform.bind_group, &[]);
    render_pass.draw_indexed(0..index_count, 0, 0..1);
}

pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

pub const POSITION_VBL: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vec3>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x3,
    }],
};

pub const COLOR_VBL: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vec4>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        offset: 0,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32x4,
    }],
};

pub fn primitive_state(topology: Topology) -> wgpu::PrimitiveState {
    let topology = match topology {
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
    };

    wgpu::PrimitiveState {
        topology,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        // Face winding in the reference tables is mixed.
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}
