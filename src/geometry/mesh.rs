use glam::{Vec3, Vec4};
use itertools::Itertools;

use crate::geometry::shapes::{ShapeDescriptor, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshCounts {
    pub vertices: usize,
    pub colors: usize,
    pub indices: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    TriangleList,
}

pub struct Mesh {
    pub name: String,
    pub positions: Vec<Vec3>,
    #[allow(dead_code)]
    pub face_colors: Vec<Vec4>,
    /// One color per vertex, each face color repeated once per vertex of that face.
    pub vertex_colors: Vec<Vec4>,
    pub indices: Vec<u16>,
    pub topology: Topology,
    pub reference_counts: MeshCounts,
}

impl Mesh {
    pub fn from_shape(kind: ShapeKind) -> Mesh {
        Self::from_descriptor(kind.name(), kind.descriptor())
    }

    pub fn from_descriptor(name: impl Into<String>, descriptor: &ShapeDescriptor) -> Mesh {
        let positions = descriptor
            .positions
            .iter()
            .copied()
            .map(Vec3::from)
            .collect::<Vec<_>>();

        let face_colors = descriptor
            .face_colors
            .iter()
            .copied()
            .map(Vec4::from)
            .collect::<Vec<_>>();

        // Colors without a matching vertex count contribute nothing.
        let vertex_colors = face_colors
            .iter()
            .zip(descriptor.face_vertex_counts)
            .flat_map(|(&color, &count)| itertools::repeat_n(color, count))
            .collect::<Vec<_>>();

        let mesh = Mesh {
            name: name.into(),
            positions,
            face_colors,
            vertex_colors,
            indices: descriptor.indices.to_vec(),
            topology: Topology::TriangleList,
            reference_counts: descriptor.reference_counts,
        };

        let counts = mesh.counts();
        if counts != mesh.reference_counts {
            log::debug!(
                "{}: reference data lists {:?}, tables produce {:?}",
                mesh.name,
                mesh.reference_counts,
                counts
            );
        }

        mesh
    }

    pub fn counts(&self) -> MeshCounts {
        MeshCounts {
            vertices: self.positions.len(),
            colors: self.vertex_colors.len(),
            indices: self.indices.len(),
        }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.vertex_colors.len() != self.positions.len() {
            return Err(anyhow::anyhow!(
                "{}: {} vertex colors for {} vertices",
                self.name,
                self.vertex_colors.len(),
                self.positions.len()
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(anyhow::anyhow!(
                "{}: index count {} is not a multiple of 3",
                self.name,
                self.indices.len()
            ));
        }

        if let Some((position, index)) = self
            .indices
            .iter()
            .find_position(|&&index| index as usize >= self.positions.len())
        {
            return Err(anyhow::anyhow!(
                "{}: index {} at position {} is out of range ({} vertices)",
                self.name,
                index,
                position,
                self.positions.len()
            ));
        }

        Ok(())
    }

    #[allow(dead_code)]
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|triangle| {
            [
                self.positions[triangle[0] as usize],
                self.positions[triangle[1] as usize],
                self.positions[triangle[2] as usize],
            ]
        })
    }
}
