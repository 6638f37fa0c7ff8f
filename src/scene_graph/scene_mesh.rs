use id_arena::Id;

use crate::{geometry::Mesh, rendering::render_mesh::RenderMeshId};

pub type SceneMeshId = Id<SceneMesh>;

pub struct SceneMesh {
    pub mesh: Mesh,
    pub render_mesh: Option<RenderMeshId>,
}

impl SceneMesh {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            render_mesh: None,
        }
    }
}
