use glam::Mat4;

use crate::scene_graph::{ObjectId, Scene, SceneMeshId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub object: ObjectId,
    pub mesh: SceneMeshId,
    pub model: Mat4,
    pub index_count: u32,
}

/// One indexed draw per scene object, in scene order.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn gather(scene: &Scene) -> Self {
        let commands = scene
            .objects
            .iter()
            .filter_map(|(object_id, object)| {
                let Some(scene_mesh) = scene.get_mesh(object.mesh_id) else {
                    log::warn!("Object {} refers to a missing mesh", object.name);
                    return None;
                };

                Some(DrawCommand {
                    object: object_id,
                    mesh: object.mesh_id,
                    model: object.transform.matrix(),
                    index_count: scene_mesh.mesh.index_count(),
                })
            })
            .collect();

        Self { commands }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
