use std::time::Instant;

use glam::Vec3;
use id_arena::Id;

use crate::{
    rendering::model_uniform::ModelUniformId, scene_graph::scene_mesh::SceneMeshId,
    scene_graph::transform::Transform,
};

pub type ObjectId = Id<RenderObject>;

pub struct RenderObject {
    pub name: String,
    pub mesh_id: SceneMeshId,
    pub transform: Transform,
    /// Unit length, or zero for an object that does not spin.
    pub rotation_axis: Vec3,
    pub last_update: Instant,
    pub model_uniform: Option<ModelUniformId>,
}

impl RenderObject {
    pub fn new(
        name: impl Into<String>,
        mesh_id: SceneMeshId,
        translation: Vec3,
        rotation_axis: Vec3,
        created: Instant,
    ) -> Self {
        Self {
            name: name.into(),
            mesh_id,
            transform: Transform::from_translation(translation),
            rotation_axis: rotation_axis.normalize_or_zero(),
            last_update: created,
            model_uniform: None,
        }
    }
}
