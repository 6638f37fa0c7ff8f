use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use glam::Vec3;
use id_arena::Arena;

use crate::geometry::{Mesh, ShapeKind};
use crate::scene_graph::render_object::{ObjectId, RenderObject};
use crate::scene_graph::scene_mesh::{SceneMesh, SceneMeshId};
use crate::scene_graph::spin::{self, SPIN_PERIOD};

/// Objects in draw order, plus the meshes they share.
pub struct Scene {
    pub objects: Arena<RenderObject>,
    pub meshes: Arena<SceneMesh>,
    spin_period: Duration,
    shape_to_mesh: HashMap<ShapeKind, SceneMeshId>,
}

impl Scene {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_spin_period(SPIN_PERIOD)
    }

    pub fn with_spin_period(spin_period: Duration) -> Self {
        Self {
            objects: Arena::new(),
            meshes: Arena::new(),
            spin_period,
            shape_to_mesh: HashMap::new(),
        }
    }

    pub fn add_object(&mut self, object: RenderObject) -> ObjectId {
        self.objects.alloc(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&RenderObject> {
        self.objects.get(id)
    }

    pub fn get_mesh(&self, id: SceneMeshId) -> Option<&SceneMesh> {
        self.meshes.get(id)
    }

    #[allow(dead_code)]
    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Builds (or reuses) the mesh for `kind` and places a new object using it.
    pub fn spawn_shape(
        &mut self,
        kind: ShapeKind,
        translation: Vec3,
        rotation_axis: Vec3,
        now: Instant,
    ) -> anyhow::Result<ObjectId> {
        let mesh_id = match self.shape_to_mesh.get(&kind).copied() {
            Some(mesh_id) => mesh_id,
            None => {
                let mesh = Mesh::from_shape(kind);
                if cfg!(debug_assertions) {
                    mesh.validate()?;
                }

                let mesh_id = self.meshes.alloc(SceneMesh::new(mesh));
                self.shape_to_mesh.insert(kind, mesh_id);
                mesh_id
            }
        };

        let object = RenderObject::new(kind.name(), mesh_id, translation, rotation_axis, now);

        Ok(self.add_object(object))
    }

    /// Spins every object forward to `now`.
    pub fn update(&mut self, now: Instant) {
        for (_, object) in self.objects.iter_mut() {
            spin::update(object, now, self.spin_period);
        }
    }

    /// Marks every object as last updated at `now`, so the next update only spins by the time since then.
    pub fn restart_clock(&mut self, now: Instant) {
        for (_, object) in self.objects.iter_mut() {
            object.last_update = now;
        }
    }
}
