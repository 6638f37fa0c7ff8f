pub mod render_object;
pub mod scene;
pub mod scene_mesh;
pub mod spin;
pub mod transform;

pub use render_object::ObjectId;
pub use scene::Scene;
pub use scene_mesh::SceneMeshId;
