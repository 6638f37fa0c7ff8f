pub mod mesh;
pub mod shapes;

pub use mesh::{Mesh, Topology};
pub use shapes::ShapeKind;
