// Reference solids. The tables are authored by hand and must stay exactly as they are:
// positions are laid out face by face, and the per-face vertex counts line up with that layout.

use crate::geometry::mesh::MeshCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Pyramid,
    Scutoid,
    Octahedron,
}

impl ShapeKind {
    #[allow(dead_code)]
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Pyramid, ShapeKind::Scutoid, ShapeKind::Octahedron];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::Scutoid => "Scutoid",
            ShapeKind::Octahedron => "Octahedron",
        }
    }

    pub fn descriptor(self) -> &'static ShapeDescriptor {
        match self {
            ShapeKind::Pyramid => &PYRAMID,
            ShapeKind::Scutoid => &SCUTOID,
            ShapeKind::Octahedron => &OCTAHEDRON,
        }
    }
}

pub struct ShapeDescriptor {
    pub positions: &'static [[f32; 3]],
    pub face_colors: &'static [[f32; 4]],
    pub face_vertex_counts: &'static [usize],
    pub indices: &'static [u16],
    /// Counts as recorded alongside the tables in the source data.
    pub reference_counts: MeshCounts,
}

pub static PYRAMID: ShapeDescriptor = ShapeDescriptor {
    positions: &[
        // Pentagonal base
        [-1.0, -2.0, 0.0],
        [1.0, -2.0, 0.0],
        [0.0, 0.0, 0.0],
        [-1.5, 0.0, 0.0],
        [0.0, 1.5, 0.0],
        [1.5, 0.0, 0.0],
        // Sides
        [-1.5, 0.0, 0.0],
        [0.0, 1.5, 0.0],
        [0.0, 0.0, 2.0],
        [0.0, 1.5, 0.0],
        [1.5, 0.0, 0.0],
        [0.0, 0.0, 2.0],
        [1.5, 0.0, 0.0],
        [1.0, -2.0, 0.0],
        [0.0, 0.0, 2.0],
        [1.0, -2.0, 0.0],
        [-1.0, -2.0, 0.0],
        [0.0, 0.0, 2.0],
        [-1.0, -2.0, 0.0],
        [-1.5, 0.0, 0.0],
        [0.0, 0.0, 2.0],
    ],
    face_colors: &[
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 1.0],
    ],
    face_vertex_counts: &[6, 3, 3, 3, 3, 3],
    indices: &[
        0, 1, 2, 0, 2, 3, 3, 2, 4, 4, 2, 5, 1, 2, 5, // base
        6, 7, 8, //
        9, 10, 11, //
        12, 13, 14, //
        15, 16, 17, //
        18, 19, 20,
    ],
    reference_counts: MeshCounts {
        vertices: 21,
        colors: 20,
        indices: 30,
    },
};

pub static SCUTOID: ShapeDescriptor = ShapeDescriptor {
    positions: &[
        // Hexagonal top, fanned around its centre (index 2)
        [-1.0, 2.0, -1.5],
        [1.0, 2.0, -1.5],
        [0.0, 2.0, 0.0],
        [2.0, 2.0, 0.0],
        [1.0, 2.0, 1.5],
        [-1.0, 2.0, 1.5],
        [-2.0, 2.0, 0.0],
        // Pentagonal bottom, fanned around its centre (index 9)
        [-1.0, -2.0, -1.5],
        [1.0, -2.0, -1.5],
        [0.0, -2.0, 0.0],
        [2.0, -2.0, 0.0],
        [0.0, -2.0, 1.5],
        [-2.0, -2.0, 0.0],
        // Back rectangle
        [-1.0, 2.0, -1.5],
        [1.0, 2.0, -1.5],
        [1.0, -2.0, -1.5],
        [-1.0, -2.0, -1.5],
        // Right back rectangle
        [1.0, 2.0, -1.5],
        [2.0, 2.0, 0.0],
        [2.0, -2.0, 0.0],
        [1.0, -2.0, -1.5],
        // Front triangle
        [-1.0, 2.0, 1.5],
        [1.0, 2.0, 1.5],
        [0.0, 0.7, 1.5],
        // Right front face
        [0.0, -2.0, 1.5],
        [2.0, -2.0, 0.0],
        [0.0, 0.7, 1.5],
        [2.0, 0.7, 0.0],
        [1.0, 2.0, 1.5],
        [2.0, 2.0, 0.0],
        // Left front face
        [0.0, -2.0, 1.5],
        [-2.0, -2.0, 0.0],
        [0.0, 0.7, 1.5],
        [-2.0, 0.7, 0.0],
        [-1.0, 2.0, 1.5],
        [-2.0, 2.0, 0.0],
        // Left back rectangle
        [-2.0, 2.0, 0.0],
        [-1.0, 2.0, -1.5],
        [-2.0, -2.0, 0.0],
        [-1.0, -2.0, -1.5],
    ],
    face_colors: &[
        [0.180, 0.282, 0.760, 1.0],
        [0.835, 0.376, 0.101, 1.0],
        [0.760, 0.180, 0.180, 1.0],
        [0.525, 0.078, 0.741, 1.0],
        [0.776, 0.772, 0.023, 1.0],
        [0.929, 0.490, 0.858, 1.0],
        [0.109, 0.549, 0.709, 1.0],
        [0.090, 0.588, 0.345, 1.0],
    ],
    face_vertex_counts: &[7, 6, 4, 4, 3, 6, 6, 4],
    indices: &[
        0, 1, 2, 1, 2, 3, 3, 2, 4, 4, 2, 5, 5, 2, 6, 6, 2, 0, //
        7, 8, 9, 8, 9, 10, 10, 9, 11, 11, 9, 12, 12, 9, 7, //
        13, 14, 15, 13, 15, 16, //
        17, 18, 20, 20, 19, 18, //
        21, 22, 23, //
        24, 25, 26, 26, 27, 25, 26, 28, 29, 26, 27, 29, //
        30, 31, 32, 32, 33, 31, 32, 34, 35, 32, 33, 35, //
        36, 37, 38, 37, 38, 39,
    ],
    reference_counts: MeshCounts {
        vertices: 40,
        colors: 40,
        indices: 78,
    },
};

pub static OCTAHEDRON: ShapeDescriptor = ShapeDescriptor {
    positions: &[
        // Upper half
        [-1.5, 0.0, 0.0],
        [0.0, 0.0, 1.5],
        [0.0, 1.5, 0.0],
        [0.0, 0.0, 1.5],
        [1.5, 0.0, 0.0],
        [0.0, 1.5, 0.0],
        [1.5, 0.0, 0.0],
        [0.0, 0.0, -1.5],
        [0.0, 1.5, 0.0],
        [0.0, 0.0, -1.5],
        [-1.5, 0.0, 0.0],
        [0.0, 1.5, 0.0],
        // Lower half
        [-1.5, 0.0, 0.0],
        [0.0, 0.0, 1.5],
        [0.0, -1.5, 0.0],
        [0.0, 0.0, 1.5],
        [1.5, 0.0, 0.0],
        [0.0, -1.5, 0.0],
        [1.5, 0.0, 0.0],
        [0.0, 0.0, -1.5],
        [0.0, -1.5, 0.0],
        [0.0, 0.0, -1.5],
        [-1.5, 0.0, 0.0],
        [0.0, -1.5, 0.0],
    ],
    face_colors: &[
        [1.0, 0.0, 0.0, 1.0],
        [0.847, 0.760, 0.411, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.721, 0.721, 0.721, 1.0],
        [0.035, 0.443, 0.117, 1.0],
        [0.929, 0.490, 0.858, 1.0],
        [0.964, 0.376, 0.192, 1.0],
        [0.443, 0.035, 0.360, 1.0],
    ],
    face_vertex_counts: &[3; 8],
    indices: &[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    ],
    reference_counts: MeshCounts {
        vertices: 24,
        colors: 24,
        indices: 24,
    },
};
