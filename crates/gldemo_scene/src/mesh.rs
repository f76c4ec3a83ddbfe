//! Demo geometry
//!
//! Vertex positions, texture coordinates and element indices for the square
//! and cube demos, ready to be handed to a buffer upload as raw bytes.

use serde::{Serialize, Deserialize};

/// How the vertex stream is assembled into triangles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    /// Each vertex after the second forms a triangle with the previous two
    TriangleStrip,
    /// Every three indices form one triangle
    Triangles,
}

/// Geometry for a single demo object
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates (u, v); empty for untextured meshes
    pub tex_coords: Vec<[f32; 2]>,
    /// Element indices; empty when drawing the vertex stream directly
    pub indices: Vec<u16>,
    /// Primitive assembly mode
    pub primitive: Primitive,
}

/// Unit texture square, repeated on every cube face
const FACE_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

impl Mesh {
    /// A flat 2x2 square in the z = 0 plane, drawn as a triangle strip
    pub fn square() -> Self {
        Self {
            positions: vec![
                [1.0, 1.0, 0.0],
                [-1.0, 1.0, 0.0],
                [1.0, -1.0, 0.0],
                [-1.0, -1.0, 0.0],
            ],
            tex_coords: Vec::new(),
            indices: Vec::new(),
            primitive: Primitive::TriangleStrip,
        }
    }

    /// A 2x2x2 cube with four vertices per face so each face gets the
    /// whole texture
    #[rustfmt::skip]
    pub fn textured_cube() -> Self {
        let positions = vec![
            // Front face
            [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0],
            // Back face
            [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0],
            // Top face
            [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0],
            // Bottom face
            [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0],
            // Right face
            [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0],
            // Left face
            [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0],
        ];

        let tex_coords = FACE_TEX_COORDS.repeat(6);

        // Two triangles per face: (0, 1, 2) and (0, 2, 3) offset by the face base
        let indices = (0..6u16)
            .flat_map(|face| {
                let base = face * 4;
                [base, base + 1, base + 2, base, base + 2, base + 3]
            })
            .collect();

        Self {
            positions,
            tex_coords,
            indices,
            primitive: Primitive::Triangles,
        }
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Count passed to the draw call: indices when indexed, vertices otherwise
    pub fn draw_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len()
        } else {
            self.indices.len()
        }
    }

    /// Whether the mesh carries texture coordinates
    #[inline]
    pub fn is_textured(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    /// Position buffer contents
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Texture-coordinate buffer contents
    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    /// Element buffer contents (u16 indices)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let square = Mesh::square();
        assert_eq!(square.vertex_count(), 4);
        assert_eq!(square.draw_count(), 4);
        assert_eq!(square.primitive, Primitive::TriangleStrip);
        assert!(!square.is_textured());
        assert!(square.positions.iter().all(|p| p[2] == 0.0));
    }

    #[test]
    fn test_cube_counts() {
        let cube = Mesh::textured_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.tex_coords.len(), 24);
        assert_eq!(cube.indices.len(), 36);
        assert_eq!(cube.draw_count(), 36);
        assert_eq!(cube.primitive, Primitive::Triangles);
        assert!(cube.is_textured());
    }

    #[test]
    fn test_cube_indices() {
        let cube = Mesh::textured_cube();
        assert_eq!(&cube.indices[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&cube.indices[30..], &[20, 21, 22, 20, 22, 23]);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertex_count()));
    }

    #[test]
    fn test_cube_faces_are_planar() {
        let cube = Mesh::textured_cube();
        for face in cube.positions.chunks(4) {
            // Each face shares one coordinate fixed at +/-1
            let planar = (0..3).any(|axis| face.iter().all(|p| p[axis] == face[0][axis]));
            assert!(planar, "face {:?} is not axis-aligned", face);
        }
    }

    #[test]
    fn test_byte_views() {
        let cube = Mesh::textured_cube();
        assert_eq!(cube.position_bytes().len(), 24 * 3 * 4);
        assert_eq!(cube.tex_coord_bytes().len(), 24 * 2 * 4);
        assert_eq!(cube.index_bytes().len(), 36 * 2);

        let square = Mesh::square();
        assert!(square.tex_coord_bytes().is_empty());
        assert!(square.index_bytes().is_empty());
    }
}
