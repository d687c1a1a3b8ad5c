// src/terrain/mesh.rs

use nalgebra::Vector3;

/// The three parallel buffers one generation pass produces. Always committed
/// to a renderable mesh as a unit; a renderer must never see vertices without
/// the matching indices and colors.
#[derive(Clone, Debug, Default)]
pub struct TerrainMesh {
    pub vertices: Vec<Vector3<f32>>,
    pub indices: Vec<u32>,
    pub colors: Vec<[f32; 4]>,
}

/// The host's renderable mesh object. The engine implements this; `CpuMesh`
/// is an in-crate implementation for headless use and tests.
pub trait RenderMesh {
    fn clear(&mut self);
    fn set_vertices(&mut self, vertices: Vec<Vector3<f32>>);
    fn set_indices(&mut self, indices: Vec<u32>);
    fn set_colors(&mut self, colors: Vec<[f32; 4]>);
    fn recalculate_normals(&mut self);
}

impl TerrainMesh {
    /// Pushes all three buffers onto the host mesh as one clear-then-set
    /// update, followed by a normal recalculation.
    ///
    /// A malformed buffer set (out-of-range index, non-parallel buffers,
    /// index count not a multiple of 3) is a contract violation by the
    /// producer, asserted in debug builds rather than reported.
    pub fn commit<M: RenderMesh>(&self, mesh: &mut M) {
        debug_assert_eq!(self.colors.len(), self.vertices.len());
        debug_assert_eq!(self.indices.len() % 3, 0);
        debug_assert!(
            self.indices.iter().all(|&i| (i as usize) < self.vertices.len()),
            "triangle index out of range"
        );

        mesh.clear();
        mesh.set_vertices(self.vertices.clone());
        mesh.set_indices(self.indices.clone());
        mesh.set_colors(self.colors.clone());
        mesh.recalculate_normals();
    }
}

/// A plain in-memory mesh with real normal recalculation.
#[derive(Clone, Debug, Default)]
pub struct CpuMesh {
    pub vertices: Vec<Vector3<f32>>,
    pub indices: Vec<u32>,
    pub colors: Vec<[f32; 4]>,
    pub normals: Vec<Vector3<f32>>,
}

impl CpuMesh {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderMesh for CpuMesh {
    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.colors.clear();
        self.normals.clear();
    }

    fn set_vertices(&mut self, vertices: Vec<Vector3<f32>>) {
        self.vertices = vertices;
    }

    fn set_indices(&mut self, indices: Vec<u32>) {
        self.indices = indices;
    }

    fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        self.colors = colors;
    }

    // Accumulates area-weighted face normals per vertex, then normalizes.
    // Degenerate faces contribute a zero cross product and drop out.
    fn recalculate_normals(&mut self) {
        self.normals = vec![Vector3::zeros(); self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let edge1 = self.vertices[b] - self.vertices[a];
            let edge2 = self.vertices[c] - self.vertices[a];
            let face = edge1.cross(&edge2);

            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }

        for normal in &mut self.normals {
            let len = normal.norm();
            if len > f32::EPSILON {
                *normal /= len;
            }
        }
    }
}
