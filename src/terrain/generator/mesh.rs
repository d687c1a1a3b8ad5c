// src/terrain/generator/mesh.rs

use log::info;
use nalgebra::Vector3;

use crate::terrain::{
    generator::{HeightField, HeightmapGenerator, Noise2D, PerlinNoise},
    grid::GridSize,
    mesh::{RenderMesh, TerrainMesh},
};
use crate::Result;

/// A color ramp sampled at a normalized height in [0, 1].
///
/// The host supplies this; `colorgrad::Gradient` works directly, as does any
/// closure returning RGBA components.
pub trait ColorRamp {
    fn sample(&self, t: f32) -> [f32; 4];
}

impl ColorRamp for colorgrad::Gradient {
    fn sample(&self, t: f32) -> [f32; 4] {
        let color = self.at(t as f64);
        [color.r as f32, color.g as f32, color.b as f32, color.a as f32]
    }
}

impl<F> ColorRamp for F
where
    F: Fn(f32) -> [f32; 4],
{
    fn sample(&self, t: f32) -> [f32; 4] {
        self(t)
    }
}

pub struct MeshGenerator<N: Noise2D> {
    heightmap: HeightmapGenerator<N>,
}

impl MeshGenerator<PerlinNoise> {
    pub fn new(seed: u32) -> Self {
        Self::with_noise(PerlinNoise::new(seed))
    }
}

impl<N: Noise2D> MeshGenerator<N> {
    pub fn with_noise(noise: N) -> Self {
        Self { heightmap: HeightmapGenerator::with_noise(noise) }
    }

    /// Builds the three parallel mesh buffers for an `x_size` by `z_size`
    /// cell grid: noise-displaced vertices, their triangulation, and
    /// per-vertex colors from the ramp.
    ///
    /// Degenerate grids (zero cells along either axis) yield the vertex
    /// row/column with an empty index buffer.
    pub fn build(&self, x_size: i32, z_size: i32, ramp: &impl ColorRamp) -> Result<TerrainMesh> {
        let size = GridSize::new(x_size, z_size)?;
        let field = self.heightmap.generate(size);

        let vertices = self.vertices(&field);
        let indices = self.triangulate(size);
        let colors = self.colorize(&field, ramp);

        info!(
            "built {}x{} terrain mesh: {} vertices, {} indices",
            x_size,
            z_size,
            vertices.len(),
            indices.len()
        );

        Ok(TerrainMesh { vertices, indices, colors })
    }

    /// Builds the mesh and commits it to the host mesh in one atomic
    /// clear-then-set pass. Regeneration is just calling this again.
    pub fn build_into(
        &self,
        x_size: i32,
        z_size: i32,
        ramp: &impl ColorRamp,
        mesh: &mut impl RenderMesh,
    ) -> Result<()> {
        self.build(x_size, z_size, ramp)?.commit(mesh);
        Ok(())
    }

    fn vertices(&self, field: &HeightField) -> Vec<Vector3<f32>> {
        let size = field.size;
        let mut vertices = Vec::with_capacity(size.vertex_count());

        let mut i = 0;
        for z in 0..=size.z_size {
            for x in 0..=size.x_size {
                vertices.push(Vector3::new(x as f32, field.heights[i], z as f32));
                i += 1;
            }
        }

        vertices
    }

    // Two triangles per cell with a uniform winding across the whole grid.
    // The vertex cursor advances one per column and skips the final column's
    // vertex at each row boundary.
    fn triangulate(&self, size: GridSize) -> Vec<u32> {
        let mut indices = Vec::with_capacity(size.index_count());
        let stride = size.row_stride() as u32;

        let mut vert = 0u32;
        for _z in 0..size.z_size {
            for _x in 0..size.x_size {
                indices.extend([vert, vert + stride, vert + 1]);
                indices.extend([vert + 1, vert + stride, vert + stride + 1]);
                vert += 1;
            }
            vert += 1;
        }

        indices
    }

    fn colorize(&self, field: &HeightField, ramp: &impl ColorRamp) -> Vec<[f32; 4]> {
        (0..field.heights.len())
            .map(|i| ramp.sample(field.normalized(i)))
            .collect()
    }
}
