pub mod generator;
pub mod grid;
pub mod mesh;

pub use generator::{
    ColorRamp, HeightField, HeightmapGenerator, MeshGenerator, Noise2D, PerlinNoise,
};
pub use grid::GridSize;
pub use mesh::{CpuMesh, RenderMesh, TerrainMesh};
