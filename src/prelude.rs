// src/prelude.rs
//! A convenient prelude re-exporting the common types.

pub use crate::error::Error;
pub use crate::material::{configure, Material, MaterialState, SurfaceInspector, SurfaceType};
pub use crate::terrain::{
    ColorRamp, CpuMesh, GridSize, MeshGenerator, Noise2D, PerlinNoise, RenderMesh, TerrainMesh,
};
