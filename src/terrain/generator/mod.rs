mod heightmap;
mod mesh;

pub use heightmap::{
    HeightField, HeightmapGenerator, Noise2D, PerlinNoise, AMPLITUDE, FREQUENCY,
};
pub use mesh::{ColorRamp, MeshGenerator};
