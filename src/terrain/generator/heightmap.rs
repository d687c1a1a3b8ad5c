// src/terrain/generator/heightmap.rs

use log::debug;
use noise::{NoiseFn, Perlin};

use crate::terrain::grid::GridSize;

/// Noise frequency applied to grid coordinates before sampling.
pub const FREQUENCY: f32 = 0.3;
/// Scale applied to the raw [0, 1] noise sample to get a height.
pub const AMPLITUDE: f32 = 2.0;

/// A smooth 2D noise source with output in [0, 1].
///
/// Injected into the generator so tests can substitute a deterministic
/// function; any `Fn(f32, f32) -> f32` qualifies.
pub trait Noise2D {
    fn sample(&self, x: f32, z: f32) -> f32;
}

impl<F> Noise2D for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, x: f32, z: f32) -> f32 {
        self(x, z)
    }
}

/// Perlin noise remapped from the `noise` crate's [-1, 1] range into [0, 1].
#[derive(Clone, Copy)]
pub struct PerlinNoise {
    noise: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self { noise: Perlin::new(seed) }
    }
}

impl Noise2D for PerlinNoise {
    fn sample(&self, x: f32, z: f32) -> f32 {
        let raw = self.noise.get([x as f64, z as f64]) as f32;
        (raw * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

/// Row-major (z outer, x inner) grid of heights with the observed range.
pub struct HeightField {
    pub size: GridSize,
    pub heights: Vec<f32>,
    pub min_height: f32,
    pub max_height: f32,
}

impl HeightField {
    /// Height of the vertex at `index`, normalized into [0, 1] against the
    /// observed range. A flat field (min == max) normalizes to 0.0.
    pub fn normalized(&self, index: usize) -> f32 {
        let range = self.max_height - self.min_height;
        if range <= f32::EPSILON {
            return 0.0;
        }
        (self.heights[index] - self.min_height) / range
    }
}

pub struct HeightmapGenerator<N: Noise2D> {
    noise: N,
    frequency: f32,
    amplitude: f32,
}

impl HeightmapGenerator<PerlinNoise> {
    pub fn new(seed: u32) -> Self {
        Self::with_noise(PerlinNoise::new(seed))
    }
}

impl<N: Noise2D> HeightmapGenerator<N> {
    pub fn with_noise(noise: N) -> Self {
        Self {
            noise,
            frequency: FREQUENCY,
            amplitude: AMPLITUDE,
        }
    }

    /// Samples a height for every vertex of the grid, tracking the running
    /// minimum and maximum across the pass.
    pub fn generate(&self, size: GridSize) -> HeightField {
        let mut heights = Vec::with_capacity(size.vertex_count());
        let mut min_height = f32::INFINITY;
        let mut max_height = f32::NEG_INFINITY;

        for z in 0..=size.z_size {
            for x in 0..=size.x_size {
                let y = self.sample_height(x as f32, z as f32);

                if y > max_height {
                    max_height = y;
                }
                if y < min_height {
                    min_height = y;
                }
                heights.push(y);
            }
        }

        debug!(
            "generated {}x{} heightfield, range [{min_height}, {max_height}]",
            size.x_size, size.z_size
        );

        HeightField { size, heights, min_height, max_height }
    }

    fn sample_height(&self, x: f32, z: f32) -> f32 {
        self.noise.sample(x * self.frequency, z * self.frequency) * self.amplitude
    }
}
