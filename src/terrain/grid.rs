// src/terrain/grid.rs

use crate::{Error, Result};

/// Cell dimensions of a terrain grid on the XZ plane.
///
/// A grid of `x_size` by `z_size` cells has one more vertex than cells along
/// each axis; a zero along either axis is a valid degenerate grid (a single
/// row or column of vertices, no cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub x_size: i32,
    pub z_size: i32,
}

impl GridSize {
    pub fn new(x_size: i32, z_size: i32) -> Result<Self> {
        if x_size < 0 || z_size < 0 {
            return Err(Error::InvalidGridSize { x_size, z_size });
        }
        Ok(Self { x_size, z_size })
    }

    /// Vertices per grid row, `x_size + 1`.
    pub fn row_stride(&self) -> usize {
        self.x_size as usize + 1
    }

    pub fn vertex_count(&self) -> usize {
        (self.x_size as usize + 1) * (self.z_size as usize + 1)
    }

    /// Triangle index buffer length: 6 per cell.
    pub fn index_count(&self) -> usize {
        self.x_size as usize * self.z_size as usize * 6
    }

    /// Row-major vertex index for grid coordinate (x, z).
    pub fn vertex_index(&self, x: i32, z: i32) -> usize {
        debug_assert!(x >= 0 && x <= self.x_size && z >= 0 && z <= self.z_size);
        z as usize * self.row_stride() + x as usize
    }
}
