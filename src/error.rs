// src/error.rs

use thiserror::Error;

/// Errors surfaced by terrain generation and material configuration.
///
/// Degenerate inputs that have a well-defined answer (a flat heightfield, a
/// zero-sized grid) are not errors; buffer/index mismatches at commit time are
/// contract violations and assert in debug builds instead of returning here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Grid dimensions must be non-negative.
    #[error("invalid grid size {x_size}x{z_size}: dimensions must be non-negative")]
    InvalidGridSize { x_size: i32, z_size: i32 },

    /// The material does not carry the expected float property.
    #[error("material is missing the `{name}` property")]
    MissingProperty { name: &'static str },

    /// The float-encoded surface type matches no known variant.
    #[error("unknown surface type value {value}")]
    UnknownSurfaceType { value: f32 },
}
