// src/lib.rs

//! Heightmap-driven terrain meshing and surface-type material configuration.
//!
//! Two independent pieces: the `terrain` module synthesizes a noise-displaced
//! vertex grid with triangulation and height-gradient vertex colors, and the
//! `material` module maps a surface-type selector onto a consistent set of
//! render-state writes.

pub mod error;
pub mod material;
pub mod prelude;
pub mod terrain;

pub use error::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
