// src/material/surface.rs

use std::collections::HashMap;

use log::debug;

use crate::{Error, Result};

/// Name of the float-encoded surface-type property on the material.
pub const SURFACE_TYPE_PROP: &str = "_SurfaceType";

const SOURCE_BLEND_PROP: &str = "_SourceBlend";
const DEST_BLEND_PROP: &str = "_DestBlend";
const ZWRITE_PROP: &str = "_ZWrite";
const RENDER_TYPE_TAG: &str = "RenderType";
const SHADOW_CASTER_PASS: &str = "ShadowCaster";

/// How a material's surface composites against the scene. Float-encoded on
/// the material as `_SurfaceType` (0.0 or 1.0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SurfaceType {
    #[default]
    Opaque,
    Transparent,
}

impl SurfaceType {
    pub fn from_float(value: f32) -> Result<Self> {
        match value as i32 {
            0 => Ok(Self::Opaque),
            1 => Ok(Self::Transparent),
            _ => Err(Error::UnknownSurfaceType { value }),
        }
    }

    pub fn as_float(self) -> f32 {
        self as i32 as f32
    }

    /// The full render state this surface type implies. Kept as an explicit
    /// table: a wrong tuple here (say, shadow casting left on for a blended
    /// surface) renders visibly wrong.
    pub fn render_state(self) -> RenderState {
        match self {
            Self::Opaque => RenderState {
                queue: RenderQueue::Geometry,
                render_type: "Opaque",
                src_blend: BlendFactor::One,
                dst_blend: BlendFactor::Zero,
                depth_write: true,
                shadow_caster: true,
            },
            Self::Transparent => RenderState {
                queue: RenderQueue::Transparent,
                render_type: "Transparent",
                src_blend: BlendFactor::SrcAlpha,
                dst_blend: BlendFactor::OneMinusSrcAlpha,
                depth_write: false,
                shadow_caster: false,
            },
        }
    }
}

/// Draw-order buckets of the host renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderQueue {
    Geometry = 2000,
    AlphaTest = 2450,
    Transparent = 3000,
}

/// Fixed-function blend factors, numbered as the host GPU abstraction
/// numbers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    SrcAlpha = 5,
    OneMinusSrcAlpha = 10,
}

/// The dependent render-state fields a surface type determines. Always
/// written as a whole so the material never mixes, say, the transparent
/// queue with opaque blending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderState {
    pub queue: RenderQueue,
    pub render_type: &'static str,
    pub src_blend: BlendFactor,
    pub dst_blend: BlendFactor,
    pub depth_write: bool,
    pub shadow_caster: bool,
}

/// The host material object, seen through the narrow slice of its property
/// model the configurator touches.
pub trait Material {
    fn get_float(&self, name: &str) -> Option<f32>;
    fn set_float(&mut self, name: &str, value: f32);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_render_queue(&mut self, queue: RenderQueue);
    fn set_override_tag(&mut self, key: &str, value: &str);
    fn set_pass_enabled(&mut self, pass: &str, enabled: bool);
}

/// Reads the material's surface type and pushes the implied render state
/// onto it. All five dependent fields are written on every call.
pub fn configure(material: &mut impl Material) -> Result<()> {
    let value = material
        .get_float(SURFACE_TYPE_PROP)
        .ok_or(Error::MissingProperty { name: SURFACE_TYPE_PROP })?;
    let surface = SurfaceType::from_float(value)?;
    let state = surface.render_state();

    debug!("configuring material for {surface:?}");

    material.set_render_queue(state.queue);
    material.set_override_tag(RENDER_TYPE_TAG, state.render_type);
    material.set_int(SOURCE_BLEND_PROP, state.src_blend as i32);
    material.set_int(DEST_BLEND_PROP, state.dst_blend as i32);
    material.set_int(ZWRITE_PROP, state.depth_write as i32);
    material.set_pass_enabled(SHADOW_CASTER_PASS, state.shadow_caster);
    Ok(())
}

/// Plain property-bag material, for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct MaterialState {
    pub floats: HashMap<String, f32>,
    pub ints: HashMap<String, i32>,
    pub tags: HashMap<String, String>,
    pub enabled_passes: HashMap<String, bool>,
    pub render_queue: Option<RenderQueue>,
}

impl MaterialState {
    pub fn new(surface: SurfaceType) -> Self {
        let mut state = Self::default();
        state.set_float(SURFACE_TYPE_PROP, surface.as_float());
        state
    }
}

impl Material for MaterialState {
    fn get_float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_owned(), value);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.ints.insert(name.to_owned(), value);
    }

    fn set_render_queue(&mut self, queue: RenderQueue) {
        self.render_queue = Some(queue);
    }

    fn set_override_tag(&mut self, key: &str, value: &str) {
        self.tags.insert(key.to_owned(), value.to_owned());
    }

    fn set_pass_enabled(&mut self, pass: &str, enabled: bool) {
        self.enabled_passes.insert(pass.to_owned(), enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed_tuple(m: &MaterialState) -> (RenderQueue, String, i32, i32, i32, bool) {
        (
            m.render_queue.unwrap(),
            m.tags[RENDER_TYPE_TAG].clone(),
            m.ints[SOURCE_BLEND_PROP],
            m.ints[DEST_BLEND_PROP],
            m.ints[ZWRITE_PROP],
            m.enabled_passes[SHADOW_CASTER_PASS],
        )
    }

    #[test]
    fn opaque_tuple() {
        let mut m = MaterialState::new(SurfaceType::Opaque);
        configure(&mut m).unwrap();
        assert_eq!(
            observed_tuple(&m),
            (RenderQueue::Geometry, "Opaque".to_owned(), 1, 0, 1, true)
        );
    }

    #[test]
    fn transparent_tuple() {
        let mut m = MaterialState::new(SurfaceType::Transparent);
        configure(&mut m).unwrap();
        assert_eq!(
            observed_tuple(&m),
            (RenderQueue::Transparent, "Transparent".to_owned(), 5, 10, 0, false)
        );
    }

    #[test]
    fn only_fixed_tuples_observable() {
        // Whatever sequence of reconfigurations runs, the material ends in
        // one of exactly two consistent states.
        let consistent = [
            (RenderQueue::Geometry, "Opaque".to_owned(), 1, 0, 1, true),
            (RenderQueue::Transparent, "Transparent".to_owned(), 5, 10, 0, false),
        ];

        let mut m = MaterialState::new(SurfaceType::Opaque);
        for surface in [
            SurfaceType::Transparent,
            SurfaceType::Opaque,
            SurfaceType::Transparent,
        ] {
            m.set_float(SURFACE_TYPE_PROP, surface.as_float());
            configure(&mut m).unwrap();
            assert!(consistent.contains(&observed_tuple(&m)));
        }
    }

    #[test]
    fn missing_property_is_an_error() {
        let mut m = MaterialState::default();
        assert_eq!(
            configure(&mut m),
            Err(Error::MissingProperty { name: SURFACE_TYPE_PROP })
        );
    }

    #[test]
    fn unknown_surface_value_is_an_error() {
        let mut m = MaterialState::default();
        m.set_float(SURFACE_TYPE_PROP, 7.0);
        assert_eq!(
            configure(&mut m),
            Err(Error::UnknownSurfaceType { value: 7.0 })
        );
    }

    #[test]
    fn float_round_trip() {
        for surface in [SurfaceType::Opaque, SurfaceType::Transparent] {
            assert_eq!(SurfaceType::from_float(surface.as_float()).unwrap(), surface);
        }
    }
}
