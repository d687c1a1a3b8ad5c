pub mod inspector;
pub mod surface;

pub use inspector::SurfaceInspector;
pub use surface::{
    configure, BlendFactor, Material, MaterialState, RenderQueue, RenderState, SurfaceType,
};
