// src/material/inspector.rs

use log::debug;

use crate::material::surface::{configure, Material, SurfaceType, SURFACE_TYPE_PROP};
use crate::Result;

/// Host-editor callbacks for a material using the surface-type shader.
///
/// The host invokes these when a shader is assigned to a material, when it
/// flags the material for revalidation, and when the user changes the
/// surface-type selector. All three funnel into [`configure`], so the five
/// dependent render-state fields can never drift apart between entry points.
pub struct SurfaceInspector {
    shader_name: String,
}

impl SurfaceInspector {
    pub fn new(shader_name: impl Into<String>) -> Self {
        Self { shader_name: shader_name.into() }
    }

    /// A shader was assigned to the material. Only this inspector's own
    /// shader triggers configuration; other shaders manage their own state.
    pub fn on_shader_assigned(
        &self,
        material: &mut impl Material,
        new_shader_name: &str,
    ) -> Result<()> {
        if new_shader_name != self.shader_name {
            debug!("ignoring shader assignment of {new_shader_name}");
            return Ok(());
        }
        configure(material)
    }

    /// The host marked the material dirty or invalid.
    pub fn on_validate(&self, material: &mut impl Material) -> Result<()> {
        configure(material)
    }

    /// The user picked a new surface type in the editor widget: persist the
    /// float-encoded value, then reconfigure from it.
    pub fn on_surface_type_changed(
        &self,
        material: &mut impl Material,
        surface: SurfaceType,
    ) -> Result<()> {
        material.set_float(SURFACE_TYPE_PROP, surface.as_float());
        configure(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::surface::MaterialState;

    const SHADER: &str = "terragen/Surface";

    #[test]
    fn callbacks_converge_on_the_same_state() {
        let inspector = SurfaceInspector::new(SHADER);

        let mut via_assignment = MaterialState::new(SurfaceType::Transparent);
        inspector
            .on_shader_assigned(&mut via_assignment, SHADER)
            .unwrap();

        let mut via_validate = MaterialState::new(SurfaceType::Transparent);
        inspector.on_validate(&mut via_validate).unwrap();

        let mut via_widget = MaterialState::new(SurfaceType::Opaque);
        inspector
            .on_surface_type_changed(&mut via_widget, SurfaceType::Transparent)
            .unwrap();

        assert_eq!(via_assignment.ints, via_validate.ints);
        assert_eq!(via_assignment.ints, via_widget.ints);
        assert_eq!(via_assignment.tags, via_widget.tags);
        assert_eq!(via_assignment.render_queue, via_widget.render_queue);
        assert_eq!(via_assignment.enabled_passes, via_widget.enabled_passes);
    }

    #[test]
    fn foreign_shader_assignment_is_ignored() {
        let inspector = SurfaceInspector::new(SHADER);
        let mut m = MaterialState::new(SurfaceType::Transparent);

        inspector.on_shader_assigned(&mut m, "other/Shader").unwrap();
        assert!(m.render_queue.is_none(), "foreign shader must not reconfigure");
    }

    #[test]
    fn widget_change_persists_the_selector() {
        let inspector = SurfaceInspector::new(SHADER);
        let mut m = MaterialState::new(SurfaceType::Opaque);

        inspector
            .on_surface_type_changed(&mut m, SurfaceType::Transparent)
            .unwrap();
        assert_eq!(
            m.get_float(SURFACE_TYPE_PROP),
            Some(SurfaceType::Transparent.as_float())
        );
    }
}
