use crate::device::{GlBackend, ProgramId, TextureId};

use super::uniforms;

/// Ambient coefficient used by [`Material::with_default_ambient`].
pub const DEFAULT_AMBIENT_COEFFICIENT: f32 = 0.03;

/// Shading parameters and texture references for one renderable.
///
/// Texture slots are non-owning: the material never creates or deletes a
/// texture, it only remembers which one to bind. Whoever owns a texture calls
/// [`Material::remove_texture`] before deleting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    ambient_coefficient: f32,
    shininess: f32,
    diffuse: Option<TextureId>,
    specular: Option<TextureId>,
}

impl Material {
    pub fn new(
        diffuse: Option<TextureId>,
        specular: Option<TextureId>,
        shininess: f32,
        ambient_coefficient: f32,
    ) -> Self {
        Self {
            ambient_coefficient,
            shininess,
            diffuse,
            specular,
        }
    }

    pub fn with_default_ambient(
        diffuse: Option<TextureId>,
        specular: Option<TextureId>,
        shininess: f32,
    ) -> Self {
        Self::new(diffuse, specular, shininess, DEFAULT_AMBIENT_COEFFICIENT)
    }

    pub fn ambient_coefficient(&self) -> f32 {
        self.ambient_coefficient
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    pub fn diffuse(&self) -> Option<TextureId> {
        self.diffuse
    }

    pub fn specular(&self) -> Option<TextureId> {
        self.specular
    }

    /// Uploads this material's uniforms to `program` and binds its textures.
    ///
    /// Coefficients are always written. Each texture slot writes its `*_enabled`
    /// flag; only a set slot activates its unit, binds the texture and points the
    /// sampler at that unit.
    pub fn bind<G: GlBackend>(&self, gl: &G, program: ProgramId) {
        let location = gl.uniform_location(program, uniforms::AMBIENT_COEFFICIENT);
        gl.uniform_f32(location.as_ref(), self.ambient_coefficient);
        let location = gl.uniform_location(program, uniforms::SHININESS);
        gl.uniform_f32(location.as_ref(), self.shininess);

        bind_slot(
            gl,
            program,
            self.diffuse,
            uniforms::DIFFUSE_ENABLED,
            uniforms::DIFFUSE_TEXTURE,
            uniforms::DIFFUSE_UNIT,
        );

        log::debug!("specular_enabled {}", self.specular.is_some());
        bind_slot(
            gl,
            program,
            self.specular,
            uniforms::SPECULAR_ENABLED,
            uniforms::SPECULAR_TEXTURE,
            uniforms::SPECULAR_UNIT,
        );
    }

    /// Forgets `texture` in every slot that references it.
    ///
    /// Returns true if any slot was cleared.
    pub fn remove_texture(&mut self, texture: TextureId) -> bool {
        let mut removed = false;
        for slot in [&mut self.diffuse, &mut self.specular] {
            if *slot == Some(texture) {
                *slot = None;
                removed = true;
            }
        }
        removed
    }
}

fn bind_slot<G: GlBackend>(
    gl: &G,
    program: ProgramId,
    texture: Option<TextureId>,
    enabled_name: &str,
    sampler_name: &str,
    unit: u32,
) {
    let location = gl.uniform_location(program, enabled_name);
    gl.uniform_i32(location.as_ref(), i32::from(texture.is_some()));

    if let Some(texture) = texture {
        gl.active_texture(unit);
        gl.bind_texture_2d(Some(texture));
        let location = gl.uniform_location(program, sampler_name);
        gl.uniform_i32(location.as_ref(), unit as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GlCall, RecordingGl};

    fn tex(raw: u32) -> TextureId {
        TextureId::new(raw).unwrap()
    }

    fn program() -> ProgramId {
        ProgramId::new(9).unwrap()
    }

    #[test]
    fn coefficients_are_always_written() {
        let gl = RecordingGl::new();
        Material::new(None, None, 32.0, 0.1).bind(&gl, program());

        assert_eq!(gl.last_f32(uniforms::AMBIENT_COEFFICIENT), Some(0.1));
        assert_eq!(gl.last_f32(uniforms::SHININESS), Some(32.0));
    }

    #[test]
    fn unset_diffuse_disables_without_binding() {
        let gl = RecordingGl::new();
        Material::new(None, None, 32.0, 0.1).bind(&gl, program());

        assert_eq!(gl.last_i32(uniforms::DIFFUSE_ENABLED), Some(0));
        assert_eq!(gl.last_i32(uniforms::SPECULAR_ENABLED), Some(0));
        assert!(!gl.calls().iter().any(|c| matches!(
            c,
            GlCall::ActiveTexture(_) | GlCall::BindTexture2d(_)
        )));
        assert_eq!(gl.last_i32(uniforms::DIFFUSE_TEXTURE), None);
    }

    #[test]
    fn set_diffuse_binds_exactly_that_texture_to_unit_zero() {
        let gl = RecordingGl::new();
        Material::with_default_ambient(Some(tex(4)), None, 8.0).bind(&gl, program());

        let calls = gl.calls();
        let unit = calls
            .iter()
            .position(|c| *c == GlCall::ActiveTexture(0))
            .unwrap();
        assert_eq!(calls[unit + 1], GlCall::BindTexture2d(Some(tex(4))));
        assert_eq!(
            calls
                .iter()
                .filter(|c| matches!(c, GlCall::BindTexture2d(_)))
                .count(),
            1
        );
        assert_eq!(gl.last_i32(uniforms::DIFFUSE_ENABLED), Some(1));
        assert_eq!(gl.last_i32(uniforms::DIFFUSE_TEXTURE), Some(0));
        assert_eq!(
            gl.last_f32(uniforms::AMBIENT_COEFFICIENT),
            Some(DEFAULT_AMBIENT_COEFFICIENT)
        );
    }

    #[test]
    fn set_specular_uses_unit_one() {
        let gl = RecordingGl::new();
        Material::new(Some(tex(4)), Some(tex(5)), 8.0, 0.2).bind(&gl, program());

        let calls = gl.calls();
        let unit = calls
            .iter()
            .position(|c| *c == GlCall::ActiveTexture(1))
            .unwrap();
        assert_eq!(calls[unit + 1], GlCall::BindTexture2d(Some(tex(5))));
        assert_eq!(gl.last_i32(uniforms::SPECULAR_ENABLED), Some(1));
        assert_eq!(gl.last_i32(uniforms::SPECULAR_TEXTURE), Some(1));
    }

    #[test]
    fn remove_texture_clears_only_matching_slots() {
        let mut material = Material::new(Some(tex(4)), Some(tex(5)), 8.0, 0.2);

        assert!(material.remove_texture(tex(5)));
        assert_eq!(material.diffuse(), Some(tex(4)));
        assert_eq!(material.specular(), None);
    }

    #[test]
    fn remove_texture_clears_both_slots_sharing_an_id() {
        let mut material = Material::new(Some(tex(4)), Some(tex(4)), 8.0, 0.2);
        assert!(material.remove_texture(tex(4)));
        assert_eq!(material.diffuse(), None);
        assert_eq!(material.specular(), None);
    }

    #[test]
    fn remove_unknown_texture_is_a_no_op() {
        let mut material = Material::new(Some(tex(4)), None, 8.0, 0.2);
        let before = material.clone();
        assert!(!material.remove_texture(tex(99)));
        assert_eq!(material, before);
    }
}
