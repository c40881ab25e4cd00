use glam::Mat4;

use crate::color::Color;

use super::handles::{ProgramId, ShaderId, ShaderStage, TextureId, UniformLocation};

/// The slice of the OpenGL API the engine calls into.
///
/// Every method acts on the context that is current on the calling thread, so
/// a backend value must only be used from the thread that owns that context.
/// Implementations do not check GL errors; the frame loop relies on link-time
/// validation instead.
pub trait GlBackend {
    // Shader stages.
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, String>;
    fn shader_source(&self, shader: ShaderId, source: &str);
    fn compile_shader(&self, shader: ShaderId);
    fn shader_compile_status(&self, shader: ShaderId) -> bool;
    fn shader_info_log(&self, shader: ShaderId) -> String;
    fn delete_shader(&self, shader: ShaderId);

    // Programs.
    fn create_program(&self) -> Result<ProgramId, String>;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);
    fn link_program(&self, program: ProgramId);
    fn program_link_status(&self, program: ProgramId) -> bool;
    fn program_info_log(&self, program: ProgramId) -> String;
    fn delete_program(&self, program: ProgramId);
    fn use_program(&self, program: Option<ProgramId>);

    // Uniforms. A `None` location is silently ignored, matching GL's `-1`.
    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation>;
    fn uniform_mat4(&self, location: Option<&UniformLocation>, value: &Mat4);
    fn uniform_f32(&self, location: Option<&UniformLocation>, value: f32);
    fn uniform_i32(&self, location: Option<&UniformLocation>, value: i32);

    // Textures.
    /// Selects texture unit `unit` (0-based, i.e. `GL_TEXTURE0 + unit`).
    fn active_texture(&self, unit: u32);
    fn bind_texture_2d(&self, texture: Option<TextureId>);

    // Fixed-function state.
    fn enable_depth_test(&self);
    fn clear_color(&self, color: Color);
    /// Clears both the color and the depth buffer.
    fn clear(&self);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
}
