use glam::Mat4;
use glow::HasContext;

use crate::color::Color;

use super::backend::GlBackend;
use super::handles::{ProgramId, ShaderId, ShaderStage, TextureId, UniformLocation};

// SAFETY (all impls below): `glow::Context` is only constructed by
// `GlutinSurface::create` after the context has been made current on this thread,
// and the handles passed in were produced by the same context.

fn shader(id: ShaderId) -> glow::NativeShader {
    glow::NativeShader(id.raw())
}

fn program(id: ProgramId) -> glow::NativeProgram {
    glow::NativeProgram(id.raw())
}

fn location(loc: Option<&UniformLocation>) -> Option<glow::NativeUniformLocation> {
    loc.map(|l| glow::NativeUniformLocation(l.get()))
}

impl GlBackend for glow::Context {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        let native = unsafe { HasContext::create_shader(self, kind)? };
        Ok(ShaderId::from_raw(native.0))
    }

    fn shader_source(&self, id: ShaderId, source: &str) {
        unsafe { HasContext::shader_source(self, shader(id), source) }
    }

    fn compile_shader(&self, id: ShaderId) {
        unsafe { HasContext::compile_shader(self, shader(id)) }
    }

    fn shader_compile_status(&self, id: ShaderId) -> bool {
        unsafe { self.get_shader_compile_status(shader(id)) }
    }

    fn shader_info_log(&self, id: ShaderId) -> String {
        unsafe { self.get_shader_info_log(shader(id)) }
    }

    fn delete_shader(&self, id: ShaderId) {
        unsafe { HasContext::delete_shader(self, shader(id)) }
    }

    fn create_program(&self) -> Result<ProgramId, String> {
        let native = unsafe { HasContext::create_program(self)? };
        Ok(ProgramId::from_raw(native.0))
    }

    fn attach_shader(&self, p: ProgramId, s: ShaderId) {
        unsafe { HasContext::attach_shader(self, program(p), shader(s)) }
    }

    fn link_program(&self, p: ProgramId) {
        unsafe { HasContext::link_program(self, program(p)) }
    }

    fn program_link_status(&self, p: ProgramId) -> bool {
        unsafe { self.get_program_link_status(program(p)) }
    }

    fn program_info_log(&self, p: ProgramId) -> String {
        unsafe { self.get_program_info_log(program(p)) }
    }

    fn delete_program(&self, p: ProgramId) {
        unsafe { HasContext::delete_program(self, program(p)) }
    }

    fn use_program(&self, p: Option<ProgramId>) {
        unsafe { HasContext::use_program(self, p.map(program)) }
    }

    fn uniform_location(&self, p: ProgramId, name: &str) -> Option<UniformLocation> {
        unsafe { self.get_uniform_location(program(p), name) }
            .map(|native| UniformLocation::new(native.0))
    }

    fn uniform_mat4(&self, loc: Option<&UniformLocation>, value: &Mat4) {
        let native = location(loc);
        unsafe {
            self.uniform_matrix_4_f32_slice(native.as_ref(), false, &value.to_cols_array())
        }
    }

    fn uniform_f32(&self, loc: Option<&UniformLocation>, value: f32) {
        let native = location(loc);
        unsafe { self.uniform_1_f32(native.as_ref(), value) }
    }

    fn uniform_i32(&self, loc: Option<&UniformLocation>, value: i32) {
        let native = location(loc);
        unsafe { self.uniform_1_i32(native.as_ref(), value) }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { HasContext::active_texture(self, glow::TEXTURE0 + unit) }
    }

    fn bind_texture_2d(&self, texture: Option<TextureId>) {
        let native = texture.map(|t| glow::NativeTexture(t.raw()));
        unsafe { self.bind_texture(glow::TEXTURE_2D, native) }
    }

    fn enable_depth_test(&self) {
        unsafe { self.enable(glow::DEPTH_TEST) }
    }

    fn clear_color(&self, color: Color) {
        unsafe { HasContext::clear_color(self, color.r, color.g, color.b, color.a) }
    }

    fn clear(&self) {
        unsafe { HasContext::clear(self, glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }
}
