//! Headless doubles for the GL backend and the native surface.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use glam::Mat4;

use crate::color::Color;
use crate::device::{GlBackend, ProgramId, ShaderId, ShaderStage, TextureId, UniformLocation};
use crate::input::SurfaceEvent;
use crate::render::uniforms;
use crate::window::{NativeSurface, PresentError};

pub const VALID_VERTEX: &str = "#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec2 uv;
uniform mat4 view;
uniform mat4 projection;
out vec2 frag_uv;
void main() {
    frag_uv = uv;
    gl_Position = projection * view * vec4(position, 1.0);
}
";

pub const VALID_FRAGMENT: &str = "#version 330 core
in vec2 frag_uv;
uniform sampler2D diffuse_texture;
uniform bool diffuse_enabled;
uniform float ambient_coefficient;
out vec4 color;
void main() {
    vec4 base = diffuse_enabled ? texture(diffuse_texture, frag_uv) : vec4(1.0);
    color = vec4(base.rgb * (1.0 - ambient_coefficient), base.a);
}
";

/// Sources containing this directive fail to compile.
const COMPILE_ERROR_DIRECTIVE: &str = "#error";

/// Uniforms the recording backend resolves; anything else has no location.
const KNOWN_UNIFORMS: [&str; 8] = [
    uniforms::VIEW,
    uniforms::PROJECTION,
    uniforms::AMBIENT_COEFFICIENT,
    uniforms::SHININESS,
    uniforms::DIFFUSE_ENABLED,
    uniforms::DIFFUSE_TEXTURE,
    uniforms::SPECULAR_ENABLED,
    uniforms::SPECULAR_TEXTURE,
];

/// One backend call that changes GL state.
///
/// Queries (status, info logs, uniform lookups) are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, ShaderId),
    ShaderSource(ShaderId),
    CompileShader(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    AttachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    DeleteProgram(ProgramId),
    UseProgram(Option<ProgramId>),
    UniformMat4(String, Mat4),
    UniformF32(String, f32),
    UniformI32(String, i32),
    ActiveTexture(u32),
    BindTexture2d(Option<TextureId>),
    EnableDepthTest,
    ClearColor(Color),
    Clear,
    Viewport(i32, i32, i32, i32),
}

#[derive(Default)]
struct GlState {
    calls: Vec<GlCall>,
    next_name: u32,

    sources: HashMap<ShaderId, String>,
    compiled: HashMap<ShaderId, bool>,
    live_shaders: HashSet<ShaderId>,
    live_programs: HashSet<ProgramId>,

    compile_log: Option<String>,
    link_failure: Option<String>,
}

impl GlState {
    fn next_name(&mut self) -> u32 {
        self.next_name += 1;
        self.next_name
    }
}

/// A `GlBackend` that records calls instead of talking to a driver.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// `GameWindow`.
#[derive(Clone, Default)]
pub struct RecordingGl {
    state: Rc<RefCell<GlState>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the info log reported for failed compiles.
    pub fn with_compile_log(self, log: &str) -> Self {
        self.state.borrow_mut().compile_log = Some(log.to_string());
        self
    }

    /// Makes every link fail with `log`.
    pub fn failing_link(self, log: &str) -> Self {
        self.state.borrow_mut().link_failure = Some(log.to_string());
        self
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    pub fn source_of(&self, shader: ShaderId) -> Option<String> {
        self.state.borrow().sources.get(&shader).cloned()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs.len()
    }

    pub fn last_f32(&self, name: &str) -> Option<f32> {
        self.state.borrow().calls.iter().rev().find_map(|c| match c {
            GlCall::UniformF32(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_i32(&self, name: &str) -> Option<i32> {
        self.state.borrow().calls.iter().rev().find_map(|c| match c {
            GlCall::UniformI32(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_mat4(&self, name: &str) -> Option<Mat4> {
        self.state.borrow().calls.iter().rev().find_map(|c| match c {
            GlCall::UniformMat4(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn uniform_name(location: Option<&UniformLocation>) -> Option<String> {
        location.map(|l| KNOWN_UNIFORMS[l.get() as usize].to_string())
    }
}

impl GlBackend for RecordingGl {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, String> {
        let mut state = self.state.borrow_mut();
        let id = ShaderId::new(state.next_name()).ok_or("name overflow")?;
        state.live_shaders.insert(id);
        state.calls.push(GlCall::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        let mut state = self.state.borrow_mut();
        state.sources.insert(shader, source.to_string());
        state.calls.push(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: ShaderId) {
        let mut state = self.state.borrow_mut();
        let ok = state
            .sources
            .get(&shader)
            .is_some_and(|s| !s.contains(COMPILE_ERROR_DIRECTIVE));
        state.compiled.insert(shader, ok);
        state.calls.push(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.state.borrow().compiled.get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        let state = self.state.borrow();
        if state.compiled.get(&shader).copied().unwrap_or(false) {
            return String::new();
        }
        state
            .compile_log
            .clone()
            .unwrap_or_else(|| "0:1(1): error: #error directive\n\0".to_string())
    }

    fn delete_shader(&self, shader: ShaderId) {
        let mut state = self.state.borrow_mut();
        state.live_shaders.remove(&shader);
        state.calls.push(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<ProgramId, String> {
        let mut state = self.state.borrow_mut();
        let id = ProgramId::new(state.next_name()).ok_or("name overflow")?;
        state.live_programs.insert(id);
        state.calls.push(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: ProgramId) {
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, _program: ProgramId) -> bool {
        self.state.borrow().link_failure.is_none()
    }

    fn program_info_log(&self, _program: ProgramId) -> String {
        self.state.borrow().link_failure.clone().unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramId) {
        let mut state = self.state.borrow_mut();
        state.live_programs.remove(&program);
        state.calls.push(GlCall::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<ProgramId>) {
        self.record(GlCall::UseProgram(program));
    }

    fn uniform_location(&self, _program: ProgramId, name: &str) -> Option<UniformLocation> {
        KNOWN_UNIFORMS
            .iter()
            .position(|known| *known == name)
            .map(|index| UniformLocation::new(index as u32))
    }

    fn uniform_mat4(&self, location: Option<&UniformLocation>, value: &Mat4) {
        if let Some(name) = Self::uniform_name(location) {
            self.record(GlCall::UniformMat4(name, *value));
        }
    }

    fn uniform_f32(&self, location: Option<&UniformLocation>, value: f32) {
        if let Some(name) = Self::uniform_name(location) {
            self.record(GlCall::UniformF32(name, value));
        }
    }

    fn uniform_i32(&self, location: Option<&UniformLocation>, value: i32) {
        if let Some(name) = Self::uniform_name(location) {
            self.record(GlCall::UniformI32(name, value));
        }
    }

    fn active_texture(&self, unit: u32) {
        self.record(GlCall::ActiveTexture(unit));
    }

    fn bind_texture_2d(&self, texture: Option<TextureId>) {
        self.record(GlCall::BindTexture2d(texture));
    }

    fn enable_depth_test(&self) {
        self.record(GlCall::EnableDepthTest);
    }

    fn clear_color(&self, color: Color) {
        self.record(GlCall::ClearColor(color));
    }

    fn clear(&self) {
        self.record(GlCall::Clear);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }
}

/// A `NativeSurface` with a scriptable framebuffer and event queue.
///
/// The framebuffer is the logical size times `scale` unless pinned. A queued
/// `Resized` event pins the framebuffer to its size when it is polled.
pub struct FakeSurface {
    logical: (u32, u32),
    scale: f32,
    pinned: Option<(u32, u32)>,
    close_requested: bool,
    queued: VecDeque<SurfaceEvent>,
    swaps: u32,
    swap_failure: Option<String>,
    alive: Rc<Cell<bool>>,
}

impl FakeSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            logical: (width, height),
            scale: 1.0,
            pinned: None,
            close_requested: false,
            queued: VecDeque::new(),
            swaps: 0,
            swap_failure: None,
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn failing_swap(mut self, reason: &str) -> Self {
        self.swap_failure = Some(reason.to_string());
        self
    }

    /// Fixes the reported framebuffer size regardless of requested sizes.
    pub fn pin_framebuffer(&mut self, width: u32, height: u32) {
        self.pinned = Some((width, height));
    }

    pub fn push_event(&mut self, event: SurfaceEvent) {
        self.queued.push_back(event);
    }

    pub fn swap_count(&self) -> u32 {
        self.swaps
    }

    /// Cleared when the surface is dropped.
    pub fn alive_flag(&self) -> Rc<Cell<bool>> {
        self.alive.clone()
    }
}

impl NativeSurface for FakeSurface {
    fn request_size(&mut self, width: u32, height: u32) {
        self.logical = (width, height);
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.pinned.unwrap_or_else(|| {
            let (w, h) = self.logical;
            (
                (w as f32 * self.scale).round() as u32,
                (h as f32 * self.scale).round() as u32,
            )
        })
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        let events: Vec<_> = self.queued.drain(..).collect();
        for event in &events {
            match *event {
                SurfaceEvent::CloseRequested => self.close_requested = true,
                SurfaceEvent::Resized { width, height } => self.pinned = Some((width, height)),
                _ => {}
            }
        }
        events
    }

    fn swap_buffers(&mut self) -> Result<(), PresentError> {
        if let Some(reason) = &self.swap_failure {
            return Err(reason.clone().into());
        }
        self.swaps += 1;
        Ok(())
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}
