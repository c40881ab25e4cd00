use std::path::Path;

use glam::Mat4;

use crate::color::Color;
use crate::device::{FrameError, GlBackend, InitError, ProgramId};
use crate::input::{InputState, SurfaceEvent};
use crate::render::{
    is_valid_field_of_view, uniforms, Camera, FrameController, FramePhase, ModelInstance,
    Perspective,
};
use crate::shader::link_program;

use super::config::WindowConfig;
use super::glutin_surface::GlutinSurface;
use super::native::NativeSurface;

type EventHandler = Box<dyn FnMut(&SurfaceEvent)>;

/// A window with a linked shader program and the per-frame render protocol.
///
/// Each frame the caller runs `poll_for_events`, then its game logic, then
/// `prepare`, any number of `render_model` calls and `finish` (or
/// `draw_frame`, which does the last three in one go).
///
/// All GL work happens on the thread that created the window.
pub struct GameWindow<C: Camera, N: NativeSurface = GlutinSurface, G: GlBackend = glow::Context> {
    program: ProgramId,
    gl: G,
    native: N,

    camera: C,
    field_of_view: f32,
    clear_color: Color,
    projection: Perspective,

    frame: FrameController,
    input: InputState,
    handlers: Vec<EventHandler>,
}

impl<C: Camera> GameWindow<C> {
    /// Opens a native window with an OpenGL core context and builds the program
    /// from `vertex_path` and `fragment_path`.
    pub fn new(
        config: &WindowConfig,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
        camera: C,
    ) -> Result<Self, InitError> {
        config.validate()?;
        let (native, gl) = GlutinSurface::create(config)?;
        Self::from_parts(native, gl, config, vertex_path, fragment_path, camera)
    }
}

impl<C: Camera, N: NativeSurface, G: GlBackend> GameWindow<C, N, G> {
    /// Builds a window on an existing surface and GL backend.
    ///
    /// On error `native` is dropped before returning, so no window stays open.
    pub fn from_parts(
        mut native: N,
        gl: G,
        config: &WindowConfig,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
        camera: C,
    ) -> Result<Self, InitError> {
        config.validate()?;

        gl.enable_depth_test();
        gl.clear_color(config.clear_color);

        native.request_size(config.width, config.height);
        let (width, height) = native.framebuffer_size();
        let projection = match Perspective::new(config.field_of_view, width, height) {
            Some(projection) => {
                gl.viewport(0, 0, width as i32, height as i32);
                projection
            }
            None => {
                log::warn!("framebuffer is {width}x{height}; using the logical size for the projection");
                Perspective::new(config.field_of_view, config.width, config.height).ok_or_else(
                    || InitError::InvalidConfig("window size must be positive".into()),
                )?
            }
        };

        let program = link_program(&gl, vertex_path.as_ref(), fragment_path.as_ref())?;

        log::info!(
            "game window ready: {}x{} framebuffer, {}° field of view",
            width,
            height,
            config.field_of_view
        );

        Ok(Self {
            program,
            gl,
            native,
            camera,
            field_of_view: config.field_of_view,
            clear_color: config.clear_color,
            projection,
            frame: FrameController::new(),
            input: InputState::default(),
            handlers: Vec::new(),
        })
    }

    /// False once a close was requested by the user or via [`GameWindow::close`].
    pub fn is_running(&self) -> bool {
        !self.native.close_requested()
    }

    pub fn close(&mut self) {
        self.native.request_close();
    }

    /// Resizes the window to `width`×`height` logical pixels and re-derives the
    /// viewport and projection from the resulting framebuffer size.
    pub fn update_dimensions(&mut self, width: u32, height: u32) {
        self.native.request_size(width, height);
        self.sync_framebuffer();
    }

    /// Sets the vertical field of view in degrees.
    ///
    /// Values outside (0, 180) are ignored. The framebuffer size is queried
    /// again rather than taken from the last resize.
    pub fn update_field_of_view(&mut self, degrees: f32) {
        if !is_valid_field_of_view(degrees) {
            log::warn!("ignoring field of view {degrees}; must be in (0, 180) degrees");
            return;
        }
        self.field_of_view = degrees;

        let (width, height) = self.native.framebuffer_size();
        match Perspective::new(degrees, width, height) {
            Some(projection) => self.projection = projection,
            None => log::debug!("framebuffer is {width}x{height}; keeping previous projection"),
        }
    }

    /// Drains pending window events.
    ///
    /// Events update [`GameWindow::input`], a resize re-syncs the viewport and
    /// projection, and every handler registered with `on_event` sees each event.
    pub fn poll_for_events(&mut self) {
        self.input.begin_poll();

        for event in self.native.poll_events() {
            self.input.apply_event(&event);

            if let SurfaceEvent::Resized { .. } = event {
                self.sync_framebuffer();
            }

            for handler in &mut self.handlers {
                handler(&event);
            }
        }
    }

    /// Registers a callback invoked from `poll_for_events`.
    pub fn on_event(&mut self, handler: impl FnMut(&SurfaceEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
        self.gl.clear_color(color);
    }

    /// Starts a frame: activates the program, clears color and depth, and
    /// uploads `view` (asked from the camera now) and `projection`.
    ///
    /// Uniform locations are looked up on every call.
    pub fn prepare(&mut self) -> Result<(), FrameError> {
        self.frame.begin()?;

        self.gl.use_program(Some(self.program));
        self.gl.clear();

        let view = self.camera.view_transform();
        self.upload_mat4(uniforms::VIEW, &view);
        let projection = *self.projection.matrix();
        self.upload_mat4(uniforms::PROJECTION, &projection);

        Ok(())
    }

    /// Hands the active program to `model` so it can submit its own draw calls.
    pub fn render_model<M>(&mut self, model: &M) -> Result<(), FrameError>
    where
        M: ModelInstance<G> + ?Sized,
    {
        self.frame.record_draw()?;
        model.draw(&self.gl, self.program);
        Ok(())
    }

    /// Ends the frame and presents it.
    pub fn finish(&mut self) -> Result<(), FrameError> {
        self.frame.end()?;
        self.native.swap_buffers().map_err(FrameError::Present)
    }

    /// Runs `prepare`, `render_model` for each of `models`, then `finish`.
    pub fn draw_frame(&mut self, models: &[&dyn ModelInstance<G>]) -> Result<(), FrameError> {
        self.prepare()?;
        for model in models {
            self.render_model(*model)?;
        }
        self.finish()
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        self.projection.matrix()
    }

    #[inline]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Framebuffer size in physical pixels, queried from the surface.
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.native.framebuffer_size()
    }

    #[inline]
    pub fn program(&self) -> ProgramId {
        self.program
    }

    #[inline]
    pub fn gl(&self) -> &G {
        &self.gl
    }

    #[inline]
    pub fn surface(&self) -> &N {
        &self.native
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut N {
        &mut self.native
    }

    #[inline]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[inline]
    pub fn frame_phase(&self) -> FramePhase {
        self.frame.phase()
    }

    #[inline]
    pub fn frames_presented(&self) -> u64 {
        self.frame.frames_presented()
    }

    fn sync_framebuffer(&mut self) {
        let (width, height) = self.native.framebuffer_size();
        let Some(projection) = Perspective::new(self.field_of_view, width, height) else {
            log::debug!("framebuffer is {width}x{height}; keeping previous projection");
            return;
        };

        self.gl.viewport(0, 0, width as i32, height as i32);
        self.projection = projection;
    }

    fn upload_mat4(&self, name: &str, value: &Mat4) {
        let location = self.gl.uniform_location(self.program, name);
        self.gl.uniform_mat4(location.as_ref(), value);
    }
}

impl<C: Camera, N: NativeSurface, G: GlBackend> Drop for GameWindow<C, N, G> {
    fn drop(&mut self) {
        self.gl.use_program(None);
        self.gl.delete_program(self.program);
        log::debug!("released shader program {}", self.program);
    }
}
