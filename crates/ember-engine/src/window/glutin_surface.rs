use std::num::NonZeroU32;
use std::time::Duration;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::device::InitError;
use crate::input::platform::translate_window_event;
use crate::input::SurfaceEvent;

use super::config::WindowConfig;
use super::native::{NativeSurface, PresentError};

/// A winit window with a current glutin OpenGL context.
///
/// Field order is drop order: the context and GL surface are released before
/// the window they render into, and the event loop goes last.
pub struct GlutinSurface {
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    window: Window,
    event_loop: EventLoop<()>,
    close_requested: bool,
}

impl GlutinSurface {
    /// Creates the window and a core-profile context, makes the context current on
    /// this thread and loads the GL function pointers.
    ///
    /// Must be called from the main thread. There is no retry: any failure is
    /// reported as `InitError::Surface`.
    pub fn create(config: &WindowConfig) -> Result<(Self, glow::Context), InitError> {
        Self::create_inner(config).map_err(|reason| {
            log::error!("Failed to create OpenGL context: {reason}");
            InitError::Surface(reason)
        })
    }

    fn create_inner(config: &WindowConfig) -> Result<(Self, glow::Context), String> {
        let event_loop = EventLoop::new().map_err(|e| format!("event loop: {e}"))?;

        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_resizable(false);

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(24);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(&event_loop, template, pick_config)
            .map_err(|e| format!("display: {e}"))?;
        let window = window.ok_or("display builder did not create a window")?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| format!("window handle: {e}"))?
            .as_raw();

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        // SAFETY: `raw_window_handle` belongs to `window`, which is stored next to
        // the context and outlives it (see field order).
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| format!("OpenGL {major}.{minor} core context: {e}"))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| format!("surface attributes: {e}"))?;

        // SAFETY: as above; the surface is dropped before the window.
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| format!("window surface: {e}"))?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .map_err(|e| format!("make current: {e}"))?;

        if config.vsync {
            if let Err(err) =
                gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("vsync unavailable: {err}");
            }
        }

        // SAFETY: the context is current on this thread.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
        };

        log::info!(
            "created {}x{} window with OpenGL {major}.{minor} core context",
            config.width,
            config.height
        );

        Ok((
            Self {
                gl_context,
                gl_surface,
                window,
                event_loop,
                close_requested: false,
            },
            gl,
        ))
    }

    /// The underlying winit window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn resize_surface(&self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            self.gl_surface.resize(&self.gl_context, width, height);
        }
    }
}

impl NativeSurface for GlutinSurface {
    fn request_size(&mut self, width: u32, height: u32) {
        let applied = self
            .window
            .request_inner_size(LogicalSize::new(width as f64, height as f64));
        // Some platforms apply the size asynchronously and report it via `Resized`.
        let size = applied.unwrap_or_else(|| self.window.inner_size());
        self.resize_surface(size);
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        let mut pump = EventPump {
            window: &self.window,
            events: Vec::new(),
        };
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut pump);
        let events = pump.events;

        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            self.close_requested = true;
        }

        for event in &events {
            match *event {
                SurfaceEvent::CloseRequested => self.close_requested = true,
                SurfaceEvent::Resized { width, height } => {
                    self.resize_surface(PhysicalSize::new(width, height))
                }
                _ => {}
            }
        }

        events
    }

    fn swap_buffers(&mut self) -> Result<(), PresentError> {
        self.window.pre_present_notify();
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|err| err.to_string().into())
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // glutin only calls the picker with at least one matching config.
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("glutin offered no GL configs")
}

/// Collects translated events for one `pump_app_events` call.
struct EventPump<'w> {
    window: &'w Window,
    events: Vec<SurfaceEvent>,
}

impl ApplicationHandler for EventPump<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window.id() {
            return;
        }
        if let Some(event) = translate_window_event(self.window, &event) {
            self.events.push(event);
        }
    }
}
