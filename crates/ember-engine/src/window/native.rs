use crate::input::SurfaceEvent;

/// Error returned when a finished frame cannot be presented.
pub type PresentError = Box<dyn std::error::Error + Send + Sync>;

/// The native window + drawing surface a `GameWindow` renders into.
///
/// The engine treats the windowing library as an opaque provider. It only
/// asks for these operations.
pub trait NativeSurface {
    /// Requests a new logical size (`width`×`height` in logical pixels).
    fn request_size(&mut self, width: u32, height: u32);

    /// Current framebuffer size in physical pixels.
    ///
    /// May differ from the requested logical size on high-density displays.
    fn framebuffer_size(&self) -> (u32, u32);

    /// True once a close request was received (or issued via `request_close`).
    fn close_requested(&self) -> bool;

    fn request_close(&mut self);

    /// Drains pending window-system events without blocking.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;

    /// Presents the back buffer.
    fn swap_buffers(&mut self) -> Result<(), PresentError>;
}
