//! Native window, GL context and the `GameWindow` that renders into them.
//!
//! `GlutinSurface` owns the winit window and the glutin context. `GameWindow`
//! only talks to it through [`NativeSurface`], so the frame protocol can run on
//! any surface that provides those few operations.

mod config;
mod game_window;
mod glutin_surface;
mod native;

pub use config::WindowConfig;
pub use game_window::GameWindow;
pub use glutin_surface::GlutinSurface;
pub use native::{NativeSurface, PresentError};
