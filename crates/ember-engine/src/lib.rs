//! Ember engine crate.
//!
//! A small OpenGL front-end: one window, one linked shader program, and a
//! checked `prepare → render_model* → finish` frame protocol. Camera view
//! matrices and model geometry come from the caller through the
//! [`render::Camera`] and [`render::ModelInstance`] traits.

pub mod color;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod shader;
pub mod window;

#[cfg(test)]
mod testing;
