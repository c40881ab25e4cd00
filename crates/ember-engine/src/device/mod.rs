//! OpenGL device seam.
//!
//! This module is responsible for:
//! - the narrow `GlBackend` trait every GL call in the engine goes through
//! - typed, non-zero handles for shader, program and texture objects
//! - the `glow::Context` implementation of the backend
//! - the engine's error types

mod backend;
mod error;
mod glow_backend;
mod handles;

pub use backend::GlBackend;
pub use error::{CompileError, FrameError, InitError, LinkError};
pub use handles::{ProgramId, ShaderId, ShaderStage, TextureId, UniformLocation};
