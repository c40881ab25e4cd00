use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::handles::ShaderStage;

/// Failure to produce a compiled shader stage.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read shader source '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but holds no text; the backend compiler is never invoked.
    #[error("shader source '{}' is empty", path.display())]
    Empty { path: PathBuf },

    #[error("failed to create {stage} shader object: {reason}")]
    Create { stage: ShaderStage, reason: String },

    #[error("shader compilation of '{}' failed:\n{log}", path.display())]
    Compile { path: PathBuf, log: String },
}

/// Failure to produce a linked program.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("shader stage unavailable")]
    Stage(#[from] CompileError),

    #[error("failed to create shader program: {0}")]
    Create(String),

    #[error("failed to link shader program:\n{log}")]
    Link { log: String },
}

/// The single "cannot initialize" condition raised while constructing a window.
///
/// No partially constructed window survives this error; any native surface that
/// was created is released before it is returned.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("game window cannot be initialized: {0}")]
    InvalidConfig(String),

    #[error("game window cannot be initialized: failed to create OpenGL context: {0}")]
    Surface(String),

    #[error("game window cannot be initialized: shader program unavailable")]
    Program(#[from] LinkError),
}

/// Violation of the `prepare → render_model* → finish` protocol, or a failed present.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame already prepared; call `finish` before preparing another")]
    AlreadyPrepared,

    #[error("`{0}` called outside a prepared frame")]
    NotPrepared(&'static str),

    #[error("failed to present frame")]
    Present(#[source] Box<dyn std::error::Error + Send + Sync>),
}
