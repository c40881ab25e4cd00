use std::path::Path;

use crate::device::{CompileError, GlBackend, ShaderId, ShaderStage};

/// Longest backend diagnostic reproduced in logs and errors, in characters.
pub const INFO_LOG_LIMIT: usize = 511;

/// A shader stage object that is deleted when dropped.
///
/// Stages only live long enough to be attached and linked; the linker drops
/// them right after `link_program`, whatever the outcome.
pub struct CompiledShader<'gl, G: GlBackend> {
    gl: &'gl G,
    id: ShaderId,
    stage: ShaderStage,
}

impl<G: GlBackend> CompiledShader<'_, G> {
    pub fn id(&self) -> ShaderId {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl<G: GlBackend> Drop for CompiledShader<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// Compiles the shader at `path` for `stage`.
///
/// An unreadable or empty file fails before any backend object is created.
/// Compile failures log the (bounded) backend diagnostic tagged with `path`.
pub fn compile_shader<'gl, G: GlBackend>(
    gl: &'gl G,
    path: &Path,
    stage: ShaderStage,
) -> Result<CompiledShader<'gl, G>, CompileError> {
    let source = std::fs::read_to_string(path).map_err(|source| {
        log::error!("failed to read shader source '{}': {source}", path.display());
        CompileError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if source.is_empty() {
        log::error!("shader source '{}' is empty", path.display());
        return Err(CompileError::Empty {
            path: path.to_path_buf(),
        });
    }

    let id = gl
        .create_shader(stage)
        .map_err(|reason| CompileError::Create { stage, reason })?;
    // From here on the guard owns the stage object.
    let shader = CompiledShader { gl, id, stage };

    gl.shader_source(id, &source);
    gl.compile_shader(id);

    if !gl.shader_compile_status(id) {
        let log = bounded_info_log(gl.shader_info_log(id));
        log::error!("shader compilation of '{}' failed:\n{log}", path.display());
        return Err(CompileError::Compile {
            path: path.to_path_buf(),
            log,
        });
    }

    log::debug!("compiled {stage} shader '{}' as {id}", path.display());
    Ok(shader)
}

/// Trims trailing NULs/whitespace and caps the log at [`INFO_LOG_LIMIT`] characters.
pub(crate) fn bounded_info_log(mut log: String) -> String {
    if let Some((cut, _)) = log.char_indices().nth(INFO_LOG_LIMIT) {
        log.truncate(cut);
    }
    let trimmed = log.trim_end_matches(|c: char| c == '\0' || c.is_whitespace()).len();
    log.truncate(trimmed);
    log
}
