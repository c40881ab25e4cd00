use std::path::Path;

use crate::device::{GlBackend, LinkError, ProgramId, ShaderStage};

use super::compiler::{bounded_info_log, compile_shader};

/// Owns a program object until it is released to the caller.
struct ProgramGuard<'gl, G: GlBackend> {
    gl: &'gl G,
    id: ProgramId,
}

impl<G: GlBackend> ProgramGuard<'_, G> {
    fn release(self) -> ProgramId {
        let id = self.id;
        std::mem::forget(self);
        id
    }
}

impl<G: GlBackend> Drop for ProgramGuard<'_, G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}

/// Compiles `vertex_path` and `fragment_path` and links them into a program.
///
/// Both stages are compiled before either result is checked so that both sets
/// of diagnostics are reported. No program object is created unless both
/// stages compiled. Stage objects never outlive this call, and neither does a
/// program that failed to link. The returned program is owned by the caller.
pub fn link_program<G: GlBackend>(
    gl: &G,
    vertex_path: &Path,
    fragment_path: &Path,
) -> Result<ProgramId, LinkError> {
    let vertex = compile_shader(gl, vertex_path, ShaderStage::Vertex);
    let fragment = compile_shader(gl, fragment_path, ShaderStage::Fragment);
    let (vertex, fragment) = (vertex?, fragment?);

    let id = gl.create_program().map_err(|reason| {
        log::error!("failed to create shader program: {reason}");
        LinkError::Create(reason)
    })?;
    let program = ProgramGuard { gl, id };

    gl.attach_shader(id, vertex.id());
    gl.attach_shader(id, fragment.id());
    gl.link_program(id);

    // The linked program keeps its own copy of the stage binaries.
    drop(vertex);
    drop(fragment);

    if !gl.program_link_status(id) {
        let log = bounded_info_log(gl.program_info_log(id));
        log::error!("failed to link shader program:\n{log}");
        return Err(LinkError::Link { log });
    }

    log::info!(
        "linked shader program {id} from '{}' + '{}'",
        vertex_path.display(),
        fragment_path.display()
    );
    Ok(program.release())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::device::CompileError;
    use crate::testing::{GlCall, RecordingGl, VALID_FRAGMENT, VALID_VERTEX};

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn links_and_deletes_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        let vs = write(&dir, "v.glsl", VALID_VERTEX);
        let fs = write(&dir, "f.glsl", VALID_FRAGMENT);

        let gl = RecordingGl::new();
        let program = link_program(&gl, &vs, &fs).unwrap();

        let calls = gl.calls();
        let attached: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                GlCall::AttachShader(p, s) => Some((*p, *s)),
                _ => None,
            })
            .collect();
        assert_eq!(attached.len(), 2);
        assert!(attached.iter().all(|(p, _)| *p == program));

        let link_at = calls
            .iter()
            .position(|c| *c == GlCall::LinkProgram(program))
            .unwrap();
        for (_, shader) in attached {
            let deleted_at = calls
                .iter()
                .position(|c| *c == GlCall::DeleteShader(shader))
                .unwrap();
            assert!(deleted_at > link_at);
        }

        assert_eq!(gl.live_shaders(), 0);
        assert_eq!(gl.live_programs(), 1);
    }

    #[test]
    fn stage_failure_creates_no_program() {
        let dir = tempfile::tempdir().unwrap();
        let vs = write(&dir, "v.glsl", "");
        let fs = write(&dir, "f.glsl", VALID_FRAGMENT);

        let gl = RecordingGl::new();
        let err = link_program(&gl, &vs, &fs).unwrap_err();

        assert!(matches!(err, LinkError::Stage(CompileError::Empty { .. })));
        assert!(!gl.calls().iter().any(|c| matches!(
            c,
            GlCall::CreateProgram(_) | GlCall::AttachShader(..) | GlCall::LinkProgram(_)
        )));
        // The fragment stage compiled fine and must still be released.
        assert_eq!(gl.live_shaders(), 0);
    }

    #[test]
    fn fragment_compile_failure_never_attaches() {
        let dir = tempfile::tempdir().unwrap();
        let vs = write(&dir, "v.glsl", VALID_VERTEX);
        let fs = write(&dir, "f.glsl", "#error nope\n");

        let gl = RecordingGl::new();
        let err = link_program(&gl, &vs, &fs).unwrap_err();

        assert!(matches!(err, LinkError::Stage(CompileError::Compile { .. })));
        assert!(!gl.calls().iter().any(|c| matches!(c, GlCall::AttachShader(..))));
        assert_eq!(gl.live_shaders(), 0);
        assert_eq!(gl.live_programs(), 0);
    }

    #[test]
    fn link_failure_releases_everything() {
        let dir = tempfile::tempdir().unwrap();
        let vs = write(&dir, "v.glsl", VALID_VERTEX);
        let fs = write(&dir, "f.glsl", VALID_FRAGMENT);

        let gl = RecordingGl::new().failing_link("error: `main` not defined");
        let err = link_program(&gl, &vs, &fs).unwrap_err();

        let LinkError::Link { log } = err else {
            panic!("expected a link error");
        };
        assert_eq!(log, "error: `main` not defined");
        assert_eq!(gl.live_shaders(), 0);
        assert_eq!(gl.live_programs(), 0);
    }
}
