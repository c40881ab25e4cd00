use crate::device::{GlBackend, ProgramId};

/// Something that can submit its own geometry.
///
/// The engine never inspects instance geometry: `GameWindow::render_model`
/// only forwards the active program. Implementations typically bind their
/// `Material` and then issue their draw calls.
pub trait ModelInstance<G: GlBackend> {
    fn draw(&self, gl: &G, program: ProgramId);
}
