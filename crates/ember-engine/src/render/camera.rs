use glam::Mat4;

/// Source of the view transform.
///
/// Queried once per frame from `GameWindow::prepare`, so the returned matrix
/// must reflect the camera's state at call time.
pub trait Camera {
    fn view_transform(&self) -> Mat4;
}

/// A fixed view matrix.
impl Camera for Mat4 {
    fn view_transform(&self) -> Mat4 {
        *self
    }
}
