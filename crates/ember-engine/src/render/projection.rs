use glam::Mat4;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 100.0;

/// Field of view used when none is configured, in degrees.
pub const DEFAULT_FIELD_OF_VIEW: f32 = 45.0;

/// Returns true if `degrees` is a usable vertical field of view.
#[inline]
pub fn is_valid_field_of_view(degrees: f32) -> bool {
    degrees > 0.0 && degrees < 180.0
}

/// Perspective projection derived from a field of view and a framebuffer size.
///
/// The matrix is computed once in `new` and never mutated, so a `Perspective`
/// always agrees with the inputs it was built from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Perspective {
    field_of_view: f32,
    aspect: f32,
    matrix: Mat4,
}

impl Perspective {
    /// Builds the projection for `field_of_view` degrees over a `width`×`height`
    /// framebuffer (physical pixels).
    ///
    /// Returns `None` for a degenerate framebuffer (either side zero).
    pub fn new(field_of_view: f32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let aspect = width as f32 / height as f32;
        let matrix = Mat4::perspective_rh_gl(field_of_view.to_radians(), aspect, NEAR_PLANE, FAR_PLANE);

        Some(Self {
            field_of_view,
            aspect,
            matrix,
        })
    }

    /// Vertical field of view in degrees.
    #[inline]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Framebuffer width / height.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }
}
