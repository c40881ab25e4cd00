use crate::color::Color;
use crate::device::InitError;
use crate::render::{is_valid_field_of_view, DEFAULT_FIELD_OF_VIEW};

/// Window/context configuration.
///
/// `WindowConfig::new(width, height)` gives the default form (45° field of
/// view, opaque black clear color); the `with_*` setters give the explicit one.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,

    /// Requested logical size. The framebuffer may be larger on HiDPI displays.
    pub width: u32,
    pub height: u32,

    /// Vertical field of view in degrees, in (0, 180).
    pub field_of_view: f32,

    pub clear_color: Color,

    /// Minimum OpenGL version, core profile.
    pub gl_version: (u8, u8),

    /// Wait for vertical blank on present.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ember".to_string(),
            width: 800,
            height: 600,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            clear_color: Color::BLACK,
            gl_version: (3, 3),
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_field_of_view(mut self, degrees: f32) -> Self {
        self.field_of_view = degrees;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn validate(&self) -> Result<(), InitError> {
        if self.width == 0 || self.height == 0 {
            return Err(InitError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !is_valid_field_of_view(self.field_of_view) {
            return Err(InitError::InvalidConfig(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.field_of_view
            )));
        }
        if !self.clear_color.is_finite() {
            return Err(InitError::InvalidConfig("clear color must be finite".into()));
        }
        Ok(())
    }
}
