use ember_engine::render::Camera;
use glam::{Mat4, Vec3};

/// Keeps the camera off the poles, where `look_at` degenerates.
const MAX_PITCH: f32 = 1.5;

const MIN_DISTANCE: f32 = 1.5;
const MAX_DISTANCE: f32 = 20.0;

/// Camera circling the origin at a fixed distance.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 4.0,
        }
    }
}

impl OrbitCamera {
    /// Rotates around the target by the given angles, in radians.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        self.yaw = (self.yaw + yaw) % std::f32::consts::TAU;
        self.pitch = (self.pitch + pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }
}

impl Camera for OrbitCamera {
    fn view_transform(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }
}
