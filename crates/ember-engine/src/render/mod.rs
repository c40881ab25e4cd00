//! Per-frame rendering state.
//!
//! `GameWindow` hosts the frame protocol; this module holds the pieces it is
//! built from:
//! - `FrameController`: the checked `prepare → render_model* → finish` bracket
//! - `Perspective`: projection derived from field of view + framebuffer size
//! - `Camera` / `ModelInstance`: capabilities supplied by the caller
//! - `Material`: shading coefficients and texture bindings
//!
//! Convention: the paired shaders declare the uniform names in [`uniforms`].

mod camera;
mod frame;
mod material;
mod model;
mod projection;
pub mod uniforms;

pub use camera::Camera;
pub use frame::{FrameController, FramePhase};
pub use material::{Material, DEFAULT_AMBIENT_COEFFICIENT};
pub use model::ModelInstance;
pub use projection::{
    is_valid_field_of_view, Perspective, DEFAULT_FIELD_OF_VIEW, FAR_PLANE, NEAR_PLANE,
};
