//! Shader stage compilation and program linking.
//!
//! Every intermediate GL object created here is owned by a guard, so early
//! returns on the failure paths release it deterministically.

mod compiler;
mod linker;

pub use compiler::{compile_shader, CompiledShader, INFO_LOG_LIMIT};
pub use linker::link_program;
