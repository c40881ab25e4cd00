//! Uniform names shared with the paired shader sources (case-sensitive).

pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";

pub const AMBIENT_COEFFICIENT: &str = "ambient_coefficient";
pub const SHININESS: &str = "shininess";

pub const DIFFUSE_ENABLED: &str = "diffuse_enabled";
pub const DIFFUSE_TEXTURE: &str = "diffuse_texture";
pub const SPECULAR_ENABLED: &str = "specular_enabled";
pub const SPECULAR_TEXTURE: &str = "specular_texture";

/// Texture unit the diffuse map is bound to.
pub const DIFFUSE_UNIT: u32 = 0;

/// Texture unit the specular map is bound to.
pub const SPECULAR_UNIT: u32 = 1;
