use anyhow::{anyhow, Result};
use ember_engine::device::TextureId;
use glow::HasContext;

const LIGHT: [u8; 4] = [0xe8, 0xe2, 0xd4, 0xff];
const DARK: [u8; 4] = [0x3a, 0x4a, 0x5c, 0xff];

/// RGBA8 pixels of a `cells`×`cells` checkerboard, `cell_size` pixels per cell.
pub fn checker_pixels(cells: u32, cell_size: u32) -> Vec<u8> {
    let side = cells * cell_size;
    let mut pixels = Vec::with_capacity((side * side * 4) as usize);
    for y in 0..side {
        for x in 0..side {
            let light = (x / cell_size + y / cell_size) % 2 == 0;
            pixels.extend_from_slice(if light { &LIGHT } else { &DARK });
        }
    }
    pixels
}

/// Uploads a checkerboard as a nearest-filtered, repeating 2D texture.
///
/// The caller owns the texture and releases it with [`delete`].
pub fn upload(gl: &glow::Context, cells: u32, cell_size: u32) -> Result<TextureId> {
    let side = (cells * cell_size) as i32;
    let pixels = checker_pixels(cells, cell_size);

    // SAFETY: the window's context is current on this thread.
    unsafe {
        let texture = gl
            .create_texture()
            .map_err(|e| anyhow!("create_texture: {e}"))?;
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA8 as i32,
            side,
            side,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(&pixels)),
        );
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
        gl.bind_texture(glow::TEXTURE_2D, None);

        log::debug!("uploaded {side}x{side} checker texture");
        Ok(TextureId::from_raw(texture.0))
    }
}

pub fn delete(gl: &glow::Context, texture: TextureId) {
    // SAFETY: see `upload`.
    unsafe { gl.delete_texture(glow::NativeTexture(texture.raw())) }
}
