use anyhow::{anyhow, Result};
use bytemuck::{Pod, Zeroable};
use ember_engine::device::ProgramId;
use ember_engine::render::{Material, ModelInstance};
use glam::Vec3;
use glow::HasContext;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// (normal, u axis, v axis) per face; `u × v = normal` keeps the winding CCW.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Two triangles per face, as (u, v) corners in `[0, 1]`.
const QUAD: [(f32, f32); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
];

/// Unit cube centered on the origin, 36 vertices.
pub fn cube_vertices() -> Vec<Vertex> {
    FACES
        .iter()
        .flat_map(|&(normal, u, v)| {
            QUAD.iter().map(move |&(s, t)| {
                let position = normal * 0.5 + u * (s - 0.5) + v * (t - 0.5);
                Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: [s, t],
                }
            })
        })
        .collect()
}

/// A textured cube that binds its material and draws itself.
pub struct Cube {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    vertex_count: i32,
    material: Material,
}

impl Cube {
    pub fn new(gl: &glow::Context, material: Material) -> Result<Self> {
        let vertices = cube_vertices();
        let stride = std::mem::size_of::<Vertex>() as i32;

        // SAFETY: the window's context is current on this thread.
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("create_vertex_array: {e}"))?;
            let vbo = gl
                .create_buffer()
                .map_err(|e| anyhow!("create_buffer: {e}"))?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&vertices),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * 4);
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, stride, 6 * 4);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                vertex_count: vertices.len() as i32,
                material,
            })
        }
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn destroy(self, gl: &glow::Context) {
        // SAFETY: see `new`.
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}

impl ModelInstance<glow::Context> for Cube {
    fn draw(&self, gl: &glow::Context, program: ProgramId) {
        self.material.bind(gl, program);

        // SAFETY: called from inside the window's frame on the context thread.
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count);
            gl.bind_vertex_array(None);
        }
    }
}
