mod camera;
mod checker;
mod cube;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use ember_engine::color::Color;
use ember_engine::input::Key;
use ember_engine::logging::{init_logging, LoggingConfig};
use ember_engine::render::Material;
use ember_engine::window::{GameWindow, WindowConfig};

use camera::OrbitCamera;
use cube::Cube;

/// Orbit speed for the arrow keys, radians per second.
const ORBIT_SPEED: f32 = 1.5;

/// Field of view change for `+`/`-`, degrees per second.
const ZOOM_SPEED: f32 = 30.0;

const MIN_FOV: f32 = 10.0;
const MAX_FOV: f32 = 120.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (vertex, fragment) = shader_paths()?;
    let config = WindowConfig::new(1280, 720)
        .with_title("ember studio")
        .with_clear_color(Color::from_u8(0x14, 0x17, 0x1c, 0xff));

    let mut window = GameWindow::new(&config, &vertex, &fragment, OrbitCamera::default())
        .context("failed to open the studio window")?;

    let checker = checker::upload(window.gl(), 8, 16).context("failed to upload checker texture")?;
    let mut cube = Cube::new(
        window.gl(),
        Material::with_default_ambient(Some(checker), None, 32.0),
    )
    .context("failed to upload cube")?;

    log::info!("arrows orbit, +/- change the field of view, Escape quits");

    let mut last = Instant::now();
    while window.is_running() {
        window.poll_for_events();

        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;

        update(&mut window, dt);

        window.draw_frame(&[&cube]).context("frame failed")?;
    }

    // The material only references the texture, so forget it before deleting.
    cube.material_mut().remove_texture(checker);
    checker::delete(window.gl(), checker);
    cube.destroy(window.gl());

    log::info!("presented {} frames", window.frames_presented());
    Ok(())
}

fn update(window: &mut GameWindow<OrbitCamera>, dt: f32) {
    let input = window.input();
    let axis = |negative: Key, positive: Key| {
        f32::from(u8::from(input.key_down(positive))) - f32::from(u8::from(input.key_down(negative)))
    };

    let quit = input.key_pressed(Key::Escape);
    let yaw = axis(Key::ArrowLeft, Key::ArrowRight);
    let pitch = axis(Key::ArrowDown, Key::ArrowUp);
    let zoom = axis(Key::Minus, Key::Plus);
    let scroll = input.scroll.1;

    if quit {
        window.close();
        return;
    }
    if yaw != 0.0 || pitch != 0.0 {
        window
            .camera_mut()
            .orbit(yaw * ORBIT_SPEED * dt, pitch * ORBIT_SPEED * dt);
    }
    if scroll != 0.0 {
        window.camera_mut().zoom(scroll * 0.5);
    }
    if zoom != 0.0 {
        // `+` narrows the view, which reads as zooming in.
        let fov = (window.field_of_view() - zoom * ZOOM_SPEED * dt).clamp(MIN_FOV, MAX_FOV);
        window.update_field_of_view(fov);
    }
}

/// `ember-studio [vertex fragment]`, defaulting to the bundled shaders.
fn shader_paths() -> Result<(PathBuf, PathBuf)> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders");
            Ok((dir.join("textured.vert"), dir.join("textured.frag")))
        }
        [vertex, fragment] => Ok((vertex.into(), fragment.into())),
        _ => bail!("usage: ember-studio [VERTEX_SHADER FRAGMENT_SHADER]"),
    }
}
