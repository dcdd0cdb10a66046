use std::path::Path;

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use image::{DynamicImage, Rgb, RgbImage};
use tessel_engine::camera::Camera;
use tessel_engine::core::{App, AppControl, FrameCtx};
use tessel_engine::gl::Gl;
use tessel_engine::mesh::{Cube, CubeAssets};
use tessel_engine::shader::ShaderProgram;
use tessel_engine::texture::{ImageLoader, Texture};

use crate::controls::{QUIT, drive_camera};

const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const FOV_Y_DEG: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Degrees per millisecond of the idle spin.
const SPIN_RATE: f32 = 0.05;

/// A field of spinning crates and a fly camera.
pub struct Scene {
    cube: Cube,
    camera: Camera,
    elapsed_ms: f32,
}

impl Scene {
    pub fn new(gl: Gl, assets: &CubeAssets) -> Result<Self> {
        let cube = load_cube(gl, assets)?;
        Ok(Self {
            cube,
            camera: Camera::new(),
            elapsed_ms: 0.0,
        })
    }
}

impl App for Scene {
    fn on_resize(&mut self, width: u32, height: u32) {
        let aspect = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        self.cube.set_projection(projection(aspect));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input_frame.pressed(QUIT) {
            log::info!("quit requested");
            return AppControl::Exit;
        }

        let dt = ctx.time.dt_ms;
        drive_camera(&mut self.camera, ctx.input, dt);
        self.elapsed_ms += dt;

        let view = *self.camera.view();
        for (i, position) in CUBE_POSITIONS.iter().enumerate() {
            self.cube.draw(&model(*position, i, self.elapsed_ms), &view);
        }

        AppControl::Continue
    }
}

fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Every third cube spins; the others keep a fixed tilt.
fn model(position: Vec3, index: usize, elapsed_ms: f32) -> Mat4 {
    let mut angle = 20.0 * index as f32;
    if index % 3 == 0 {
        angle += elapsed_ms * SPIN_RATE;
    }
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, angle.to_radians())
}

/// Builds the cube, substituting a generated checkerboard when the texture file is
/// absent so the scene still renders.
fn load_cube(gl: Gl, assets: &CubeAssets) -> Result<Cube> {
    if assets.texture.exists() {
        return Cube::new(gl, assets)
            .with_context(|| format!("failed to build cube from {}", describe(assets)));
    }

    log::warn!(
        "texture {} not found; using a generated checkerboard",
        assets.texture.display()
    );
    let program =
        ShaderProgram::from_files(gl.clone(), &assets.vertex_shader, &assets.fragment_shader)
            .context("failed to build cube shaders")?;
    let texture = Texture::from_image(gl.clone(), checkerboard(64, 8), false)
        .context("failed to upload fallback texture")?;
    Ok(Cube::with_parts(gl, program, texture)?)
}

fn describe(assets: &CubeAssets) -> String {
    let name = |p: &Path| p.display().to_string();
    format!(
        "{}, {}, {}",
        name(&assets.vertex_shader),
        name(&assets.fragment_shader),
        name(&assets.texture)
    )
}

fn checkerboard(size: u32, cell: u32) -> ImageLoader {
    let img = RgbImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgb([200, 160, 90])
        } else {
            Rgb([90, 60, 30])
        }
    });
    ImageLoader::from_image(DynamicImage::ImageRgb8(img))
}
