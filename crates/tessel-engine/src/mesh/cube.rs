use std::path::PathBuf;

use glam::Mat4;

use crate::gl::{Gl, GlError};
use crate::resource::{VertexArray, VertexBuffer};
use crate::shader::ShaderProgram;
use crate::texture::Texture;

use super::cube_data::{CUBE_VERTEX_COUNT, CUBE_VERTICES, CubeVertex};

/// Files a [`Cube`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeAssets {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub texture: PathBuf,
    /// Upload the texture as RGBA instead of RGB.
    pub has_alpha: bool,
}

impl Default for CubeAssets {
    fn default() -> Self {
        Self {
            vertex_shader: PathBuf::from("vertex.glsl"),
            fragment_shader: PathBuf::from("fragment.glsl"),
            texture: PathBuf::from("crate.png"),
            has_alpha: false,
        }
    }
}

impl CubeAssets {
    /// Default file names resolved under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            vertex_shader: dir.join(defaults.vertex_shader),
            fragment_shader: dir.join(defaults.fragment_shader),
            texture: dir.join(defaults.texture),
            has_alpha: defaults.has_alpha,
        }
    }
}

/// Textured unit cube.
///
/// The program is expected to declare `model`, `view` and `projection` as `mat4`
/// uniforms, position at attribute 0 and texture coordinates at attribute 1.
#[derive(Debug)]
pub struct Cube {
    vao: VertexArray,
    vbo: VertexBuffer,
    program: ShaderProgram,
    texture: Texture,
    projection: Mat4,
}

impl Cube {
    /// Loads shaders and texture from disk, then uploads the vertex table.
    pub fn new(gl: Gl, assets: &CubeAssets) -> Result<Self, GlError> {
        let program =
            ShaderProgram::from_files(gl.clone(), &assets.vertex_shader, &assets.fragment_shader)?;
        let texture = Texture::new(gl.clone(), &assets.texture, assets.has_alpha)?;
        Self::with_parts(gl, program, texture)
    }

    /// Builds around an already linked program and uploaded texture.
    pub fn with_parts(gl: Gl, program: ShaderProgram, texture: Texture) -> Result<Self, GlError> {
        let vao = VertexArray::new(gl.clone())?;
        let mut vbo = VertexBuffer::new(gl)?;

        // Attribute pointers capture the buffer bound while the VAO is bound.
        vao.bind();
        vbo.load(&CUBE_VERTICES)?;
        vao.attribute_f32(CubeVertex::POSITION_LOCATION, 3, CubeVertex::STRIDE, 0);
        vao.attribute_f32(
            CubeVertex::UV_LOCATION,
            2,
            CubeVertex::STRIDE,
            CubeVertex::UV_OFFSET,
        );

        log::debug!(
            "cube ready (vao {}, vbo {}, program {}, texture {})",
            vao.handle(),
            vbo.handle(),
            program.handle(),
            texture.handle()
        );

        Ok(Self {
            vao,
            vbo,
            program,
            texture,
            projection: Mat4::IDENTITY,
        })
    }

    /// Stores the projection used by later draws; nothing is sent to the driver here.
    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Issues one 36-vertex triangle draw with the given transforms.
    ///
    /// Binding state (program, texture, vertex array) is left as set by this call.
    pub fn draw(&self, model: &Mat4, view: &Mat4) {
        self.program.use_program();
        self.texture.bind();
        self.vao.bind();

        self.program.set_uniform("model", model);
        self.program.set_uniform("view", view);
        self.program.set_uniform("projection", &self.projection);

        self.vao.draw_arrays(glow::TRIANGLES, 0, CUBE_VERTEX_COUNT as i32);
    }

    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn vertex_buffer(&self) -> &VertexBuffer {
        &self.vbo
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::gl::recording::{RecordingGl, UniformWrite};
    use crate::texture::loader::tests::write_png;

    const VERTEX: &str = "#version 330 core
layout (location = 0) in vec3 a_pos;
layout (location = 1) in vec2 a_uv;
out vec2 v_uv;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main() {
    gl_Position = projection * view * model * vec4(a_pos, 1.0);
    v_uv = a_uv;
}
";

    const FRAGMENT: &str = "#version 330 core
in vec2 v_uv;
out vec4 frag_color;
uniform sampler2D tex;
void main() {
    frag_color = texture(tex, v_uv);
}
";

    fn write_assets(name: &str, vertex: &str) -> CubeAssets {
        let dir = std::env::temp_dir().join(format!("tessel-cube-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("vertex.glsl"), vertex).unwrap();
        std::fs::write(dir.join("fragment.glsl"), FRAGMENT).unwrap();
        let png = write_png(&format!("cube-{name}"), false);
        std::fs::copy(png, dir.join("crate.png")).unwrap();
        CubeAssets::in_dir(dir)
    }

    fn mat(rec: &RecordingGl, name: &str) -> Vec<f32> {
        match rec.uniform(name) {
            Some(UniformWrite::Float(values)) => values,
            other => panic!("{name}: {other:?}"),
        }
    }

    #[test]
    fn default_assets_use_conventional_names() {
        let assets = CubeAssets::default();
        assert_eq!(assets.vertex_shader, Path::new("vertex.glsl"));
        assert_eq!(assets.fragment_shader, Path::new("fragment.glsl"));
        assert_eq!(assets.texture, Path::new("crate.png"));
        assert!(!assets.has_alpha);
    }

    #[test]
    fn uploads_interleaved_vertices_with_two_attributes() {
        let rec = Rc::new(RecordingGl::new());
        let cube = Cube::new(rec.clone(), &write_assets("layout", VERTEX)).unwrap();

        assert_eq!(cube.vertex_buffer().size(), Some(36 * 5 * 4));
        let calls = rec.calls();
        assert!(calls.contains(&"vertex_attrib_pointer_f32 0 3 20 0".to_string()));
        assert!(calls.contains(&"vertex_attrib_pointer_f32 1 2 20 12".to_string()));
        assert!(calls.contains(&"enable_vertex_attrib_array 0".to_string()));
        assert!(calls.contains(&"enable_vertex_attrib_array 1".to_string()));
    }

    #[test]
    fn attributes_are_recorded_while_the_vao_is_bound() {
        let rec = Rc::new(RecordingGl::new());
        let cube = Cube::new(rec.clone(), &write_assets("vao-order", VERTEX)).unwrap();
        let calls = rec.calls();
        let pos = |c: &str| calls.iter().position(|x| x == c).unwrap();

        let bind_vao = pos(format!("bind_vertex_array {}", cube.vao.handle()).as_str());
        let first_attr = pos("vertex_attrib_pointer_f32 0 3 20 0");
        assert!(bind_vao < first_attr);
    }

    #[test]
    fn projection_starts_as_identity_and_is_only_sent_on_draw() {
        let rec = Rc::new(RecordingGl::new());
        let mut cube = Cube::new(rec.clone(), &write_assets("projection", VERTEX)).unwrap();
        assert_eq!(*cube.projection(), Mat4::IDENTITY);

        let p = Mat4::perspective_rh_gl(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        cube.set_projection(p);
        assert_eq!(rec.uniform("projection"), None);

        cube.draw(&Mat4::IDENTITY, &Mat4::IDENTITY);
        assert_eq!(mat(&rec, "projection"), p.to_cols_array().to_vec());
    }

    #[test]
    fn draw_writes_matrices_then_issues_36_vertices() {
        let rec = Rc::new(RecordingGl::new());
        let cube = Cube::new(rec.clone(), &write_assets("draw", VERTEX)).unwrap();
        rec.clear_calls();

        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        cube.draw(&model, &view);

        assert_eq!(mat(&rec, "model"), model.to_cols_array().to_vec());
        assert_eq!(mat(&rec, "view"), view.to_cols_array().to_vec());

        let calls = rec.calls();
        let draw = format!("draw_arrays {:#x} 0 36", glow::TRIANGLES);
        assert_eq!(calls.last(), Some(&draw));
        assert_eq!(calls[0], format!("use_program {}", cube.program().handle()));
        assert_eq!(rec.bound(glow::TEXTURE_2D), cube.texture().handle());
        assert_eq!(rec.bound(glow::VERTEX_ARRAY_BINDING), cube.vao.handle());
    }

    #[test]
    fn shader_missing_a_matrix_still_draws() {
        let rec = Rc::new(RecordingGl::new());
        let no_view = VERTEX.replace("uniform mat4 view;\n", "");
        let cube = Cube::new(rec.clone(), &write_assets("no-view", &no_view)).unwrap();

        cube.draw(&Mat4::IDENTITY, &Mat4::IDENTITY);

        assert_eq!(rec.uniform("view"), None);
        assert_eq!(rec.call_count("draw_arrays"), 1);
    }

    #[test]
    fn missing_texture_releases_the_program() {
        let rec = Rc::new(RecordingGl::new());
        let mut assets = write_assets("no-texture", VERTEX);
        assets.texture = assets.texture.with_file_name("absent.png");

        let err = Cube::new(rec.clone(), &assets).unwrap_err();

        assert!(matches!(err, GlError::ImageOpen { .. }));
        assert_eq!(rec.live_count(), 0);
    }

    #[test]
    fn drop_releases_every_owned_object() {
        let rec = Rc::new(RecordingGl::new());
        let cube = Cube::new(rec.clone(), &write_assets("drop", VERTEX)).unwrap();
        // vao + vbo + program + 2 stages + texture
        assert_eq!(rec.live_count(), 6);

        drop(cube);

        assert_eq!(rec.live_count(), 0);
        assert!(rec.bad_releases().is_empty());
    }
}
