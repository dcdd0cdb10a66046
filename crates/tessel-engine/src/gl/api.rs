/// Driver-assigned resource name (`GLuint`).
///
/// Names are only meaningful within their resource kind.
pub type RawHandle = u32;

/// Sentinel returned by the driver when no resource could be allocated.
pub const NO_RESOURCE: RawHandle = 0;

/// Resolved uniform location inside a linked program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation(pub u32);

/// Narrow view of the OpenGL entry points used by the engine.
///
/// Every wrapper in this crate talks to the driver through this trait, which keeps
/// handle ownership testable without a GPU. Enumerations (`target`, `kind`, `pname`)
/// are raw `GLenum` values as defined by `glow`.
///
/// Preconditions shared by every method:
/// - the context the implementation was created from is current on the calling thread
/// - calls are issued from a single thread, in order
///
/// Creation methods return [`NO_RESOURCE`] when the driver refuses the allocation.
pub trait GlApi {
    // ── vertex arrays ─────────────────────────────────────────────────────
    fn create_vertex_array(&self) -> RawHandle;
    fn delete_vertex_array(&self, handle: RawHandle);
    fn bind_vertex_array(&self, handle: RawHandle);

    // ── buffers ───────────────────────────────────────────────────────────
    fn create_buffer(&self) -> RawHandle;
    fn delete_buffer(&self, handle: RawHandle);
    fn bind_buffer(&self, target: u32, handle: RawHandle);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    /// Reads `dst.len()` bytes starting at `offset` from the buffer bound to `target`.
    fn get_buffer_sub_data(&self, target: u32, offset: i32, dst: &mut [u8]);

    // ── textures ──────────────────────────────────────────────────────────
    fn create_texture(&self) -> RawHandle;
    fn delete_texture(&self, handle: RawHandle);
    fn bind_texture(&self, target: u32, handle: RawHandle);
    fn tex_parameter_i32(&self, target: u32, pname: u32, value: i32);
    fn pixel_store_i32(&self, pname: u32, value: i32);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    );
    fn generate_mipmap(&self, target: u32);

    // ── shaders ───────────────────────────────────────────────────────────
    fn create_shader(&self, kind: u32) -> RawHandle;
    fn delete_shader(&self, handle: RawHandle);
    fn shader_source(&self, handle: RawHandle, source: &str);
    fn compile_shader(&self, handle: RawHandle);
    fn shader_compile_status(&self, handle: RawHandle) -> bool;
    fn shader_info_log(&self, handle: RawHandle) -> String;

    // ── programs ──────────────────────────────────────────────────────────
    fn create_program(&self) -> RawHandle;
    fn delete_program(&self, handle: RawHandle);
    fn attach_shader(&self, program: RawHandle, shader: RawHandle);
    fn link_program(&self, program: RawHandle);
    fn program_link_status(&self, program: RawHandle) -> bool;
    fn program_info_log(&self, program: RawHandle) -> String;
    fn use_program(&self, program: RawHandle);

    // ── uniforms ──────────────────────────────────────────────────────────
    fn uniform_location(&self, program: RawHandle, name: &str) -> Option<UniformLocation>;
    fn uniform_1_i32(&self, location: UniformLocation, value: i32);
    fn uniform_1_f32(&self, location: UniformLocation, value: f32);
    fn uniform_3_f32(&self, location: UniformLocation, value: [f32; 3]);
    fn uniform_4_f32(&self, location: UniformLocation, value: [f32; 4]);
    /// Column-major 4×4 matrix.
    fn uniform_matrix_4_f32(&self, location: UniformLocation, value: &[f32; 16]);

    // ── vertex layout + draw ──────────────────────────────────────────────
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);

    // ── global state ──────────────────────────────────────────────────────
    fn get_parameter_i32(&self, pname: u32) -> i32;
    fn enable(&self, cap: u32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    /// Returns a driver string such as `VENDOR` or `VERSION`.
    fn get_string(&self, pname: u32) -> String;
}
