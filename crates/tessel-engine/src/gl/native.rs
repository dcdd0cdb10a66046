use std::num::NonZeroU32;

use glow::{
    HasContext, NativeBuffer, NativeProgram, NativeShader, NativeTexture, NativeUniformLocation,
    NativeVertexArray, PixelUnpackData,
};

use super::api::{GlApi, NO_RESOURCE, RawHandle, UniformLocation};

/// Maps a glow creation result onto the driver's integer convention.
///
/// glow reports refusals as `Err(String)`; the message is logged and the sentinel
/// returned so wrappers see the same contract as the C API.
fn raw_or_sentinel<T>(
    what: &str,
    res: Result<T, String>,
    raw: impl FnOnce(T) -> u32,
) -> RawHandle {
    match res {
        Ok(h) => raw(h),
        Err(e) => {
            log::warn!("driver refused to create {what}: {e}");
            NO_RESOURCE
        }
    }
}

#[inline]
fn nz(handle: RawHandle) -> Option<NonZeroU32> {
    NonZeroU32::new(handle)
}

/// `GlApi` over a native glow context.
///
/// The glow calls are `unsafe` because they require a current context; constructing
/// the `glow::Context` (via a loader function) is where that obligation is taken on.
impl GlApi for glow::Context {
    fn create_vertex_array(&self) -> RawHandle {
        let res = unsafe { HasContext::create_vertex_array(self) };
        raw_or_sentinel("vertex array", res, |h| h.0.get())
    }

    fn delete_vertex_array(&self, handle: RawHandle) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::delete_vertex_array(self, NativeVertexArray(h)) }
        }
    }

    fn bind_vertex_array(&self, handle: RawHandle) {
        unsafe { HasContext::bind_vertex_array(self, nz(handle).map(NativeVertexArray)) }
    }

    fn create_buffer(&self) -> RawHandle {
        let res = unsafe { HasContext::create_buffer(self) };
        raw_or_sentinel("buffer", res, |h| h.0.get())
    }

    fn delete_buffer(&self, handle: RawHandle) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::delete_buffer(self, NativeBuffer(h)) }
        }
    }

    fn bind_buffer(&self, target: u32, handle: RawHandle) {
        unsafe { HasContext::bind_buffer(self, target, nz(handle).map(NativeBuffer)) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { HasContext::buffer_data_u8_slice(self, target, data, usage) }
    }

    fn get_buffer_sub_data(&self, target: u32, offset: i32, dst: &mut [u8]) {
        unsafe { HasContext::get_buffer_sub_data(self, target, offset, dst) }
    }

    fn create_texture(&self) -> RawHandle {
        let res = unsafe { HasContext::create_texture(self) };
        raw_or_sentinel("texture", res, |h| h.0.get())
    }

    fn delete_texture(&self, handle: RawHandle) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::delete_texture(self, NativeTexture(h)) }
        }
    }

    fn bind_texture(&self, target: u32, handle: RawHandle) {
        unsafe { HasContext::bind_texture(self, target, nz(handle).map(NativeTexture)) }
    }

    fn tex_parameter_i32(&self, target: u32, pname: u32, value: i32) {
        unsafe { HasContext::tex_parameter_i32(self, target, pname, value) }
    }

    fn pixel_store_i32(&self, pname: u32, value: i32) {
        unsafe { HasContext::pixel_store_i32(self, pname, value) }
    }

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
    ) {
        unsafe {
            HasContext::tex_image_2d(
                self,
                target,
                level,
                internal_format,
                width,
                height,
                0,
                format,
                ty,
                PixelUnpackData::Slice(Some(pixels)),
            )
        }
    }

    fn generate_mipmap(&self, target: u32) {
        unsafe { HasContext::generate_mipmap(self, target) }
    }

    fn create_shader(&self, kind: u32) -> RawHandle {
        let res = unsafe { HasContext::create_shader(self, kind) };
        raw_or_sentinel("shader", res, |h| h.0.get())
    }

    fn delete_shader(&self, handle: RawHandle) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::delete_shader(self, NativeShader(h)) }
        }
    }

    fn shader_source(&self, handle: RawHandle, source: &str) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::shader_source(self, NativeShader(h), source) }
        }
    }

    fn compile_shader(&self, handle: RawHandle) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::compile_shader(self, NativeShader(h)) }
        }
    }

    fn shader_compile_status(&self, handle: RawHandle) -> bool {
        nz(handle)
            .is_some_and(|h| unsafe { HasContext::get_shader_compile_status(self, NativeShader(h)) })
    }

    fn shader_info_log(&self, handle: RawHandle) -> String {
        nz(handle)
            .map(|h| unsafe { HasContext::get_shader_info_log(self, NativeShader(h)) })
            .unwrap_or_default()
    }

    fn create_program(&self) -> RawHandle {
        let res = unsafe { HasContext::create_program(self) };
        raw_or_sentinel("program", res, |h| h.0.get())
    }

    fn delete_program(&self, handle: RawHandle) {
        if let Some(h) = nz(handle) {
            unsafe { HasContext::delete_program(self, NativeProgram(h)) }
        }
    }

    fn attach_shader(&self, program: RawHandle, shader: RawHandle) {
        if let (Some(p), Some(s)) = (nz(program), nz(shader)) {
            unsafe { HasContext::attach_shader(self, NativeProgram(p), NativeShader(s)) }
        }
    }

    fn link_program(&self, program: RawHandle) {
        if let Some(p) = nz(program) {
            unsafe { HasContext::link_program(self, NativeProgram(p)) }
        }
    }

    fn program_link_status(&self, program: RawHandle) -> bool {
        nz(program)
            .is_some_and(|p| unsafe { HasContext::get_program_link_status(self, NativeProgram(p)) })
    }

    fn program_info_log(&self, program: RawHandle) -> String {
        nz(program)
            .map(|p| unsafe { HasContext::get_program_info_log(self, NativeProgram(p)) })
            .unwrap_or_default()
    }

    fn use_program(&self, program: RawHandle) {
        unsafe { HasContext::use_program(self, nz(program).map(NativeProgram)) }
    }

    fn uniform_location(&self, program: RawHandle, name: &str) -> Option<UniformLocation> {
        let p = nz(program)?;
        unsafe { HasContext::get_uniform_location(self, NativeProgram(p), name) }
            .map(|l| UniformLocation(l.0))
    }

    fn uniform_1_i32(&self, location: UniformLocation, value: i32) {
        let loc = NativeUniformLocation(location.0);
        unsafe { HasContext::uniform_1_i32(self, Some(&loc), value) }
    }

    fn uniform_1_f32(&self, location: UniformLocation, value: f32) {
        let loc = NativeUniformLocation(location.0);
        unsafe { HasContext::uniform_1_f32(self, Some(&loc), value) }
    }

    fn uniform_3_f32(&self, location: UniformLocation, [x, y, z]: [f32; 3]) {
        let loc = NativeUniformLocation(location.0);
        unsafe { HasContext::uniform_3_f32(self, Some(&loc), x, y, z) }
    }

    fn uniform_4_f32(&self, location: UniformLocation, [x, y, z, w]: [f32; 4]) {
        let loc = NativeUniformLocation(location.0);
        unsafe { HasContext::uniform_4_f32(self, Some(&loc), x, y, z, w) }
    }

    fn uniform_matrix_4_f32(&self, location: UniformLocation, value: &[f32; 16]) {
        let loc = NativeUniformLocation(location.0);
        unsafe { HasContext::uniform_matrix_4_f32_slice(self, Some(&loc), false, value) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, size, glow::FLOAT, false, stride, offset)
        }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn get_parameter_i32(&self, pname: u32) -> i32 {
        unsafe { HasContext::get_parameter_i32(self, pname) }
    }

    fn enable(&self, cap: u32) {
        unsafe { HasContext::enable(self, cap) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn get_string(&self, pname: u32) -> String {
        unsafe { HasContext::get_parameter_string(self, pname) }
    }
}
