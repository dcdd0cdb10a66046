//! In-memory `GlApi` used by unit tests.
//!
//! Hands out sequential names, tracks which ones are live, keeps buffer contents so
//! uploads can be read back, and logs every call by name. Shader compilation succeeds
//! when the source has a `main` entry point and balanced braces; uniform names resolve
//! when they appear in a source attached to the program.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::api::{GlApi, NO_RESOURCE, RawHandle, UniformLocation};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UniformWrite {
    Int(i32),
    Float(Vec<f32>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TexUpload {
    pub internal_format: i32,
    pub width: i32,
    pub height: i32,
    pub format: u32,
    pub len: usize,
}

#[derive(Default)]
pub(crate) struct RecordingGl {
    next: Cell<RawHandle>,
    refuse: Cell<bool>,
    fail_link: Cell<bool>,

    calls: RefCell<Vec<String>>,
    live: RefCell<HashSet<RawHandle>>,
    bad_releases: RefCell<Vec<RawHandle>>,

    bindings: RefCell<HashMap<u32, RawHandle>>,
    buffers: RefCell<HashMap<RawHandle, Vec<u8>>>,

    sources: RefCell<HashMap<RawHandle, String>>,
    compiled: RefCell<HashMap<RawHandle, bool>>,
    attached: RefCell<HashMap<RawHandle, Vec<RawHandle>>>,
    linked: RefCell<HashSet<RawHandle>>,

    locations: RefCell<Vec<String>>,
    uniforms: RefCell<HashMap<String, UniformWrite>>,
    tex_uploads: RefCell<Vec<TexUpload>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent creation call return the sentinel.
    pub fn refuse_allocations(&self, refuse: bool) {
        self.refuse.set(refuse);
    }

    pub fn fail_next_links(&self, fail: bool) {
        self.fail_link.set(fail);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.split(' ').next() == Some(name))
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split(' ').next() == Some(name))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn is_live(&self, handle: RawHandle) -> bool {
        self.live.borrow().contains(&handle)
    }

    /// Names released while not live (double free or never allocated).
    pub fn bad_releases(&self) -> Vec<RawHandle> {
        self.bad_releases.borrow().clone()
    }

    pub fn bound(&self, target: u32) -> RawHandle {
        self.bindings.borrow().get(&target).copied().unwrap_or(NO_RESOURCE)
    }

    pub fn uniform(&self, name: &str) -> Option<UniformWrite> {
        self.uniforms.borrow().get(name).cloned()
    }

    pub fn tex_uploads(&self) -> Vec<TexUpload> {
        self.tex_uploads.borrow().clone()
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self, what: &str) -> RawHandle {
        if self.refuse.get() {
            self.log(format!("{what} refused"));
            return NO_RESOURCE;
        }
        let id = self.next.get() + 1;
        self.next.set(id);
        self.live.borrow_mut().insert(id);
        self.log(format!("{what} {id}"));
        id
    }

    fn release(&self, what: &str, handle: RawHandle) {
        self.log(format!("{what} {handle}"));
        if !self.live.borrow_mut().remove(&handle) {
            self.bad_releases.borrow_mut().push(handle);
        }
    }

    fn bind(&self, target: u32, handle: RawHandle) {
        self.bindings.borrow_mut().insert(target, handle);
    }

    fn write_uniform(&self, location: UniformLocation, value: UniformWrite) {
        let name = self.locations.borrow().get(location.0 as usize).cloned();
        if let Some(name) = name {
            self.uniforms.borrow_mut().insert(name, value);
        }
    }
}

/// Pseudo-enum used as the binding slot for vertex arrays.
const VERTEX_ARRAY_SLOT: u32 = glow::VERTEX_ARRAY_BINDING;
const PROGRAM_SLOT: u32 = glow::CURRENT_PROGRAM;

impl GlApi for RecordingGl {
    fn create_vertex_array(&self) -> RawHandle {
        self.allocate("create_vertex_array")
    }

    fn delete_vertex_array(&self, handle: RawHandle) {
        self.release("delete_vertex_array", handle);
    }

    fn bind_vertex_array(&self, handle: RawHandle) {
        self.log(format!("bind_vertex_array {handle}"));
        self.bind(VERTEX_ARRAY_SLOT, handle);
    }

    fn create_buffer(&self) -> RawHandle {
        self.allocate("create_buffer")
    }

    fn delete_buffer(&self, handle: RawHandle) {
        self.release("delete_buffer", handle);
        self.buffers.borrow_mut().remove(&handle);
    }

    fn bind_buffer(&self, target: u32, handle: RawHandle) {
        self.log(format!("bind_buffer {target:#x} {handle}"));
        self.bind(target, handle);
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.log(format!("buffer_data {target:#x} {} {usage:#x}", data.len()));
        let bound = self.bound(target);
        self.buffers.borrow_mut().insert(bound, data.to_vec());
    }

    fn get_buffer_sub_data(&self, target: u32, offset: i32, dst: &mut [u8]) {
        self.log(format!("get_buffer_sub_data {target:#x} {offset} {}", dst.len()));
        let bound = self.bound(target);
        if let Some(src) = self.buffers.borrow().get(&bound) {
            let start = offset as usize;
            let end = (start + dst.len()).min(src.len());
            let n = end.saturating_sub(start);
            dst[..n].copy_from_slice(&src[start..end]);
        }
    }

    fn create_texture(&self) -> RawHandle {
        self.allocate("create_texture")
    }

    fn delete_texture(&self, handle: RawHandle) {
        self.release("delete_texture", handle);
    }

    fn bind_texture(&self, target: u32, handle: RawHandle) {
        self.log(format!("bind_texture {target:#x} {handle}"));
        self.bind(target, handle);
    }

    fn tex_parameter_i32(&self, target: u32, pname: u32, value: i32) {
        self.log(format!("tex_parameter_i32 {target:#x} {pname:#x} {value:#x}"));
    }

    fn pixel_store_i32(&self, pname: u32, value: i32) {
        self.log(format!("pixel_store_i32 {pname:#x} {value}"));
    }

    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        _ty: u32,
        pixels: &[u8],
    ) {
        self.log(format!("tex_image_2d {target:#x} {level} {width}x{height} {format:#x}"));
        self.tex_uploads.borrow_mut().push(TexUpload {
            internal_format,
            width,
            height,
            format,
            len: pixels.len(),
        });
    }

    fn generate_mipmap(&self, target: u32) {
        self.log(format!("generate_mipmap {target:#x}"));
    }

    fn create_shader(&self, kind: u32) -> RawHandle {
        self.allocate(&format!("create_shader {kind:#x}"))
    }

    fn delete_shader(&self, handle: RawHandle) {
        self.release("delete_shader", handle);
    }

    fn shader_source(&self, handle: RawHandle, source: &str) {
        self.log(format!("shader_source {handle}"));
        self.sources.borrow_mut().insert(handle, source.to_string());
    }

    fn compile_shader(&self, handle: RawHandle) {
        self.log(format!("compile_shader {handle}"));
        let ok = self.sources.borrow().get(&handle).is_some_and(|src| {
            src.contains("void main") && src.matches('{').count() == src.matches('}').count()
        });
        self.compiled.borrow_mut().insert(handle, ok);
    }

    fn shader_compile_status(&self, handle: RawHandle) -> bool {
        self.compiled.borrow().get(&handle).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, handle: RawHandle) -> String {
        format!("0:1(1): error: shader {handle} is malformed")
    }

    fn create_program(&self) -> RawHandle {
        self.allocate("create_program")
    }

    fn delete_program(&self, handle: RawHandle) {
        self.release("delete_program", handle);
    }

    fn attach_shader(&self, program: RawHandle, shader: RawHandle) {
        self.log(format!("attach_shader {program} {shader}"));
        self.attached.borrow_mut().entry(program).or_default().push(shader);
    }

    fn link_program(&self, program: RawHandle) {
        self.log(format!("link_program {program}"));
        if self.fail_link.get() {
            return;
        }
        let all_compiled = self.attached.borrow().get(&program).is_some_and(|shaders| {
            shaders.len() == 2 && shaders.iter().all(|s| self.shader_compile_status(*s))
        });
        if all_compiled {
            self.linked.borrow_mut().insert(program);
        }
    }

    fn program_link_status(&self, program: RawHandle) -> bool {
        self.linked.borrow().contains(&program)
    }

    fn program_info_log(&self, program: RawHandle) -> String {
        format!("error: program {program} failed to link")
    }

    fn use_program(&self, program: RawHandle) {
        self.log(format!("use_program {program}"));
        self.bind(PROGRAM_SLOT, program);
    }

    fn uniform_location(&self, program: RawHandle, name: &str) -> Option<UniformLocation> {
        self.log(format!("uniform_location {program} {name}"));
        if !self.program_link_status(program) {
            return None;
        }
        // Sources are released with their shaders; keep lookup to what is still known.
        let declared = self.attached.borrow().get(&program).is_some_and(|shaders| {
            let sources = self.sources.borrow();
            shaders
                .iter()
                .filter_map(|s| sources.get(s))
                .any(|src| src.contains(&format!(" {name};")))
        });
        if !declared {
            return None;
        }
        let mut locations = self.locations.borrow_mut();
        let index = match locations.iter().position(|n| n == name) {
            Some(i) => i,
            None => {
                locations.push(name.to_string());
                locations.len() - 1
            }
        };
        Some(UniformLocation(index as u32))
    }

    fn uniform_1_i32(&self, location: UniformLocation, value: i32) {
        self.log(format!("uniform_1_i32 {}", location.0));
        self.write_uniform(location, UniformWrite::Int(value));
    }

    fn uniform_1_f32(&self, location: UniformLocation, value: f32) {
        self.log(format!("uniform_1_f32 {}", location.0));
        self.write_uniform(location, UniformWrite::Float(vec![value]));
    }

    fn uniform_3_f32(&self, location: UniformLocation, value: [f32; 3]) {
        self.log(format!("uniform_3_f32 {}", location.0));
        self.write_uniform(location, UniformWrite::Float(value.to_vec()));
    }

    fn uniform_4_f32(&self, location: UniformLocation, value: [f32; 4]) {
        self.log(format!("uniform_4_f32 {}", location.0));
        self.write_uniform(location, UniformWrite::Float(value.to_vec()));
    }

    fn uniform_matrix_4_f32(&self, location: UniformLocation, value: &[f32; 16]) {
        self.log(format!("uniform_matrix_4_f32 {}", location.0));
        self.write_uniform(location, UniformWrite::Float(value.to_vec()));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.log(format!("enable_vertex_attrib_array {index}"));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.log(format!("vertex_attrib_pointer_f32 {index} {size} {stride} {offset}"));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.log(format!("draw_arrays {mode:#x} {first} {count}"));
    }

    fn get_parameter_i32(&self, pname: u32) -> i32 {
        let slot = match pname {
            glow::ARRAY_BUFFER_BINDING => glow::ARRAY_BUFFER,
            glow::ELEMENT_ARRAY_BUFFER_BINDING => glow::ELEMENT_ARRAY_BUFFER,
            glow::TEXTURE_BINDING_2D => glow::TEXTURE_2D,
            other => other,
        };
        self.bound(slot) as i32
    }

    fn enable(&self, cap: u32) {
        self.log(format!("enable {cap:#x}"));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.log(format!("viewport {x} {y} {width} {height}"));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.log(format!("clear_color {r} {g} {b} {a}"));
    }

    fn clear(&self, mask: u32) {
        self.log(format!("clear {mask:#x}"));
    }

    fn get_string(&self, pname: u32) -> String {
        format!("recording {pname:#x}")
    }
}
