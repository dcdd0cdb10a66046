use bytemuck::{Pod, Zeroable};

/// Interleaved position + texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

impl CubeVertex {
    pub const POSITION_LOCATION: u32 = 0;
    pub const UV_LOCATION: u32 = 1;
    pub const STRIDE: i32 = std::mem::size_of::<CubeVertex>() as i32;
    pub const UV_OFFSET: i32 = std::mem::size_of::<[f32; 3]>() as i32;
}

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> CubeVertex {
    CubeVertex {
        pos: [x, y, z],
        uv: [u, w],
    }
}

pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centred on the origin, two triangles per face, no index buffer.
pub const CUBE_VERTICES: [CubeVertex; CUBE_VERTEX_COUNT] = [
    // back (-Z)
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    v(0.5, -0.5, -0.5, 1.0, 0.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    // front (+Z)
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 1.0),
    v(0.5, 0.5, 0.5, 1.0, 1.0),
    v(-0.5, 0.5, 0.5, 0.0, 1.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    // left (-X)
    v(-0.5, 0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(-0.5, 0.5, 0.5, 1.0, 0.0),
    // right (+X)
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, 0.5, 0.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    // bottom (-Y)
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, -0.5, 1.0, 1.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    // top (+Y)
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, 0.5, 0.0, 0.0),
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
];
