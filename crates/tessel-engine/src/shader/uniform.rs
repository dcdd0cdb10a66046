use glam::{Mat4, Vec3, Vec4};

use crate::gl::{GlApi, UniformLocation};

/// Value that can be written to a resolved uniform location.
pub trait UniformValue {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation);
}

impl UniformValue for i32 {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation) {
        gl.uniform_1_i32(location, *self);
    }
}

impl UniformValue for f32 {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation) {
        gl.uniform_1_f32(location, *self);
    }
}

impl UniformValue for Vec3 {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation) {
        gl.uniform_3_f32(location, self.to_array());
    }
}

impl UniformValue for Vec4 {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation) {
        gl.uniform_4_f32(location, self.to_array());
    }
}

impl UniformValue for Mat4 {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation) {
        // glam stores columns contiguously, which is what GL expects untransposed.
        gl.uniform_matrix_4_f32(location, &self.to_cols_array());
    }
}

impl<T: UniformValue + ?Sized> UniformValue for &T {
    fn write(&self, gl: &dyn GlApi, location: UniformLocation) {
        (**self).write(gl, location);
    }
}
