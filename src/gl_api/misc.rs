//! Loose GL state calls that don't belong to any one object wrapper.

use gl::types::GLfloat;

use super::error::GlResult;
use crate::gl_call;

/// Viewport rectangle covering the full window, origin at (0, 0).
///
/// Reshape handling overwrites the dimensions and re-applies; the latest
/// application wins.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Viewport { width, height }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn apply(&self) -> GlResult<()> {
        unsafe { gl_call!(Viewport(0, 0, self.width, self.height)) }
    }
}

pub fn clear_color(r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat) -> GlResult<()> {
    unsafe { gl_call!(ClearColor(r, g, b, a)) }
}

/// Clears the color and depth buffers ahead of a redraw.
pub fn clear() -> GlResult<()> {
    unsafe { gl_call!(Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT)) }
}

/// One non-indexed triangle-list draw over the first `vertices` vertices of
/// the bound vertex array.
pub fn draw_triangles(vertices: usize) -> GlResult<()> {
    unsafe { gl_call!(DrawArrays(gl::TRIANGLES, 0, vertices as i32)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_is_last_write_wins() {
        let mut viewport = Viewport::new(800, 600);
        viewport.resize(0, 0);
        viewport.resize(800, 600);
        assert_eq!(viewport, Viewport::new(800, 600));
    }
}
