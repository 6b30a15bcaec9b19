use std::marker::PhantomData;
use std::mem;

use gl::types::{GLenum, GLsizeiptr, GLuint};

use super::error::GlResult;
use crate::gl_call;

/// Usage hint supplied with an upload, as a performance hint. These values
/// do not affect the behavior of the buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum UsageType {
    /// The data store contents will be specified once by the application,
    /// and sourced at most a few times.
    StreamDraw = gl::STREAM_DRAW,
    /// The data store contents will be specified once by the application,
    /// and sourced many times.
    StaticDraw = gl::STATIC_DRAW,
    /// The data store contents will be respecified repeatedly by the
    /// application, and sourced many times.
    DynamicDraw = gl::DYNAMIC_DRAW,
}

/// One GL buffer object holding an array of `T` in device memory.
#[derive(Debug)]
pub struct VertexBuffer<T> {
    pub(crate) id: GLuint,
    length: usize,
    _marker: PhantomData<*mut T>,
}

impl<T> VertexBuffer<T> {
    pub fn new() -> GlResult<Self> {
        let mut id = 0;
        unsafe {
            gl_call!(GenBuffers(1, &mut id))?;
        }
        Ok(VertexBuffer {
            id,
            length: 0,
            _marker: PhantomData,
        })
    }

    pub fn bind(&self) -> GlResult<()> {
        unsafe { gl_call!(BindBuffer(gl::ARRAY_BUFFER, self.id)) }
    }

    /// Copies `data` into the buffer's device memory. The borrow only has
    /// to outlive the copy; the device store is independent afterwards.
    pub fn upload(&mut self, data: &[T], usage_type: UsageType) -> GlResult<()> {
        self.bind()?;
        self.length = data.len();
        unsafe {
            gl_call!(BufferData(
                gl::ARRAY_BUFFER,
                (mem::size_of::<T>() * data.len()) as GLsizeiptr,
                data.as_ptr() as *const _,
                usage_type as GLenum
            ))
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<T> Drop for VertexBuffer<T> {
    fn drop(&mut self) {
        // Releases the name; a vertex array still referencing this buffer
        // keeps the storage itself alive.
        unsafe {
            let _ = gl_call!(DeleteBuffers(1, &self.id));
        }
    }
}
