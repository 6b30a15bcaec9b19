use std::marker::PhantomData;
use std::ptr;

use gl::types::{GLint, GLuint};

use super::buffer::{UsageType, VertexBuffer};
use super::error::GlResult;
use super::shader::program::LinkedProgram;
use crate::gl_call;

/// One named per-vertex input and the client-side floats that back it.
///
/// The slice is only borrowed for the duration of the upload; the device
/// copy is independent of it afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttributeSpec<'a> {
    pub name: &'a str,
    pub components: GLint,
    pub data: &'a [f32],
}

impl<'a> AttributeSpec<'a> {
    pub fn new(name: &'a str, components: GLint, data: &'a [f32]) -> Self {
        AttributeSpec {
            name,
            components,
            data,
        }
    }

    /// Number of whole vertices this attribute describes.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.components as usize
    }
}

/// A vertex array object bundling the configured attribute bindings for one
/// draw call, together with the buffer objects it references.
#[derive(Debug)]
pub struct VertexArray {
    id: GLuint,
    vertex_count: usize,
    buffers: Vec<VertexBuffer<f32>>,
    _marker: PhantomData<*mut ()>,
}

impl VertexArray {
    fn new() -> GlResult<Self> {
        let mut id = 0;
        unsafe {
            gl_call!(GenVertexArrays(1, &mut id))?;
        }
        Ok(VertexArray {
            id,
            vertex_count: 0,
            buffers: Vec::new(),
            _marker: PhantomData,
        })
    }

    pub fn bind(&self) -> GlResult<()> {
        unsafe { gl_call!(BindVertexArray(self.id)) }
    }

    /// Vertex count of the first uploaded attribute; the draw call covers
    /// exactly this many vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

/// Uploads one buffer per attribute and wires each to the slot the program
/// resolves for its name.
///
/// `program` must be the currently active one, otherwise the location
/// queries are meaningless. Each buffer is bound as it is processed and the
/// last one is left bound; nothing buffer-sensitive runs after this.
pub fn upload_attributes(
    program: &LinkedProgram,
    attributes: &[AttributeSpec<'_>],
) -> GlResult<VertexArray> {
    let mut vao = VertexArray::new()?;
    vao.bind()?;

    for attribute in attributes {
        let mut vbo = VertexBuffer::new()?;
        vbo.upload(attribute.data, UsageType::StaticDraw)?;

        let location = program.attribute_location(attribute.name)?;
        log::debug!("location of {} is {}", attribute.name, location);

        unsafe {
            // A name the program doesn't export resolved to -1; the cast
            // wraps and the drain after the pointer call rejects it.
            gl_call!(VertexAttribPointer(
                location as GLuint,
                attribute.components,
                gl::FLOAT,
                gl::FALSE,
                0,
                ptr::null()
            ))?;
            gl_call!(EnableVertexAttribArray(location as GLuint))?;
        }

        if vao.vertex_count == 0 {
            vao.vertex_count = attribute.vertex_count();
        }
        vao.buffers.push(vbo);
    }

    Ok(vao)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [f32; 12] = [
        0.0, 0.0, 1.0, 0.0, 0.5, 1.0, //
        0.0, 0.0, -1.0, 0.0, -0.5, -1.0,
    ];
    const COLORS: [f32; 18] = [
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, //
        0.5, 0.5, 0.0, 0.0, 0.5, 0.5, 0.5, 0.0, 0.5,
    ];

    #[test]
    fn vertex_count_follows_the_component_split() {
        assert_eq!(AttributeSpec::new("vPosition", 2, &POSITIONS).vertex_count(), 6);
        assert_eq!(AttributeSpec::new("vColor", 3, &COLORS).vertex_count(), 6);
    }

    #[test]
    fn both_triangle_attributes_describe_the_same_vertices() {
        let position = AttributeSpec::new("vPosition", 2, &POSITIONS);
        let color = AttributeSpec::new("vColor", 3, &COLORS);
        assert_eq!(position.vertex_count(), color.vertex_count());
    }
}
