use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLuint};

use super::{PipelineError, ShaderBuildError};
use crate::gl_api::error::GlResult;
use crate::gl_call;

/// Kind of a single compiled unit of shader source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    fn gl_enum(&self) -> GLenum {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderType::Vertex => f.write_str("vertex"),
            ShaderType::Fragment => f.write_str("fragment"),
        }
    }
}

/// An unlinked shader stage object.
#[derive(Debug)]
pub struct Shader {
    pub(crate) id: GLuint,
    pub(crate) shader_type: ShaderType,
    _marker: PhantomData<*mut ()>,
}

impl Shader {
    pub fn new(shader_type: ShaderType) -> GlResult<Self> {
        let id = unsafe { gl_call!(CreateShader(shader_type.gl_enum()))? };
        Ok(Shader {
            id,
            shader_type,
            _marker: PhantomData,
        })
    }

    /// Replaces the stage's source with the literal text of `source`.
    pub fn source(&self, source: &str) -> GlResult<()> {
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe { gl_call!(ShaderSource(self.id, 1, &ptr, &len)) }
    }

    /// Compiles the stage and checks its status. The info log is the only
    /// diagnostic a broken source produces, so a failed status check
    /// carries it whole.
    pub fn compile(self) -> Result<CompiledShader, PipelineError> {
        unsafe {
            gl_call!(CompileShader(self.id))?;
        }

        let mut status = 1;
        unsafe {
            gl_call!(GetShaderiv(self.id, gl::COMPILE_STATUS, &mut status))?;
        }
        if status != gl::TRUE as GLint {
            return Err(ShaderBuildError::Compile {
                shader_type: self.shader_type,
                log: self.info_log()?,
            }
            .into());
        }

        Ok(CompiledShader { shader: self })
    }

    // Size first, then content.
    fn info_log(&self) -> GlResult<String> {
        let mut length = 0;
        unsafe {
            gl_call!(GetShaderiv(self.id, gl::INFO_LOG_LENGTH, &mut length))?;
        }
        if length == 0 {
            return Ok(String::new());
        }

        let mut buffer = vec![0u8; length as usize];
        unsafe {
            gl_call!(GetShaderInfoLog(
                self.id,
                length,
                ptr::null_mut(),
                buffer.as_mut_ptr() as *mut GLchar
            ))?;
        }
        // Drop the trailing NUL the driver writes.
        buffer.truncate(length as usize - 1);
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Proof of a successful compile; only compiled stages can be attached.
#[derive(Debug)]
pub struct CompiledShader {
    pub(crate) shader: Shader,
}
