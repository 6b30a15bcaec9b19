use std::ffi::CString;
use std::marker::PhantomData;
use std::ptr;

use gl::types::{GLchar, GLint, GLuint};

use super::shader::CompiledShader;
use super::{PipelineError, ShaderBuildError};
use crate::gl_api::error::GlResult;
use crate::gl_call;

/// An unlinked program object with zero or more compiled stages attached.
#[derive(Debug)]
pub struct Program {
    id: GLuint,
    _marker: PhantomData<*mut ()>,
}

impl Program {
    pub fn new() -> GlResult<Self> {
        let id = unsafe { gl_call!(CreateProgram())? };
        Ok(Program {
            id,
            _marker: PhantomData,
        })
    }

    pub fn attach(&self, shader: &CompiledShader) -> GlResult<()> {
        unsafe { gl_call!(AttachShader(self.id, shader.shader.id)) }
    }

    /// Links the attached stages and checks the status. Stage-level
    /// mistakes were already reported at compile time; what surfaces here
    /// is cross-stage, e.g. mismatched interface variables, carried in the
    /// program's own log.
    pub fn link(self) -> Result<LinkedProgram, PipelineError> {
        unsafe {
            gl_call!(LinkProgram(self.id))?;
        }

        let mut status = 1;
        unsafe {
            gl_call!(GetProgramiv(self.id, gl::LINK_STATUS, &mut status))?;
        }
        if status != gl::TRUE as GLint {
            return Err(ShaderBuildError::Link {
                log: self.info_log()?,
            }
            .into());
        }

        Ok(LinkedProgram(self))
    }

    fn info_log(&self) -> GlResult<String> {
        let mut length = 0;
        unsafe {
            gl_call!(GetProgramiv(self.id, gl::INFO_LOG_LENGTH, &mut length))?;
        }
        if length == 0 {
            return Ok(String::new());
        }

        let mut buffer = vec![0u8; length as usize];
        unsafe {
            gl_call!(GetProgramInfoLog(
                self.id,
                length,
                ptr::null_mut(),
                buffer.as_mut_ptr() as *mut GLchar
            ))?;
        }
        buffer.truncate(length as usize - 1);
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// A successfully linked program.
#[derive(Debug)]
pub struct LinkedProgram(Program);

impl LinkedProgram {
    /// Makes this program the active pipeline. Attribute location queries
    /// are only meaningful against the active program.
    pub fn bind(&self) -> GlResult<()> {
        unsafe { gl_call!(UseProgram(self.0.id)) }
    }

    /// Resolves a named per-vertex input to its slot. A name the linker
    /// never saw comes back as -1 with no error raised here; the caller's
    /// next configure call with that slot is what gets rejected.
    pub fn attribute_location(&self, name: &str) -> GlResult<GLint> {
        // UNWRAP: attribute names are source literals without interior NULs
        let c_name = CString::new(name).unwrap();
        unsafe { gl_call!(GetAttribLocation(self.0.id, c_name.as_ptr())) }
    }

    pub fn id(&self) -> GLuint {
        self.0.id
    }
}
