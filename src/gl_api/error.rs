use std::fmt;

use gl::types::GLenum;

pub type GlResult<T> = Result<T, GlCallError>;

/// A single code drained from the GL error queue, decoded into its symbolic
/// name where one exists.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCode {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    Unknown(GLenum),
}

impl ErrorCode {
    pub fn from_raw(code: GLenum) -> Self {
        match code {
            gl::INVALID_ENUM => ErrorCode::InvalidEnum,
            gl::INVALID_VALUE => ErrorCode::InvalidValue,
            gl::INVALID_OPERATION => ErrorCode::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => ErrorCode::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => ErrorCode::OutOfMemory,
            code => ErrorCode::Unknown(code),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidEnum => f.write_str("GL_INVALID_ENUM"),
            ErrorCode::InvalidValue => f.write_str("GL_INVALID_VALUE"),
            ErrorCode::InvalidOperation => f.write_str("GL_INVALID_OPERATION"),
            ErrorCode::InvalidFramebufferOperation => {
                f.write_str("GL_INVALID_FRAMEBUFFER_OPERATION")
            }
            ErrorCode::OutOfMemory => f.write_str("GL_OUT_OF_MEMORY"),
            ErrorCode::Unknown(code) => write!(f, "unknown GL error {}", code),
        }
    }
}

/// One or more error codes were pending after a wrapped call.
///
/// GL reports failures through a polled queue rather than return values, so
/// codes that aren't drained right away get attributed to the wrong call.
/// This carries the stringified call that was just issued, where it was
/// issued from, and everything drained from the queue afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlCallError {
    call: &'static str,
    file: &'static str,
    line: u32,
    codes: Vec<ErrorCode>,
}

impl GlCallError {
    /// Drains every pending code from the error queue, attributing them to
    /// `call`. An empty queue means the call succeeded.
    pub fn drain(call: &'static str, file: &'static str, line: u32) -> GlResult<()> {
        let mut codes = Vec::new();
        loop {
            match unsafe { gl::GetError() } {
                gl::NO_ERROR => break,
                code => codes.push(ErrorCode::from_raw(code)),
            }
        }
        Self::collect(call, file, line, codes)
    }

    fn collect(
        call: &'static str,
        file: &'static str,
        line: u32,
        codes: Vec<ErrorCode>,
    ) -> GlResult<()> {
        if codes.is_empty() {
            Ok(())
        } else {
            Err(GlCallError {
                call,
                file,
                line,
                codes,
            })
        }
    }

    pub fn codes(&self) -> &[ErrorCode] {
        &self.codes
    }
}

impl fmt::Display for GlCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "call to `{}` at {}:{} failed with error(s):",
            self.call, self.file, self.line
        )?;
        for code in &self.codes {
            write!(f, " {}", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for GlCallError {}

/// Issues a raw `gl::` call and immediately drains the error queue,
/// attributing any pending codes to this call site. On an empty queue the
/// call's own return value is passed through unchanged.
#[macro_export]
macro_rules! gl_call {
    ($name:ident($($arg:expr),* $(,)?)) => {{
        let value = ::gl::$name($($arg),*);
        $crate::gl_api::error::GlCallError::drain(
            concat!("gl", stringify!($name), "(", stringify!($($arg),*), ")"),
            file!(),
            line!(),
        )
        .map(|()| value)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_named_code() {
        assert_eq!(ErrorCode::from_raw(gl::INVALID_ENUM), ErrorCode::InvalidEnum);
        assert_eq!(
            ErrorCode::from_raw(gl::INVALID_VALUE),
            ErrorCode::InvalidValue
        );
        assert_eq!(
            ErrorCode::from_raw(gl::INVALID_OPERATION),
            ErrorCode::InvalidOperation
        );
        assert_eq!(
            ErrorCode::from_raw(gl::INVALID_FRAMEBUFFER_OPERATION),
            ErrorCode::InvalidFramebufferOperation
        );
        assert_eq!(
            ErrorCode::from_raw(gl::OUT_OF_MEMORY),
            ErrorCode::OutOfMemory
        );
    }

    #[test]
    fn unrecognized_codes_render_numerically() {
        assert_eq!(ErrorCode::from_raw(0x9999), ErrorCode::Unknown(0x9999));
        assert_eq!(ErrorCode::Unknown(1234).to_string(), "unknown GL error 1234");
    }

    #[test]
    fn empty_queue_is_a_pass_through() {
        let checked = GlCallError::collect("glClear(COLOR_BUFFER_BIT)", "src/a.rs", 1, Vec::new());
        assert!(checked.is_ok());
    }

    #[test]
    fn error_names_the_call_its_location_and_every_code() {
        let err = GlCallError::collect(
            "glVertexAttribPointer(location, 2, FLOAT, FALSE, 0, ptr)",
            "src/gl_api/vertex_array.rs",
            40,
            vec![ErrorCode::InvalidValue, ErrorCode::OutOfMemory],
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("glVertexAttribPointer"));
        assert!(message.contains("src/gl_api/vertex_array.rs:40"));
        assert!(message.contains("GL_INVALID_VALUE"));
        assert!(message.contains("GL_OUT_OF_MEMORY"));
    }
}
